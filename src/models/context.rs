//! Request and user context models for FaultForge
//!
//! A snapshot of the request that triggered a fault, and the identity of
//! the actor behind it. Both are captured by the host and passed into the
//! formatter explicitly; nothing here reads ambient framework state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel user id reported for anonymous contexts
pub const ANONYMOUS_USER_ID: &str = "N/A";
/// Sentinel username reported for anonymous contexts
pub const ANONYMOUS_USERNAME: &str = "unauthenticated";
/// Sentinel first name reported for anonymous contexts
pub const ANONYMOUS_FIRST_NAME: &str = "Unauthenticated User";
/// Sentinel last name reported for anonymous contexts
pub const ANONYMOUS_LAST_NAME: &str = "N/A";

/// Snapshot of the request during which a fault was raised
///
/// `input` holds the submitted parameters keyed by field name; insertion
/// order is irrelevant (the map is sorted) and the map may be empty. Values
/// are arbitrary JSON so nested form payloads survive capture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Full URL of the request
    pub url: String,

    /// HTTP method (GET, POST, ...)
    pub http_method: String,

    /// Client IP address as reported by the host
    pub client_ip: String,

    /// Submitted input parameters, possibly empty
    #[serde(default)]
    pub input: BTreeMap<String, serde_json::Value>,
}

impl RequestContext {
    /// Create a context with no input parameters
    pub fn new(
        url: impl Into<String>,
        http_method: impl Into<String>,
        client_ip: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            http_method: http_method.into(),
            client_ip: client_ip.into(),
            input: BTreeMap::new(),
        }
    }

    /// Add an input parameter
    pub fn with_input(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.input.insert(name.into(), value);
        self
    }
}

/// Identity of the actor behind a request
///
/// Anonymous contexts carry no identity fields at all, so no partial
/// information can leak into a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "auth", rename_all = "lowercase")]
pub enum UserContext {
    /// A resolved, authenticated user
    Authenticated {
        user_id: String,
        username: String,
        first_name: String,
        last_name: String,
    },
    /// No authenticated user was present
    Anonymous,
}

impl UserContext {
    /// Convenience constructor for the authenticated variant
    pub fn authenticated(
        user_id: impl Into<String>,
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        UserContext::Authenticated {
            user_id: user_id.into(),
            username: username.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// True when no authenticated user was present
    pub fn is_anonymous(&self) -> bool {
        matches!(self, UserContext::Anonymous)
    }
}

/// The resolved identity embedded in an incident record
///
/// Always fully populated: authenticated contexts contribute their fields,
/// anonymous contexts resolve to the fixed sentinels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedUser {
    pub user_id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&UserContext> for ReportedUser {
    fn from(user: &UserContext) -> Self {
        match user {
            UserContext::Authenticated {
                user_id,
                username,
                first_name,
                last_name,
            } => ReportedUser {
                user_id: user_id.clone(),
                username: username.clone(),
                first_name: first_name.clone(),
                last_name: last_name.clone(),
            },
            UserContext::Anonymous => ReportedUser {
                user_id: ANONYMOUS_USER_ID.to_string(),
                username: ANONYMOUS_USERNAME.to_string(),
                first_name: ANONYMOUS_FIRST_NAME.to_string(),
                last_name: ANONYMOUS_LAST_NAME.to_string(),
            },
        }
    }
}
