use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Caller identity resolved by the gateway interceptor.
///
/// Only the interceptor constructs this value. Operations read it as given and
/// do not validate it, so a user without an email deserializes with `email: None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}
