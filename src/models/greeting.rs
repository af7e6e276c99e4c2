use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::user::AuthenticatedUser;

/// Response shared by every greeting operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Greeting {
    #[schemars(description = "The rendered greeting")]
    pub data: String,
}

/// Arguments of `sayHi`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SayHiRequest {
    #[schemars(description = "Name of the person to greet")]
    pub name: String,
}

/// Arguments of `sayHiAuth`.
///
/// `user` is never supplied by the client: the gateway interceptor strips any
/// client value and injects the identity it resolved from the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SayHiAuthRequest {
    #[schemars(description = "Name of the person to greet")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(skip)]
    pub user: Option<AuthenticatedUser>,
}

/// Request record carried by `sayLongHi` next to its named parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LongHiRequest {
    #[serde(default)]
    #[schemars(description = "Day of the week, appended to the greeting when present")]
    pub weekday: Option<String>,
    // Accepted on the wire, never read.
    #[serde(default)]
    #[schemars(description = "City of the caller")]
    pub city: Option<String>,
}

/// Arguments of `sayLongHi`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SayLongHiRequest {
    #[schemars(description = "First name")]
    pub first_name: String,
    #[schemars(description = "Last name")]
    pub last_name: String,
    #[serde(default)]
    #[schemars(description = "Optional middle name")]
    pub middle_name: Option<String>,
    #[serde(flatten)]
    pub request: LongHiRequest,
}
