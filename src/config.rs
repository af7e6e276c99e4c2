//! API declaration and runtime configuration.
//!
//! Defaults describe the deployed `example` API. Each value can be overridden
//! through the environment of the Lambda function.

use std::env;
use std::sync::LazyLock;

pub const DEFAULT_API_NAME: &str = "example";
pub const DEFAULT_API_VERSION: &str = "v1";

/// OAuth client of the example web application
pub const WEB_CLIENT_ID: &str =
    "128116520821-dullqdj9l0fd4ljhsjf849kraga0j8sd.apps.googleusercontent.com";
/// OAuth client of the API explorer
pub const API_EXPLORER_CLIENT_ID: &str = "292824132082.apps.googleusercontent.com";

const API_NAME_VAR: &str = "API_NAME";
const API_VERSION_VAR: &str = "API_VERSION";
const ALLOWED_CLIENT_IDS_VAR: &str = "ALLOWED_CLIENT_IDS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub name: String,
    pub version: String,
    /// Clients whose tokens may resolve to a user. Empty accepts any client.
    pub allowed_client_ids: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_API_NAME.to_string(),
            version: DEFAULT_API_VERSION.to_string(),
            allowed_client_ids: vec![
                WEB_CLIENT_ID.to_string(),
                API_EXPLORER_CLIENT_ID.to_string(),
            ],
        }
    }
}

impl ApiConfig {
    /// Builds the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `ALLOWED_CLIENT_IDS` is a comma separated list. Setting it to an empty
    /// string disables the allow-list.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let allowed_client_ids =
            lookup(ALLOWED_CLIENT_IDS_VAR).map_or(defaults.allowed_client_ids, |ids| {
                ids.split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(str::to_string)
                    .collect()
            });

        Self {
            name: lookup(API_NAME_VAR).unwrap_or(defaults.name),
            version: lookup(API_VERSION_VAR).unwrap_or(defaults.version),
            allowed_client_ids,
        }
    }

    /// Whether tokens issued to `client_id` may resolve to a user.
    #[must_use]
    pub fn allows_client(&self, client_id: &str) -> bool {
        self.allowed_client_ids.is_empty()
            || self.allowed_client_ids.iter().any(|id| id == client_id)
    }
}

static CONFIG: LazyLock<ApiConfig> = LazyLock::new(ApiConfig::from_env);

/// Process-wide configuration, read from the environment on first use.
#[must_use]
pub fn config() -> &'static ApiConfig {
    &CONFIG
}
