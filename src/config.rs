use serde::Deserialize;

/// Registry origin used when the caller does not provide one
pub const DEFAULT_REGISTRY: &str = "http://registry.npmjs.org/";

/// User agent sent with every registry request
pub const USER_AGENT: &str = "npm-package-info";

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Registry origin package names are resolved against
    pub registry: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            registry: DEFAULT_REGISTRY.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Returns a config pointing at `registry`, other settings left at their defaults
    pub fn with_registry(registry: &str) -> Self {
        Self {
            registry: registry.to_string(),
            ..Self::default()
        }
    }
}
