use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Invalid registry URL '{registry}': {source}")]
    InvalidUrl {
        registry: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to fetch package '{package}': {source}")]
    Fetch {
        package: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Package '{0}' not found")]
    NotFound(String),

    #[error("Invalid response for package '{package}': {reason}")]
    InvalidResponse { package: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Package '{package}' does not have dist-tag {dist_tag}")]
    DistTagNotFound { package: String, dist_tag: String },

    #[error("Package '{package}' does not have version {version}")]
    VersionNotFound { package: String, version: String },
}
