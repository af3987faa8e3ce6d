//! npm registry API implementation

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::{ClientConfig, DEFAULT_REGISTRY};
use crate::error::RegistryError;
use crate::package::PackageInfo;
use crate::registry::fetcher::{Fetcher, HttpFetcher};

/// Client for a single npm-compatible registry
#[derive(Clone)]
pub struct NpmRegistry {
    fetcher: Arc<dyn Fetcher>,
    registry: String,
    base_url: Url,
}

impl NpmRegistry {
    /// Creates a new NpmRegistry for the given registry origin
    pub fn new(registry: &str) -> Result<Self, RegistryError> {
        Self::with_config(&ClientConfig::with_registry(registry))
    }

    /// Creates a new NpmRegistry for the public npm registry
    pub fn default_registry() -> Result<Self, RegistryError> {
        Self::new(DEFAULT_REGISTRY)
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self, RegistryError> {
        let fetcher = HttpFetcher::new(config)?;
        Self::with_fetcher(&config.registry, Arc::new(fetcher))
    }

    /// Creates a new NpmRegistry that issues requests through `fetcher`
    pub fn with_fetcher(registry: &str, fetcher: Arc<dyn Fetcher>) -> Result<Self, RegistryError> {
        let base_url = Url::parse(registry).map_err(|source| RegistryError::InvalidUrl {
            registry: registry.to_string(),
            source,
        })?;

        Ok(Self {
            fetcher,
            registry: registry.to_string(),
            base_url,
        })
    }

    /// Registry origin as given by the caller
    pub fn registry(&self) -> &str {
        &self.registry
    }

    /// Resolves `package_name` against the registry origin.
    ///
    /// Follows relative URL resolution: without a trailing slash the last
    /// path segment of the origin is replaced.
    pub fn package_url(&self, package_name: &str) -> Result<Url, RegistryError> {
        self.base_url
            .join(package_name)
            .map_err(|source| RegistryError::InvalidUrl {
                registry: self.registry.clone(),
                source,
            })
    }

    /// Downloads the registry document of `package_name`
    pub async fn package_info(&self, package_name: &str) -> Result<PackageInfo, RegistryError> {
        let url = self.package_url(package_name)?;
        debug!("Fetching package {} from {}", package_name, url);

        let response = self
            .fetcher
            .fetch(&url)
            .await
            .map_err(|source| RegistryError::Fetch {
                package: package_name.to_string(),
                source,
            })?;

        if response.status != 200 {
            warn!("npm registry returned status {}: {}", response.status, url);
            return Err(RegistryError::NotFound(package_name.to_string()));
        }

        let document: Value = serde_json::from_str(&response.body).map_err(|e| {
            warn!("Failed to parse npm registry response: {}", e);
            RegistryError::InvalidResponse {
                package: package_name.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(PackageInfo::new(document, self.registry.clone()))
    }
}
