//! HTTP transport used to download registry documents

#[cfg(test)]
use mockall::automock;

use reqwest::header::ACCEPT;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::RegistryError;

/// Status and body of a registry response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Trait for issuing a GET request that expects a JSON body
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url` once, without retrying
    ///
    /// # Returns
    /// * `Ok(RawResponse)` - Any HTTP response, whatever its status
    /// * `Err(reqwest::Error)` - If the request could not be completed
    async fn fetch(&self, url: &Url) -> Result<RawResponse, reqwest::Error>;
}

/// Fetcher backed by reqwest
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &ClientConfig) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(RegistryError::Client)?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<RawResponse, reqwest::Error> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}
