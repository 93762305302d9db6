//! Outbound client for the upstream API.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::config::UpstreamConfig;
use crate::upstream::error::UpstreamError;

/// Performs the single GET the data route relays.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    url: Url,
}

impl UpstreamClient {
    /// Build a client from configuration.
    ///
    /// The URL is expected to be validated already; a malformed one still
    /// fails here rather than on first request.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let url = Url::parse(&config.url).map_err(|source| UpstreamError::InvalidUrl {
            url: config.url.clone(),
            source,
        })?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        if !config.system_proxy {
            builder = builder.no_proxy();
        }

        let client = builder.build().map_err(UpstreamError::Build)?;
        Ok(Self { client, url })
    }

    /// The URL every fetch targets.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch the upstream document.
    ///
    /// Only 2xx responses with a JSON body succeed. The body is decoded to
    /// an untyped [`Value`] so it is relayed without a schema.
    pub async fn fetch(&self) -> Result<Value, UpstreamError> {
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status,
                url: self.url.to_string(),
            });
        }

        let body = response.json::<Value>().await?;
        Ok(body)
    }
}
