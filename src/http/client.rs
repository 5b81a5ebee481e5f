use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::errors::UpstreamError;

/// HTTP client shared by the profile aggregators
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
}

impl UpstreamClient {
    pub fn new(user_agent: &str, timeout_secs: Option<u64>) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client })
    }

    /// GET `url` and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        headers: HeaderMap,
    ) -> Result<T, UpstreamError> {
        let request = self.client.get(url).headers(headers);
        self.send_json(url, request).await
    }

    /// POST `body` as JSON to `url` and decode the JSON body
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
        headers: HeaderMap,
    ) -> Result<T, UpstreamError> {
        let request = self.client.post(url).headers(headers).json(body);
        self.send_json(url, request).await
    }

    fn build_client(user_agent: &str, timeout_secs: Option<u64>) -> Result<Client> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build().context("Failed to build HTTP client")
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        url: &str,
        request: RequestBuilder,
    ) -> Result<T, UpstreamError> {
        debug!("Requesting {}", url);

        let response = request.send().await.map_err(|source| UpstreamError::Network {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} responded with {}", url, status);
            return Err(UpstreamError::Status {
                url: url.to_string(),
                status,
            });
        }

        let text = response.text().await.map_err(|source| UpstreamError::Network {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|e| {
            UpstreamError::malformed(format!("Invalid JSON from {}: {}", url, e))
        })
    }
}
