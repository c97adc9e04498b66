use std::time::Duration;

use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, HeaderValue},
};
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::{errors::FetchError, retry::RetryConfig};

pub const DEFAULT_IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
pub const JSON_ACCEPT: &str = "application/json";

/// Fetches performance reports by content id from an IPFS HTTP gateway.
#[derive(Debug, Clone)]
pub struct IpfsClient {
    http: Client,
    gateway: Url,
    retry: RetryConfig,
}

impl IpfsClient {
    pub fn new(
        gateway: Url,
        request_timeout: Duration,
        retry: RetryConfig,
    ) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            http,
            gateway: with_trailing_slash(gateway),
            retry,
        })
    }

    pub fn gateway(&self) -> &Url {
        &self.gateway
    }

    pub fn report_url(&self, cid: &str) -> Result<Url, FetchError> {
        Ok(self.gateway.join(cid.trim_start_matches('/'))?)
    }

    /// Downloads and parses the report stored under `cid`, retrying transient failures.
    pub async fn fetch_report(&self, cid: &str) -> Result<Value, FetchError> {
        let url = self.report_url(cid)?;
        info!("Fetching report {cid}");

        self.retry
            .run(cid, || self.fetch_once(url.clone()))
            .await
            .map_err(|(attempts, last)| FetchError::RetriesExhausted {
                location: cid.to_string(),
                attempts,
                last: Box::new(last),
            })
    }

    async fn fetch_once(&self, url: Url) -> Result<Value, FetchError> {
        debug!("GET {url}");
        let response = self
            .http
            .get(url.clone())
            .header(ACCEPT, HeaderValue::from_static(JSON_ACCEPT))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                status,
                body: response.text().await.unwrap_or_default(),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|error| FetchError::Decode {
            location: url.to_string(),
            error,
        })
    }
}

/// `Url::join` replaces the last path segment unless the base ends with a slash.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
