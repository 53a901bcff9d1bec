use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Url};
use serde_json::Value;
use tokio::time::timeout;
use tracing::debug;

use super::{CollectionSource, FetchError, PageRequest};
use crate::config::{ApiConfig, SecureString};

const ERROR_BODY_LIMIT: usize = 200;

/// [`CollectionSource`] backed by `GET {base_url}{endpoint}?page=N&type=KIND`.
pub struct HttpCollectionSource {
    client: Client,
    base_url: String,
    endpoint: String,
    token: Option<SecureString>,
    request_timeout: Duration,
}

impl HttpCollectionSource {
    pub fn new(api: &ApiConfig, endpoint: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api.connect_timeout_seconds as u64))
            .build()
            .map_err(|e| FetchError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            endpoint: endpoint.to_string(),
            token: api.bearer_token(),
            request_timeout: Duration::from_secs(api.timeout_seconds as u64),
        })
    }

    /// Full request URL for `request`.
    pub fn url_for(&self, request: &PageRequest) -> Result<Url, FetchError> {
        let raw = format!("{}{}", self.base_url, self.endpoint);
        let mut url = Url::parse(&raw).map_err(|e| FetchError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("page", &request.page.to_string());
            if let Some(kind) = request.kind.as_query() {
                query.append_pair("type", kind);
            }
        }
        Ok(url)
    }

    async fn send(&self, url: Url) -> Result<Value, FetchError> {
        let url_str = url.to_string();
        let mut builder = self.client.get(url).header(ACCEPT, "application/json");
        if let Some(token) = &self.token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token.expose()));
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url_str.clone(),
                }
            } else {
                FetchError::Connection {
                    url: url_str.clone(),
                    source: e,
                }
            }
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| FetchError::Connection {
            url: url_str.clone(),
            source: e,
        })?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            let message: String = text.chars().take(ERROR_BODY_LIMIT).collect();
            return Err(FetchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        debug!(url = %url_str, status = status.as_u16(), bytes = body.len(), "page received");
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl CollectionSource for HttpCollectionSource {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Value, FetchError> {
        let url = self.url_for(request)?;
        let url_str = url.to_string();

        match timeout(self.request_timeout, self.send(url)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout { url: url_str }),
        }
    }
}
