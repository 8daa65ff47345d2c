use crate::config::AdapterConfig;
use crate::{Error, Result};
use reqwest::Proxy;
use serde::Serialize;
use tracing::debug;

/// Thin POST-JSON client bound to one endpoint.
///
/// The underlying `reqwest::Client` is pooled and cheap to clone, so adapters
/// built from the same config can share it.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &AdapterConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();

        // No deadline unless the caller asked for one.
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(proxy_url) = &config.proxy {
            let proxy = Proxy::all(proxy_url)
                .map_err(|e| Error::Transport(TransportError::Client(e.to_string())))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Client(e.to_string())))?;

        Ok(Self {
            client,
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST `body` as JSON to `path` and return the raw response text.
    ///
    /// Non-2xx answers become [`TransportError::Status`] carrying the body.
    pub async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<String> {
        let url = self.url(path);
        let mut request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body);

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        debug!(%url, status = status.as_u16(), bytes = text.len(), "chat completion answered");

        if !status.is_success() {
            return Err(Error::Transport(TransportError::Status {
                status: status.as_u16(),
                body: text,
            }));
        }

        Ok(text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}
