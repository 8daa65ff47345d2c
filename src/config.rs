//! Adapter configuration.
//!
//! Set once when the adapter is built and never mutated afterwards.

use crate::{Error, ErrorContext, Result};
use std::time::Duration;

pub const ENV_BASE_URL: &str = "OPENAI_BASE_URL";
pub const ENV_MODEL: &str = "OPENAI_MODEL";
pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_TIMEOUT_SECS: &str = "AI_HTTP_TIMEOUT_SECS";
pub const ENV_PROXY_URL: &str = "AI_PROXY_URL";

/// Connection settings for one OpenAI-compatible server.
#[derive(Clone, PartialEq, Eq)]
pub struct AdapterConfig {
    /// Base URL; `/chat/completions` is appended to it.
    pub endpoint: String,
    /// Model identifier, forwarded verbatim.
    pub model: String,
    /// Static bearer token.
    pub api_key: Option<String>,
    /// Whole-request deadline. `None` means wait indefinitely.
    pub timeout: Option<Duration>,
    pub proxy: Option<String>,
}

impl AdapterConfig {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: None,
            timeout: None,
            proxy: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Read the configuration from the process environment.
    ///
    /// - `OPENAI_BASE_URL` (required)
    /// - `OPENAI_MODEL` (required)
    /// - `OPENAI_API_KEY`
    /// - `AI_HTTP_TIMEOUT_SECS`
    /// - `AI_PROXY_URL`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &str| {
            get(key).ok_or_else(|| {
                Error::configuration_with_context(
                    format!("{} is not set", key),
                    ErrorContext::new().with_field_path(key).with_source("env"),
                )
            })
        };

        let mut config = Self::new(required(ENV_BASE_URL)?, required(ENV_MODEL)?);
        config.api_key = get(ENV_API_KEY);
        config.proxy = get(ENV_PROXY_URL);

        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                Error::configuration_with_context(
                    "timeout must be a whole number of seconds",
                    ErrorContext::new()
                        .with_field_path(ENV_TIMEOUT_SECS)
                        .with_details(format!("got '{}'", raw))
                        .with_source("env"),
                )
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the endpoint is an absolute http(s) URL and the model is non-empty.
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.endpoint).map_err(|e| {
            Error::configuration_with_context(
                "endpoint is not a valid URL",
                ErrorContext::new()
                    .with_field_path("endpoint")
                    .with_details(format!("'{}': {}", self.endpoint, e))
                    .with_source("config"),
            )
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                "endpoint must use http or https",
                ErrorContext::new()
                    .with_field_path("endpoint")
                    .with_details(format!("scheme '{}'", url.scheme()))
                    .with_source("config"),
            ));
        }
        if self.model.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "model must not be empty",
                ErrorContext::new()
                    .with_field_path("model")
                    .with_source("config"),
            ));
        }
        Ok(())
    }
}

// Keep the bearer token out of logs.
impl std::fmt::Debug for AdapterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("proxy", &self.proxy)
            .finish()
    }
}
