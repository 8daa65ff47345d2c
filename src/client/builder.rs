use crate::client::core::OpenAiContentGenerator;
use crate::config::AdapterConfig;
use crate::convert::ToolCallMode;
use crate::telemetry::EventSink;
use crate::tokens::{CharacterEstimator, TokenCounter};
use crate::transport::HttpTransport;
use crate::Result;
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`OpenAiContentGenerator`].
///
/// Keep this surface area small and predictable (developer-friendly).
pub struct OpenAiContentGeneratorBuilder {
    config: AdapterConfig,
    tool_call_mode: ToolCallMode,
    events: Arc<dyn EventSink>,
    counter: Arc<dyn TokenCounter>,
}

impl OpenAiContentGeneratorBuilder {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self::from_config(AdapterConfig::new(endpoint, model))
    }

    pub fn from_config(config: AdapterConfig) -> Self {
        Self {
            config,
            tool_call_mode: ToolCallMode::default(),
            events: crate::telemetry::noop_sink(),
            counter: Arc::new(CharacterEstimator::new()),
        }
    }

    /// Static bearer token sent as `Authorization: Bearer <key>`.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    /// Whole-request deadline. Without one a hung server hangs the caller.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy.into());
        self
    }

    /// Surface every tool call instead of only the first.
    pub fn tool_call_mode(mut self, mode: ToolCallMode) -> Self {
        self.tool_call_mode = mode;
        self
    }

    /// Inject an event sink. Default is a no-op sink.
    pub fn event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.events = sink;
        self
    }

    /// Replace the estimator behind `count_tokens`.
    pub fn token_counter(mut self, counter: Arc<dyn TokenCounter>) -> Self {
        self.counter = counter;
        self
    }

    /// Validate the configuration and build the generator.
    pub fn build(self) -> Result<OpenAiContentGenerator> {
        self.config.validate()?;
        let transport = HttpTransport::new(&self.config)?;
        Ok(OpenAiContentGenerator {
            config: Arc::new(self.config),
            transport,
            tool_call_mode: self.tool_call_mode,
            events: self.events,
            counter: self.counter,
        })
    }
}
