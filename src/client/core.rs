use crate::client::builder::OpenAiContentGeneratorBuilder;
use crate::config::AdapterConfig;
use crate::convert::{from_wire_response, parse_body, to_wire_request, ToolCallMode};
use crate::generator::ContentGenerator;
use crate::telemetry::{AdapterEvent, EventSink, RequestDispatched, RequestFailed, ResponseDecoded};
use crate::tokens::TokenCounter;
use crate::transport::HttpTransport;
use crate::types::{
    CountTokensRequest, CountTokensResponse, EmbedContentRequest, EmbedContentResponse,
    GenerateContentRequest, GenerateContentResponse,
};
use crate::utils::ids;
use crate::{BoxStream, Error, Result};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info_span, Instrument};

/// Path appended to the configured endpoint.
pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Content generator backed by an OpenAI-compatible chat-completion server.
///
/// Holds only immutable state, so one instance can serve concurrent calls;
/// calls are independent and unordered relative to each other.
#[derive(Clone)]
pub struct OpenAiContentGenerator {
    pub(crate) config: Arc<AdapterConfig>,
    pub(crate) transport: HttpTransport,
    pub(crate) tool_call_mode: ToolCallMode,
    pub(crate) events: Arc<dyn EventSink>,
    pub(crate) counter: Arc<dyn TokenCounter>,
}

impl OpenAiContentGenerator {
    /// Build with defaults from a configuration.
    pub fn new(config: AdapterConfig) -> Result<Self> {
        OpenAiContentGeneratorBuilder::from_config(config).build()
    }

    /// Build from `OPENAI_BASE_URL`, `OPENAI_MODEL` and `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::new(AdapterConfig::from_env()?)
    }

    pub fn builder(
        endpoint: impl Into<String>,
        model: impl Into<String>,
    ) -> OpenAiContentGeneratorBuilder {
        OpenAiContentGeneratorBuilder::new(endpoint, model)
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn tool_call_mode(&self) -> ToolCallMode {
        self.tool_call_mode
    }

    async fn emit(&self, event: AdapterEvent) {
        if let Err(e) = self.events.report(event).await {
            debug!(error = %e, "event sink rejected event");
        }
    }

    async fn execute(
        &self,
        request_id: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let wire = to_wire_request(request, &self.config.model);
        let tool_count = wire.tools.as_ref().map_or(0, Vec::len);
        debug!(messages = wire.messages.len(), tools = tool_count, "translated request");

        self.emit(AdapterEvent::RequestDispatched(
            RequestDispatched::new(
                request_id,
                self.transport.url(CHAT_COMPLETIONS_PATH),
                &self.config.model,
            )
            .with_counts(wire.messages.len(), tool_count),
        ))
        .await;

        let started = Instant::now();
        let outcome = async {
            let body = self.transport.post_json(CHAT_COMPLETIONS_PATH, &wire).await?;
            let parsed = parse_body(&body)?;
            from_wire_response(parsed, self.tool_call_mode)
        }
        .await;
        let latency_ms = started.elapsed().as_millis() as u64;

        let event = match &outcome {
            Ok(resp) => {
                let usage = resp.usage_metadata;
                AdapterEvent::ResponseDecoded(
                    ResponseDecoded::new(
                        request_id,
                        resp.finish_reason().map(|r| r.as_str()).unwrap_or_default(),
                    )
                    .with_usage(
                        usage.prompt_token_count,
                        usage.candidates_token_count,
                        usage.total_token_count,
                    )
                    .with_function_calls(resp.function_calls.len())
                    .with_latency(latency_ms),
                )
            }
            Err(e) => AdapterEvent::RequestFailed(
                RequestFailed::new(request_id, e.to_string())
                    .with_status(e.status())
                    .with_latency(latency_ms),
            ),
        };
        self.emit(event).await;

        outcome
    }
}

#[async_trait]
impl ContentGenerator for OpenAiContentGenerator {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let request_id = ids::request_id();
        let span = info_span!(
            "generate_content",
            request_id = %request_id,
            model = %self.config.model
        );
        self.execute(&request_id, request).instrument(span).await
    }

    /// Runs a full non-streaming call, then yields its result as the only item.
    ///
    /// Errors surface from this method, before any stream exists.
    async fn generate_content_stream(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<BoxStream<'static, GenerateContentResponse>> {
        let response = self.generate_content(request).await?;
        let item = Ok::<_, Error>(response);
        Ok(Box::pin(futures::stream::once(futures::future::ready(item))))
    }

    async fn count_tokens(&self, request: &CountTokensRequest) -> Result<CountTokensResponse> {
        let estimate = self.counter.count_contents(&request.contents);
        debug!(estimate, "estimated token count");
        Ok(CountTokensResponse {
            total_tokens: u32::try_from(estimate).unwrap_or(u32::MAX),
        })
    }

    async fn embed_content(&self, _request: &EmbedContentRequest) -> Result<EmbedContentResponse> {
        Err(Error::unsupported("embedContent"))
    }
}

impl std::fmt::Debug for OpenAiContentGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiContentGenerator")
            .field("config", &self.config)
            .field("tool_call_mode", &self.tool_call_mode)
            .finish_non_exhaustive()
    }
}
