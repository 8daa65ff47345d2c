//! The provider-neutral content-generator capability set.

use crate::types::{
    CountTokensRequest, CountTokensResponse, EmbedContentRequest, EmbedContentResponse,
    GenerateContentRequest, GenerateContentResponse,
};
use crate::{BoxStream, Result};
use async_trait::async_trait;

/// Four operations every content generator offers.
///
/// Object-safe, so callers can hold an `Arc<dyn ContentGenerator>` and swap
/// backends without touching call sites.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// One complete, non-streaming generation.
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;

    /// Stream-shaped variant of [`generate_content`](Self::generate_content).
    ///
    /// Implementations may produce a single item holding the full result.
    async fn generate_content_stream(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<BoxStream<'static, GenerateContentResponse>>;

    async fn count_tokens(&self, request: &CountTokensRequest) -> Result<CountTokensResponse>;

    async fn embed_content(&self, request: &EmbedContentRequest) -> Result<EmbedContentResponse>;
}
