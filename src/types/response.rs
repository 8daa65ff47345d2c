//! Provider-neutral response shapes.

use super::content::{Content, FunctionCall};
use serde::{Deserialize, Serialize};

/// Why generation stopped.
///
/// Serialized as the upper-cased wire reason; values the adapter has no
/// name for are kept verbatim in [`FinishReason::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FinishReason {
    Stop,
    Length,
    ToolCalls,
    ContentFilter,
    Other(String),
}

impl FinishReason {
    /// Upper-case a wire `finish_reason` (`None` means `stop`).
    pub fn from_wire(reason: Option<&str>) -> Self {
        Self::from(reason.unwrap_or("stop").to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        match self {
            FinishReason::Stop => "STOP",
            FinishReason::Length => "LENGTH",
            FinishReason::ToolCalls => "TOOL_CALLS",
            FinishReason::ContentFilter => "CONTENT_FILTER",
            FinishReason::Other(s) => s,
        }
    }
}

impl From<String> for FinishReason {
    fn from(s: String) -> Self {
        match s.as_str() {
            "STOP" => FinishReason::Stop,
            "LENGTH" => FinishReason::Length,
            "TOOL_CALLS" => FinishReason::ToolCalls,
            "CONTENT_FILTER" => FinishReason::ContentFilter,
            _ => FinishReason::Other(s),
        }
    }
}

impl From<FinishReason> for String {
    fn from(r: FinishReason) -> Self {
        match r {
            FinishReason::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for FinishReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Content,
    pub finish_reason: FinishReason,
    pub index: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    pub prompt_token_count: u32,
    pub candidates_token_count: u32,
    pub total_token_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    pub candidates: Vec<Candidate>,
    pub usage_metadata: UsageMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    /// Text of the first candidate.
    #[serde(default)]
    pub text: String,
    /// Calls the caller is expected to execute, in order. Empty when none.
    #[serde(default)]
    pub function_calls: Vec<FunctionCall>,
}

impl GenerateContentResponse {
    pub fn finish_reason(&self) -> Option<&FinishReason> {
        self.candidates.first().map(|c| &c.finish_reason)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountTokensResponse {
    pub total_tokens: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentEmbedding {
    pub values: Vec<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedContentResponse {
    pub embeddings: Vec<ContentEmbedding>,
}
