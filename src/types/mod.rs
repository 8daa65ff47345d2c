//! 类型系统模块：中立内容生成契约与 OpenAI 兼容线格式的数据类型。
//!
//! # Types Module
//!
//! Strongly-typed shapes for both sides of the adapter.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`content`] | Neutral requests: turns, parts, tools, sampling config |
//! | [`response`] | Neutral responses: candidates, finish reason, usage |
//! | [`wire`] | OpenAI-compatible chat-completion request/response JSON |
//!
//! ## Example
//!
//! ```rust
//! use genai_openai_adapter::types::{Content, GenerateContentConfig, GenerateContentRequest};
//!
//! let request = GenerateContentRequest::new(vec![
//!     Content::user("What's the weather in Oslo?"),
//! ])
//! .with_system_instruction("Answer in one sentence.")
//! .with_config(GenerateContentConfig {
//!     temperature: Some(0.2),
//!     ..Default::default()
//! });
//! assert_eq!(request.contents.as_slice().len(), 1);
//! ```

pub mod content;
pub mod response;
pub mod wire;

pub use content::{
    Content, ContentListUnion, ContentUnion, CountTokensRequest, EmbedContentRequest,
    FunctionCall, FunctionDeclaration, FunctionResponse, GenerateContentConfig,
    GenerateContentRequest, Part, Tool,
};
pub use response::{
    Candidate, ContentEmbedding, CountTokensResponse, EmbedContentResponse, FinishReason,
    GenerateContentResponse, UsageMetadata,
};
