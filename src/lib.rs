//! # genai-openai-adapter
//!
//! 将中立的内容生成契约（generate-content）适配到任意 OpenAI 兼容的 chat-completion 服务。
//!
//! Serve a provider-neutral generate-content contract from any server that
//! speaks the OpenAI chat-completion protocol (vLLM, Ollama, LM Studio, llama.cpp
//! server and friends).
//!
//! ## Overview
//!
//! Callers written against the neutral contract (turns made of parts, function
//! declarations, candidates with finish reasons) hold a [`ContentGenerator`].
//! [`OpenAiContentGenerator`] implements it by translating each request into one
//! chat-completion call and translating the reply back.
//!
//! - **Translation**: pure, total request mapping and a checked response mapping in [`convert`]
//! - **Transport**: one `POST {endpoint}/chat/completions` per call, bearer auth when configured
//! - **Streaming**: emulated; the stream yields the full result as its only item
//! - **Token counting**: local `ceil(chars / 4)` estimate, no network
//! - **Observability**: structured `tracing` records plus an injectable [`telemetry::EventSink`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use genai_openai_adapter::{ContentGenerator, GenerateContentRequest, OpenAiContentGenerator};
//!
//! #[tokio::main]
//! async fn main() -> genai_openai_adapter::Result<()> {
//!     let generator = OpenAiContentGenerator::builder("http://localhost:8000/v1", "llama3")
//!         .api_key("sk-local")
//!         .build()?;
//!
//!     let response = generator
//!         .generate_content(&GenerateContentRequest::new("Hello there"))
//!         .await?;
//!     println!("{}", response.text);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`OpenAiContentGenerator`] and its builder |
//! | [`config`] | Endpoint, model, credentials, HTTP options |
//! | [`convert`] | Neutral ⇄ wire translation |
//! | [`generator`] | The [`ContentGenerator`] trait |
//! | [`types`] | Neutral and wire data types |
//! | [`tokens`] | Token estimation |
//! | [`telemetry`] | Injectable event sinks |
//! | [`transport`] | HTTP plumbing |
//! | [`utils`] | Text extraction and id helpers |

pub mod client;
pub mod config;
pub mod convert;
pub mod generator;
pub mod telemetry;
pub mod tokens;
pub mod transport;
pub mod types;
pub mod utils;

pub use client::{OpenAiContentGenerator, OpenAiContentGeneratorBuilder};
pub use config::AdapterConfig;
pub use convert::ToolCallMode;
pub use generator::ContentGenerator;
pub use types::{
    Candidate, Content, ContentListUnion, ContentUnion, CountTokensRequest, CountTokensResponse,
    EmbedContentRequest, EmbedContentResponse, FinishReason, FunctionCall, FunctionDeclaration,
    FunctionResponse, GenerateContentConfig, GenerateContentRequest, GenerateContentResponse, Part,
    Tool, UsageMetadata,
};
pub use utils::extract_text;

use futures::Stream;
use std::pin::Pin;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// A pinned, boxed stream that emits `Result<T>`
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = Result<T>> + Send + 'a>>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext, ProtocolError};
