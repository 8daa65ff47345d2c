//! OpenAI-compatible content generator.
//!
//! Developer-friendly goal: keep the public surface small and predictable.
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;

pub use builder::OpenAiContentGeneratorBuilder;
pub use core::{OpenAiContentGenerator, CHAT_COMPLETIONS_PATH};
