//! Token 估算模块：基于字符数的近似 Token 统计。
//!
//! # Token Estimation Module
//!
//! Backs `count_tokens`. The estimate is `ceil(chars / 4)` over the extracted
//! text of the request contents; it is not the model's tokenizer and must not
//! be treated as exact.
//!
//! ## Example
//!
//! ```rust
//! use genai_openai_adapter::tokens::{CharacterEstimator, TokenCounter};
//!
//! let counter = CharacterEstimator::new();
//! assert_eq!(counter.count("abcdefgh"), 2);
//! ```

mod counter;

pub use counter::{CharacterEstimator, TokenCounter};
