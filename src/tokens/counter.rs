//! Token counter implementations.

use crate::types::ContentListUnion;
use crate::utils::ExtractText;

pub trait TokenCounter: Send + Sync {
    fn count(&self, text: &str) -> usize;

    /// Count the text carried by `contents`; non-text parts contribute nothing.
    fn count_contents(&self, contents: &ContentListUnion) -> usize {
        self.count(&contents.extract_text())
    }
}

/// Fixed characters-per-token approximation. Not tied to any tokenizer.
#[derive(Debug, Clone)]
pub struct CharacterEstimator {
    chars_per_token: f64,
}
impl CharacterEstimator {
    pub fn new() -> Self {
        Self::with_ratio(4.0)
    }
    pub fn with_ratio(r: f64) -> Self {
        Self { chars_per_token: r }
    }
}
impl Default for CharacterEstimator {
    fn default() -> Self {
        Self::new()
    }
}
impl TokenCounter for CharacterEstimator {
    fn count(&self, text: &str) -> usize {
        (text.chars().count() as f64 / self.chars_per_token).ceil() as usize
    }
}
