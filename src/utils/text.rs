//! Recursive text extraction over flat and nested part representations.
//!
//! Rules, first match wins:
//! 1. a string is returned as-is;
//! 2. a sequence concatenates the text of its elements, in order, no separator;
//! 3. an object with `text` yields that text;
//! 4. an object with `parts` recurses into them;
//! 5. anything else yields `""`.
//!
//! A part carrying both `text` and other structure only ever surfaces `text`.

use crate::types::{Content, ContentListUnion, ContentUnion, Part};
use serde_json::Value;

pub trait ExtractText {
    fn extract_text(&self) -> String;
}

/// Free-function form of [`ExtractText::extract_text`].
pub fn extract_text<T: ExtractText + ?Sized>(source: &T) -> String {
    source.extract_text()
}

impl ExtractText for str {
    fn extract_text(&self) -> String {
        self.to_string()
    }
}

impl ExtractText for String {
    fn extract_text(&self) -> String {
        self.clone()
    }
}

impl<T: ExtractText> ExtractText for [T] {
    fn extract_text(&self) -> String {
        let mut out = String::new();
        for item in self {
            let text = item.extract_text();
            if !text.is_empty() {
                out.push_str(&text);
            }
        }
        out
    }
}

impl<T: ExtractText> ExtractText for Vec<T> {
    fn extract_text(&self) -> String {
        self.as_slice().extract_text()
    }
}

impl<T: ExtractText> ExtractText for Option<T> {
    fn extract_text(&self) -> String {
        self.as_ref().map(|t| t.extract_text()).unwrap_or_default()
    }
}

impl ExtractText for Part {
    fn extract_text(&self) -> String {
        self.text.clone().unwrap_or_default()
    }
}

impl ExtractText for Content {
    fn extract_text(&self) -> String {
        self.parts.extract_text()
    }
}

impl ExtractText for ContentUnion {
    fn extract_text(&self) -> String {
        match self {
            ContentUnion::Text(s) => s.clone(),
            ContentUnion::Content(c) => c.extract_text(),
            ContentUnion::Parts(parts) => parts.extract_text(),
            ContentUnion::Part(part) => part.extract_text(),
        }
    }
}

impl ExtractText for ContentListUnion {
    fn extract_text(&self) -> String {
        self.as_slice().extract_text()
    }
}

/// Untyped JSON, for callers holding parts they have not decoded.
impl ExtractText for Value {
    fn extract_text(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Array(items) => items.extract_text(),
            Value::Object(map) => {
                if let Some(text) = map.get("text") {
                    text.extract_text()
                } else if let Some(parts) = map.get("parts") {
                    parts.extract_text()
                } else {
                    String::new()
                }
            }
            _ => String::new(),
        }
    }
}
