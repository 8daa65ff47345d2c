//! Provider-neutral request shapes (the generate-content contract).

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role used on the neutral side for model-authored turns.
pub const ROLE_MODEL: &str = "model";
pub const ROLE_USER: &str = "user";

/// One turn of a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn new(role: impl Into<String>, parts: Vec<Part>) -> Self {
        Self {
            role: Some(role.into()),
            parts,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ROLE_USER, vec![Part::text(text)])
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(ROLE_MODEL, vec![Part::text(text)])
    }
}

/// Atomic unit of turn content: text, a function call, or a function result.
///
/// Decodes from a bare string (a text part) or from an object. An object
/// carrying `role` or `parts` is a turn, and is rejected here so that a
/// malformed turn fails to decode instead of turning into an empty part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PartRepr")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_response: Option<FunctionResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PartRepr {
    Text(String),
    Fields(PartFields),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartFields {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    function_call: Option<FunctionCall>,
    #[serde(default)]
    function_response: Option<FunctionResponse>,
    #[serde(default)]
    thought: Option<bool>,
    // Turn-only keys.
    #[serde(default)]
    role: Option<IgnoredAny>,
    #[serde(default)]
    parts: Option<IgnoredAny>,
}

impl TryFrom<PartRepr> for Part {
    type Error = String;

    fn try_from(repr: PartRepr) -> Result<Self, Self::Error> {
        match repr {
            PartRepr::Text(text) => Ok(Part::text(text)),
            PartRepr::Fields(f) => {
                if f.role.is_some() || f.parts.is_some() {
                    return Err("object with `role` or `parts` is a turn, not a part".to_string());
                }
                Ok(Part {
                    text: f.text,
                    function_call: f.function_call,
                    function_response: f.function_response,
                    thought: f.thought,
                })
            }
        }
    }
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn function_call(call: FunctionCall) -> Self {
        Self {
            function_call: Some(call),
            ..Default::default()
        }
    }

    pub fn function_response(response: FunctionResponse) -> Self {
        Self {
            function_response: Some(response),
            ..Default::default()
        }
    }
}

/// A tool invocation requested by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, args: Value) -> Self {
        Self {
            id: None,
            name: name.into(),
            args,
        }
    }
}

/// The caller's result for an earlier [`FunctionCall`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub response: Value,
}

/// A single conversation entry as callers hand it over.
///
/// Variant order matters for untagged decoding: an object is a [`Content`]
/// only when it carries `parts`, otherwise it is read as a bare [`Part`].
/// Parts may be given as bare strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentUnion {
    Text(String),
    Content(Content),
    Parts(Vec<Part>),
    Part(Part),
}

impl From<&str> for ContentUnion {
    fn from(s: &str) -> Self {
        ContentUnion::Text(s.to_string())
    }
}

impl From<String> for ContentUnion {
    fn from(s: String) -> Self {
        ContentUnion::Text(s)
    }
}

impl From<Part> for ContentUnion {
    fn from(p: Part) -> Self {
        ContentUnion::Part(p)
    }
}

impl From<Content> for ContentUnion {
    fn from(c: Content) -> Self {
        ContentUnion::Content(c)
    }
}

/// `contents` accepts either one entry or an ordered list of entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentListUnion {
    Many(Vec<ContentUnion>),
    One(ContentUnion),
}

impl ContentListUnion {
    /// Normalize to an ordered slice of turns; a single entry becomes a one-element list.
    pub fn as_slice(&self) -> &[ContentUnion] {
        match self {
            ContentListUnion::Many(items) => items,
            ContentListUnion::One(item) => std::slice::from_ref(item),
        }
    }
}

impl Default for ContentListUnion {
    fn default() -> Self {
        ContentListUnion::Many(Vec::new())
    }
}

impl From<&str> for ContentListUnion {
    fn from(s: &str) -> Self {
        ContentListUnion::One(s.into())
    }
}

impl From<String> for ContentListUnion {
    fn from(s: String) -> Self {
        ContentListUnion::One(s.into())
    }
}

impl From<Content> for ContentListUnion {
    fn from(c: Content) -> Self {
        ContentListUnion::One(c.into())
    }
}

impl From<Vec<Content>> for ContentListUnion {
    fn from(items: Vec<Content>) -> Self {
        ContentListUnion::Many(items.into_iter().map(ContentUnion::Content).collect())
    }
}

/// A function the model may call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema of the arguments. Only `properties` and `required` are forwarded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_declarations: Option<Vec<FunctionDeclaration>>,
}

impl Tool {
    pub fn functions(declarations: Vec<FunctionDeclaration>) -> Self {
        Self {
            function_declarations: Some(declarations),
        }
    }
}

/// Sampling and tool configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Ignored by the adapter; the configured model is always used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default)]
    pub contents: ContentListUnion,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<ContentUnion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<GenerateContentConfig>,
}

impl GenerateContentRequest {
    pub fn new(contents: impl Into<ContentListUnion>) -> Self {
        Self {
            contents: contents.into(),
            ..Default::default()
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<ContentUnion>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_config(mut self, config: GenerateContentConfig) -> Self {
        self.config = Some(config);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountTokensRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default)]
    pub contents: ContentListUnion,
}

impl CountTokensRequest {
    pub fn new(contents: impl Into<ContentListUnion>) -> Self {
        Self {
            model: None,
            contents: contents.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedContentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default)]
    pub contents: ContentListUnion,
}
