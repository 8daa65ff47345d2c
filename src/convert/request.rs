//! Neutral request → chat-completion payload.
//!
//! Total: absent fields fall back to defaults and nothing here can fail.

use crate::types::content::ROLE_MODEL;
use crate::types::wire::{
    ChatCompletionRequest, ChatMessage, ChatRole, FunctionParameters, FunctionSpec, ToolType,
    WireTool,
};
use crate::types::{
    ContentUnion, FunctionDeclaration, GenerateContentConfig, GenerateContentRequest, Tool,
};
use crate::utils::ExtractText;
use tracing::debug;

pub const DEFAULT_MAX_TOKENS: u32 = 4096;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_TOP_P: f64 = 1.0;

/// Neutral role → wire role. Only `model` is renamed.
pub fn map_role_to_wire(role: &str) -> ChatRole {
    if role == ROLE_MODEL {
        ChatRole::Assistant
    } else {
        ChatRole::from(role)
    }
}

/// Wire role → neutral role. Only `assistant` is renamed.
pub fn map_role_from_wire(role: &ChatRole) -> String {
    match role {
        ChatRole::Assistant => ROLE_MODEL.to_string(),
        other => other.as_str().to_string(),
    }
}

/// Build the chat-completion body for `request`, addressed to `model`.
///
/// `stream` is always `false`: streaming is emulated above the wire.
pub fn to_wire_request(request: &GenerateContentRequest, model: &str) -> ChatCompletionRequest {
    let mut messages = Vec::new();

    // A present instruction is always forwarded, even when it carries no text.
    if let Some(instruction) = &request.system_instruction {
        messages.push(ChatMessage::system(instruction.extract_text()));
    }

    for (index, turn) in request.contents.as_slice().iter().enumerate() {
        if let Some(message) = turn_to_message(turn) {
            messages.push(message);
        } else {
            debug!(index, "turn dropped: no role or no text");
        }
    }

    let defaults = GenerateContentConfig::default();
    let config = request.config.as_ref().unwrap_or(&defaults);

    let stop = config.stop_sequences.clone().filter(|s| !s.is_empty());
    let tools = config
        .tools
        .as_deref()
        .map(tools_to_wire)
        .filter(|t| !t.is_empty());

    ChatCompletionRequest {
        model: model.to_string(),
        messages,
        max_tokens: config.max_output_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        temperature: config.temperature.unwrap_or(DEFAULT_TEMPERATURE),
        top_p: config.top_p.unwrap_or(DEFAULT_TOP_P),
        stream: false,
        stop,
        tools,
    }
}

// Function-call and function-response parts carry no text, so turns made only
// of them are lost here.
fn turn_to_message(turn: &ContentUnion) -> Option<ChatMessage> {
    match turn {
        ContentUnion::Text(s) => Some(ChatMessage::user(s.clone())),
        ContentUnion::Content(content) => {
            let role = content.role.as_deref()?;
            let text = content.extract_text();
            if text.is_empty() {
                return None;
            }
            Some(ChatMessage::new(map_role_to_wire(role), text))
        }
        ContentUnion::Parts(_) | ContentUnion::Part(_) => None,
    }
}

fn tools_to_wire(tools: &[Tool]) -> Vec<WireTool> {
    tools
        .iter()
        .flat_map(|t| t.function_declarations.iter().flatten())
        .map(declaration_to_wire)
        .collect()
}

fn declaration_to_wire(decl: &FunctionDeclaration) -> WireTool {
    let description = decl
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| format!("Execute {}", decl.name));

    let schema = decl.parameters.as_ref();
    let parameters = FunctionParameters {
        properties: schema.and_then(|s| s.get("properties")).cloned(),
        required: schema.and_then(|s| s.get("required")).cloned(),
        ..Default::default()
    };

    WireTool {
        tool_type: ToolType::Function,
        function: FunctionSpec {
            name: decl.name.clone(),
            description,
            parameters,
        },
    }
}
