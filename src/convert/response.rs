//! Chat-completion response → neutral response.

use crate::convert::request::map_role_from_wire;
use crate::error::ProtocolError;
use crate::types::content::ROLE_MODEL;
use crate::types::wire::{ChatCompletionResponse, ToolCall, Usage};
use crate::types::{
    Candidate, Content, FinishReason, FunctionCall, GenerateContentResponse, Part, UsageMetadata,
};
use crate::utils::ids;
use crate::Result;
use serde_json::Value;
use tracing::warn;

/// How many of a response's tool calls are surfaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToolCallMode {
    /// Only the first tool call; any others are discarded with a warning.
    #[default]
    FirstOnly,
    /// Every tool call, in wire order.
    All,
}

/// Decode a raw response body.
pub fn parse_body(body: &str) -> Result<ChatCompletionResponse> {
    serde_json::from_str(body).map_err(|source| ProtocolError::InvalidBody { source }.into())
}

/// Translate the primary choice of `response` into a neutral response.
///
/// Fails with [`ProtocolError::NoChoices`] when there is no `choices[0]` and with
/// [`ProtocolError::MalformedToolArguments`] when a surfaced tool call's
/// arguments are not valid JSON.
pub fn from_wire_response(
    response: ChatCompletionResponse,
    mode: ToolCallMode,
) -> Result<GenerateContentResponse> {
    let ChatCompletionResponse {
        id,
        model,
        choices,
        usage,
    } = response;

    let choice = choices.into_iter().next().ok_or(ProtocolError::NoChoices)?;
    let message = choice.message;

    let text = message.content.unwrap_or_default();
    let role = message
        .role
        .as_ref()
        .map(map_role_from_wire)
        .unwrap_or_else(|| ROLE_MODEL.to_string());

    let (parts, finish_reason, function_calls) = if message.tool_calls.is_empty() {
        (
            vec![Part::text(text.clone())],
            FinishReason::from_wire(choice.finish_reason.as_deref()),
            Vec::new(),
        )
    } else {
        let function_calls = decode_tool_calls(message.tool_calls, mode)?;
        let mut parts = Vec::with_capacity(function_calls.len() + 1);
        if !text.is_empty() {
            parts.push(Part::text(text.clone()));
        }
        parts.extend(function_calls.iter().cloned().map(Part::function_call));
        // Control goes back to the caller to run the tool.
        (parts, FinishReason::Stop, function_calls)
    };

    Ok(GenerateContentResponse {
        candidates: vec![Candidate {
            content: Content {
                role: Some(role),
                parts,
            },
            finish_reason,
            index: choice.index,
        }],
        usage_metadata: usage.map(usage_to_metadata).unwrap_or_default(),
        response_id: id,
        model_version: model,
        text,
        function_calls,
    })
}

fn decode_tool_calls(calls: Vec<ToolCall>, mode: ToolCallMode) -> Result<Vec<FunctionCall>> {
    let total = calls.len();
    let keep = match mode {
        ToolCallMode::FirstOnly => 1,
        ToolCallMode::All => total,
    };
    if keep < total {
        warn!(total, kept = keep, "discarding extra tool calls");
    }
    calls.into_iter().take(keep).map(decode_tool_call).collect()
}

fn decode_tool_call(call: ToolCall) -> Result<FunctionCall> {
    let name = call.function.name;
    let raw = call.function.arguments.as_deref().unwrap_or("{}");
    let args: Value = match serde_json::from_str(raw) {
        Ok(args) => args,
        Err(source) => return Err(ProtocolError::MalformedToolArguments { name, source }.into()),
    };
    let id = call
        .id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(ids::tool_call_id);
    Ok(FunctionCall {
        id: Some(id),
        name,
        args,
    })
}

fn usage_to_metadata(usage: Usage) -> UsageMetadata {
    UsageMetadata {
        prompt_token_count: usage.prompt_tokens,
        candidates_token_count: usage.completion_tokens,
        total_token_count: usage.total_tokens,
    }
}
