//! 核心事件类型：EventSink trait 与适配器诊断事件（始终编译）。
//!
//! Core observability types.
//!
//! The adapter reports one [`AdapterEvent::RequestDispatched`] per call, followed by
//! exactly one of [`AdapterEvent::ResponseDecoded`] or [`AdapterEvent::RequestFailed`].

use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

fn timestamp() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

/// The translated request is about to be sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestDispatched {
    pub request_id: String,
    pub url: String,
    pub model: String,
    pub message_count: usize,
    pub tool_count: usize,
    pub timestamp: f64,
}

impl RequestDispatched {
    pub fn new(request_id: impl Into<String>, url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            url: url.into(),
            model: model.into(),
            message_count: 0,
            tool_count: 0,
            timestamp: timestamp(),
        }
    }
    pub fn with_counts(mut self, messages: usize, tools: usize) -> Self {
        self.message_count = messages;
        self.tool_count = tools;
        self
    }
}

/// A response was received and translated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseDecoded {
    pub request_id: String,
    pub finish_reason: String,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
    pub function_call_count: usize,
    pub latency_ms: u64,
    pub timestamp: f64,
}

impl ResponseDecoded {
    pub fn new(request_id: impl Into<String>, finish_reason: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            finish_reason: finish_reason.into(),
            prompt_tokens: 0,
            completion_tokens: 0,
            total_tokens: 0,
            function_call_count: 0,
            latency_ms: 0,
            timestamp: timestamp(),
        }
    }
    pub fn with_usage(mut self, prompt: u32, completion: u32, total: u32) -> Self {
        self.prompt_tokens = prompt;
        self.completion_tokens = completion;
        self.total_tokens = total;
        self
    }
    pub fn with_function_calls(mut self, n: usize) -> Self {
        self.function_call_count = n;
        self
    }
    pub fn with_latency(mut self, ms: u64) -> Self {
        self.latency_ms = ms;
        self
    }
}

/// The call failed in transport or while decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestFailed {
    pub request_id: String,
    pub status: Option<u16>,
    pub error: String,
    pub latency_ms: u64,
    pub timestamp: f64,
}

impl RequestFailed {
    pub fn new(request_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            status: None,
            error: error.into(),
            latency_ms: 0,
            timestamp: timestamp(),
        }
    }
    pub fn with_status(mut self, status: Option<u16>) -> Self {
        self.status = status;
        self
    }
    pub fn with_latency(mut self, ms: u64) -> Self {
        self.latency_ms = ms;
        self
    }
}

/// Typed adapter events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AdapterEvent {
    RequestDispatched(RequestDispatched),
    ResponseDecoded(ResponseDecoded),
    RequestFailed(RequestFailed),
}

impl AdapterEvent {
    pub fn request_id(&self) -> &str {
        match self {
            AdapterEvent::RequestDispatched(e) => &e.request_id,
            AdapterEvent::ResponseDecoded(e) => &e.request_id,
            AdapterEvent::RequestFailed(e) => &e.request_id,
        }
    }
}

/// Destination for adapter events.
///
/// Errors returned by a sink are ignored by the adapter.
#[async_trait]
pub trait EventSink: Send + Sync {
    async fn report(&self, event: AdapterEvent) -> Result<()>;
    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

/// No-op sink (always available).
pub struct NoopEventSink;

#[async_trait]
impl EventSink for NoopEventSink {
    async fn report(&self, _: AdapterEvent) -> Result<()> {
        Ok(())
    }
}

/// Returns a no-op event sink.
pub fn noop_sink() -> Arc<dyn EventSink> {
    Arc::new(NoopEventSink)
}
