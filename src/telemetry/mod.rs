//! 可观测性模块：由调用方注入的事件接收器，替代进程级调试日志。
//!
//! Observability sinks.
//!
//! The adapter never writes diagnostics to a fixed file or global; it reports
//! structured [`AdapterEvent`]s to whichever [`EventSink`] the caller injects.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`AdapterEvent`] | Typed event enum |
//! | [`EventSink`] | Trait for event destinations |
//! | [`NoopEventSink`] | Default sink (drops everything) |
//! | [`InMemoryEventSink`] | Bounded in-memory sink, handy in tests |
//! | [`TracingEventSink`] | Forwards events to `tracing` |
//! | [`CompositeEventSink`] | Fans out to several sinks |

mod events;

pub use events::{
    noop_sink, AdapterEvent, EventSink, NoopEventSink, RequestDispatched, RequestFailed,
    ResponseDecoded,
};

use crate::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory sink for testing.
pub struct InMemoryEventSink {
    events: Mutex<VecDeque<AdapterEvent>>,
    max_events: usize,
}
impl InMemoryEventSink {
    pub fn new(max: usize) -> Self {
        Self {
            events: Mutex::new(VecDeque::new()),
            max_events: max.max(1),
        }
    }
    fn lock(&self) -> MutexGuard<'_, VecDeque<AdapterEvent>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
    pub fn get_events(&self) -> Vec<AdapterEvent> {
        self.lock().iter().cloned().collect()
    }
    pub fn get_events_by_request(&self, req_id: &str) -> Vec<AdapterEvent> {
        self.lock()
            .iter()
            .filter(|e| e.request_id() == req_id)
            .cloned()
            .collect()
    }
    pub fn clear(&self) {
        self.lock().clear();
    }
    pub fn len(&self) -> usize {
        self.lock().len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
#[async_trait]
impl EventSink for InMemoryEventSink {
    async fn report(&self, event: AdapterEvent) -> Result<()> {
        let mut events = self.lock();
        events.push_back(event);
        if events.len() > self.max_events {
            events.pop_front();
        }
        Ok(())
    }
}

/// Sink that turns events into `tracing` records under the `genai_openai_adapter::events` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

#[async_trait]
impl EventSink for TracingEventSink {
    async fn report(&self, event: AdapterEvent) -> Result<()> {
        match event {
            AdapterEvent::RequestDispatched(e) => tracing::info!(
                target: "genai_openai_adapter::events",
                request_id = %e.request_id,
                url = %e.url,
                model = %e.model,
                messages = e.message_count,
                tools = e.tool_count,
                "request dispatched"
            ),
            AdapterEvent::ResponseDecoded(e) => tracing::info!(
                target: "genai_openai_adapter::events",
                request_id = %e.request_id,
                finish_reason = %e.finish_reason,
                prompt_tokens = e.prompt_tokens,
                completion_tokens = e.completion_tokens,
                function_calls = e.function_call_count,
                latency_ms = e.latency_ms,
                "response decoded"
            ),
            AdapterEvent::RequestFailed(e) => tracing::warn!(
                target: "genai_openai_adapter::events",
                request_id = %e.request_id,
                status = ?e.status,
                latency_ms = e.latency_ms,
                error = %e.error,
                "request failed"
            ),
        }
        Ok(())
    }
}

/// Composite sink for multiple destinations.
pub struct CompositeEventSink {
    sinks: Vec<Arc<dyn EventSink>>,
}
impl CompositeEventSink {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }
    pub fn add_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sinks.push(sink);
        self
    }
}
impl Default for CompositeEventSink {
    fn default() -> Self {
        Self::new()
    }
}
#[async_trait]
impl EventSink for CompositeEventSink {
    async fn report(&self, event: AdapterEvent) -> Result<()> {
        for s in &self.sinks {
            let _ = s.report(event.clone()).await;
        }
        Ok(())
    }
    async fn close(&self) -> Result<()> {
        for s in &self.sinks {
            let _ = s.close().await;
        }
        Ok(())
    }
}
