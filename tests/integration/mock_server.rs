//! Mock HTTP server setup for integration tests

use genai_openai_adapter::{OpenAiContentGenerator, OpenAiContentGeneratorBuilder};
use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::{json, Value};

pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";
pub const MODEL: &str = "local-llama";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub endpoint: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let endpoint = format!("{}/v1", server.url());
        Self { server, endpoint }
    }

    /// Builder pointed at the mock server, without credentials.
    pub fn builder(&self) -> OpenAiContentGeneratorBuilder {
        OpenAiContentGenerator::builder(&self.endpoint, MODEL)
    }

    pub fn generator(&self) -> OpenAiContentGenerator {
        self.builder().build().expect("generator should build")
    }

    /// Successful chat completion answering with `body`, expected exactly `hits` times.
    pub async fn mock_completion(&mut self, body: Value, hits: usize) -> Mock {
        self.server
            .mock("POST", COMPLETIONS_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(hits)
            .create_async()
            .await
    }

    /// Like [`mock_completion`](Self::mock_completion) but only matches when the
    /// request body contains `expected`.
    pub async fn mock_completion_matching(&mut self, expected: Value, body: Value) -> Mock {
        self.server
            .mock("POST", COMPLETIONS_PATH)
            .match_body(Matcher::PartialJson(expected))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await
    }

    /// Create a mock for an error response
    pub async fn mock_error_response(&mut self, status: usize, error_body: &str) -> Mock {
        self.server
            .mock("POST", COMPLETIONS_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(error_body)
            .create_async()
            .await
    }

    /// 200 with an arbitrary raw body.
    pub async fn mock_raw(&mut self, body: &str) -> Mock {
        self.server
            .mock("POST", COMPLETIONS_PATH)
            .with_status(200)
            .with_body(body)
            .create_async()
            .await
    }
}

/// Chat completion with a plain assistant message.
pub fn text_completion(text: &str) -> Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "model": MODEL,
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    })
}

/// Chat completion whose message is a single tool call.
pub fn tool_call_completion(name: &str, arguments: &str) -> Value {
    json!({
        "id": "chatcmpl-456",
        "model": MODEL,
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": null,
                "tool_calls": [{
                    "id": "call_abc",
                    "type": "function",
                    "function": {"name": name, "arguments": arguments}
                }]
            },
            "finish_reason": "tool_calls"
        }],
        "usage": {"prompt_tokens": 20, "completion_tokens": 8, "total_tokens": 28}
    })
}
