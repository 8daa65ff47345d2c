//! Non-streaming generation through the mock server.

use crate::integration::mock_server::{text_completion, tool_call_completion, MockServerFixture, MODEL};
use genai_openai_adapter::{
    Content, ContentGenerator, CountTokensRequest, EmbedContentRequest, Error,
    FinishReason, FunctionDeclaration, GenerateContentConfig, GenerateContentRequest, Part, Tool,
    ToolCallMode,
};
use mockito::Matcher;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn plain_text_round_trip() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_completion(text_completion("Hi there!"), 1).await;

    let resp = fixture
        .generator()
        .generate_content(&GenerateContentRequest::new("Hello"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(resp.text, "Hi there!");
    assert!(resp.function_calls.is_empty());
    assert_eq!(resp.candidates.len(), 1);
    assert_eq!(resp.candidates[0].content.role.as_deref(), Some("model"));
    assert_eq!(resp.candidates[0].content.parts, vec![Part::text("Hi there!")]);
    assert_eq!(resp.finish_reason(), Some(&FinishReason::Stop));
    assert_eq!(resp.usage_metadata.prompt_token_count, 10);
    assert_eq!(resp.usage_metadata.candidates_token_count, 5);
    assert_eq!(resp.usage_metadata.total_token_count, 15);
    assert_eq!(resp.response_id.as_deref(), Some("chatcmpl-123"));
    assert_eq!(resp.model_version.as_deref(), Some(MODEL));
}

#[tokio::test]
async fn wire_body_carries_defaults_and_history() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_completion_matching(
            json!({
                "model": MODEL,
                "messages": [
                    {"role": "system", "content": "Be brief."},
                    {"role": "user", "content": "ping"},
                    {"role": "assistant", "content": "pong"},
                    {"role": "user", "content": "again"}
                ],
                "max_tokens": 4096,
                "temperature": 0.7,
                "top_p": 1.0,
                "stream": false
            }),
            text_completion("pong"),
        )
        .await;

    let request = GenerateContentRequest::new(vec![
        Content::user("ping"),
        Content::model("pong"),
        Content::user("again"),
    ])
    .with_system_instruction("Be brief.");

    fixture.generator().generate_content(&request).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn tools_and_sampling_are_forwarded() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_completion_matching(
            json!({
                "max_tokens": 256,
                "temperature": 0.1,
                "stop": ["###"],
                "tools": [{
                    "type": "function",
                    "function": {
                        "name": "get_weather",
                        "description": "Execute get_weather",
                        "parameters": {
                            "type": "object",
                            "properties": {"city": {"type": "string"}},
                            "required": ["city"]
                        }
                    }
                }]
            }),
            text_completion("ok"),
        )
        .await;

    let request = GenerateContentRequest::new("Weather in Oslo?").with_config(GenerateContentConfig {
        max_output_tokens: Some(256),
        temperature: Some(0.1),
        stop_sequences: Some(vec!["###".into()]),
        tools: Some(vec![Tool::functions(vec![FunctionDeclaration {
            name: "get_weather".into(),
            description: None,
            parameters: Some(json!({
                "type": "object",
                "properties": {"city": {"type": "string"}},
                "required": ["city"]
            })),
        }])]),
        ..Default::default()
    });

    fixture.generator().generate_content(&request).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn tool_call_becomes_function_call() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_completion(tool_call_completion("get_weather", r#"{"city":"Oslo"}"#), 1)
        .await;

    let resp = fixture
        .generator()
        .generate_content(&GenerateContentRequest::new("Weather?"))
        .await
        .unwrap();

    assert_eq!(resp.function_calls.len(), 1);
    let call = &resp.function_calls[0];
    assert_eq!(call.name, "get_weather");
    assert_eq!(call.args, json!({"city": "Oslo"}));
    assert_eq!(call.id.as_deref(), Some("call_abc"));
    assert_eq!(resp.finish_reason(), Some(&FinishReason::Stop));
    assert_eq!(resp.text, "");
    let parts = &resp.candidates[0].content.parts;
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].function_call.as_ref(), Some(call));
}

#[tokio::test]
async fn all_mode_surfaces_every_tool_call() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_completion(
            json!({
                "choices": [{"message": {"tool_calls": [
                    {"id": "a", "function": {"name": "first", "arguments": "{}"}},
                    {"id": "b", "function": {"name": "second", "arguments": "{\"n\":2}"}}
                ]}}]
            }),
            2,
        )
        .await;

    let request = GenerateContentRequest::new("go");
    let default = fixture.generator().generate_content(&request).await.unwrap();
    assert_eq!(default.function_calls.len(), 1);

    let all = fixture
        .builder()
        .tool_call_mode(ToolCallMode::All)
        .build()
        .unwrap()
        .generate_content(&request)
        .await
        .unwrap();
    let names: Vec<&str> = all.function_calls.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[tokio::test]
async fn bearer_token_is_sent_when_configured() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .with_status(200)
        .with_body(text_completion("authed").to_string())
        .create_async()
        .await;

    let resp = fixture
        .builder()
        .api_key("sk-test")
        .build()
        .unwrap()
        .generate_content(&GenerateContentRequest::new("hi"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(resp.text, "authed");
}

#[tokio::test]
async fn no_authorization_header_without_key() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", Matcher::Missing)
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body(text_completion("open").to_string())
        .create_async()
        .await;

    fixture
        .generator()
        .generate_content(&GenerateContentRequest::new("hi"))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn concurrent_calls_share_one_generator() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_completion(text_completion("same"), 8).await;
    let generator: Arc<dyn ContentGenerator> = Arc::new(fixture.generator());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let generator = Arc::clone(&generator);
            tokio::spawn(async move {
                generator
                    .generate_content(&GenerateContentRequest::new(format!("call {i}")))
                    .await
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().text, "same");
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn count_and_embed_never_touch_the_network() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_completion(text_completion("unused"), 0).await;
    let generator: Arc<dyn ContentGenerator> = Arc::new(fixture.generator());

    let count = generator
        .count_tokens(&CountTokensRequest::new(vec![
            Content::user("abcde"),
            Content::model("fgh"),
        ]))
        .await
        .unwrap();
    assert_eq!(count.total_tokens, 2);

    let err = generator
        .embed_content(&EmbedContentRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedOperation { operation: "embedContent" }));
    assert!(err.to_string().contains("embedContent"));

    mock.assert_async().await;
}

#[tokio::test]
async fn string_parts_reach_the_server() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_completion_matching(
            json!({"messages": [{"role": "user", "content": "hello"}]}),
            text_completion("hi"),
        )
        .await;

    let request: GenerateContentRequest = serde_json::from_value(json!({
        "contents": [{"role": "user", "parts": ["hello"]}]
    }))
    .unwrap();
    let resp = fixture.generator().generate_content(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(resp.text, "hi");
}
