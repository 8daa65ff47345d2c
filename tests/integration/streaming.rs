//! The stream variant is a single-item wrapper around the full call.

use crate::integration::mock_server::{text_completion, tool_call_completion, MockServerFixture};
use futures::StreamExt;
use genai_openai_adapter::{ContentGenerator, Error, GenerateContentRequest};

#[tokio::test]
async fn stream_yields_exactly_the_full_response() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_completion(text_completion("streamed"), 2).await;
    let generator = fixture.generator();
    let request = GenerateContentRequest::new("hi");

    let direct = generator.generate_content(&request).await.unwrap();
    let mut stream = generator.generate_content_stream(&request).await.unwrap();

    let items: Vec<_> = stream.by_ref().collect().await;
    assert_eq!(items.len(), 1);
    let streamed = items.into_iter().next().unwrap().unwrap();
    assert_eq!(streamed, direct);
    assert!(stream.next().await.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn stream_carries_function_calls() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_completion(tool_call_completion("list_dir", r#"{"path":"."}"#), 1)
        .await;

    let stream = fixture
        .generator()
        .generate_content_stream(&GenerateContentRequest::new("ls"))
        .await
        .unwrap();
    let items: Vec<_> = stream.collect().await;
    assert_eq!(items.len(), 1);
    let resp = items[0].as_ref().unwrap();
    assert_eq!(resp.function_calls[0].name, "list_dir");
}

#[tokio::test]
async fn stream_failure_surfaces_before_iteration() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_error_response(502, "bad gateway").await;

    let result = fixture
        .generator()
        .generate_content_stream(&GenerateContentRequest::new("hi"))
        .await;
    assert!(matches!(result, Err(Error::Transport(_))));
}
