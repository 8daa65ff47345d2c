//! Event sink wiring.

use crate::integration::mock_server::{text_completion, MockServerFixture, MODEL};
use genai_openai_adapter::telemetry::{AdapterEvent, InMemoryEventSink};
use genai_openai_adapter::{ContentGenerator, GenerateContentRequest};
use std::sync::Arc;

#[tokio::test]
async fn success_reports_dispatch_then_decode() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_completion(text_completion("hello"), 1).await;
    let sink = Arc::new(InMemoryEventSink::new(16));
    let generator = fixture.builder().event_sink(sink.clone()).build().unwrap();

    generator
        .generate_content(&GenerateContentRequest::new("hi"))
        .await
        .unwrap();

    let events = sink.get_events();
    assert_eq!(events.len(), 2);
    match (&events[0], &events[1]) {
        (AdapterEvent::RequestDispatched(sent), AdapterEvent::ResponseDecoded(done)) => {
            assert_eq!(sent.request_id, done.request_id);
            assert_eq!(sent.model, MODEL);
            assert!(sent.url.ends_with("/v1/chat/completions"));
            assert_eq!(sent.message_count, 1);
            assert_eq!(sent.tool_count, 0);
            assert_eq!(done.finish_reason, "STOP");
            assert_eq!(done.total_tokens, 15);
            assert_eq!(done.function_call_count, 0);
        }
        other => panic!("unexpected event order: {other:?}"),
    }
}

#[tokio::test]
async fn failure_reports_status() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_error_response(500, "boom").await;
    let sink = Arc::new(InMemoryEventSink::new(16));
    let generator = fixture.builder().event_sink(sink.clone()).build().unwrap();

    generator
        .generate_content(&GenerateContentRequest::new("hi"))
        .await
        .unwrap_err();

    let events = sink.get_events();
    assert_eq!(events.len(), 2);
    match &events[1] {
        AdapterEvent::RequestFailed(failed) => {
            assert_eq!(failed.status, Some(500));
            assert_eq!(failed.request_id, events[0].request_id());
        }
        other => panic!("expected failure event, got {other:?}"),
    }
}

#[tokio::test]
async fn each_call_gets_its_own_request_id() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_completion(text_completion("x"), 2).await;
    let sink = Arc::new(InMemoryEventSink::new(16));
    let generator = fixture.builder().event_sink(sink.clone()).build().unwrap();

    let request = GenerateContentRequest::new("hi");
    generator.generate_content(&request).await.unwrap();
    generator.generate_content(&request).await.unwrap();

    let events = sink.get_events();
    assert_eq!(events.len(), 4);
    assert_ne!(events[0].request_id(), events[2].request_id());
    assert_eq!(sink.get_events_by_request(events[0].request_id()).len(), 2);
}
