use httpmock::Method::POST;
use httpmock::MockServer;
use landing_core::{
    error::{ErrorKind, GenerationError},
    model::{GeminiModel, Model},
    provider::{GenerateParameters, GenerationProvider},
    template::Prompt,
};
use landing_gemini::{GeminiAdapter, GeminiAdapterBuilder};
use serde_json::json;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

const PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

fn adapter(server: &MockServer) -> GeminiAdapter {
    GeminiAdapterBuilder::new()
        .with_api_key("test-key")
        .with_base_url(server.url("/v1beta"))
        .with_timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

fn params(text: &str) -> GenerateParameters {
    GenerateParameters::new(Prompt::from(text), GeminiModel::Gemini2_0Flash.into())
}

#[tokio::test]
async fn sends_documented_request_and_returns_text_verbatim() {
    let server = MockServer::start_async().await;
    let markup = "<!DOCTYPE html><html><body>hi</body></html>";
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(PATH)
            .query_param("key", "test-key")
            .header("content-type", "application/json")
            .json_body(json!({ "contents": [ { "parts": [ { "text": "build me a page" } ] } ] }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "candidates": [ { "content": { "parts": [ { "text": markup } ], "role": "model" } } ]
            }));
    });

    let out = adapter(&server)
        .generate(params("build me a page"), CancellationToken::new())
        .await
        .unwrap();

    mock.assert();
    assert_eq!(out, markup);
}

#[tokio::test]
async fn non_success_status_is_http_failure() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST).path(PATH);
        then.status(500).body("internal");
    });

    let err = adapter(&server)
        .generate(params("x"), CancellationToken::new())
        .await
        .unwrap_err();

    mock.assert_hits(1);
    match err {
        GenerationError::HttpFailure { status, details } => {
            assert_eq!(status, 500);
            assert_eq!(details, "internal");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path(PATH);
        then.status(200).body("<html>not json</html>");
    });

    let err = adapter(&server)
        .generate(params("x"), CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn empty_candidates_is_unexpected_shape() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path(PATH);
        then.status(200).body(r#"{"candidates":[]}"#);
    });

    let err = adapter(&server)
        .generate(params("x"), CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedShape);
    assert!(err.is_soft());
}

#[tokio::test]
async fn wrongly_typed_json_is_unexpected_shape() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path(PATH);
        then.status(200).body(r#"{"candidates":"nope"}"#);
    });

    let err = adapter(&server)
        .generate(params("x"), CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedShape);
}

#[tokio::test]
async fn refused_connection_is_transport_failure_without_key_leak() {
    let adapter = GeminiAdapterBuilder::new()
        .with_api_key("secret-key")
        .with_base_url("http://127.0.0.1:1/v1beta")
        .build()
        .unwrap();
    let err = adapter
        .generate(params("x"), CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TransportFailure);
    assert!(!err.to_string().contains("secret-key"));
}

#[tokio::test]
async fn cancelled_token_skips_the_network() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST).path(PATH);
        then.status(200).body(r#"{"candidates":[]}"#);
    });

    let cancel = CancellationToken::new();
    cancel.cancel();
    let err = adapter(&server).generate(params("x"), cancel).await.unwrap_err();

    assert!(matches!(err, GenerationError::Cancelled));
    mock.assert_hits(0);
}

#[tokio::test]
async fn unsupported_custom_model_is_rejected_before_sending() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST);
        then.status(200);
    });

    let params = GenerateParameters::new(Prompt::from("x"), Model::Custom("a/b".into()));
    let err = adapter(&server)
        .generate(params, CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ModelNotSupported);
    mock.assert_hits(0);
}

#[tokio::test]
async fn slow_endpoint_times_out_as_transport_failure() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path(PATH);
        then.status(200)
            .delay(Duration::from_secs(3))
            .body(r#"{"candidates":[]}"#);
    });

    let adapter = GeminiAdapterBuilder::new()
        .with_api_key("test-key")
        .with_base_url(server.url("/v1beta"))
        .with_timeout(Duration::from_millis(300))
        .build()
        .unwrap();
    let err = adapter
        .generate(params("x"), CancellationToken::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TransportFailure);
    assert!(err.to_string().contains("timed out"), "{err}");
}
