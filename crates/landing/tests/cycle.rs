//! End-to-end generation cycles against a mocked Gemini endpoint.

use std::sync::Arc;

use httpmock::Method::POST;
use httpmock::MockServer;
use landing::{
    LoadingIndicator, Presenter, PresenterState,
    gemini::GeminiAdapterBuilder,
    notice::NoticeLevel,
    session::{PreviewView, SessionState},
};
use tokio_util::sync::CancellationToken;

const PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";
const MARKUP: &str = "<!DOCTYPE html><html><head><title>Bakery</title></head><body>Bread</body></html>";

fn presenter(server: &MockServer) -> Presenter {
    let adapter = GeminiAdapterBuilder::new()
        .with_api_key("test-key")
        .with_base_url(server.url("/v1beta"))
        .build()
        .unwrap();
    Presenter::new(Arc::new(adapter))
}

async fn run(presenter: &Presenter, description: &str) -> (landing::CycleOutcome, LoadingIndicator) {
    let loading = LoadingIndicator::new();
    let outcome = presenter
        .run_cycle(
            SessionState::new(),
            description,
            &loading,
            CancellationToken::new(),
        )
        .await;
    (outcome, loading)
}

#[tokio::test]
async fn successful_generation_embeds_exact_markup() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(PATH)
            .query_param("key", "test-key")
            .body_contains("A bakery in Lyon")
            .body_contains("https://cdn.tailwindcss.com");
        then.status(200).json_body(serde_json::json!({
            "candidates": [ { "content": { "parts": [ { "text": MARKUP } ] } } ]
        }));
    });

    let (outcome, loading) = run(&presenter(&server), "A bakery in Lyon").await;

    mock.assert();
    assert_eq!(outcome.state, PresenterState::Succeeded);
    assert_eq!(outcome.session.generated_markup(), MARKUP);
    assert!(outcome.session.show_preview());
    assert_eq!(outcome.session.preview(), PreviewView::Embedded(MARKUP));
    assert!(!loading.is_visible());
}

#[tokio::test]
async fn server_error_leaves_empty_no_preview_state() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path(PATH);
        then.status(500).body("internal error");
    });
    let (http_outcome, loading) = run(&presenter(&server), "A bakery").await;

    assert_eq!(http_outcome.state, PresenterState::Failed);
    assert_eq!(http_outcome.session.generated_markup(), "");
    assert!(!http_outcome.session.show_preview());
    assert_eq!(http_outcome.notice.level, NoticeLevel::Error);
    assert!(!loading.is_visible());

    let malformed = MockServer::start_async().await;
    malformed.mock(|when, then| {
        when.method(POST).path(PATH);
        then.status(200).body("definitely not json");
    });
    let (json_outcome, _) = run(&presenter(&malformed), "A bakery").await;

    assert_eq!(json_outcome.notice.level, NoticeLevel::Error);
    assert_ne!(http_outcome.notice.message, json_outcome.notice.message);
}

#[tokio::test]
async fn empty_candidates_is_informational_no_content() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path(PATH);
        then.status(200).body(r#"{"candidates":[]}"#);
    });

    let (outcome, loading) = run(&presenter(&server), "A bakery").await;

    assert_eq!(outcome.session.generated_markup(), "");
    assert_eq!(outcome.session.preview(), PreviewView::NoPreview);
    assert_eq!(outcome.notice.level, NoticeLevel::Info);
    assert!(!outcome.notice.is_error());
    assert!(!loading.is_visible());
}

#[tokio::test]
async fn empty_text_part_shows_no_preview_hint_instead_of_success() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path(PATH);
        then.status(200)
            .body(r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#);
    });

    let (outcome, loading) = run(&presenter(&server), "A bakery").await;

    assert_eq!(outcome.state, PresenterState::Failed);
    assert_eq!(outcome.notice.level, NoticeLevel::Info);
    assert_eq!(outcome.session.preview(), PreviewView::NoPreview);
    assert!(!loading.is_visible());
}

#[tokio::test]
async fn empty_description_issues_no_request() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST);
        then.status(200);
    });

    let (outcome, loading) = run(&presenter(&server), "").await;

    mock.assert_hits(0);
    assert_eq!(outcome.state, PresenterState::AwaitingInput);
    assert!(!outcome.session.show_preview());
    assert!(!loading.is_visible());
}

#[tokio::test]
async fn missing_key_issues_no_request() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST);
        then.status(200);
    });

    let built = GeminiAdapterBuilder::new()
        .with_api_key("")
        .with_base_url(server.url("/v1beta"))
        .build();
    assert!(built.is_err());

    let (outcome, loading) = run(&Presenter::without_credential(), "A bakery").await;

    mock.assert_hits(0);
    assert_eq!(outcome.state, PresenterState::Failed);
    assert!(outcome.notice.message.contains("GEMINI_API_KEY"));
    assert!(!loading.is_visible());
}
