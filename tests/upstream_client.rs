//! Tests for the reqwest creator adapter against a local HTTP server.

use axum::body::Bytes;
use axum::http::{header, StatusCode};
use axum::routing::post;
use axum::Router;

use pollcast::adapters::upstream::HttpPresentationCreator;
use pollcast::ports::{CreatorError, PresentationCreator};

/// Serves `app` on an ephemeral local port and returns its base URL.
async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn forwards_the_body_verbatim() {
    let app = Router::new().route(
        "/presentations",
        post(|body: Bytes| async move {
            // Echo the request body back so the test can check what arrived.
            (
                StatusCode::CREATED,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
        }),
    );
    let base_url = spawn(app).await;

    let creator = HttpPresentationCreator::new(base_url);
    let request_body = br#"{"polls": [{"question": "Q?", "options": []}]}"#;
    let response = creator.create_presentation(request_body).await.unwrap();

    assert_eq!(response.status, 201);
    assert!(response.is_created());
    assert_eq!(response.body, request_body);
}

#[tokio::test]
async fn non_created_statuses_come_back_with_their_body() {
    let app = Router::new().route(
        "/presentations",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                r#"{"message": "at least one poll is required"}"#,
            )
        }),
    );
    let base_url = spawn(app).await;

    let creator = HttpPresentationCreator::new(base_url);
    let response = creator.create_presentation(b"{}").await.unwrap();

    assert_eq!(response.status, 400);
    assert!(!response.is_created());
    assert_eq!(
        response.body,
        br#"{"message": "at least one poll is required"}"#
    );
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    // Bind and immediately drop a listener so the port is very likely free.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let creator = HttpPresentationCreator::new(format!("http://{}", addr));
    let err = creator.create_presentation(b"{}").await.unwrap_err();

    assert!(matches!(err, CreatorError::Transport(_)));
}
