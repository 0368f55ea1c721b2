use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use mockall::predicate;
use mongolog::{
    app::App, layers::log::LogRepoLayer, models::LogEntry,
    repositories::log::MockLogRepository,
};
use tower::ServiceExt;

fn post_log(message_body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/log")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(message_body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn success() {
    let mut mock_repo = MockLogRepository::new();
    mock_repo
        .expect_append()
        .with(predicate::function(|entry: &LogEntry| {
            entry.message == "disk full"
        }))
        .times(1)
        .returning(|_entry| Box::pin(async { Ok(()) }));

    let response = App::new()
        .router()
        .layer(LogRepoLayer(Arc::new(mock_repo)))
        .oneshot(post_log("message=disk+full"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"Log received and saved to MongoDB\n");
}

#[tokio::test]
async fn empty_message_is_rejected_without_insert() {
    let mut mock_repo = MockLogRepository::new();
    mock_repo.expect_append().times(0);

    let response = App::new()
        .router()
        .layer(LogRepoLayer(Arc::new(mock_repo)))
        .oneshot(post_log("message="))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_message_is_rejected_without_insert() {
    let mut mock_repo = MockLogRepository::new();
    mock_repo.expect_append().times(0);

    let response = App::new()
        .router()
        .layer(LogRepoLayer(Arc::new(mock_repo)))
        .oneshot(post_log(""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_form_content_type_is_rejected_without_insert() {
    let mut mock_repo = MockLogRepository::new();
    mock_repo.expect_append().times(0);

    let response = App::new()
        .router()
        .layer(LogRepoLayer(Arc::new(mock_repo)))
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/log")
                .body(Body::from("message=hi"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_method_not_allowed() {
    let mock_repo = MockLogRepository::new();

    let response = App::new()
        .router()
        .layer(LogRepoLayer(Arc::new(mock_repo)))
        .oneshot(
            Request::builder()
                .uri("/log")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn storage_error() {
    let mut mock_repo = MockLogRepository::new();
    mock_repo
        .expect_append()
        .times(1)
        .returning(|_entry| Box::pin(async { Err(anyhow!("server selection timed out")) }));

    let response = App::new()
        .router()
        .layer(LogRepoLayer(Arc::new(mock_repo)))
        .oneshot(post_log("message=disk+full"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn concurrent_appends_both_land() {
    let mut mock_repo = MockLogRepository::new();
    mock_repo
        .expect_append()
        .times(2)
        .returning(|_entry| Box::pin(async { Ok(()) }));

    let app = App::new()
        .router()
        .layer(LogRepoLayer(Arc::new(mock_repo)));

    let (first, second) = tokio::join!(
        app.clone().oneshot(post_log("message=first")),
        app.clone().oneshot(post_log("message=second")),
    );

    assert_eq!(first.unwrap().status(), StatusCode::OK);
    assert_eq!(second.unwrap().status(), StatusCode::OK);
}
