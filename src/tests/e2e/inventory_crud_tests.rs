use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use crate::shared::infrastructure::item_store::in_memory::InMemoryItemStore;
use crate::shell::config::AppConfig;
use crate::shell::http::app;
use crate::shell::state::AppState;

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&'static str>,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header("content-type", "application/json")
            .body(Body::from(json)),
        None => request.body(Body::empty()),
    }
    .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn runs_the_item_lifecycle_over_http() {
    let app = app(
        AppState::new(Arc::new(InMemoryItemStore::new())),
        &AppConfig::default(),
    );

    let (status, created) = send(
        &app,
        "POST",
        "/create-item/7",
        Some(r#"{"name":"Bread","price":2.25,"description":"Sourdough"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, fetched) = send(&app, "GET", "/get-item/7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, _) = send(
        &app,
        "POST",
        "/create-item/7",
        Some(r#"{"name":"Cake","price":9.0}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, updated) = send(&app, "PUT", "/update-item/7", Some(r#"{"price":2.5}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        serde_json::json!({"name":"Bread","price":2.5,"description":"Sourdough"})
    );

    let (status, body) = send(&app, "GET", "/get-item/7?name=Cake", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({"detail":"Item name not found."}));

    let (status, body) = send(&app, "DELETE", "/delete-item/7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"Success":"Item deleted!"}));

    let (status, body) = send(&app, "GET", "/get-item/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, serde_json::json!({"detail":"Item ID not found."}));
}

#[tokio::test]
async fn serves_graphql_next_to_the_http_routes() {
    let app = app(
        AppState::new(Arc::new(InMemoryItemStore::new())),
        &AppConfig::default(),
    );

    let (status, _) = send(
        &app,
        "POST",
        "/create-item/1",
        Some(r#"{"name":"Tea","price":3.0}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        "POST",
        "/gql",
        Some(r#"{"query":"{ item(id: 1) { name price } }"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({"data": {"item": {"name": "Tea", "price": 3.0}}})
    );
}
