mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use mailing_backend::{models::entity::DeleteMode, routes, AppState};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

async fn send(app: &Router, method: &str, uri: &str, body: Option<JsonValue>) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let json = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null)
    };
    (status, json)
}

#[tokio::test]
async fn health_is_ok_without_database() {
    let app = routes::router(common::offline_state());
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn openapi_document_lists_statistics_routes() {
    let app = routes::router(common::offline_state());
    let (status, body) = send(&app, "GET", "/api/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/mailings/statistics"].is_object());
    assert!(body["paths"]["/api/mailings/{id}/statistics"].is_object());
}

#[tokio::test]
async fn blank_client_fields_are_rejected_before_storage() {
    let app = routes::router(common::offline_state());
    let (status, body) = send(
        &app,
        "POST",
        "/api/clients",
        Some(json!({
            "phone_number": "",
            "mobile_operator_code": "900",
            "tag": "vip",
            "timezone": "Europe/Moscow"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn mailing_replace_requires_every_field() {
    let app = routes::router(common::offline_state());
    let (status, body) = send(
        &app,
        "PUT",
        "/api/mailings/1",
        Some(json!({
            "message_text": "only text and times",
            "start_time": "2024-01-01T10:00:00",
            "end_time": "2024-01-02T10:00:00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let message = body["error"].as_str().expect("error envelope");
    assert!(message.contains("filter_criteria"), "{}", message);
}

#[tokio::test]
async fn malformed_body_uses_error_envelope() {
    let app = routes::router(common::offline_state());
    let req = Request::builder()
        .method("POST")
        .uri("/api/clients")
        .header("content-type", "application/json")
        .body(Body::from("{\"phone_number\": "))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).expect("json body");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn bad_path_and_query_use_error_envelope() {
    let app = routes::router(common::offline_state());

    let (status, body) = send(&app, "GET", "/api/clients/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, body) = send(&app, "GET", "/api/mailings/1/statistics?strict=maybe", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn client_lifecycle_over_http() {
    let Some(pool) = common::test_pool().await else {
        return;
    };
    let app = routes::router(AppState::with_delete_modes(
        pool,
        DeleteMode::Orphan,
        DeleteMode::Orphan,
    ));

    let (status, created) = send(
        &app,
        "POST",
        "/api/clients",
        Some(json!({
            "phone_number": "79001234567",
            "mobile_operator_code": "900",
            "tag": "vip",
            "timezone": "Europe/Moscow"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().expect("client id");

    let (status, updated) = send(
        &app,
        "PATCH",
        &format!("/api/clients/{}", id),
        Some(json!({ "tag": "regular" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["tag"], "regular");
    assert_eq!(updated["timezone"], "Europe/Moscow");
    assert_eq!(updated["phone_number"], "79001234567");

    let (status, _) = send(&app, "DELETE", &format!("/api/clients/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "DELETE", &format!("/api/clients/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/clients/{}", id),
        Some(json!({ "tag": "ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", &format!("/api/clients/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn mailing_lifecycle_and_statistics_over_http() {
    let Some(pool) = common::test_pool().await else {
        return;
    };
    let app = routes::router(AppState::with_delete_modes(
        pool.clone(),
        DeleteMode::Orphan,
        DeleteMode::Orphan,
    ));

    let (status, created) = send(
        &app,
        "POST",
        "/api/mailings",
        Some(json!({
            "message_text": "Spring sale",
            "start_time": "2024-01-01T10:00:00+03:00",
            "end_time": "2024-01-05T10:00:00+03:00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["start_time"], "2024-01-01T10:00:00");
    assert_eq!(created["end_time"], "2024-01-05T10:00:00");
    assert_eq!(created["filter_criteria"], json!({}));
    let id = created["id"].as_i64().expect("mailing id");

    let client = common::seed_client(&pool).await;
    common::seed_messages(&pool, id, client.id, &["sent", "delivered", "delivered"]).await;

    let (status, stats) = send(&app, "GET", &format!("/api/mailings/{}/statistics", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        stats,
        json!({ "mailing_id": id, "sent": 1, "delivered": 2, "failed": 0 })
    );

    let (status, all) = send(&app, "GET", "/api/mailings/statistics", None).await;
    assert_eq!(status, StatusCode::OK);
    let entry = all
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["mailing_id"] == id)
        .cloned()
        .expect("entry for mailing");
    assert_eq!(entry, stats);

    let (status, messages) = send(&app, "GET", &format!("/api/mailings/{}/messages", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(messages.as_array().unwrap().len(), 3);

    let (status, replaced) = send(
        &app,
        "PUT",
        &format!("/api/mailings/{}", id),
        Some(json!({
            "message_text": "Summer sale",
            "start_time": "2024-06-01T09:00:00+05:00",
            "end_time": "2024-06-02T09:00:00",
            "filter_criteria": { "operator": "900" }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced["message_text"], "Summer sale");
    assert_eq!(replaced["start_time"], "2024-06-01T09:00:00");
    assert_eq!(replaced["filter_criteria"], json!({ "operator": "900" }));

    let (status, _) = send(&app, "DELETE", &format!("/api/mailings/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, kept) = send(&app, "GET", &format!("/api/mailings/{}/statistics", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(kept, stats);

    let (status, messages) = send(&app, "GET", &format!("/api/mailings/{}/messages", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(messages
        .as_array()
        .unwrap()
        .iter()
        .all(|m| m["mailing_id"] == id));

    let (status, _) = send(
        &app,
        "GET",
        &format!("/api/mailings/{}/statistics?strict=true", id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
