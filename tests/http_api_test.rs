mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

async fn login(app: &Router, username: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::post("/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "username": username, "password": password }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    body["token"].as_str().expect("token in response").to_string()
}

fn authed(token: &str, builder: axum::http::request::Builder) -> axum::http::request::Builder {
    builder.header(header::AUTHORIZATION, format!("Bearer {}", token))
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = common::setup_router().await;

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "up");
}

#[tokio::test]
async fn api_requires_a_valid_bearer_token() {
    let app = common::setup_router().await;

    let response = app
        .clone()
        .oneshot(Request::get("/api/v1/register").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(
            Request::get("/api/v1/register")
                .header(header::AUTHORIZATION, "Bearer bogus")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn bad_credentials_are_rejected_with_a_message() {
    let app = common::setup_router().await;

    let response = app
        .oneshot(
            Request::post("/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "username": "admin", "password": "nope" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("Invalid credentials"));
}

#[tokio::test]
async fn admin_manages_the_register_over_http() {
    let app = common::setup_router().await;
    let token = login(&app, "admin", "admin123").await;

    // Add
    let response = app
        .clone()
        .oneshot(
            authed(&token, Request::post("/api/v1/register"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "name": "Dell Desktop",
                        "quantity": 8,
                        "quality": "Good",
                        "status": "Working"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["system_no"], 2000);

    // List
    let response = app
        .clone()
        .oneshot(
            authed(&token, Request::get("/api/v1/register"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let items = body_json(response).await;
    assert_eq!(items.as_array().unwrap().len(), 1);

    // Update
    let response = app
        .clone()
        .oneshot(
            authed(&token, Request::put("/api/v1/register/2000"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "quantity": 3 }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["quantity"], 3);

    // Delete
    let response = app
        .clone()
        .oneshot(
            authed(&token, Request::delete("/api/v1/register/2000"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Missing afterwards
    let response = app
        .oneshot(
            authed(&token, Request::get("/api/v1/register/2000"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_admin_cannot_mutate_the_register() {
    let app = common::setup_router().await;
    let token = login(&app, "principal", "principal123").await;

    let response = app
        .oneshot(
            authed(&token, Request::post("/api/v1/register"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "name": "Rogue Item",
                        "quantity": 1,
                        "quality": "Good",
                        "status": "Working"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn dead_stock_transition_is_hod_only_over_http() {
    let app = common::setup_router().await;
    let admin_token = login(&app, "admin", "admin123").await;
    let hod_token = login(&app, "hod", "hod123").await;

    let response = app
        .clone()
        .oneshot(
            authed(&admin_token, Request::post("/api/v1/register"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "name": "Dead Switch",
                        "quantity": 1,
                        "quality": "Poor",
                        "status": "Not Working"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Admin may not retire items
    let response = app
        .clone()
        .oneshot(
            authed(&admin_token, Request::post("/api/v1/dead-stock"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "system_no": 2000, "reason": "Fried" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // HOD may
    let response = app
        .clone()
        .oneshot(
            authed(&hod_token, Request::post("/api/v1/dead-stock"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "system_no": 2000, "reason": "Fried" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let entry = body_json(response).await;
    assert_eq!(entry["accepted_by"], "hod");
}

#[tokio::test]
async fn csv_export_is_served_as_csv() {
    let app = common::setup_router().await;
    let token = login(&app, "admin", "admin123").await;

    let response = app
        .oneshot(
            authed(&token, Request::get("/api/v1/transfer/export"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("text/csv")
    );
}
