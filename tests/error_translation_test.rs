//! Error envelopes produced by the assembled application

mod common;

use anyhow::Result;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use common::TestApp;
use coreledger_core::error::codes;
use coreledger_rest_api::AppConfig;
use coreledger_storage::seaorm::{migrations::Migrator, MigratorTrait, SeaOrmConnection};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn drop_todos_table(app: &TestApp) {
    let connection: &SeaOrmConnection = app.db.get_connection();
    Migrator::down(connection, None).await.unwrap();
}

#[tokio::test]
async fn test_missing_todo() -> Result<()> {
    let app = TestApp::new(AppConfig::default()).await;

    let (status, body) = app.get("/api/todos/999").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errorCode"], codes::NOT_FOUND);
    assert_eq!(body["message"], "ToDo with id 999 not found");
    assert!(body["correlationId"].is_string());
    assert!(body["errors"].is_null());
    assert!(body["traceId"].is_null());
    Ok(())
}

#[tokio::test]
async fn test_storage_failure_is_redacted_in_production() -> Result<()> {
    let app = TestApp::new(AppConfig::default()).await;
    drop_todos_table(&app).await;

    let (status, body) = app.get("/api/todos").await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["errorCode"], codes::INTERNAL);
    assert_eq!(
        body["message"],
        "An error occurred while processing your request. Please contact support with the correlation ID."
    );
    assert!(body["traceId"].is_null());
    Ok(())
}

#[tokio::test]
async fn test_storage_failure_is_detailed_in_development() -> Result<()> {
    let app = TestApp::new(AppConfig::development()).await;
    drop_todos_table(&app).await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/todos")
        .header("X-Correlation-ID", "abc-123")
        .body(Body::empty())?;
    let response = app.router.clone().oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let correlation = response.headers()["X-Correlation-ID"].to_str()?.to_string();
    let trace = response.headers()["X-Trace-ID"].to_str()?.to_string();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(correlation, "abc-123");
    assert_eq!(body["correlationId"], "abc-123");
    assert_eq!(body["traceId"], trace.as_str());
    assert!(body["message"].as_str().unwrap().contains("todos"));
    Ok(())
}

#[tokio::test]
async fn test_validation_envelope_lists_fields() -> Result<()> {
    let app = TestApp::new(AppConfig::default()).await;

    let (status, body) = app
        .send(Method::POST, "/api/accounttypes", Some(json!({"description": ""})))
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorCode"], codes::VALIDATION);
    assert_eq!(body["errors"]["description"], json!(["Description is required"]));
    Ok(())
}

#[tokio::test]
async fn test_successful_response_is_untouched() -> Result<()> {
    let app = TestApp::new(AppConfig::default()).await;

    let (status, body) = app.get("/api/accounttypes").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
    Ok(())
}
