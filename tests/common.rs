//! Shared harness: the assembled router over an in-memory database

#![allow(dead_code)]

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use coreledger_rest_api::{create_rest_app, AppConfig, AppContext};
use coreledger_storage::testing::{create_test_db, seed_accounts};
use coreledger_storage::{DatabaseConnection, RepositoryFactory};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
}

impl TestApp {
    pub async fn new(config: AppConfig) -> Self {
        let db = create_test_db().await;
        let context = AppContext::new(Arc::new(RepositoryFactory::new(db.clone())), Arc::new(db.clone()));
        Self {
            router: create_rest_app(context, config),
            db,
        }
    }

    /// Production-configured app seeded with `count` accounts
    pub async fn seeded(count: usize) -> Self {
        let app = Self::new(AppConfig::default()).await;
        seed_accounts(&app.db, count).await;
        app
    }

    pub async fn get(&self, uri: &str) -> Result<(StatusCode, Value)> {
        self.send(Method::GET, uri, None).await
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> Result<(StatusCode, Value)> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok((status, value))
    }
}

pub fn codes(page: &Value) -> Vec<i64> {
    page["items"]
        .as_array()
        .map(|items| items.iter().filter_map(|item| item["code"].as_i64()).collect())
        .unwrap_or_default()
}
