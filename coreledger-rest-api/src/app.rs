//! Main application configuration and router setup

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post},
    Router,
};
use coreledger_interfaces::{HealthCheck, RepositoryFactory};
use coreledger_web::{
    correlation_middleware, cors_layer_with_config, error_translation_middleware, handle_not_found, log_response,
    make_request_span, panic_to_fault, CorsConfig, ErrorTranslationConfig,
};
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{
    context::{AccountTypesContext, AccountsContext, HealthContext, ToDosContext},
    handlers,
};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Enable CORS middleware
    pub enable_cors: bool,
    /// Enable request tracing
    pub enable_tracing: bool,
    /// API path prefix
    pub api_prefix: String,
    /// Show unclassified fault messages and trace ids to callers
    pub expose_error_details: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_cors: true,
            enable_tracing: true,
            api_prefix: "/api".to_string(),
            expose_error_details: false,
        }
    }
}

impl AppConfig {
    /// Development defaults: permissive CORS, full error detail
    pub fn development() -> Self {
        Self {
            expose_error_details: true,
            ..Self::default()
        }
    }
}

/// Application context containing all dependencies
#[derive(Clone, FromRef)]
pub struct AppContext {
    pub accounts: AccountsContext,
    pub account_types: AccountTypesContext,
    pub todos: ToDosContext,
    pub health: HealthContext,
}

impl AppContext {
    pub fn new(repositories: Arc<dyn RepositoryFactory>, database: Arc<dyn HealthCheck>) -> Self {
        Self {
            accounts: AccountsContext::new(repositories.clone()),
            account_types: AccountTypesContext::new(repositories.clone()),
            todos: ToDosContext::new(repositories),
            health: HealthContext::new(database),
        }
    }
}

/// Create the complete REST API application
///
/// Layers, outermost first: error translation, panic capture, correlation,
/// tracing, CORS.
pub fn create_rest_app(context: AppContext, config: AppConfig) -> Router {
    let routes = Router::new()
        // Health endpoints (no prefix)
        .route("/health", get(handlers::health_check))
        .route("/health/live", get(handlers::liveness_check))
        .route("/health/ready", get(handlers::readiness_check));

    let routes = if config.api_prefix == "/" {
        routes.merge(create_api_router())
    } else {
        routes.nest(&config.api_prefix, create_api_router())
    };

    // Add middleware layers (applied in reverse order)
    let mut app = routes.fallback(handle_not_found).with_state(context);

    if config.enable_cors {
        let cors = if config.expose_error_details {
            CorsConfig::development()
        } else {
            CorsConfig::default()
        };
        app = app.layer(cors_layer_with_config(cors));
    }

    if config.enable_tracing {
        app = app.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_request_span)
                .on_response(log_response),
        );
    }

    let translation = ErrorTranslationConfig {
        expose_details: config.expose_error_details,
    };

    app.layer(middleware::from_fn(correlation_middleware))
        .layer(CatchPanicLayer::custom(panic_to_fault))
        .layer(middleware::from_fn_with_state(translation, error_translation_middleware))
}

/// Create unified API router
fn create_api_router() -> Router<AppContext> {
    Router::new()
        // Account type endpoints
        .route(
            "/accounttypes",
            get(handlers::list_account_types).post(handlers::create_account_type),
        )
        .route(
            "/accounttypes/{id}",
            get(handlers::get_account_type)
                .put(handlers::update_account_type)
                .delete(handlers::delete_account_type),
        )
        // Account endpoints
        .route("/accounts", get(handlers::list_accounts).post(handlers::create_account))
        .route("/accounts/reports/by-type", get(handlers::accounts_by_type_report))
        .route(
            "/accounts/{id}",
            get(handlers::get_account)
                .put(handlers::update_account)
                .delete(handlers::delete_account),
        )
        .route("/accounts/{id}/activate", post(handlers::activate_account))
        .route("/accounts/{id}/deactivate", post(handlers::deactivate_account))
        // To-do endpoints
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
}
