//! # CoreLedger REST API
//!
//! HTTP endpoints for account types, accounts and to-do items.
//!
//! ## Architecture
//!
//! Handlers depend on the repository traits from `coreledger-interfaces`
//! through per-group context structs, so tests can swap in mock
//! repositories. Every failure leaves a handler as a
//! [`ClassifiedFault`](coreledger_core::ClassifiedFault) and is turned into an
//! error envelope by the outermost layer from `coreledger-web`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use coreledger_rest_api::{create_rest_app, AppConfig, AppContext};
//!
//! # async fn example(context: AppContext) -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_rest_app(context, AppConfig::default());
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod context;
pub mod handlers;

// Re-export commonly used types
pub use app::{create_rest_app, AppConfig, AppContext};
pub use context::{AccountTypesContext, AccountsContext, HealthContext, ToDosContext};
