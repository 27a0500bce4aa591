//! labstock-api Library
//!
//! Backend for an IT lab stock register: the active item register with an
//! append-only audit trail, a dead stock archive for retired items, a
//! complaints book, derived reports, and bulk CSV transfer.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod auth;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
// `MigrationTrait` is defined with an elided `SchemaManager` lifetime that
// async-trait makes late-bound, so impls cannot spell it out without E0195.
#[allow(elided_lifetimes_in_paths)]
pub mod migrator;
pub mod openapi;
pub mod services;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Shared application state handed to every handler. The store handle is
/// explicit; nothing reads from globals.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub services: handlers::AppServices,
}

/// Full v1 API surface. Session middleware is applied by the binary.
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .nest("/register", handlers::register::register_router())
        .nest("/dead-stock", handlers::dead_stock::dead_stock_router())
        .nest("/complaints", handlers::complaints::complaints_router())
        .nest("/reports", handlers::reports::reports_router())
        .nest("/transfer", handlers::transfer::transfer_router())
}
