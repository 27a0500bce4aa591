#![allow(dead_code)]

use axum::{middleware, routing::get, Router};
use labstock_api::{
    auth::{self, AuthService, Session},
    db::{self, DbPool},
    entities::user::Role,
    handlers::AppServices,
    AppState,
};
use std::sync::Arc;
use uuid::Uuid;

/// Fresh in-memory database with migrations (and seeded users) applied.
/// Each call gets its own named shared-memory database so concurrent tests
/// do not interfere.
pub async fn setup_pool() -> Arc<DbPool> {
    let url = format!(
        "sqlite:file:labstock_test_{}?mode=memory&cache=shared",
        Uuid::new_v4().simple()
    );

    let pool = db::establish_connection(&url)
        .await
        .expect("Failed to create DB pool");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    Arc::new(pool)
}

pub async fn setup_services() -> AppServices {
    let db_arc = setup_pool().await;
    let auth = Arc::new(AuthService::new(db_arc.clone()));
    AppServices::new(db_arc, auth)
}

/// Full application router over a fresh database, wired like the binary.
pub async fn setup_router() -> Router {
    let db_arc = setup_pool().await;
    let auth_service = Arc::new(AuthService::new(db_arc.clone()));
    let services = AppServices::new(db_arc.clone(), auth_service.clone());

    let state = AppState {
        db: db_arc,
        config: labstock_api::config::load_config().expect("Failed to load config"),
        services,
    };

    Router::new()
        .route("/health", get(labstock_api::handlers::health::health))
        .nest(
            "/api/v1",
            labstock_api::api_v1_routes().layer(middleware::from_fn_with_state(
                auth_service.clone(),
                auth::require_session,
            )),
        )
        .nest("/auth", auth::auth_routes().with_state(auth_service))
        .with_state(state)
}

pub fn session(username: &str, role: Role) -> Session {
    Session {
        username: username.to_string(),
        role,
    }
}
