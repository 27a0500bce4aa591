use crate::db::DbPool;
use crate::entities::user::{self, Role};
use crate::errors::ServiceError;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
    routing::post,
    Json, Router,
};
use dashmap::DashMap;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;

/// Authenticated session carried through request extensions. Replaces the
/// original application's global session state with an explicit context
/// object passed to every operation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Session {
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub role: Role,
}

/// Issues and resolves opaque bearer tokens. Credentials are checked by
/// exact match against the seeded users table; sessions live for the
/// process lifetime (no expiry).
pub struct AuthService {
    db_pool: Arc<DbPool>,
    sessions: DashMap<String, Session>,
}

impl AuthService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            db_pool,
            sessions: DashMap::new(),
        }
    }

    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ServiceError> {
        let db = &*self.db_pool;

        let found = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .filter(user::Column::Password.eq(password))
            .one(db)
            .await?;

        let user = found.ok_or_else(|| ServiceError::Unauthorized("Invalid credentials".into()))?;

        let token = Uuid::new_v4().to_string();
        self.sessions.insert(
            token.clone(),
            Session {
                username: user.username.clone(),
                role: user.role,
            },
        );

        info!(username = %user.username, "login successful");

        Ok(LoginResponse {
            token,
            username: user.username,
            role: user.role,
        })
    }

    pub fn session(&self, token: &str) -> Option<Session> {
        self.sessions.get(token).map(|s| s.clone())
    }

    /// Revokes a token. Returns whether a session existed for it.
    pub fn revoke(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }
}

/// Rejects the request unless the session carries the given role.
pub fn require_role(session: &Session, role: Role) -> Result<(), ServiceError> {
    if session.role == role {
        Ok(())
    } else {
        Err(ServiceError::Forbidden(format!(
            "Only {} allowed",
            match role {
                Role::Admin => "Admin",
                Role::Hod => "HOD",
                Role::Principal => "Principal",
            }
        )))
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Middleware guarding the API: resolves the bearer token to a `Session`
/// and injects it into request extensions.
pub async fn require_session(
    State(auth): State<Arc<AuthService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ServiceError> {
    let token = bearer_token(req.headers())
        .ok_or_else(|| ServiceError::Unauthorized("Missing bearer token".into()))?;

    let session = auth
        .session(token)
        .ok_or_else(|| ServiceError::Unauthorized("Invalid or revoked session".into()))?;

    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}

/// Authentication routes (`/auth`)
pub fn auth_routes() -> Router<Arc<AuthService>> {
    Router::new()
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
}

/// Login with seeded credentials
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = crate::errors::ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(auth): State<Arc<AuthService>>,
    Json(credentials): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ServiceError> {
    let response = auth
        .login(&credentials.username, &credentials.password)
        .await?;
    Ok(Json(response))
}

/// Revoke the presented bearer token
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Session revoked"),
        (status = 401, description = "No valid session", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_token" = [])),
    tag = "auth"
)]
pub async fn logout_handler(
    State(auth): State<Arc<AuthService>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ServiceError> {
    let token = bearer_token(&headers)
        .ok_or_else(|| ServiceError::Unauthorized("Missing bearer token".into()))?;

    if auth.revoke(token) {
        Ok(Json(serde_json::json!({ "message": "Logged out" })))
    } else {
        Err(ServiceError::Unauthorized("Invalid or revoked session".into()))
    }
}
