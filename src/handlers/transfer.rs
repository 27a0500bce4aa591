use crate::{
    auth::{require_role, Session},
    entities::user::Role,
    errors::ServiceError,
    handlers::AppState,
};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::json;

/// Routes for bulk CSV transfer (`/api/v1/transfer`)
pub fn transfer_router() -> Router<AppState> {
    Router::new()
        .route("/import", post(import_register))
        .route("/export", get(export_register))
}

/// Replace the whole register with a CSV file (Admin)
#[utoipa::path(
    post,
    path = "/api/v1/transfer/import",
    request_body(content = String, content_type = "text/csv"),
    responses(
        (status = 200, description = "Register replaced"),
        (status = 400, description = "Malformed CSV", body = crate::errors::ErrorResponse),
        (status = 403, description = "Forbidden", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_token" = [])),
    tag = "transfer"
)]
pub async fn import_register(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    body: String,
) -> Result<impl IntoResponse, ServiceError> {
    require_role(&session, Role::Admin)?;
    let imported = state.services.transfer.import_csv(body.as_bytes()).await?;
    Ok(Json(json!({ "imported": imported })))
}

/// Download the whole register as CSV (Admin)
#[utoipa::path(
    get,
    path = "/api/v1/transfer/export",
    responses(
        (status = 200, description = "Register CSV", body = String, content_type = "text/csv"),
        (status = 403, description = "Forbidden", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_token" = [])),
    tag = "transfer"
)]
pub async fn export_register(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<impl IntoResponse, ServiceError> {
    require_role(&session, Role::Admin)?;
    let csv = state.services.transfer.export_csv().await?;
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"register.csv\"",
            ),
        ],
        csv,
    ))
}
