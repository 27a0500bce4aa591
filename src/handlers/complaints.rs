use crate::{
    auth::Session, errors::ServiceError, handlers::AppState, services::complaints::NewComplaint,
};
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Extension, Router,
};

/// Routes for the complaints book (`/api/v1/complaints`)
pub fn complaints_router() -> Router<AppState> {
    Router::new().route("/", get(list_complaints).post(raise_complaint))
}

/// List all complaints, newest first (Admin)
#[utoipa::path(
    get,
    path = "/api/v1/complaints",
    responses(
        (status = 200, description = "All complaints", body = [crate::entities::complaint::Model]),
        (status = 403, description = "Forbidden", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_token" = [])),
    tag = "complaints"
)]
pub async fn list_complaints(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<impl IntoResponse, ServiceError> {
    let entries = state.services.complaints.list_all(&session).await?;
    Ok(Json(entries))
}

/// Raise a complaint (any authenticated user)
#[utoipa::path(
    post,
    path = "/api/v1/complaints",
    request_body = NewComplaint,
    responses(
        (status = 201, description = "Complaint recorded", body = crate::entities::complaint::Model),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_token" = [])),
    tag = "complaints"
)]
pub async fn raise_complaint(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(complaint): Json<NewComplaint>,
) -> Result<impl IntoResponse, ServiceError> {
    let entry = state
        .services
        .complaints
        .raise(&session, complaint)
        .await?;
    Ok((StatusCode::CREATED, Json(entry)))
}
