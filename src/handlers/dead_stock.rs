use crate::{
    auth::Session, errors::ServiceError, handlers::AppState,
    services::dead_stock::DeadStockRequest,
};
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Extension, Router,
};

/// Routes for the dead stock archive (`/api/v1/dead-stock`)
pub fn dead_stock_router() -> Router<AppState> {
    Router::new().route("/", get(list_dead_stock).post(move_to_dead_stock))
}

/// List the archive
#[utoipa::path(
    get,
    path = "/api/v1/dead-stock",
    responses(
        (status = 200, description = "Archive entries", body = [crate::entities::dead_stock::Model])
    ),
    security(("bearer_token" = [])),
    tag = "dead-stock"
)]
pub async fn list_dead_stock(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let entries = state.services.dead_stock.list().await?;
    Ok(Json(entries))
}

/// Retire an item into the archive (HOD only)
#[utoipa::path(
    post,
    path = "/api/v1/dead-stock",
    request_body = DeadStockRequest,
    responses(
        (status = 201, description = "Item archived", body = crate::entities::dead_stock::Model),
        (status = 403, description = "Only HOD allowed", body = crate::errors::ErrorResponse),
        (status = 404, description = "Item not found", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_token" = [])),
    tag = "dead-stock"
)]
pub async fn move_to_dead_stock(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(request): Json<DeadStockRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let entry = state
        .services
        .dead_stock
        .move_to_dead_stock(&session, request)
        .await?;
    Ok((StatusCode::CREATED, Json(entry)))
}
