use crate::{
    auth::{require_role, Session},
    entities::user::Role,
    errors::ServiceError,
    handlers::AppState,
    services::register::{ItemUpdate, NewItem},
};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Extension, Router,
};

/// Routes for the item register (`/api/v1/register`)
pub fn register_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_register).post(add_item))
        .route("/summary", get(register_summary))
        .route("/activity", get(register_activity))
        .route(
            "/:system_no",
            get(get_item).put(update_item).delete(delete_item),
        )
}

/// List active items (quantity > 0)
#[utoipa::path(
    get,
    path = "/api/v1/register",
    responses(
        (status = 200, description = "Active register rows", body = [crate::entities::system::Model]),
        (status = 401, description = "Unauthorized", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_token" = [])),
    tag = "register"
)]
pub async fn list_register(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let items = state.services.register.list_active().await?;
    Ok(Json(items))
}

/// Register header figures
#[utoipa::path(
    get,
    path = "/api/v1/register/summary",
    responses(
        (status = 200, description = "Register summary", body = crate::services::register::RegisterSummary)
    ),
    security(("bearer_token" = [])),
    tag = "register"
)]
pub async fn register_summary(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let summary = state.services.register.summary().await?;
    Ok(Json(summary))
}

/// Activity log, newest first
#[utoipa::path(
    get,
    path = "/api/v1/register/activity",
    responses(
        (status = 200, description = "Audit trail entries", body = [crate::entities::activity_log::Model])
    ),
    security(("bearer_token" = [])),
    tag = "register"
)]
pub async fn register_activity(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let entries = state.services.register.activity().await?;
    Ok(Json(entries))
}

/// Add an item (Admin). The system number is assigned by the service.
#[utoipa::path(
    post,
    path = "/api/v1/register",
    request_body = NewItem,
    responses(
        (status = 201, description = "Item added", body = crate::entities::system::Model),
        (status = 400, description = "Invalid payload", body = crate::errors::ErrorResponse),
        (status = 403, description = "Forbidden", body = crate::errors::ErrorResponse),
        (status = 409, description = "Duplicate item name", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_token" = [])),
    tag = "register"
)]
pub async fn add_item(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(item): Json<NewItem>,
) -> Result<impl IntoResponse, ServiceError> {
    require_role(&session, Role::Admin)?;
    let created = state.services.register.add_item(item).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Fetch one item
#[utoipa::path(
    get,
    path = "/api/v1/register/{system_no}",
    params(("system_no" = i32, Path, description = "System number")),
    responses(
        (status = 200, description = "Register row", body = crate::entities::system::Model),
        (status = 404, description = "Item not found", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_token" = [])),
    tag = "register"
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(system_no): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let item = state.services.register.get(system_no).await?;
    Ok(Json(item))
}

/// Update item fields (Admin)
#[utoipa::path(
    put,
    path = "/api/v1/register/{system_no}",
    params(("system_no" = i32, Path, description = "System number")),
    request_body = ItemUpdate,
    responses(
        (status = 200, description = "Item updated", body = crate::entities::system::Model),
        (status = 403, description = "Forbidden", body = crate::errors::ErrorResponse),
        (status = 404, description = "Item not found", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_token" = [])),
    tag = "register"
)]
pub async fn update_item(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(system_no): Path<i32>,
    Json(update): Json<ItemUpdate>,
) -> Result<impl IntoResponse, ServiceError> {
    require_role(&session, Role::Admin)?;
    let updated = state
        .services
        .register
        .update_item(system_no, update)
        .await?;
    Ok(Json(updated))
}

/// Delete an item (Admin). Writes one DELETE log entry with quantity 0.
#[utoipa::path(
    delete,
    path = "/api/v1/register/{system_no}",
    params(("system_no" = i32, Path, description = "System number")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 403, description = "Forbidden", body = crate::errors::ErrorResponse)
    ),
    security(("bearer_token" = [])),
    tag = "register"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(system_no): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    require_role(&session, Role::Admin)?;
    state.services.register.delete_item(system_no).await?;
    Ok(StatusCode::NO_CONTENT)
}
