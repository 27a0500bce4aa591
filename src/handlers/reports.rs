use crate::{errors::ServiceError, handlers::AppState};
use axum::{
    extract::{Json, State},
    response::IntoResponse,
    routing::get,
    Router,
};

/// Routes for derived reports (`/api/v1/reports`)
pub fn reports_router() -> Router<AppState> {
    Router::new().route("/stock", get(stock_report))
}

/// Aggregates over active items: quantity per name, count per status
#[utoipa::path(
    get,
    path = "/api/v1/reports/stock",
    responses(
        (status = 200, description = "Derived stock aggregates", body = crate::services::reports::StockReport)
    ),
    security(("bearer_token" = [])),
    tag = "reports"
)]
pub async fn stock_report(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let report = state.services.reports.stock_report().await?;
    Ok(Json(report))
}
