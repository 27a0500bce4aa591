use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "labstock-api",
        description = "IT lab stock register: inventory, dead stock archive, complaints and reports"
    ),
    paths(
        crate::auth::login_handler,
        crate::auth::logout_handler,
        crate::handlers::health::health,
        crate::handlers::register::list_register,
        crate::handlers::register::register_summary,
        crate::handlers::register::register_activity,
        crate::handlers::register::add_item,
        crate::handlers::register::get_item,
        crate::handlers::register::update_item,
        crate::handlers::register::delete_item,
        crate::handlers::dead_stock::list_dead_stock,
        crate::handlers::dead_stock::move_to_dead_stock,
        crate::handlers::complaints::list_complaints,
        crate::handlers::complaints::raise_complaint,
        crate::handlers::reports::stock_report,
        crate::handlers::transfer::import_register,
        crate::handlers::transfer::export_register,
    ),
    components(schemas(
        crate::auth::LoginRequest,
        crate::auth::LoginResponse,
        crate::entities::system::Model,
        crate::entities::system::Quality,
        crate::entities::system::SystemStatus,
        crate::entities::user::Role,
        crate::entities::dead_stock::Model,
        crate::entities::complaint::Model,
        crate::entities::complaint::ComplaintStatus,
        crate::entities::activity_log::Model,
        crate::entities::activity_log::LogAction,
        crate::services::register::NewItem,
        crate::services::register::ItemUpdate,
        crate::services::register::RegisterSummary,
        crate::services::dead_stock::DeadStockRequest,
        crate::services::complaints::NewComplaint,
        crate::services::reports::ItemQuantity,
        crate::services::reports::StockReport,
        crate::errors::ErrorResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Login and session management"),
        (name = "register", description = "Active item register and audit trail"),
        (name = "dead-stock", description = "Archive of retired items"),
        (name = "complaints", description = "Complaints book"),
        (name = "reports", description = "Derived aggregates"),
        (name = "transfer", description = "Bulk CSV import/export"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

/// Swagger UI at `/docs`, spec at `/api-docs/openapi.json`.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}
