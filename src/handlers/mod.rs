pub mod complaints;
pub mod dead_stock;
pub mod health;
pub mod register;
pub mod reports;
pub mod transfer;

use crate::auth::AuthService;
use crate::db::DbPool;
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers.
#[derive(Clone)]
pub struct AppServices {
    pub register: Arc<crate::services::register::RegisterService>,
    pub dead_stock: Arc<crate::services::dead_stock::DeadStockService>,
    pub complaints: Arc<crate::services::complaints::ComplaintService>,
    pub reports: Arc<crate::services::reports::ReportService>,
    pub transfer: Arc<crate::services::transfer::TransferService>,
    pub auth: Arc<AuthService>,
}

impl AppServices {
    /// Builds the full service container over one shared store handle.
    pub fn new(db_pool: Arc<DbPool>, auth: Arc<AuthService>) -> Self {
        Self {
            register: Arc::new(crate::services::register::RegisterService::new(
                db_pool.clone(),
            )),
            dead_stock: Arc::new(crate::services::dead_stock::DeadStockService::new(
                db_pool.clone(),
            )),
            complaints: Arc::new(crate::services::complaints::ComplaintService::new(
                db_pool.clone(),
            )),
            reports: Arc::new(crate::services::reports::ReportService::new(db_pool.clone())),
            transfer: Arc::new(crate::services::transfer::TransferService::new(db_pool)),
            auth,
        }
    }
}
