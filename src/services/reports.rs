use crate::{db::DbPool, entities::system, errors::ServiceError};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;
use utoipa::ToSchema;

/// Quantity held per item name (bar-chart shape).
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemQuantity {
    pub name: String,
    pub quantity: i64,
}

/// Derived aggregates over the active register. No stored state.
#[derive(Debug, Serialize, ToSchema)]
pub struct StockReport {
    pub quantity_by_name: Vec<ItemQuantity>,
    pub status_breakdown: HashMap<String, i64>,
}

/// Service deriving report figures from the register.
#[derive(Clone)]
pub struct ReportService {
    db_pool: Arc<DbPool>,
}

impl ReportService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Aggregates active items by name and status.
    #[instrument(skip(self))]
    pub async fn stock_report(&self) -> Result<StockReport, ServiceError> {
        let db = &*self.db_pool;

        let active = system::Entity::find()
            .filter(system::Column::Quantity.gt(0))
            .order_by_asc(system::Column::SystemNo)
            .all(db)
            .await?;

        let quantity_by_name = active
            .iter()
            .map(|item| ItemQuantity {
                name: item.name.clone(),
                quantity: item.quantity as i64,
            })
            .collect();

        let mut status_breakdown: HashMap<String, i64> = HashMap::new();
        for item in &active {
            *status_breakdown.entry(item.status.to_string()).or_insert(0) += 1;
        }

        Ok(StockReport {
            quantity_by_name,
            status_breakdown,
        })
    }
}
