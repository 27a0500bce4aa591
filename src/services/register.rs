use crate::{
    db::DbPool,
    entities::activity_log::{self, LogAction},
    entities::system::{self, Quality, SystemStatus},
    errors::ServiceError,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, SqlErr,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;
use validator::Validate;

use super::txn_err;

/// First system number handed out when the register is empty.
pub const FIRST_SYSTEM_NO: i32 = 2000;

/// Successor of the highest register row. A row numbered 0 (only reachable
/// through CSV import) does not anchor numbering; the sequence restarts at
/// `FIRST_SYSTEM_NO`.
fn next_no(last: Option<&system::Model>) -> i32 {
    match last {
        Some(m) if m.system_no != 0 => m.system_no + 1,
        _ => FIRST_SYSTEM_NO,
    }
}

/// New item payload. The system number is assigned by the service.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewItem {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0))]
    pub quantity: i32,
    pub quality: Quality,
    pub status: SystemStatus,
}

/// Partial update of a register entry.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ItemUpdate {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(range(min = 0))]
    pub quantity: Option<i32>,
    pub quality: Option<Quality>,
    pub status: Option<SystemStatus>,
}

/// Aggregate header figures shown above the register.
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterSummary {
    pub total_items: u64,
    pub total_quantity: i64,
    pub total_added: i64,
    pub last_update: Option<chrono::DateTime<Utc>>,
}

/// Service for the active item register and its audit trail.
#[derive(Clone)]
pub struct RegisterService {
    db_pool: Arc<DbPool>,
}

impl RegisterService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Next free system number: `max + 1`, or `FIRST_SYSTEM_NO` when the
    /// register is empty.
    #[instrument(skip(self))]
    pub async fn next_system_no(&self) -> Result<i32, ServiceError> {
        let db = &*self.db_pool;

        let last = system::Entity::find()
            .order_by_desc(system::Column::SystemNo)
            .one(db)
            .await?;

        Ok(next_no(last.as_ref()))
    }

    /// Lists active items (`quantity > 0`) ordered by system number.
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> Result<Vec<system::Model>, ServiceError> {
        let db = &*self.db_pool;

        let items = system::Entity::find()
            .filter(system::Column::Quantity.gt(0))
            .order_by_asc(system::Column::SystemNo)
            .all(db)
            .await?;

        Ok(items)
    }

    /// Lists every register row, including zero-quantity items.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<system::Model>, ServiceError> {
        let db = &*self.db_pool;

        let items = system::Entity::find()
            .order_by_asc(system::Column::SystemNo)
            .all(db)
            .await?;

        Ok(items)
    }

    /// Fetches one item by system number.
    #[instrument(skip(self))]
    pub async fn get(&self, system_no: i32) -> Result<system::Model, ServiceError> {
        let db = &*self.db_pool;

        system::Entity::find_by_id(system_no)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Item {} not found", system_no)))
    }

    /// Adds an item: assigns the next system number, inserts the row and
    /// exactly one `ADD` log entry, all in one transaction.
    #[instrument(skip(self))]
    pub async fn add_item(&self, item: NewItem) -> Result<system::Model, ServiceError> {
        item.validate()?;

        let db = &*self.db_pool;

        let created = db
            .transaction::<_, system::Model, ServiceError>(|txn| {
                Box::pin(async move {
                    let last = system::Entity::find()
                        .order_by_desc(system::Column::SystemNo)
                        .one(txn)
                        .await?;
                    let system_no = next_no(last.as_ref());

                    let name = item.name.clone();
                    let row = system::ActiveModel {
                        system_no: Set(system_no),
                        name: Set(item.name),
                        quantity: Set(item.quantity),
                        quality: Set(item.quality),
                        status: Set(item.status),
                    };

                    let model = row.insert(txn).await.map_err(|e| match e.sql_err() {
                        Some(SqlErr::UniqueConstraintViolation(_)) => ServiceError::Conflict(
                            format!("Item name '{}' already exists", name),
                        ),
                        _ => ServiceError::DatabaseError(e),
                    })?;

                    activity_log::ActiveModel {
                        action: Set(LogAction::Add),
                        system_no: Set(model.system_no),
                        quantity: Set(model.quantity),
                        date_time: Set(Utc::now()),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    Ok(model)
                })
            })
            .await
            .map_err(txn_err)?;

        info!(system_no = created.system_no, "item added to register");
        Ok(created)
    }

    /// Applies a partial update to an item. 404 when the item is missing.
    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        system_no: i32,
        update: ItemUpdate,
    ) -> Result<system::Model, ServiceError> {
        update.validate()?;

        let db = &*self.db_pool;

        let existing = self.get(system_no).await?;

        let mut row: system::ActiveModel = existing.into();
        if let Some(name) = update.name {
            row.name = Set(name);
        }
        if let Some(quantity) = update.quantity {
            row.quantity = Set(quantity);
        }
        if let Some(quality) = update.quality {
            row.quality = Set(quality);
        }
        if let Some(status) = update.status {
            row.status = Set(status);
        }

        let updated = row.update(db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                ServiceError::Conflict("Item name already exists".into())
            }
            _ => ServiceError::DatabaseError(e),
        })?;

        info!(system_no, "item updated");
        Ok(updated)
    }

    /// Deletes an item and writes exactly one `DELETE` log entry with
    /// quantity 0, in one transaction. No existence check: deleting an
    /// unknown number still logs, matching the register book convention.
    #[instrument(skip(self))]
    pub async fn delete_item(&self, system_no: i32) -> Result<(), ServiceError> {
        let db = &*self.db_pool;

        db.transaction::<_, (), ServiceError>(move |txn| {
            Box::pin(async move {
                system::Entity::delete_by_id(system_no).exec(txn).await?;

                activity_log::ActiveModel {
                    action: Set(LogAction::Delete),
                    system_no: Set(system_no),
                    quantity: Set(0),
                    date_time: Set(Utc::now()),
                    ..Default::default()
                }
                .insert(txn)
                .await?;

                Ok(())
            })
        })
        .await
        .map_err(txn_err)?;

        info!(system_no, "item deleted from register");
        Ok(())
    }

    /// Full activity log, newest first.
    #[instrument(skip(self))]
    pub async fn activity(&self) -> Result<Vec<activity_log::Model>, ServiceError> {
        let db = &*self.db_pool;

        let entries = activity_log::Entity::find()
            .order_by_desc(activity_log::Column::Id)
            .all(db)
            .await?;

        Ok(entries)
    }

    /// Header figures for the register view, derived from the active rows
    /// and the audit trail.
    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<RegisterSummary, ServiceError> {
        let active = self.list_active().await?;
        let log = self.activity().await?;

        let total_added = log
            .iter()
            .filter(|e| e.action == LogAction::Add)
            .map(|e| e.quantity as i64)
            .sum();

        Ok(RegisterSummary {
            total_items: active.len() as u64,
            total_quantity: active.iter().map(|i| i.quantity as i64).sum(),
            total_added,
            last_update: log.first().map(|e| e.date_time),
        })
    }
}
