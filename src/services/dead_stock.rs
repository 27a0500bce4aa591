use crate::{
    auth::{require_role, Session},
    db::DbPool,
    entities::dead_stock,
    entities::system,
    entities::user::Role,
    errors::ServiceError,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, TransactionTrait};
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;
use validator::Validate;

use super::txn_err;

/// Request to retire an item into the dead stock archive.
#[derive(Debug, Clone, serde::Deserialize, Validate, ToSchema)]
pub struct DeadStockRequest {
    pub system_no: i32,
    #[validate(length(min = 1))]
    pub reason: String,
}

/// Service for the dead stock archive.
#[derive(Clone)]
pub struct DeadStockService {
    db_pool: Arc<DbPool>,
}

impl DeadStockService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Moves an item from the active register into the archive. HOD only;
    /// any other role is rejected and the register stays untouched.
    ///
    /// Archive insert and register delete run in one transaction, so a
    /// failure can neither duplicate nor lose the record.
    #[instrument(skip(self, session), fields(username = %session.username))]
    pub async fn move_to_dead_stock(
        &self,
        session: &Session,
        request: DeadStockRequest,
    ) -> Result<dead_stock::Model, ServiceError> {
        require_role(session, Role::Hod)?;
        request.validate()?;

        let db = &*self.db_pool;
        let accepted_by = session.username.clone();

        let entry = db
            .transaction::<_, dead_stock::Model, ServiceError>(move |txn| {
                Box::pin(async move {
                    let item = system::Entity::find_by_id(request.system_no)
                        .one(txn)
                        .await?
                        .ok_or_else(|| {
                            ServiceError::NotFound(format!(
                                "Item {} not found",
                                request.system_no
                            ))
                        })?;

                    let entry = dead_stock::ActiveModel {
                        system_no: Set(item.system_no),
                        name: Set(item.name.clone()),
                        reason: Set(request.reason),
                        accepted_by: Set(accepted_by),
                        date_time: Set(Utc::now()),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    system::Entity::delete_by_id(item.system_no)
                        .exec(txn)
                        .await?;

                    Ok(entry)
                })
            })
            .await
            .map_err(txn_err)?;

        info!(
            system_no = entry.system_no,
            accepted_by = %entry.accepted_by,
            "item moved to dead stock"
        );

        Ok(entry)
    }

    /// Lists the archive, oldest first.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<dead_stock::Model>, ServiceError> {
        let db = &*self.db_pool;

        let entries = dead_stock::Entity::find()
            .order_by_asc(dead_stock::Column::Id)
            .all(db)
            .await?;

        Ok(entries)
    }
}
