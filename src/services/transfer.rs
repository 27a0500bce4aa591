use crate::{db::DbPool, entities::system, errors::ServiceError, services::txn_err};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, TransactionTrait};
use std::sync::Arc;
use tracing::{info, instrument};

/// Bulk CSV import/export of the register. Import is wholesale: the file
/// becomes the register, rows absent from it disappear.
#[derive(Clone)]
pub struct TransferService {
    db_pool: Arc<DbPool>,
}

impl TransferService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Replaces the entire register with the rows of a CSV file
    /// (`system_no,name,quantity,quality,status`). The file is parsed and
    /// checked before any row is touched; a malformed file leaves the
    /// register unchanged. Returns the number of imported rows.
    #[instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn import_csv(&self, data: &[u8]) -> Result<usize, ServiceError> {
        let mut reader = csv::Reader::from_reader(data);

        let mut rows: Vec<system::Model> = Vec::new();
        for record in reader.deserialize::<system::Model>() {
            let row = record?;
            if row.quantity < 0 {
                return Err(ServiceError::ValidationError(format!(
                    "Negative quantity for item {}",
                    row.system_no
                )));
            }
            rows.push(row);
        }

        let db = &*self.db_pool;
        let count = rows.len();

        db.transaction::<_, (), ServiceError>(move |txn| {
            Box::pin(async move {
                system::Entity::delete_many().exec(txn).await?;

                for row in rows {
                    system::ActiveModel {
                        system_no: Set(row.system_no),
                        name: Set(row.name),
                        quantity: Set(row.quantity),
                        quality: Set(row.quality),
                        status: Set(row.status),
                    }
                    .insert(txn)
                    .await?;
                }

                Ok(())
            })
        })
        .await
        .map_err(txn_err)?;

        info!(rows = count, "register replaced from CSV import");
        Ok(count)
    }

    /// Dumps the entire register (including zero-quantity rows) as CSV.
    #[instrument(skip(self))]
    pub async fn export_csv(&self) -> Result<String, ServiceError> {
        let db = &*self.db_pool;

        let items = system::Entity::find()
            .order_by_asc(system::Column::SystemNo)
            .all(db)
            .await?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        for item in items {
            writer.serialize(item)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ServiceError::InternalError(format!("CSV writer error: {}", e)))?;

        String::from_utf8(bytes)
            .map_err(|e| ServiceError::InternalError(format!("CSV encoding error: {}", e)))
    }
}
