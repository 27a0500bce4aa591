use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The `dead_stock` table: append-only archive of retired items.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = DeadStockEntry)]
#[sea_orm(table_name = "dead_stock")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub system_no: i32,
    pub name: String,
    pub reason: String,
    pub accepted_by: String,
    pub date_time: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
