use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Audit trail action tag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
    strum::Display,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum LogAction {
    #[sea_orm(string_value = "ADD")]
    #[serde(rename = "ADD")]
    #[strum(serialize = "ADD")]
    Add,
    #[sea_orm(string_value = "DELETE")]
    #[serde(rename = "DELETE")]
    #[strum(serialize = "DELETE")]
    Delete,
}

/// The `activity_log` table: append-only audit trail of register mutations.
/// Ordering beyond the insertion id is not guaranteed.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = ActivityLogEntry)]
#[sea_orm(table_name = "activity_log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub action: LogAction,
    pub system_no: i32,
    pub quantity: i32,
    pub date_time: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
