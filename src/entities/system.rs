use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Physical condition of a stock item.
#[derive(
    Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
    strum::Display,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Quality {
    #[sea_orm(string_value = "Good")]
    Good,
    #[sea_orm(string_value = "Average")]
    Average,
    #[sea_orm(string_value = "Poor")]
    Poor,
}

/// Operational status of a stock item.
#[derive(
    Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
    strum::Display,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum SystemStatus {
    #[sea_orm(string_value = "Working")]
    Working,
    #[sea_orm(string_value = "Not Working")]
    #[serde(rename = "Not Working")]
    #[strum(serialize = "Not Working")]
    NotWorking,
}

/// The `systems` table: the active register of stock items.
///
/// `system_no` is assigned by the register service (`max + 1`, starting at
/// 2000), never by the database.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[schema(as = System)]
#[sea_orm(table_name = "systems")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub system_no: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub quantity: i32,
    pub quality: Quality,
    pub status: SystemStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
