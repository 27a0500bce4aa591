use crate::{
    auth::{require_role, Session},
    db::DbPool,
    entities::complaint::{self, ComplaintStatus},
    entities::user::Role,
    errors::ServiceError,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;
use validator::Validate;

/// Complaint submission payload. Reporter and role come from the session.
#[derive(Debug, Clone, serde::Deserialize, Validate, ToSchema)]
pub struct NewComplaint {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
}

/// Service for the complaints book.
#[derive(Clone)]
pub struct ComplaintService {
    db_pool: Arc<DbPool>,
}

impl ComplaintService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Records a complaint from any authenticated user. Status is always
    /// `Open`; there is no further workflow.
    #[instrument(skip(self, session), fields(username = %session.username))]
    pub async fn raise(
        &self,
        session: &Session,
        complaint: NewComplaint,
    ) -> Result<complaint::Model, ServiceError> {
        complaint.validate()?;

        let db = &*self.db_pool;

        let entry = complaint::ActiveModel {
            raised_by: Set(session.username.clone()),
            role: Set(session.role),
            title: Set(complaint.title),
            description: Set(complaint.description),
            status: Set(ComplaintStatus::Open),
            date_time: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        info!(id = entry.id, "complaint raised");
        Ok(entry)
    }

    /// Lists all complaints, newest first. Admin only.
    #[instrument(skip(self, session), fields(username = %session.username))]
    pub async fn list_all(&self, session: &Session) -> Result<Vec<complaint::Model>, ServiceError> {
        require_role(session, Role::Admin)?;

        let db = &*self.db_pool;

        let entries = complaint::Entity::find()
            .order_by_desc(complaint::Column::Id)
            .all(db)
            .await?;

        Ok(entries)
    }
}
