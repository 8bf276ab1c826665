//! SeaORM implementation of NotificationRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, Notification, NotificationRepository};
use crate::infrastructure::database::entities::notification;

pub struct SeaOrmNotificationRepository {
    db: DatabaseConnection,
}

impl SeaOrmNotificationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

#[async_trait]
impl NotificationRepository for SeaOrmNotificationRepository {
    async fn create(&self, entity: &Notification) -> DomainResult<()> {
        notification::active_model_from_domain(entity)
            .insert(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn save(&self, entity: &Notification) -> DomainResult<()> {
        let active = notification::active_model_from_domain(entity);
        match active.update(&self.db).await {
            Ok(_) => Ok(()),
            Err(sea_orm::DbErr::RecordNotUpdated) => Err(DomainError::not_found(
                "Notification",
                "id",
                entity.id().to_string(),
            )),
            Err(e) => Err(db_err(e)),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Notification>> {
        let row = notification::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?;

        match row {
            Some(row) => Ok(Some(row.into_domain()?)),
            None => {
                debug!("Notification '{}' not found in database", id);
                Ok(None)
            }
        }
    }

    async fn count_by_recipient(&self, recipient_id: Uuid) -> DomainResult<u64> {
        notification::Entity::find()
            .filter(notification::Column::RecipientId.eq(recipient_id.to_string()))
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn find_by_recipient(
        &self,
        recipient_id: Uuid,
        page: u32,
        limit: u32,
    ) -> DomainResult<(Vec<Notification>, u64)> {
        let query = notification::Entity::find()
            .filter(notification::Column::RecipientId.eq(recipient_id.to_string()))
            .order_by_desc(notification::Column::CreatedAt);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;

        let page = page.max(1);
        let offset = ((page - 1) * limit) as u64;

        let rows = query
            .offset(offset)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items = rows
            .into_iter()
            .map(notification::Model::into_domain)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok((items, total))
    }
}

// ── Tests ──────────────────────────────────────────────────────
