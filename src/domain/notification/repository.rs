//! Notification repository interface

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::DomainResult;

use super::model::Notification;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Insert a newly created notification.
    async fn create(&self, notification: &Notification) -> DomainResult<()>;

    /// Persist changes to an existing notification.
    async fn save(&self, notification: &Notification) -> DomainResult<()>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Notification>>;

    async fn count_by_recipient(&self, recipient_id: Uuid) -> DomainResult<u64>;

    /// One page of a recipient's notifications, newest first, together with
    /// the total count across all pages.
    async fn find_by_recipient(
        &self,
        recipient_id: Uuid,
        page: u32,
        limit: u32,
    ) -> DomainResult<(Vec<Notification>, u64)>;
}
