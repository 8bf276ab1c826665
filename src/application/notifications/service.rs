//! Notification business logic service

use std::sync::Arc;

use metrics::counter;
use tracing::info;
use uuid::Uuid;

use crate::domain::{
    CreateNotificationProps, DomainError, DomainResult, Notification, NotificationRepository,
};

/// Input for [`NotificationService::send`]
#[derive(Debug, Clone)]
pub struct SendNotificationInput {
    pub recipient_id: String,
    pub content: String,
    pub category: String,
}

/// Service for notification use cases: send, cancel, read/unread,
/// count and list per recipient.
pub struct NotificationService {
    repository: Arc<dyn NotificationRepository>,
}

impl NotificationService {
    pub fn new(repository: Arc<dyn NotificationRepository>) -> Self {
        Self { repository }
    }

    /// Create a notification through the guarded factory and persist it.
    pub async fn send(&self, input: SendNotificationInput) -> DomainResult<Notification> {
        let notification = Notification::create(CreateNotificationProps {
            recipient_id: input.recipient_id,
            content: input.content,
            category: input.category,
            ..Default::default()
        })?;

        self.repository.create(&notification).await?;

        counter!("notifications_sent_total").increment(1);
        info!(
            notification_id = %notification.id(),
            recipient_id = %notification.recipient_id(),
            category = notification.category(),
            "Notification sent"
        );

        Ok(notification)
    }

    pub async fn get(&self, id: Uuid) -> DomainResult<Notification> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Notification", "id", id.to_string()))
    }

    /// Stamp the cancellation time and persist. Repeated cancels re-stamp.
    pub async fn cancel(&self, id: Uuid) -> DomainResult<Notification> {
        let mut notification = self.get(id).await?;
        notification.cancel();
        self.repository.save(&notification).await?;

        counter!("notifications_cancelled_total").increment(1);
        info!(notification_id = %id, "Notification cancelled");

        Ok(notification)
    }

    /// Stamp the read time and persist.
    pub async fn read(&self, id: Uuid) -> DomainResult<Notification> {
        let mut notification = self.get(id).await?;
        notification.read();
        self.repository.save(&notification).await?;

        info!(notification_id = %id, "Notification marked read");

        Ok(notification)
    }

    /// Explicitly clear the read mark and persist.
    pub async fn unread(&self, id: Uuid) -> DomainResult<Notification> {
        let mut notification = self.get(id).await?;
        notification.unread();
        self.repository.save(&notification).await?;

        info!(notification_id = %id, "Notification marked unread");

        Ok(notification)
    }

    pub async fn count_for_recipient(&self, recipient_id: Uuid) -> DomainResult<u64> {
        self.repository.count_by_recipient(recipient_id).await
    }

    /// Newest-first page of a recipient's notifications with the total count.
    pub async fn list_for_recipient(
        &self,
        recipient_id: Uuid,
        page: u32,
        limit: u32,
    ) -> DomainResult<(Vec<Notification>, u64)> {
        self.repository
            .find_by_recipient(recipient_id, page, limit)
            .await
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mark;
    use async_trait::async_trait;
    use std::sync::Mutex;

    const RECIPIENT: &str = "11111111-1111-1111-1111-111111111111";
    const OTHER_RECIPIENT: &str = "22222222-2222-2222-2222-222222222222";

    /// In-memory repository double for exercising the service without a
    /// database.
    #[derive(Default)]
    struct InMemoryRepository {
        items: Mutex<Vec<Notification>>,
    }

    #[async_trait]
    impl NotificationRepository for InMemoryRepository {
        async fn create(&self, notification: &Notification) -> DomainResult<()> {
            self.items.lock().unwrap().push(notification.clone());
            Ok(())
        }

        async fn save(&self, notification: &Notification) -> DomainResult<()> {
            let mut items = self.items.lock().unwrap();
            match items.iter_mut().find(|n| n.id() == notification.id()) {
                Some(slot) => {
                    *slot = notification.clone();
                    Ok(())
                }
                None => Err(DomainError::not_found(
                    "Notification",
                    "id",
                    notification.id().to_string(),
                )),
            }
        }

        async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Notification>> {
            Ok(self
                .items
                .lock()
                .unwrap()
                .iter()
                .find(|n| n.id() == id)
                .cloned())
        }

        async fn count_by_recipient(&self, recipient_id: Uuid) -> DomainResult<u64> {
            Ok(self
                .items
                .lock()
                .unwrap()
                .iter()
                .filter(|n| n.recipient_id() == recipient_id)
                .count() as u64)
        }

        async fn find_by_recipient(
            &self,
            recipient_id: Uuid,
            page: u32,
            limit: u32,
        ) -> DomainResult<(Vec<Notification>, u64)> {
            let items = self.items.lock().unwrap();
            let mut matching: Vec<Notification> = items
                .iter()
                .filter(|n| n.recipient_id() == recipient_id)
                .cloned()
                .collect();
            matching.sort_by_key(|n| std::cmp::Reverse(n.created_at()));

            let total = matching.len() as u64;
            let offset = ((page.max(1) - 1) * limit) as usize;
            let page_items = matching
                .into_iter()
                .skip(offset)
                .take(limit as usize)
                .collect();
            Ok((page_items, total))
        }
    }

    fn service() -> (NotificationService, Arc<InMemoryRepository>) {
        let repository = Arc::new(InMemoryRepository::default());
        (NotificationService::new(repository.clone()), repository)
    }

    fn send_input(recipient_id: &str) -> SendNotificationInput {
        SendNotificationInput {
            recipient_id: recipient_id.to_string(),
            content: "Hello".to_string(),
            category: "system".to_string(),
        }
    }

    #[tokio::test]
    async fn send_persists_notification() {
        let (service, repository) = service();

        let sent = service.send(send_input(RECIPIENT)).await.unwrap();

        let stored = repository.find_by_id(sent.id()).await.unwrap().unwrap();
        assert_eq!(stored.recipient_id().to_string(), RECIPIENT);
        assert_eq!(stored.category(), "system");
        assert_eq!(stored.read_at(), Mark::Unset);
    }

    #[tokio::test]
    async fn send_rejects_invalid_input_without_persisting() {
        let (service, repository) = service();

        let err = service
            .send(SendNotificationInput {
                recipient_id: "not-a-uuid".to_string(),
                content: "x".to_string(),
                category: String::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidParams(_)));
        assert_eq!(repository.items.lock().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn cancel_stamps_and_saves() {
        let (service, repository) = service();
        let sent = service.send(send_input(RECIPIENT)).await.unwrap();

        let cancelled = service.cancel(sent.id()).await.unwrap();
        assert!(cancelled.cancelled_at().is_set());

        let stored = repository.find_by_id(sent.id()).await.unwrap().unwrap();
        assert!(stored.cancelled_at().is_set());
    }

    #[tokio::test]
    async fn cancel_unknown_id_is_not_found() {
        let (service, _) = service();
        let err = service.cancel(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn read_then_unread_round_trips_through_storage() {
        let (service, repository) = service();
        let sent = service.send(send_input(RECIPIENT)).await.unwrap();

        service.read(sent.id()).await.unwrap();
        let stored = repository.find_by_id(sent.id()).await.unwrap().unwrap();
        assert!(stored.read_at().is_set());

        service.unread(sent.id()).await.unwrap();
        let stored = repository.find_by_id(sent.id()).await.unwrap().unwrap();
        assert!(stored.read_at().is_cleared());
    }

    #[tokio::test]
    async fn count_is_scoped_to_recipient() {
        let (service, _) = service();
        service.send(send_input(RECIPIENT)).await.unwrap();
        service.send(send_input(RECIPIENT)).await.unwrap();
        service.send(send_input(OTHER_RECIPIENT)).await.unwrap();

        let count = service
            .count_for_recipient(Uuid::parse_str(RECIPIENT).unwrap())
            .await
            .unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn list_is_scoped_and_paginated() {
        let (service, _) = service();
        for _ in 0..3 {
            service.send(send_input(RECIPIENT)).await.unwrap();
        }
        service.send(send_input(OTHER_RECIPIENT)).await.unwrap();

        let recipient = Uuid::parse_str(RECIPIENT).unwrap();
        let (first_page, total) = service.list_for_recipient(recipient, 1, 2).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(first_page.len(), 2);

        let (second_page, _) = service.list_for_recipient(recipient, 2, 2).await.unwrap();
        assert_eq!(second_page.len(), 1);
    }
}
