//! Notification entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::domain::{CreateNotificationProps, DomainResult, Mark, Notification};

/// Notification row - one notification addressed to a single recipient
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    /// Notification UUID
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Addressee UUID
    pub recipient_id: String,

    /// Notification body text
    pub content: String,

    /// Classification, e.g. "system", "billing"
    pub category: String,

    /// When the notification was created
    pub created_at: DateTime<Utc>,

    /// When the notification was read (NULL = not read)
    pub read_at: Option<DateTime<Utc>>,

    /// When the notification was cancelled (NULL = not cancelled)
    pub cancelled_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A stored NULL means "explicitly absent"; the unset/cleared distinction
/// only exists within an entity's in-memory lifetime and does not
/// round-trip through storage.
fn mark_from_column(value: Option<DateTime<Utc>>) -> Mark {
    match value {
        Some(t) => Mark::Set(t),
        None => Mark::Cleared,
    }
}

impl Model {
    /// Rebuild the domain entity from this row.
    ///
    /// Goes through the guarded factory, so a corrupt row surfaces as
    /// `InvalidParams` instead of producing an invariant-violating entity.
    pub fn into_domain(self) -> DomainResult<Notification> {
        Notification::create(CreateNotificationProps {
            id: Some(self.id),
            recipient_id: self.recipient_id,
            content: self.content,
            category: self.category,
            read_at: mark_from_column(self.read_at),
            cancelled_at: mark_from_column(self.cancelled_at),
            created_at: Some(self.created_at),
        })
    }
}

/// Serialize a domain entity into an active model ready for insert/update.
pub fn active_model_from_domain(notification: &Notification) -> ActiveModel {
    ActiveModel {
        id: Set(notification.id().to_string()),
        recipient_id: Set(notification.recipient_id().to_string()),
        content: Set(notification.content().as_str().to_string()),
        category: Set(notification.category().to_string()),
        created_at: Set(notification.created_at()),
        read_at: Set(notification.read_at().time()),
        cancelled_at: Set(notification.cancelled_at().time()),
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;

    fn sample_row() -> Model {
        Model {
            id: "44444444-4444-4444-4444-444444444444".to_string(),
            recipient_id: "11111111-1111-1111-1111-111111111111".to_string(),
            content: "Hello".to_string(),
            category: "system".to_string(),
            created_at: Utc::now(),
            read_at: None,
            cancelled_at: None,
        }
    }

    #[test]
    fn row_maps_to_domain() {
        let row = sample_row();
        let n = row.clone().into_domain().unwrap();
        assert_eq!(n.id().to_string(), row.id);
        assert_eq!(n.recipient_id().to_string(), row.recipient_id);
        assert_eq!(n.content().as_str(), "Hello");
        assert_eq!(n.created_at(), row.created_at);
    }

    #[test]
    fn null_columns_map_to_cleared_marks() {
        let n = sample_row().into_domain().unwrap();
        assert!(n.read_at().is_cleared());
        assert!(n.cancelled_at().is_cleared());
    }

    #[test]
    fn stamped_columns_map_to_set_marks() {
        let read_at = Utc::now();
        let row = Model {
            read_at: Some(read_at),
            ..sample_row()
        };
        let n = row.into_domain().unwrap();
        assert_eq!(n.read_at().time(), Some(read_at));
        assert!(n.cancelled_at().is_cleared());
    }

    #[test]
    fn corrupt_row_is_rejected() {
        let row = Model {
            category: String::new(),
            ..sample_row()
        };
        assert!(row.into_domain().is_err());
    }

    #[test]
    fn domain_maps_to_active_model() {
        let mut n = sample_row().into_domain().unwrap();
        n.read();

        let active = active_model_from_domain(&n);
        assert_eq!(
            active.id,
            ActiveValue::Set("44444444-4444-4444-4444-444444444444".to_string())
        );
        assert_eq!(active.read_at, ActiveValue::Set(n.read_at().time()));
        assert_eq!(active.cancelled_at, ActiveValue::Set(None));
    }
}
