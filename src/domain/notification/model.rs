//! Notification domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::guard;

/// Tri-state timestamp for the read/cancel marks.
///
/// Distinguishes a mark that was never touched from one that was explicitly
/// cleared, and both from one carrying a concrete time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mark {
    /// Never set
    #[default]
    Unset,
    /// Explicitly marked absent (e.g. "unread")
    Cleared,
    /// Stamped at the given instant
    Set(DateTime<Utc>),
}

impl Mark {
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    pub fn is_cleared(&self) -> bool {
        matches!(self, Self::Cleared)
    }

    /// The stamped time, if any.
    pub fn time(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Set(t) => Some(*t),
            _ => None,
        }
    }
}

/// Notification body text. Construction rejects an empty payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContent(String);

impl NotificationContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::InvalidParams(
                "Notification content cannot be empty".to_string(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NotificationContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input for [`Notification::create`].
///
/// `recipient_id` and `id` arrive as raw strings so that malformed values
/// are reported through the guard combination instead of failing earlier
/// at the type level.
#[derive(Debug, Clone, Default)]
pub struct CreateNotificationProps {
    /// Supplied when rebuilding a stored notification; generated otherwise
    pub id: Option<String>,
    pub recipient_id: String,
    /// Raw payload for the content value object
    pub content: String,
    pub category: String,
    pub read_at: Mark,
    pub cancelled_at: Mark,
    /// Defaults to the construction time
    pub created_at: Option<DateTime<Utc>>,
}

/// A notification addressed to a single recipient.
///
/// Constructed only through [`Notification::create`], which enforces the
/// invariants: non-empty category, well-formed recipient id, and (when
/// supplied) well-formed id. Identity is the id alone: two instances with
/// the same id compare equal regardless of the remaining fields.
///
/// Only the read/cancel marks change after construction, and only through
/// [`read`](Self::read), [`unread`](Self::unread) and
/// [`cancel`](Self::cancel).
#[derive(Debug, Clone)]
pub struct Notification {
    id: Uuid,
    recipient_id: Uuid,
    content: NotificationContent,
    category: String,
    created_at: DateTime<Utc>,
    read_at: Mark,
    cancelled_at: Mark,
}

impl PartialEq for Notification {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Notification {}

impl Notification {
    /// Run every construction guard. Failures are combined, not
    /// short-circuited, so the error lists each violated rule.
    fn guard(props: &CreateNotificationProps) -> DomainResult<()> {
        let mut checks = vec![
            guard::against_empty(&props.category, "Notification category"),
            guard::against_empty(&props.recipient_id, "Recipient ID"),
            guard::against_non_uuid(&props.recipient_id, "Recipient ID"),
        ];

        if let Some(id) = &props.id {
            checks.push(guard::against_non_uuid(id, "Notification ID"));
        }

        guard::combine(checks)
    }

    /// Guarded factory.
    ///
    /// Validates the input, builds the content value object (whose own
    /// failure propagates), assigns a fresh id and creation time when not
    /// supplied, and passes the read/cancel marks through unchanged.
    pub fn create(props: CreateNotificationProps) -> DomainResult<Self> {
        Self::guard(&props)?;

        let content = NotificationContent::new(props.content)?;

        // The guards above already proved both parse.
        let recipient_id = Uuid::parse_str(&props.recipient_id)
            .map_err(|e| DomainError::InvalidParams(e.to_string()))?;
        let id = match props.id {
            Some(id) => {
                Uuid::parse_str(&id).map_err(|e| DomainError::InvalidParams(e.to_string()))?
            }
            None => Uuid::new_v4(),
        };

        Ok(Self {
            id,
            recipient_id,
            content,
            category: props.category,
            created_at: props.created_at.unwrap_or_else(Utc::now),
            read_at: props.read_at,
            cancelled_at: props.cancelled_at,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn recipient_id(&self) -> Uuid {
        self.recipient_id
    }

    pub fn content(&self) -> &NotificationContent {
        &self.content
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn read_at(&self) -> Mark {
        self.read_at
    }

    pub fn cancelled_at(&self) -> Mark {
        self.cancelled_at
    }

    /// Stamp the cancellation time. Unconditional: a repeated cancel
    /// re-stamps with the current time (last write wins).
    pub fn cancel(&mut self) {
        self.cancelled_at = Mark::Set(Utc::now());
    }

    /// Stamp the read time.
    pub fn read(&mut self) {
        self.read_at = Mark::Set(Utc::now());
    }

    /// Explicitly mark as not read, distinct from never having been read.
    pub fn unread(&mut self) {
        self.read_at = Mark::Cleared;
    }
}

// ── Tests ──────────────────────────────────────────────────────
