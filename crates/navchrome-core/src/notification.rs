//! Notification list shown in the header bell dropdown.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// A single notification entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationItem {
    /// Unique identifier.
    pub id: u64,
    /// Message body.
    pub message: String,
    /// Human-readable relative time (e.g. "2 minutes ago").
    pub time: String,
}

impl NotificationItem {
    /// Create a new notification.
    pub fn new(id: u64, message: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
            time: time.into(),
        }
    }
}

/// Ordered list of pending notifications.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct NotificationList {
    items: Vec<NotificationItem>,
}

impl NotificationList {
    /// Create a list from existing items.
    #[must_use]
    pub const fn new(items: Vec<NotificationItem>) -> Self {
        Self { items }
    }

    /// Parse and validate the seed list (`notifications.json`, a JSON array).
    pub fn from_json(json: &str) -> Result<Self> {
        let list: Self = serde_json::from_str(json)?;
        list.validate()?;
        debug!(count = list.len(), "Loaded seed notifications");
        Ok(list)
    }

    /// Check that ids are unique; they key the rendered rows and `remove`.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.items.len());
        match self.items.iter().find(|n| !seen.insert(n.id)) {
            Some(dup) => Err(Error::DuplicateNotificationId(dup.id)),
            None => Ok(()),
        }
    }

    /// Items in display order.
    #[must_use]
    pub fn items(&self) -> &[NotificationItem] {
        &self.items
    }

    /// Number of pending notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there is nothing pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove one notification. Returns whether anything was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        before != self.items.len()
    }

    /// Drop every notification.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Text for the bell badge, `None` when there is nothing to show.
    #[must_use]
    pub fn badge(&self) -> Option<String> {
        (!self.items.is_empty()).then(|| self.items.len().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NotificationList {
        NotificationList::new(vec![
            NotificationItem::new(1, "New message from John", "2 minutes ago"),
            NotificationItem::new(2, "Your report is ready", "1 hour ago"),
            NotificationItem::new(3, "Meeting scheduled for 3 PM", "3 hours ago"),
        ])
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut list = sample();
        assert!(list.remove(2));
        let ids: Vec<u64> = list.items().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut list = sample();
        assert!(!list.remove(42));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_badge() {
        let mut list = sample();
        assert_eq!(list.badge().as_deref(), Some("3"));
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.badge(), None);
    }

    #[test]
    fn test_from_json_array() {
        let list = NotificationList::from_json(
            r#"[ { "id": 7, "message": "Hi", "time": "now" } ]"#,
        )
        .unwrap();
        assert_eq!(list.items()[0], NotificationItem::new(7, "Hi", "now"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            { "id": 1, "message": "First", "time": "now" },
            { "id": 1, "message": "Second", "time": "now" }
        ]"#;
        assert!(matches!(
            NotificationList::from_json(json),
            Err(Error::DuplicateNotificationId(1))
        ));
    }
}
