//! Non-blocking notification queue backing the toast stack.

use std::collections::VecDeque;

use crate::models::{Notification, NotificationKind};

/// Bounded queue of visible notifications (oldest first).
#[derive(Clone, Debug)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    capacity: usize,
    next_id: u64,
}

/// Outcome of [`NotificationQueue::push`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pushed {
    /// Id of the new notification
    pub id: u64,
    /// Id of the oldest notification, if it was dropped to make room
    pub evicted: Option<u64>,
}

impl NotificationQueue {
    /// Creates a queue holding at most `capacity` notifications (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 0,
        }
    }

    /// Queue a notification, dropping the oldest when full.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> Pushed {
        let id = self.next_id;
        self.next_id += 1;

        let evicted = if self.items.len() == self.capacity {
            self.items.pop_front().map(|n| n.id)
        } else {
            None
        };
        self.items.push_back(Notification {
            id,
            kind,
            message: message.into(),
        });
        Pushed { id, evicted }
    }

    /// Remove the notification with `id`. Returns whether it was present.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn to_vec(&self) -> Vec<Notification> {
        self.items.iter().cloned().collect()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(crate::config::toast::MAX_VISIBLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(queue: &NotificationQueue) -> Vec<String> {
        queue.to_vec().into_iter().map(|n| n.message).collect()
    }

    #[test]
    fn test_push_assigns_unique_ids() {
        let mut queue = NotificationQueue::new(4);
        let a = queue.push(NotificationKind::Info, "one");
        let b = queue.push(NotificationKind::Success, "two");
        assert_ne!(a.id, b.id);
        assert_eq!(a.evicted, None);
        assert_eq!(b.evicted, None);
        assert_eq!(queue.to_vec().len(), 2);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut queue = NotificationQueue::new(2);
        let first = queue.push(NotificationKind::Info, "one");
        queue.push(NotificationKind::Info, "two");
        let third = queue.push(NotificationKind::Error, "three");

        assert_eq!(third.evicted, Some(first.id));
        assert_eq!(messages(&queue), vec!["two", "three"]);
    }

    #[test]
    fn test_dismiss_is_exact() {
        let mut queue = NotificationQueue::new(4);
        let a = queue.push(NotificationKind::Info, "one").id;
        let b = queue.push(NotificationKind::Info, "two").id;

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.to_vec().len(), 1);
        assert_eq!(queue.to_vec()[0].id, b);
    }

    #[test]
    fn test_dismissed_slot_is_not_reported_as_evicted() {
        let mut queue = NotificationQueue::new(2);
        let a = queue.push(NotificationKind::Info, "one").id;
        queue.push(NotificationKind::Info, "two");
        queue.dismiss(a);

        assert_eq!(queue.push(NotificationKind::Info, "three").evicted, None);
        assert_eq!(messages(&queue), vec!["two", "three"]);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut queue = NotificationQueue::new(0);
        let first = queue.push(NotificationKind::Info, "one").id;
        let second = queue.push(NotificationKind::Info, "two");
        assert_eq!(second.evicted, Some(first));
        assert_eq!(messages(&queue), vec!["two"]);
    }
}
