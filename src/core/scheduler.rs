//! Cancellable, identified delayed tasks.
//!
//! Every delayed continuation (counter ticks, simulated submissions, toast
//! expiry) belongs to a [`TaskKey`]. Starting a task for a key invalidates the
//! previous ticket for that key, so a stale continuation that wakes up later
//! sees `is_current == false` and does nothing.
//!
//! The scheduler is single-owner (`Rc<RefCell<_>>`) and lives on the UI
//! thread together with the document it guards.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Identity of a scheduled continuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskKey {
    /// Contact form submission delay
    ContactSubmit,
    /// Auto-hide of the contact success indicator
    ContactSuccessHide,
    /// Newsletter submission delay
    NewsletterSubmit,
    /// Blog "load more" delay
    LoadMore,
    /// Counter animation for the n-th counter element
    Counter(usize),
    /// Staggered reveal for the n-th animated element
    Reveal(usize),
    /// Auto-dismiss of a toast by notification id
    Toast(u64),
}

/// Proof that a task was started; compare with [`Scheduler::is_current`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    key: TaskKey,
    generation: u64,
}

#[derive(Debug, Default)]
struct Registry {
    next_generation: u64,
    active: HashMap<TaskKey, u64>,
}

/// Shared handle to the task registry.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    inner: Rc<RefCell<Registry>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a task for `key`, invalidating any previous ticket for it.
    pub fn begin(&self, key: TaskKey) -> Ticket {
        let mut registry = self.inner.borrow_mut();
        registry.next_generation += 1;
        let generation = registry.next_generation;
        registry.active.insert(key, generation);
        Ticket { key, generation }
    }

    /// Whether `ticket` is still the live task for its key.
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.inner.borrow().active.get(&ticket.key) == Some(&ticket.generation)
    }

    /// Whether any task is live for `key`.
    pub fn is_pending(&self, key: TaskKey) -> bool {
        self.inner.borrow().active.contains_key(&key)
    }

    /// Invalidate the live task for `key`, if any.
    pub fn cancel(&self, key: TaskKey) -> bool {
        self.inner.borrow_mut().active.remove(&key).is_some()
    }

    /// Mark `ticket` as done. No-op when it was already replaced.
    pub fn finish(&self, ticket: Ticket) {
        let mut registry = self.inner.borrow_mut();
        if registry.active.get(&ticket.key) == Some(&ticket.generation) {
            registry.active.remove(&ticket.key);
        }
    }

    /// Number of live tasks.
    #[cfg(test)]
    pub fn pending_count(&self) -> usize {
        self.inner.borrow().active.len()
    }
}
