use std::{cell::RefCell, collections::VecDeque};

use crate::{
    entities::{Id, Notification},
    gateways::{NotificationStore, Result},
};

pub const DEFAULT_CAPACITY: usize = 50;

/// A bounded queue of notifications, oldest first.
///
/// When the inbox is full the oldest read notification is dropped,
/// or the oldest notification if all of them are unread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbox {
    capacity: usize,
    items: VecDeque<Notification>,
}

impl Default for Inbox {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl Inbox {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Restores an inbox, keeping the newest notifications that fit.
    pub fn from_notifications(capacity: usize, notifications: Vec<Notification>) -> Self {
        let mut inbox = Self::with_capacity(capacity);
        for n in notifications {
            inbox.enqueue(n);
        }
        inbox
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the evicted notification, if any.
    pub fn enqueue(&mut self, notification: Notification) -> Option<Notification> {
        let evicted = if self.items.len() >= self.capacity {
            let idx = self.items.iter().position(|n| n.read).unwrap_or(0);
            self.items.remove(idx)
        } else {
            None
        };
        if let Some(n) = &evicted {
            log::debug!("Evicted notification {} from the inbox", n.id);
        }
        self.items.push_back(notification);
        evicted
    }

    /// Newest first
    pub fn list(&self) -> Vec<Notification> {
        self.items.iter().rev().cloned().collect()
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn mark_read(&mut self, id: &Id) -> bool {
        match self.items.iter_mut().find(|n| &n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) -> usize {
        let mut count = 0;
        for n in self.items.iter_mut().filter(|n| !n.read) {
            n.read = true;
            count += 1;
        }
        count
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }
}

/// A volatile inbox that lives as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryInbox {
    inbox: RefCell<Inbox>,
}

impl InMemoryInbox {
    pub fn new(capacity: usize) -> Self {
        Self {
            inbox: RefCell::new(Inbox::with_capacity(capacity)),
        }
    }
}

impl NotificationStore for InMemoryInbox {
    fn enqueue(&self, notification: Notification) -> Result<()> {
        self.inbox.borrow_mut().enqueue(notification);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Notification>> {
        Ok(self.inbox.borrow().list())
    }

    fn mark_read(&self, id: &Id) -> Result<bool> {
        Ok(self.inbox.borrow_mut().mark_read(id))
    }

    fn mark_all_read(&self) -> Result<usize> {
        Ok(self.inbox.borrow_mut().mark_all_read())
    }

    fn unread_count(&self) -> Result<usize> {
        Ok(self.inbox.borrow().unread_count())
    }
}
