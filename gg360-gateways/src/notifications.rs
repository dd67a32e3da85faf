use std::{io, path::Path};

use jfs::Store;
use serde::{Deserialize, Serialize};

use gg360_core::{
    entities::{Id, Notification, Timestamp},
    gateways::{NotificationStore, Result},
    notification::Inbox,
};

const INBOX_KEY: &str = "inbox";

/// Keeps the notification inbox in a JSON file.
pub struct JsonFileNotifications {
    json_store: Store,
    capacity: usize,
}

impl JsonFileNotifications {
    pub fn try_new<P: AsRef<Path>>(directory: P, capacity: usize) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self {
            json_store,
            capacity,
        })
    }

    pub fn path(&self) -> &Path {
        self.json_store.path()
    }

    fn load(&self) -> io::Result<Inbox> {
        let stored = match self.json_store.get::<Vec<JsonNotification>>(INBOX_KEY) {
            Ok(stored) => stored,
            Err(err) if err.kind() == io::ErrorKind::NotFound => vec![],
            Err(err) => return Err(err),
        };
        let notifications = stored.into_iter().map(Notification::from).collect();
        Ok(Inbox::from_notifications(self.capacity, notifications))
    }

    fn save(&self, inbox: &Inbox) -> io::Result<()> {
        let stored: Vec<_> = inbox.iter().map(JsonNotification::from).collect();
        self.json_store.save_with_id(&stored, INBOX_KEY)?;
        Ok(())
    }

    fn modify<T>(&self, f: impl FnOnce(&mut Inbox) -> T) -> Result<T> {
        let mut inbox = self.load()?;
        let result = f(&mut inbox);
        self.save(&inbox)?;
        Ok(result)
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct JsonNotification {
    id: String,
    title: String,
    message: String,
    created: i64,
    read: bool,
}

impl From<&Notification> for JsonNotification {
    fn from(from: &Notification) -> Self {
        Self {
            id: from.id.to_string(),
            title: from.title.clone(),
            message: from.message.clone(),
            created: from.created.as_millis(),
            read: from.read,
        }
    }
}

impl From<JsonNotification> for Notification {
    fn from(from: JsonNotification) -> Self {
        let JsonNotification {
            id,
            title,
            message,
            created,
            read,
        } = from;
        Self {
            id: id.into(),
            title,
            message,
            created: Timestamp::try_from_millis(created).unwrap_or_else(Timestamp::now),
            read,
        }
    }
}

impl NotificationStore for JsonFileNotifications {
    fn enqueue(&self, notification: Notification) -> Result<()> {
        self.modify(|inbox| {
            inbox.enqueue(notification);
        })
    }

    fn list(&self) -> Result<Vec<Notification>> {
        Ok(self.load()?.list())
    }

    fn mark_read(&self, id: &Id) -> Result<bool> {
        self.modify(|inbox| inbox.mark_read(id))
    }

    fn mark_all_read(&self) -> Result<usize> {
        self.modify(Inbox::mark_all_read)
    }

    fn unread_count(&self) -> Result<usize> {
        Ok(self.load()?.unread_count())
    }
}
