// Access traits for the remote platform API.
// Each collection is responsible for a single entity kind.
// The client holds no authoritative state: every call goes
// to the remote store and returned records replace the
// cached ones.

use std::io;

use thiserror::Error;

use crate::{entities::*, resource::Reportable};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to reach the server: {0}")]
    Fetch(String),
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("The requested object could not be found")]
    NotFound,
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub trait Collection<T> {
    fn list(&self) -> Result<Vec<T>>;
    fn get(&self, id: &Id) -> Result<T>;
    fn delete(&self, id: &Id) -> Result<()>;
}

/// `PATCH {collection}/{id}/status`
pub trait StatusChange<T: Reportable> {
    fn change_status(&self, id: &Id, status: T::Status) -> Result<T>;
}

pub trait RedeemRequests {
    fn create_redeem(&self, new_redeem: &NewRedeem) -> Result<Redeem>;
}

/// Persistence of the notification inbox.
pub trait NotificationStore {
    fn enqueue(&self, notification: Notification) -> Result<()>;

    /// Newest first
    fn list(&self) -> Result<Vec<Notification>>;

    /// Returns `false` if the notification does not exist.
    fn mark_read(&self, id: &Id) -> Result<bool>;

    /// Returns the number of notifications changed.
    fn mark_all_read(&self) -> Result<usize>;

    fn unread_count(&self) -> Result<usize> {
        Ok(self.list()?.iter().filter(|n| !n.read).count())
    }
}
