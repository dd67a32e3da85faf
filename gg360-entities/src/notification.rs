use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id      : Id,
    pub title   : String,
    pub message : String,
    pub created : Timestamp,
    pub read    : bool,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Id::new(),
            title: title.into(),
            message: message.into(),
            created: Timestamp::now(),
            read: false,
        }
    }
}
