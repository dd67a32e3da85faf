//! # gg360-gateways
//!
//! Implementations of the gateway traits of `gg360-core`: the platform
//! REST API and a JSON file store for the notification inbox.

mod notifications;
mod rest;

pub use self::{notifications::JsonFileNotifications, rest::*};
