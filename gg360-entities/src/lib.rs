#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # gg360-entities
//!
//! Reusable, agnostic domain entities for Go Green 360.
//!
//! The entities mirror the records owned by the remote platform API.
//! They only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod article;
pub mod event;
pub mod id;
pub mod kind;
pub mod notification;
pub mod recycle;
pub mod redeem;
pub mod report;
pub mod staff;
pub mod status;
pub mod time;
pub mod user;
pub mod volunteer;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
