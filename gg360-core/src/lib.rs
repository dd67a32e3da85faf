//! # gg360-core
//!
//! Business logic of the Go Green 360 back-office: filtering, summarizing
//! and exporting records, the events calendar, the redeem workflow and
//! the notification inbox.
//!
//! Everything in here is synchronous and free of I/O. Access to the
//! platform API is abstracted by the traits in [`gateways`].

pub mod calendar;
pub mod export;
pub mod filter;
pub mod gateways;
pub mod notification;
pub mod resource;
pub mod summary;
pub mod transition;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use gg360_entities::{
        article::*, event::*, id::*, kind::*, notification::*, recycle::*, redeem::*, report::*,
        staff::*, status::*, time::*, user::*, volunteer::*,
    };
}
