mod change_redeem_status;
mod change_report_status;
mod create_redeem;
mod delete_record;
mod error;
mod generate_report;
mod load_calendar;


pub use self::{
    change_redeem_status::*, change_report_status::*, create_redeem::*, delete_record::*,
    error::Error, generate_report::*, load_calendar::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::*, resource::Reportable};
}

use self::prelude::*;

/// Records a notification without failing the surrounding use case.
fn notify<N: NotificationStore>(notifications: &N, title: &str, message: String) {
    log::info!("{message}");
    if let Err(err) = notifications.enqueue(Notification::new(title, message)) {
        log::warn!("Unable to store notification: {err}");
    }
}
