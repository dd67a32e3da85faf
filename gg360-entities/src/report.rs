use strum::{EnumCount, EnumIter, IntoStaticStr};

use crate::{id::Id, status::Status, time::Date};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount, IntoStaticStr)]
pub enum ReportStatus {
    #[strum(serialize = "Pending")]
    Pending,
    #[strum(serialize = "In Progress")]
    InProgress,
    #[strum(serialize = "Resolved")]
    Resolved,
}

impl Status for ReportStatus {}

/// A citizen's report of illegally dumped or uncollected waste.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct WasteReport {
    pub id            : Id,
    pub waste_type    : Option<String>,
    pub location      : Option<String>,
    pub reporter_name : Option<String>,
    pub report_date   : Option<Date>,
    pub description   : Option<String>,
    pub status        : Option<ReportStatus>,
}
