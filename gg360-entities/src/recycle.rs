use strum::{EnumCount, EnumIter, IntoStaticStr};

use crate::{id::Id, status::Status, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount, IntoStaticStr)]
pub enum RecycleStatus {
    #[strum(serialize = "Pending")]
    Pending,
    #[strum(serialize = "Verified")]
    Verified,
    #[strum(serialize = "Rejected")]
    Rejected,
}

impl Status for RecycleStatus {}

/// Waste handed in at a recycling center checkpoint.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct RecycleEntry {
    pub id               : Id,
    pub user_id          : Option<Id>,
    pub user_name        : Option<String>,
    pub user_phone       : Option<String>,
    pub waste_type       : Option<String>,
    /// Kilograms
    pub quantity         : Option<f64>,
    pub recycling_center : Option<String>,
    pub date_time        : Option<Timestamp>,
    pub status           : Option<RecycleStatus>,
}
