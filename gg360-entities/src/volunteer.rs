use strum::{EnumCount, EnumIter, IntoStaticStr};

use crate::{id::Id, status::Status, time::Date};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount, IntoStaticStr)]
pub enum VolunteerStatus {
    #[strum(serialize = "Pending")]
    Pending,
    #[strum(serialize = "Approved")]
    Approved,
    #[strum(serialize = "Rejected")]
    Rejected,
}

impl Status for VolunteerStatus {}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volunteer {
    pub id           : Id,
    pub name         : Option<String>,
    pub email        : Option<String>,
    pub phone        : Option<String>,
    pub event_id     : Option<Id>,
    pub availability : Option<String>,
    pub status       : Option<VolunteerStatus>,
    pub registered   : Option<Date>,
}
