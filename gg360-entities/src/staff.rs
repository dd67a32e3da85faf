use strum::{EnumCount, EnumIter, IntoStaticStr};

use crate::{id::Id, status::Status, time::Date};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount, IntoStaticStr)]
pub enum StaffStatus {
    #[strum(serialize = "Active")]
    Active,
    #[strum(serialize = "Inactive")]
    Inactive,
    #[strum(serialize = "On Leave")]
    OnLeave,
}

impl Status for StaffStatus {}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staff {
    pub id         : Id,
    pub name       : Option<String>,
    pub email      : Option<String>,
    pub phone      : Option<String>,
    pub role       : Option<String>,
    pub department : Option<String>,
    pub status     : Option<StaffStatus>,
    pub joined     : Option<Date>,
}
