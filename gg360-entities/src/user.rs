use strum::{EnumCount, EnumIter, IntoStaticStr};

use crate::{id::Id, status::Status, time::Date};

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount, IntoStaticStr)]
pub enum Role {
    #[strum(serialize = "user")]
    User,
    #[strum(serialize = "admin")]
    Admin,
}

impl Default for Role {
    fn default() -> Role {
        Role::User
    }
}

impl Status for Role {}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount, IntoStaticStr)]
pub enum UserStatus {
    #[strum(serialize = "active")]
    Active,
    #[strum(serialize = "inactive")]
    Inactive,
    #[strum(serialize = "suspended")]
    Suspended,
}

impl Status for UserStatus {}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id     : Id,
    pub name   : Option<String>,
    pub email  : Option<String>,
    pub phone  : Option<String>,
    pub city   : Option<String>,
    pub role   : Option<Role>,
    /// Reward points collected through recycling
    pub points : Option<u32>,
    pub status : Option<UserStatus>,
    pub joined : Option<Date>,
}
