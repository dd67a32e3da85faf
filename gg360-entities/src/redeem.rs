use strum::{EnumCount, EnumIter, IntoStaticStr};

use crate::{id::Id, status::Status, time::Timestamp};

/// Lifecycle of a reward redemption.
///
/// The only valid transitions are `Pending -> Shipped -> Delivered`.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount, IntoStaticStr)]
pub enum RedeemStatus {
    #[strum(serialize = "pending")]
    Pending,
    #[strum(serialize = "shipped")]
    Shipped,
    #[strum(serialize = "delivered")]
    Delivered,
}

impl Status for RedeemStatus {}

impl RedeemStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered)
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingInfo {
    pub name        : Option<String>,
    pub address     : Option<String>,
    pub phone       : Option<String>,
    pub city        : Option<String>,
    pub state       : Option<String>,
    pub postal_code : Option<String>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Redeem {
    pub id            : Id,
    pub user_id       : Option<Id>,
    pub user_name     : Option<String>,
    pub reward_name   : Option<String>,
    pub reward_points : Option<u32>,
    pub shipping_info : ShippingInfo,
    pub status        : Option<RedeemStatus>,
    pub requested_at  : Option<Timestamp>,
}

/// A redemption request that has not been stored yet.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRedeem {
    pub user_id       : Id,
    pub reward_name   : String,
    pub reward_points : u32,
    pub shipping_info : ShippingInfo,
}
