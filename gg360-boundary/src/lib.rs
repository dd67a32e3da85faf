//! # gg360-boundary
//!
//! The JSON shapes of the Go Green 360 REST API.
//!
//! Records are identified by `_id` (or `id`) and use camelCase field
//! names. Some endpoints wrap their payload in `{success, data, message}`,
//! others return it bare: [`ApiResponse`] accepts both.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;
mod de;

/// A collection endpoint of the API.
pub trait Resource {
    /// Path relative to the API base URL, e.g. `/api/events`.
    const PATH: &'static str;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}

/// The body of a failed request as far as it can be understood.
#[derive(Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.error)
            .filter(|msg| !msg.trim().is_empty())
    }
}

#[derive(Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

/// Either a wrapped or a bare payload.
#[derive(Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Wrapped(Envelope<T>),
    Bare(T),
}

impl<T> ApiResponse<T> {
    /// Normalizes both response shapes into the payload.
    pub fn into_result(self) -> Result<T, Error> {
        match self {
            Self::Bare(data) => Ok(data),
            Self::Wrapped(Envelope {
                success: true,
                data: Some(data),
                ..
            }) => Ok(data),
            Self::Wrapped(Envelope {
                success,
                data: _,
                message,
            }) => {
                let message = message
                    .filter(|msg| !msg.trim().is_empty())
                    .unwrap_or_else(|| {
                        if success {
                            "The response contained no data".to_string()
                        } else {
                            "The request was not successful".to_string()
                        }
                    });
                Err(Error {
                    http_status: 200,
                    message,
                })
            }
        }
    }
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct StatusUpdate {
    pub status: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(rename = "_id", default)]
    pub id            : String,
    /// Virtual copy of `_id` added by some endpoints
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub alt_id        : Option<String>,
    pub waste_type    : Option<String>,
    pub location      : Option<String>,
    pub reporter_name : Option<String>,
    pub report_date   : Option<String>,
    pub description   : Option<String>,
    pub status        : Option<String>,
}

impl Resource for Report {
    const PATH: &'static str = "/api/report/reports";
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct RecycleEntry {
    #[serde(rename = "_id", default)]
    pub id               : String,
    /// Virtual copy of `_id` added by some endpoints
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub alt_id           : Option<String>,
    pub user_id          : Option<String>,
    pub user_name        : Option<String>,
    pub user_phone       : Option<String>,
    pub waste_type       : Option<String>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub quantity         : Option<f64>,
    pub recycling_center : Option<String>,
    pub date_time        : Option<String>,
    pub status           : Option<String>,
}

impl Resource for RecycleEntry {
    const PATH: &'static str = "/api/recycle";
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    pub name        : Option<String>,
    pub address     : Option<String>,
    pub phone       : Option<String>,
    pub city        : Option<String>,
    pub state       : Option<String>,
    pub postal_code : Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Redeem {
    #[serde(rename = "_id", default)]
    pub id            : String,
    /// Virtual copy of `_id` added by some endpoints
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub alt_id        : Option<String>,
    pub user_id       : Option<String>,
    pub user_name     : Option<String>,
    pub reward_name   : Option<String>,
    #[serde(default, deserialize_with = "de::opt_u32")]
    pub reward_points : Option<u32>,
    pub shipping_info : Option<ShippingInfo>,
    pub status        : Option<String>,
    pub created_at    : Option<String>,
}

impl Resource for Redeem {
    const PATH: &'static str = "/api/redeem";
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NewRedeem {
    pub user_id       : String,
    pub reward_name   : String,
    pub reward_points : u32,
    pub shipping_info : ShippingInfo,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(alias = "user")]
    pub user_id       : Option<String>,
    /// Id of the embedded entry, used if no user is referenced
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub entry_id      : Option<String>,
    pub name          : Option<String>,
    pub email         : Option<String>,
    pub registered_at : Option<String>,
}

/// Participants are either embedded or referenced by user id.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(untagged)]
pub enum ParticipantRef {
    UserId(String),
    Details(Participant),
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", default)]
    pub id               : String,
    /// Virtual copy of `_id` added by some endpoints
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub alt_id           : Option<String>,
    #[serde(default)]
    pub title            : String,
    pub description      : Option<String>,
    pub date             : Option<String>,
    pub time             : Option<String>,
    pub location         : Option<String>,
    #[serde(default, deserialize_with = "de::opt_u32")]
    pub max_participants : Option<u32>,
    pub status           : Option<String>,
    #[serde(default)]
    pub participants     : Vec<ParticipantRef>,
}

impl Resource for Event {
    const PATH: &'static str = "/api/events";
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    #[serde(rename = "_id", default)]
    pub id         : String,
    /// Virtual copy of `_id` added by some endpoints
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub alt_id     : Option<String>,
    pub name       : Option<String>,
    pub email      : Option<String>,
    pub phone      : Option<String>,
    pub role       : Option<String>,
    pub department : Option<String>,
    pub status     : Option<String>,
    #[serde(alias = "joiningDate", alias = "createdAt")]
    pub join_date  : Option<String>,
}

impl Resource for Staff {
    const PATH: &'static str = "/api/staff";
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "_id", default)]
    pub id           : String,
    /// Virtual copy of `_id` added by some endpoints
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub alt_id       : Option<String>,
    #[serde(default)]
    pub title        : String,
    pub author       : Option<String>,
    pub category     : Option<String>,
    pub status       : Option<String>,
    #[serde(alias = "createdAt")]
    pub published_at : Option<String>,
    #[serde(default, deserialize_with = "de::opt_u32")]
    pub views        : Option<u32>,
}

impl Resource for Article {
    const PATH: &'static str = "/api/articles";
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id         : String,
    /// Virtual copy of `_id` added by some endpoints
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub alt_id     : Option<String>,
    #[serde(alias = "fullName")]
    pub name       : Option<String>,
    pub email      : Option<String>,
    pub phone      : Option<String>,
    pub city       : Option<String>,
    pub role       : Option<String>,
    #[serde(default, deserialize_with = "de::opt_u32")]
    pub points     : Option<u32>,
    pub status     : Option<String>,
    pub created_at : Option<String>,
}

impl Resource for User {
    const PATH: &'static str = "/api/users";
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    #[serde(rename = "_id", default)]
    pub id           : String,
    /// Virtual copy of `_id` added by some endpoints
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub alt_id       : Option<String>,
    pub name         : Option<String>,
    pub email        : Option<String>,
    pub phone        : Option<String>,
    pub event_id     : Option<String>,
    pub availability : Option<String>,
    pub status       : Option<String>,
    pub created_at   : Option<String>,
}

impl Resource for Volunteer {
    const PATH: &'static str = "/api/volunteers";
}
