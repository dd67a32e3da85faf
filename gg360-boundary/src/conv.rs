use super::*;
use e::{
    status::Status,
    time::{format_iso_date, parse_calendar_date, parse_timestamp, Timestamp},
};
use gg360_entities as e;

/// Prefers `_id` and falls back to the virtual `id`.
fn record_id(id: String, alt_id: Option<String>) -> String {
    if id.trim().is_empty() {
        alt_id.unwrap_or(id)
    } else {
        id
    }
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

fn status<S: Status>(label: Option<String>) -> Option<S> {
    label.as_deref().and_then(S::parse_label)
}

fn label<S: Status>(status: Option<S>) -> Option<String> {
    status.map(|s| s.label().to_owned())
}

fn rfc3339(t: Timestamp) -> Option<String> {
    use time::format_description::well_known::Rfc3339;
    t.into_inner().format(&Rfc3339).ok()
}

impl From<Report> for e::report::WasteReport {
    fn from(from: Report) -> Self {
        let Report {
            id,
            alt_id,
            waste_type,
            location,
            reporter_name,
            report_date,
            description,
            status: status_label,
        } = from;
        Self {
            id: record_id(id, alt_id).into(),
            waste_type: non_blank(waste_type),
            location: non_blank(location),
            reporter_name: non_blank(reporter_name),
            report_date: report_date.as_deref().and_then(parse_calendar_date),
            description: non_blank(description),
            status: status(status_label),
        }
    }
}

impl From<e::report::WasteReport> for Report {
    fn from(from: e::report::WasteReport) -> Self {
        let e::report::WasteReport {
            id,
            waste_type,
            location,
            reporter_name,
            report_date,
            description,
            status,
        } = from;
        Self {
            id: id.into(),
            alt_id: None,
            waste_type,
            location,
            reporter_name,
            report_date: report_date.map(format_iso_date),
            description,
            status: label(status),
        }
    }
}

impl From<RecycleEntry> for e::recycle::RecycleEntry {
    fn from(from: RecycleEntry) -> Self {
        let RecycleEntry {
            id,
            alt_id,
            user_id,
            user_name,
            user_phone,
            waste_type,
            quantity,
            recycling_center,
            date_time,
            status: status_label,
        } = from;
        Self {
            id: record_id(id, alt_id).into(),
            user_id: non_blank(user_id).map(Into::into),
            user_name: non_blank(user_name),
            user_phone: non_blank(user_phone),
            waste_type: non_blank(waste_type),
            quantity,
            recycling_center: non_blank(recycling_center),
            date_time: date_time.as_deref().and_then(parse_timestamp),
            status: status(status_label),
        }
    }
}

impl From<e::recycle::RecycleEntry> for RecycleEntry {
    fn from(from: e::recycle::RecycleEntry) -> Self {
        let e::recycle::RecycleEntry {
            id,
            user_id,
            user_name,
            user_phone,
            waste_type,
            quantity,
            recycling_center,
            date_time,
            status,
        } = from;
        Self {
            id: id.into(),
            alt_id: None,
            user_id: user_id.map(Into::into),
            user_name,
            user_phone,
            waste_type,
            quantity,
            recycling_center,
            date_time: date_time.and_then(rfc3339),
            status: label(status),
        }
    }
}

impl From<ShippingInfo> for e::redeem::ShippingInfo {
    fn from(from: ShippingInfo) -> Self {
        let ShippingInfo {
            name,
            address,
            phone,
            city,
            state,
            postal_code,
        } = from;
        Self {
            name: non_blank(name),
            address: non_blank(address),
            phone: non_blank(phone),
            city: non_blank(city),
            state: non_blank(state),
            postal_code: non_blank(postal_code),
        }
    }
}

impl From<e::redeem::ShippingInfo> for ShippingInfo {
    fn from(from: e::redeem::ShippingInfo) -> Self {
        let e::redeem::ShippingInfo {
            name,
            address,
            phone,
            city,
            state,
            postal_code,
        } = from;
        Self {
            name,
            address,
            phone,
            city,
            state,
            postal_code,
        }
    }
}

impl From<Redeem> for e::redeem::Redeem {
    fn from(from: Redeem) -> Self {
        let Redeem {
            id,
            alt_id,
            user_id,
            user_name,
            reward_name,
            reward_points,
            shipping_info,
            status: status_label,
            created_at,
        } = from;
        Self {
            id: record_id(id, alt_id).into(),
            user_id: non_blank(user_id).map(Into::into),
            user_name: non_blank(user_name),
            reward_name: non_blank(reward_name),
            reward_points,
            shipping_info: shipping_info.map(Into::into).unwrap_or_default(),
            status: status(status_label),
            requested_at: created_at.as_deref().and_then(parse_timestamp),
        }
    }
}

impl From<e::redeem::Redeem> for Redeem {
    fn from(from: e::redeem::Redeem) -> Self {
        let e::redeem::Redeem {
            id,
            user_id,
            user_name,
            reward_name,
            reward_points,
            shipping_info,
            status,
            requested_at,
        } = from;
        Self {
            id: id.into(),
            alt_id: None,
            user_id: user_id.map(Into::into),
            user_name,
            reward_name,
            reward_points,
            shipping_info: Some(shipping_info.into()),
            status: label(status),
            created_at: requested_at.and_then(rfc3339),
        }
    }
}

impl From<e::redeem::NewRedeem> for NewRedeem {
    fn from(from: e::redeem::NewRedeem) -> Self {
        let e::redeem::NewRedeem {
            user_id,
            reward_name,
            reward_points,
            shipping_info,
        } = from;
        Self {
            user_id: user_id.into(),
            reward_name,
            reward_points,
            shipping_info: shipping_info.into(),
        }
    }
}

impl From<ParticipantRef> for e::event::Participant {
    fn from(from: ParticipantRef) -> Self {
        match from {
            ParticipantRef::UserId(id) => Self {
                user_id: non_blank(Some(id)).map(Into::into),
                name: None,
                email: None,
                registered_at: None,
            },
            ParticipantRef::Details(Participant {
                user_id,
                entry_id,
                name,
                email,
                registered_at,
            }) => Self {
                user_id: non_blank(user_id).or_else(|| non_blank(entry_id)).map(Into::into),
                name: non_blank(name),
                email: non_blank(email),
                registered_at: registered_at.as_deref().and_then(parse_timestamp),
            },
        }
    }
}

impl From<e::event::Participant> for ParticipantRef {
    fn from(from: e::event::Participant) -> Self {
        let e::event::Participant {
            user_id,
            name,
            email,
            registered_at,
        } = from;
        match (user_id, name, email, registered_at) {
            (Some(id), None, None, None) => Self::UserId(id.into()),
            (user_id, name, email, registered_at) => Self::Details(Participant {
                user_id: user_id.map(Into::into),
                entry_id: None,
                name,
                email,
                registered_at: registered_at.and_then(rfc3339),
            }),
        }
    }
}

impl From<Event> for e::event::Event {
    fn from(from: Event) -> Self {
        let Event {
            id,
            alt_id,
            title,
            description,
            date,
            time,
            location,
            max_participants,
            status: status_label,
            participants,
        } = from;
        Self {
            id: record_id(id, alt_id).into(),
            title: title.trim().to_owned(),
            description: non_blank(description),
            date: date.as_deref().and_then(parse_calendar_date),
            time: non_blank(time),
            location: non_blank(location),
            max_participants,
            status: status(status_label),
            participants: participants.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<e::event::Event> for Event {
    fn from(from: e::event::Event) -> Self {
        let e::event::Event {
            id,
            title,
            description,
            date,
            time,
            location,
            max_participants,
            status,
            participants,
        } = from;
        Self {
            id: id.into(),
            alt_id: None,
            title,
            description,
            date: date.map(format_iso_date),
            time,
            location,
            max_participants,
            status: label(status),
            participants: participants.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Staff> for e::staff::Staff {
    fn from(from: Staff) -> Self {
        let Staff {
            id,
            alt_id,
            name,
            email,
            phone,
            role,
            department,
            status: status_label,
            join_date,
        } = from;
        Self {
            id: record_id(id, alt_id).into(),
            name: non_blank(name),
            email: non_blank(email),
            phone: non_blank(phone),
            role: non_blank(role),
            department: non_blank(department),
            status: status(status_label),
            joined: join_date.as_deref().and_then(parse_calendar_date),
        }
    }
}

impl From<e::staff::Staff> for Staff {
    fn from(from: e::staff::Staff) -> Self {
        let e::staff::Staff {
            id,
            name,
            email,
            phone,
            role,
            department,
            status,
            joined,
        } = from;
        Self {
            id: id.into(),
            alt_id: None,
            name,
            email,
            phone,
            role,
            department,
            status: label(status),
            join_date: joined.map(format_iso_date),
        }
    }
}

impl From<Article> for e::article::Article {
    fn from(from: Article) -> Self {
        let Article {
            id,
            alt_id,
            title,
            author,
            category,
            status: status_label,
            published_at,
            views,
        } = from;
        Self {
            id: record_id(id, alt_id).into(),
            title: title.trim().to_owned(),
            author: non_blank(author),
            category: non_blank(category),
            status: status(status_label),
            published: published_at.as_deref().and_then(parse_calendar_date),
            views,
        }
    }
}

impl From<e::article::Article> for Article {
    fn from(from: e::article::Article) -> Self {
        let e::article::Article {
            id,
            title,
            author,
            category,
            status,
            published,
            views,
        } = from;
        Self {
            id: id.into(),
            alt_id: None,
            title,
            author,
            category,
            status: label(status),
            published_at: published.map(format_iso_date),
            views,
        }
    }
}

impl From<User> for e::user::User {
    fn from(from: User) -> Self {
        let User {
            id,
            alt_id,
            name,
            email,
            phone,
            city,
            role,
            points,
            status: status_label,
            created_at,
        } = from;
        Self {
            id: record_id(id, alt_id).into(),
            name: non_blank(name),
            email: non_blank(email),
            phone: non_blank(phone),
            city: non_blank(city),
            role: status(role),
            points,
            status: status(status_label),
            joined: created_at.as_deref().and_then(parse_calendar_date),
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            name,
            email,
            phone,
            city,
            role,
            points,
            status,
            joined,
        } = from;
        Self {
            id: id.into(),
            alt_id: None,
            name,
            email,
            phone,
            city,
            role: label(role),
            points,
            status: label(status),
            created_at: joined.map(format_iso_date),
        }
    }
}

impl From<Volunteer> for e::volunteer::Volunteer {
    fn from(from: Volunteer) -> Self {
        let Volunteer {
            id,
            alt_id,
            name,
            email,
            phone,
            event_id,
            availability,
            status: status_label,
            created_at,
        } = from;
        Self {
            id: record_id(id, alt_id).into(),
            name: non_blank(name),
            email: non_blank(email),
            phone: non_blank(phone),
            event_id: non_blank(event_id).map(Into::into),
            availability: non_blank(availability),
            status: status(status_label),
            registered: created_at.as_deref().and_then(parse_calendar_date),
        }
    }
}

impl From<e::volunteer::Volunteer> for Volunteer {
    fn from(from: e::volunteer::Volunteer) -> Self {
        let e::volunteer::Volunteer {
            id,
            name,
            email,
            phone,
            event_id,
            availability,
            status,
            registered,
        } = from;
        Self {
            id: id.into(),
            alt_id: None,
            name,
            email,
            phone,
            event_id: event_id.map(Into::into),
            availability,
            status: label(status),
            created_at: registered.map(format_iso_date),
        }
    }
}
