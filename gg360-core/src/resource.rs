//! The reportable resource abstraction.
//!
//! Every entity kind describes once how it is filtered, grouped and
//! exported. The generic [`filter`](crate::filter),
//! [`summary`](crate::summary) and [`export`](crate::export) functions
//! only talk to this trait.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{entities::*, export::workbook::Sheet};

/// Named record fields that can be selected, searched or grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, IntoStaticStr, Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Field {
    Name,
    Email,
    Phone,
    City,
    State,
    PostalCode,
    Role,
    Department,
    Title,
    Author,
    Category,
    Description,
    WasteType,
    Location,
    ReporterName,
    UserName,
    RecyclingCenter,
    RewardName,
    Availability,
}

impl Field {
    /// Human readable name, e.g. `Recycling Center`.
    pub fn title(self) -> String {
        let name: &'static str = self.into();
        name.split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A column of the exported detail table.
pub struct Column<R> {
    pub header: &'static str,
    /// Fixed width in the paginated document
    pub width: usize,
    pub value: fn(&R) -> Option<String>,
}

impl<R> Column<R> {
    pub const fn new(header: &'static str, width: usize, value: fn(&R) -> Option<String>) -> Self {
        Self {
            header,
            width,
            value,
        }
    }
}

pub trait Reportable: Sized {
    const KIND: EntityKind;

    /// Label of the summed quantity, if the kind has one.
    const MEASURE: Option<&'static str> = None;

    /// Fraction digits of the measure; counts and points are whole numbers.
    const MEASURE_DECIMALS: usize = 0;

    /// Dimensions of the grouped distribution.
    const GROUP_BY: &'static [Field] = &[];

    type Status: Status;

    fn id(&self) -> &Id;

    fn status(&self) -> Option<Self::Status>;

    fn field(&self, field: Field) -> Option<&str>;

    /// The reference date used for date range filters.
    fn date(&self) -> Option<Date>;

    fn measure(&self) -> Option<f64> {
        None
    }

    fn columns() -> Vec<Column<Self>>;

    /// Additional workbook sheets for embedded sub-entities.
    fn sub_sheets(_records: &[&Self]) -> Vec<Sheet> {
        Vec::new()
    }
}

fn owned(s: &Option<String>) -> Option<String> {
    s.clone()
}

fn date_string(date: Option<Date>) -> Option<String> {
    date.map(format_iso_date)
}

fn label<S: Status>(status: Option<S>) -> Option<String> {
    status.map(|s| s.label().to_owned())
}

impl Reportable for WasteReport {
    const KIND: EntityKind = EntityKind::WasteReport;
    const GROUP_BY: &'static [Field] = &[Field::WasteType, Field::Location];

    type Status = ReportStatus;

    fn id(&self) -> &Id {
        &self.id
    }

    fn status(&self) -> Option<ReportStatus> {
        self.status
    }

    fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::WasteType => self.waste_type.as_deref(),
            Field::Location => self.location.as_deref(),
            Field::ReporterName | Field::Name => self.reporter_name.as_deref(),
            Field::Description => self.description.as_deref(),
            _ => None,
        }
    }

    fn date(&self) -> Option<Date> {
        self.report_date
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("ID", 10, |r| Some(r.id.to_string())),
            Column::new("Waste Type", 12, |r| owned(&r.waste_type)),
            Column::new("Location", 18, |r| owned(&r.location)),
            Column::new("Reporter", 16, |r| owned(&r.reporter_name)),
            Column::new("Date", 10, |r| date_string(r.report_date)),
            Column::new("Status", 11, |r| label(r.status)),
            Column::new("Description", 24, |r| owned(&r.description)),
        ]
    }
}

impl Reportable for RecycleEntry {
    const KIND: EntityKind = EntityKind::Recycling;
    const MEASURE: Option<&'static str> = Some("Quantity (kg)");
    const MEASURE_DECIMALS: usize = 2;
    const GROUP_BY: &'static [Field] = &[Field::WasteType, Field::RecyclingCenter];

    type Status = RecycleStatus;

    fn id(&self) -> &Id {
        &self.id
    }

    fn status(&self) -> Option<RecycleStatus> {
        self.status
    }

    fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::UserName | Field::Name => self.user_name.as_deref(),
            Field::Phone => self.user_phone.as_deref(),
            Field::WasteType => self.waste_type.as_deref(),
            Field::RecyclingCenter => self.recycling_center.as_deref(),
            _ => None,
        }
    }

    fn date(&self) -> Option<Date> {
        self.date_time.map(|t| t.date())
    }

    fn measure(&self) -> Option<f64> {
        self.quantity
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("ID", 10, |r| Some(r.id.to_string())),
            Column::new("User", 16, |r| owned(&r.user_name)),
            Column::new("Phone", 12, |r| owned(&r.user_phone)),
            Column::new("Waste Type", 12, |r| owned(&r.waste_type)),
            Column::new("Qty (kg)", 8, |r| r.quantity.map(|q| format!("{q:.2}"))),
            Column::new("Recycling Center", 18, |r| owned(&r.recycling_center)),
            Column::new("Date/Time", 16, |r| r.date_time.map(|t| t.to_string())),
            Column::new("Status", 9, |r| label(r.status)),
        ]
    }
}

impl Reportable for Redeem {
    const KIND: EntityKind = EntityKind::Redeem;
    const MEASURE: Option<&'static str> = Some("Reward points");
    const GROUP_BY: &'static [Field] = &[Field::RewardName, Field::City];

    type Status = RedeemStatus;

    fn id(&self) -> &Id {
        &self.id
    }

    fn status(&self) -> Option<RedeemStatus> {
        self.status
    }

    fn field(&self, field: Field) -> Option<&str> {
        let shipping = &self.shipping_info;
        match field {
            Field::UserName => self.user_name.as_deref(),
            Field::RewardName => self.reward_name.as_deref(),
            Field::Name => shipping.name.as_deref(),
            Field::Phone => shipping.phone.as_deref(),
            Field::City => shipping.city.as_deref(),
            Field::State => shipping.state.as_deref(),
            Field::PostalCode => shipping.postal_code.as_deref(),
            _ => None,
        }
    }

    fn date(&self) -> Option<Date> {
        self.requested_at.map(|t| t.date())
    }

    fn measure(&self) -> Option<f64> {
        self.reward_points.map(f64::from)
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("ID", 10, |r| Some(r.id.to_string())),
            Column::new("User", 16, |r| owned(&r.user_name)),
            Column::new("Reward", 18, |r| owned(&r.reward_name)),
            Column::new("Points", 6, |r| r.reward_points.map(|p| p.to_string())),
            Column::new("City", 12, |r| owned(&r.shipping_info.city)),
            Column::new("State", 10, |r| owned(&r.shipping_info.state)),
            Column::new("Requested", 10, |r| {
                r.requested_at.map(|t| format_iso_date(t.date()))
            }),
            Column::new("Status", 9, |r| label(r.status)),
        ]
    }

    fn sub_sheets(records: &[&Self]) -> Vec<Sheet> {
        let header = [
            "Redeem ID",
            "Name",
            "Address",
            "Phone",
            "City",
            "State",
            "Postal Code",
        ];
        let rows = records
            .iter()
            .map(|r| {
                let s = &r.shipping_info;
                vec![
                    Some(r.id.to_string()),
                    s.name.clone(),
                    s.address.clone(),
                    s.phone.clone(),
                    s.city.clone(),
                    s.state.clone(),
                    s.postal_code.clone(),
                ]
            })
            .collect();
        vec![Sheet::new("Shipping Details", &header, rows)]
    }
}

impl Reportable for Event {
    const KIND: EntityKind = EntityKind::Event;
    const MEASURE: Option<&'static str> = Some("Participants");
    const GROUP_BY: &'static [Field] = &[Field::Location];

    type Status = EventStatus;

    fn id(&self) -> &Id {
        &self.id
    }

    fn status(&self) -> Option<EventStatus> {
        self.status
    }

    fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title | Field::Name => Some(self.title.as_str()).filter(|t| !t.is_empty()),
            Field::Location => self.location.as_deref(),
            Field::Description => self.description.as_deref(),
            _ => None,
        }
    }

    fn date(&self) -> Option<Date> {
        self.date
    }

    fn measure(&self) -> Option<f64> {
        Some(self.participants.len() as f64)
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("ID", 10, |e| Some(e.id.to_string())),
            Column::new("Title", 22, |e| {
                Some(e.title.clone()).filter(|t| !t.is_empty())
            }),
            Column::new("Date", 10, |e| date_string(e.date)),
            Column::new("Time", 8, |e| owned(&e.time)),
            Column::new("Location", 18, |e| owned(&e.location)),
            Column::new("Max", 5, |e| e.max_participants.map(|n| n.to_string())),
            Column::new("Joined", 6, |e| Some(e.participants.len().to_string())),
            Column::new("Status", 10, |e| label(e.status)),
        ]
    }

    fn sub_sheets(records: &[&Self]) -> Vec<Sheet> {
        let header = ["Event ID", "Event", "User ID", "Name", "Email", "Registered"];
        let rows = records
            .iter()
            .flat_map(|e| {
                e.participants.iter().map(move |p| {
                    vec![
                        Some(e.id.to_string()),
                        Some(e.title.clone()).filter(|t| !t.is_empty()),
                        p.user_id.as_ref().map(ToString::to_string),
                        p.name.clone(),
                        p.email.clone(),
                        p.registered_at.map(|t| t.to_string()),
                    ]
                })
            })
            .collect();
        vec![Sheet::new("Participants", &header, rows)]
    }
}

impl Reportable for Staff {
    const KIND: EntityKind = EntityKind::Staff;
    const GROUP_BY: &'static [Field] = &[Field::Department, Field::Role];

    type Status = StaffStatus;

    fn id(&self) -> &Id {
        &self.id
    }

    fn status(&self) -> Option<StaffStatus> {
        self.status
    }

    fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Phone => self.phone.as_deref(),
            Field::Role => self.role.as_deref(),
            Field::Department => self.department.as_deref(),
            _ => None,
        }
    }

    fn date(&self) -> Option<Date> {
        self.joined
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("ID", 10, |s| Some(s.id.to_string())),
            Column::new("Name", 18, |s| owned(&s.name)),
            Column::new("Email", 22, |s| owned(&s.email)),
            Column::new("Phone", 12, |s| owned(&s.phone)),
            Column::new("Role", 14, |s| owned(&s.role)),
            Column::new("Department", 14, |s| owned(&s.department)),
            Column::new("Status", 9, |s| label(s.status)),
            Column::new("Joined", 10, |s| date_string(s.joined)),
        ]
    }
}

impl Reportable for Article {
    const KIND: EntityKind = EntityKind::Article;
    const GROUP_BY: &'static [Field] = &[Field::Category, Field::Author];

    type Status = ArticleStatus;

    fn id(&self) -> &Id {
        &self.id
    }

    fn status(&self) -> Option<ArticleStatus> {
        self.status
    }

    fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title | Field::Name => Some(self.title.as_str()).filter(|t| !t.is_empty()),
            Field::Author => self.author.as_deref(),
            Field::Category => self.category.as_deref(),
            _ => None,
        }
    }

    fn date(&self) -> Option<Date> {
        self.published
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("ID", 10, |a| Some(a.id.to_string())),
            Column::new("Title", 28, |a| {
                Some(a.title.clone()).filter(|t| !t.is_empty())
            }),
            Column::new("Author", 16, |a| owned(&a.author)),
            Column::new("Category", 14, |a| owned(&a.category)),
            Column::new("Status", 9, |a| label(a.status)),
            Column::new("Published", 10, |a| date_string(a.published)),
            Column::new("Views", 6, |a| a.views.map(|v| v.to_string())),
        ]
    }
}

impl Reportable for User {
    const KIND: EntityKind = EntityKind::User;
    const MEASURE: Option<&'static str> = Some("Points");
    const GROUP_BY: &'static [Field] = &[Field::Role, Field::City];

    type Status = UserStatus;

    fn id(&self) -> &Id {
        &self.id
    }

    fn status(&self) -> Option<UserStatus> {
        self.status
    }

    fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Phone => self.phone.as_deref(),
            Field::City => self.city.as_deref(),
            Field::Role => self.role.map(Status::label),
            _ => None,
        }
    }

    fn date(&self) -> Option<Date> {
        self.joined
    }

    fn measure(&self) -> Option<f64> {
        self.points.map(f64::from)
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("ID", 10, |u| Some(u.id.to_string())),
            Column::new("Name", 18, |u| owned(&u.name)),
            Column::new("Email", 22, |u| owned(&u.email)),
            Column::new("Phone", 12, |u| owned(&u.phone)),
            Column::new("City", 12, |u| owned(&u.city)),
            Column::new("Role", 6, |u| label(u.role)),
            Column::new("Points", 7, |u| u.points.map(|p| p.to_string())),
            Column::new("Status", 9, |u| label(u.status)),
            Column::new("Joined", 10, |u| date_string(u.joined)),
        ]
    }
}

impl Reportable for Volunteer {
    const KIND: EntityKind = EntityKind::Volunteer;
    const GROUP_BY: &'static [Field] = &[Field::Availability];

    type Status = VolunteerStatus;

    fn id(&self) -> &Id {
        &self.id
    }

    fn status(&self) -> Option<VolunteerStatus> {
        self.status
    }

    fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Phone => self.phone.as_deref(),
            Field::Availability => self.availability.as_deref(),
            _ => None,
        }
    }

    fn date(&self) -> Option<Date> {
        self.registered
    }

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("ID", 10, |v| Some(v.id.to_string())),
            Column::new("Name", 18, |v| owned(&v.name)),
            Column::new("Email", 22, |v| owned(&v.email)),
            Column::new("Phone", 12, |v| owned(&v.phone)),
            Column::new("Event", 10, |v| v.event_id.as_ref().map(ToString::to_string)),
            Column::new("Availability", 14, |v| owned(&v.availability)),
            Column::new("Status", 9, |v| label(v.status)),
            Column::new("Registered", 10, |v| date_string(v.registered)),
        ]
    }
}
