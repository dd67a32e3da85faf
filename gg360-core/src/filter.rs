use std::{collections::BTreeSet, convert::Infallible, fmt, str::FromStr};

use crate::{
    entities::{normalize_label, Date, Status},
    resource::{Field, Reportable},
};

/// Either everything or one concrete value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// `"all"` (in any case) and blank input select everything.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(s.to_owned())
        }
    }

    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Only(_))
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(v) => Some(v.as_str()),
        }
    }
}

impl FromStr for Selection {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(v) => f.write_str(v),
        }
    }
}

/// An inclusive range of calendar dates, open on missing ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<Date>,
    pub to: Option<Date>,
}

impl DateRange {
    pub const fn is_active(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    pub fn contains(&self, date: Date) -> bool {
        self.from.map_or(true, |from| from <= date) && self.to.map_or(true, |to| date <= to)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let end = |d: Option<Date>| d.map(crate::entities::format_iso_date);
        match (end(self.from), end(self.to)) {
            (Some(from), Some(to)) => write!(f, "{from} to {to}"),
            (Some(from), None) => write!(f, "from {from}"),
            (None, Some(to)) => write!(f, "until {to}"),
            (None, None) => f.write_str("any"),
        }
    }
}

/// The filter values of a report.
///
/// All predicates are combined with a logical AND. A default filter
/// selects every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub status: Selection,
    /// Exact matches on field values, ignoring case
    pub fields: Vec<(Field, Selection)>,
    /// Case-insensitive substring matches
    pub searches: Vec<(Field, String)>,
    pub period: Option<DateRange>,
}

impl Filter {
    pub fn with_status(mut self, status: Selection) -> Self {
        self.status = status;
        self
    }

    pub fn with_field(mut self, field: Field, selection: Selection) -> Self {
        self.fields.push((field, selection));
        self
    }

    pub fn with_search(mut self, field: Field, text: impl Into<String>) -> Self {
        self.searches.push((field, text.into()));
        self
    }

    pub fn with_period(mut self, period: DateRange) -> Self {
        self.period = Some(period);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.active_filters().is_empty()
    }

    /// Human readable `(name, value)` pairs of all active predicates.
    pub fn active_filters(&self) -> Vec<(String, String)> {
        let mut active = vec![];
        if let Some(status) = self.status.value() {
            active.push(("Status".to_owned(), status.to_owned()));
        }
        for (field, selection) in &self.fields {
            if let Some(value) = selection.value() {
                active.push((field.title(), value.to_owned()));
            }
        }
        for (field, text) in &self.searches {
            if !text.trim().is_empty() {
                active.push((format!("{} contains", field.title()), text.trim().to_owned()));
            }
        }
        if let Some(period) = self.period.filter(DateRange::is_active) {
            active.push(("Period".to_owned(), period.to_string()));
        }
        active
    }

    pub fn matches<R: Reportable>(&self, record: &R) -> bool {
        let Self {
            status,
            fields,
            searches,
            period,
        } = self;
        if let Some(wanted) = status.value() {
            let wanted = normalize_label(wanted);
            let Some(actual) = record.status() else {
                return false;
            };
            if normalize_label(actual.label()) != wanted {
                return false;
            }
        }
        for (field, selection) in fields {
            if let Some(wanted) = selection.value() {
                let wanted = wanted.trim().to_lowercase();
                match record.field(*field) {
                    Some(value) if value.trim().to_lowercase() == wanted => {}
                    _ => return false,
                }
            }
        }
        for (field, text) in searches {
            let needle = text.trim().to_lowercase();
            if needle.is_empty() {
                continue;
            }
            match record.field(*field) {
                Some(value) if value.to_lowercase().contains(&needle) => {}
                _ => return false,
            }
        }
        if let Some(period) = period.filter(DateRange::is_active) {
            match record.date() {
                Some(date) if period.contains(date) => {}
                _ => return false,
            }
        }
        true
    }
}

/// Returns the records matching the filter in their original order.
pub fn filter<'a, R: Reportable>(records: &'a [R], filter: &Filter) -> Vec<&'a R> {
    records.iter().filter(|r| filter.matches(*r)).collect()
}

/// The distinct values of a field present in the records, sorted.
pub fn distinct_values<R: Reportable>(records: &[R], field: Field) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.field(field))
        .map(ToOwned::to_owned)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The distinct status labels present in the records, in lifecycle order.
pub fn distinct_statuses<R: Reportable>(records: &[R]) -> Vec<String> {
    let present: BTreeSet<_> = records.iter().filter_map(Reportable::status).collect();
    present
        .into_iter()
        .map(|s| s.label().to_owned())
        .collect()
}
