use std::collections::BTreeMap;

use crate::{
    entities::{normalize_label, EntityKind, Status},
    resource::{Field, Reportable},
};

/// Bucket of records with a missing status or group key.
pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bucket {
    pub count: usize,
    /// Sum of the measured quantity; zero for kinds without one
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grouping {
    pub field: Field,
    pub buckets: BTreeMap<String, Bucket>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
    pub label: &'static str,
    pub total: f64,
    pub decimals: usize,
}

impl Measure {
    /// Formats a quantity of this measure.
    pub fn format(&self, quantity: f64) -> String {
        format!("{quantity:.*}", self.decimals)
    }
}

/// Derived counts and sums of a set of records.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub kind: EntityKind,
    pub total: usize,
    /// Every status label of the kind in lifecycle order, followed by
    /// [`UNKNOWN`] if any record has no status.
    pub status_counts: Vec<(&'static str, usize)>,
    pub groupings: Vec<Grouping>,
    pub measure: Option<Measure>,
}

impl Summary {
    /// The number of records with the given status label.
    pub fn count(&self, status: &str) -> usize {
        let wanted = normalize_label(status);
        self.status_counts
            .iter()
            .find(|(label, _)| normalize_label(label) == wanted)
            .map(|(_, count)| *count)
            .unwrap_or_default()
    }

    pub fn grouping(&self, field: Field) -> Option<&Grouping> {
        self.groupings.iter().find(|g| g.field == field)
    }
}

pub fn summarize<R: Reportable>(records: &[&R]) -> Summary {
    let mut status_counts: Vec<_> = R::Status::labels().into_iter().map(|l| (l, 0)).collect();
    let mut unknown = 0;
    for record in records {
        match record.status() {
            Some(status) => {
                let label = status.label();
                if let Some((_, count)) = status_counts.iter_mut().find(|(l, _)| *l == label) {
                    *count += 1;
                }
            }
            None => unknown += 1,
        }
    }
    if unknown > 0 {
        status_counts.push((UNKNOWN, unknown));
    }

    let groupings = R::GROUP_BY
        .iter()
        .map(|&field| {
            let mut buckets = BTreeMap::<String, Bucket>::new();
            for record in records {
                let key = record
                    .field(field)
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .unwrap_or(UNKNOWN);
                let bucket = buckets.entry(key.to_owned()).or_default();
                bucket.count += 1;
                bucket.quantity += record.measure().unwrap_or_default();
            }
            Grouping { field, buckets }
        })
        .collect();

    let measure = R::MEASURE.map(|label| Measure {
        label,
        total: records.iter().filter_map(|r| r.measure()).sum(),
        decimals: R::MEASURE_DECIMALS,
    });

    Summary {
        kind: R::KIND,
        total: records.len(),
        status_counts,
        groupings,
        measure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::*,
        filter::{filter, Filter, Selection},
    };
    use gg360_entities::builders::*;

    #[test]
    fn counts_every_status_label() {
        let records = vec![
            WasteReport::build()
                .status(ReportStatus::Pending)
                .waste_type("Plastic")
                .finish(),
            WasteReport::build()
                .status(ReportStatus::Resolved)
                .waste_type("Glass")
                .finish(),
        ];
        let f = Filter::default()
            .with_status(Selection::parse("Pending"))
            .with_field(Field::WasteType, Selection::All);
        let filtered = filter(&records, &f);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].waste_type.as_deref(), Some("Plastic"));

        let summary = summarize(&filtered);
        assert_eq!(summary.kind, EntityKind::WasteReport);
        assert_eq!(summary.total, 1);
        assert_eq!(summary.count("Pending"), 1);
        assert_eq!(summary.count("Resolved"), 0);
        assert_eq!(summary.count("In Progress"), 0);
        assert_eq!(
            summary.status_counts,
            vec![("Pending", 1), ("In Progress", 0), ("Resolved", 0)]
        );
        assert!(summary.measure.is_none());
    }

    #[test]
    fn missing_status_and_group_keys_are_unknown() {
        let records = vec![
            WasteReport::build().waste_type("Plastic").finish(),
            WasteReport::build().waste_type(" ").finish(),
            WasteReport::build().status(ReportStatus::Pending).finish(),
        ];
        let all: Vec<_> = records.iter().collect();
        let summary = summarize(&all);
        assert_eq!(summary.count(UNKNOWN), 2);
        let by_type = summary.grouping(Field::WasteType).unwrap();
        assert_eq!(by_type.buckets["Plastic"].count, 1);
        assert_eq!(by_type.buckets[UNKNOWN].count, 2);
        let by_location = summary.grouping(Field::Location).unwrap();
        assert_eq!(by_location.buckets.len(), 1);
        assert_eq!(by_location.buckets[UNKNOWN].count, 3);
    }

    #[test]
    fn sums_quantities_per_dimension() {
        let records = vec![
            RecycleEntry::build()
                .waste_type("Plastic")
                .recycling_center("North")
                .quantity(2.5)
                .status(RecycleStatus::Verified)
                .finish(),
            RecycleEntry::build()
                .waste_type("Plastic")
                .recycling_center("South")
                .quantity(4.0)
                .finish(),
            RecycleEntry::build()
                .waste_type("Paper")
                .recycling_center("North")
                .finish(),
        ];
        let all: Vec<_> = records.iter().collect();
        let summary = summarize(&all);
        assert_eq!(summary.total, 3);
        assert_eq!(
            summary.measure,
            Some(Measure {
                label: "Quantity (kg)",
                total: 6.5,
                decimals: 2,
            })
        );
        let by_type = summary.grouping(Field::WasteType).unwrap();
        assert_eq!(
            by_type.buckets["Plastic"],
            Bucket {
                count: 2,
                quantity: 6.5
            }
        );
        assert_eq!(
            by_type.buckets["Paper"],
            Bucket {
                count: 1,
                quantity: 0.0
            }
        );
        let by_center = summary.grouping(Field::RecyclingCenter).unwrap();
        assert_eq!(by_center.buckets["North"].quantity, 2.5);
        assert_eq!(by_center.buckets["South"].quantity, 4.0);
        assert_eq!(summary.count("Verified"), 1);
        assert_eq!(summary.count(UNKNOWN), 2);
    }

    #[test]
    fn empty_input_is_a_valid_summary() {
        let summary = summarize::<Redeem>(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.count("pending"), 0);
        assert_eq!(summary.measure.map(|m| m.total), Some(0.0));
        assert!(summary
            .groupings
            .iter()
            .all(|g| g.buckets.is_empty()));
    }

    #[test]
    fn whole_number_measures_have_no_decimals() {
        let records = vec![
            Redeem::build().reward("Tote bag", 120).finish(),
            Redeem::build().reward("Bottle", 80).finish(),
        ];
        let all: Vec<_> = records.iter().collect();
        let measure = summarize(&all).measure.unwrap();
        assert_eq!(measure.format(measure.total), "200");

        let records = vec![RecycleEntry::build().quantity(2.0).finish()];
        let all: Vec<_> = records.iter().collect();
        let measure = summarize(&all).measure.unwrap();
        assert_eq!(measure.format(measure.total), "2.00");
    }
}
