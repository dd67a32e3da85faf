use strum::IntoEnumIterator;

/// The fixed set of lifecycle labels of an entity kind.
///
/// Every status enum derives `strum::IntoStaticStr` with the wire label
/// of each variant and `strum::EnumIter` in lifecycle order.
pub trait Status: Copy + Ord + std::hash::Hash + IntoEnumIterator + Into<&'static str> {
    fn label(self) -> &'static str {
        self.into()
    }

    fn labels() -> Vec<&'static str> {
        Self::iter().map(Self::label).collect()
    }

    /// Parses a label ignoring case and the separators `_`, `-` and ` `.
    fn parse_label(s: &str) -> Option<Self> {
        let wanted = normalize_label(s);
        if wanted.is_empty() {
            return None;
        }
        Self::iter().find(|status| normalize_label(status.label()) == wanted)
    }
}

/// Canonical form of a status label used for comparisons.
pub fn normalize_label(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportStatus;

    #[test]
    fn parse_label_variants() {
        for s in ["In Progress", "in-progress", "InProgress", "IN_PROGRESS"] {
            assert_eq!(
                ReportStatus::parse_label(s),
                Some(ReportStatus::InProgress),
                "{s}"
            );
        }
        assert_eq!(ReportStatus::parse_label("pending"), Some(ReportStatus::Pending));
        assert_eq!(ReportStatus::parse_label("done"), None);
        assert_eq!(ReportStatus::parse_label(""), None);
    }

    #[test]
    fn labels_in_lifecycle_order() {
        assert_eq!(
            ReportStatus::labels(),
            vec!["Pending", "In Progress", "Resolved"]
        );
    }
}
