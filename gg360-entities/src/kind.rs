use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// The resource categories that drive filtering and export.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumCount, EnumString, IntoStaticStr, Display,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum EntityKind {
    User,
    Redeem,
    WasteReport,
    Recycling,
    Staff,
    Article,
    Event,
    Volunteer,
}

impl EntityKind {
    /// The name used in exported file names, e.g. `WasteReport`.
    pub const fn file_label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Redeem => "Redeem",
            Self::WasteReport => "WasteReport",
            Self::Recycling => "Recycling",
            Self::Staff => "Staff",
            Self::Article => "Article",
            Self::Event => "Event",
            Self::Volunteer => "Volunteer",
        }
    }

    /// Human readable title, e.g. `Waste Report`.
    pub const fn title(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Redeem => "Redeem",
            Self::WasteReport => "Waste Report",
            Self::Recycling => "Recycling",
            Self::Staff => "Staff",
            Self::Article => "Article",
            Self::Event => "Event",
            Self::Volunteer => "Volunteer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parse_kebab_case() {
        assert_eq!(
            EntityKind::from_str("waste-report").unwrap(),
            EntityKind::WasteReport
        );
        assert_eq!(EntityKind::from_str("Redeem").unwrap(), EntityKind::Redeem);
        assert_eq!(
            EntityKind::from_str("volunteer").unwrap(),
            EntityKind::Volunteer
        );
        assert!(EntityKind::from_str("volunteers").is_err());
        assert_eq!(EntityKind::Recycling.to_string(), "recycling");
    }
}
