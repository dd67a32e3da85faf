//! Exporting filtered records into files.
//!
//! Two formats are supported: a spreadsheet workbook (CSV sheets) and a
//! paginated plain text document. Empty selections never produce a file.

use std::{fmt, io};

use strum::{Display, EnumString};
use thiserror::Error;

use crate::{
    entities::{format_iso_date, EntityKind, Timestamp},
    filter::{self, distinct_statuses, distinct_values, Filter},
    resource::Reportable,
    summary::{summarize, Summary},
};

pub mod document;
pub mod workbook;

/// Placeholder for absent values.
pub const NOT_AVAILABLE: &str = "N/A";

pub const DEFAULT_APP_NAME: &str = "GoGreen360";

pub const DEFAULT_PAGE_ROWS: usize = 40;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ExportFormat {
    #[default]
    Workbook,
    Document,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Workbook => "csv",
            Self::Document => "txt",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportContext {
    pub app_name: String,
    pub generated_on: Timestamp,
    /// Lines per page of the paginated document
    pub page_rows: usize,
}

impl Default for ExportContext {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_owned(),
            generated_on: Timestamp::now(),
            page_rows: DEFAULT_PAGE_ROWS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub content: Vec<u8>,
}

/// Explanation why nothing has been exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyExport {
    pub kind: EntityKind,
    /// `(name, value)` of every active filter
    pub active_filters: Vec<(String, String)>,
    /// Values present in the unfiltered data for each active selection
    pub available: Vec<(String, Vec<String>)>,
}

impl fmt::Display for EmptyExport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "No {} records to export", self.kind.title().to_lowercase())?;
        if self.active_filters.is_empty() {
            return f.write_str(".");
        }
        let filters = self
            .active_filters
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, " matching the active filters ({filters}).")?;
        for (name, values) in &self.available {
            if values.is_empty() {
                write!(f, " No {name} values present in the data.")?;
            } else {
                write!(f, " Available {name} values: {}.", values.join(", "))?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    File(ExportFile),
    Empty(EmptyExport),
}

/// `<AppName>_<Kind>_Report_<YYYY-MM-DD>.<ext>`
pub fn file_name(app_name: &str, kind: EntityKind, ctx_date: time::Date, format: ExportFormat) -> String {
    let app_name: String = app_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.'))
        .collect();
    let app_name = if app_name.is_empty() {
        DEFAULT_APP_NAME
    } else {
        &app_name
    };
    format!(
        "{app_name}_{}_Report_{}.{}",
        kind.file_label(),
        format_iso_date(ctx_date),
        format.extension()
    )
}

pub(crate) fn or_na(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_owned())
}

/// Renders already filtered and summarized records.
pub fn render<R: Reportable>(
    records: &[&R],
    summary: &Summary,
    filter: &Filter,
    format: ExportFormat,
    ctx: &ExportContext,
) -> Result<ExportFile, Error> {
    let content = match format {
        ExportFormat::Workbook => workbook::Workbook::new(records, summary, filter, ctx).to_csv()?,
        ExportFormat::Document => document::render(records, summary, filter, ctx).into_bytes(),
    };
    Ok(ExportFile {
        file_name: file_name(&ctx.app_name, R::KIND, ctx.generated_on.date(), format),
        content,
    })
}

/// Filters, summarizes and renders the records.
pub fn export<R: Reportable>(
    records: &[R],
    filter: &Filter,
    format: ExportFormat,
    ctx: &ExportContext,
) -> Result<ExportOutcome, Error> {
    let filtered = filter::filter(records, filter);
    if filtered.is_empty() {
        let empty = empty_export(records, filter);
        log::info!("{empty}");
        return Ok(ExportOutcome::Empty(empty));
    }
    let summary = summarize(&filtered);
    let file = render(&filtered, &summary, filter, format, ctx)?;
    log::debug!(
        "Exported {} of {} {} records into {}",
        filtered.len(),
        records.len(),
        R::KIND,
        file.file_name
    );
    Ok(ExportOutcome::File(file))
}

fn empty_export<R: Reportable>(records: &[R], filter: &Filter) -> EmptyExport {
    let mut available = vec![];
    if filter.status.is_active() {
        available.push(("Status".to_owned(), distinct_statuses(records)));
    }
    for (field, selection) in &filter.fields {
        if selection.is_active() {
            available.push((field.title(), distinct_values(records, *field)));
        }
    }
    EmptyExport {
        kind: R::KIND,
        active_filters: filter.active_filters(),
        available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::*,
        filter::{Selection, DateRange},
        resource::Field,
    };
    use gg360_entities::builders::*;
    use time::macros::{date, datetime};

    fn ctx() -> ExportContext {
        ExportContext {
            app_name: "GoGreen360".into(),
            generated_on: datetime!(2024-05-06 09:30 UTC).into(),
            page_rows: 20,
        }
    }

    fn entries() -> Vec<RecycleEntry> {
        vec![
            RecycleEntry::build()
                .id("c1")
                .user_name("Ann")
                .waste_type("Plastic")
                .recycling_center("North")
                .quantity(3.0)
                .status(RecycleStatus::Verified)
                .finish(),
            RecycleEntry::build()
                .id("c2")
                .waste_type("Glass")
                .recycling_center("South")
                .status(RecycleStatus::Pending)
                .finish(),
        ]
    }

    #[test]
    fn file_name_pattern() {
        let d = date!(2024 - 05 - 06);
        assert_eq!(
            file_name("GoGreen360", EntityKind::WasteReport, d, ExportFormat::Workbook),
            "GoGreen360_WasteReport_Report_2024-05-06.csv"
        );
        assert_eq!(
            file_name("Go Green 360", EntityKind::Recycling, d, ExportFormat::Document),
            "GoGreen360_Recycling_Report_2024-05-06.txt"
        );
        assert_eq!(
            file_name(" ", EntityKind::User, d, ExportFormat::Document),
            "GoGreen360_User_Report_2024-05-06.txt"
        );
    }

    #[test]
    fn export_workbook_file() {
        let records = entries();
        let outcome = export(
            &records,
            &Filter::default(),
            ExportFormat::Workbook,
            &ctx(),
        )
        .unwrap();
        let ExportOutcome::File(file) = outcome else {
            panic!("expected a file");
        };
        assert_eq!(file.file_name, "GoGreen360_Recycling_Report_2024-05-06.csv");
        let text = String::from_utf8(file.content).unwrap();
        assert!(text.contains("Sheet: Summary"));
        assert!(text.contains("Sheet: Recycling Details"));
        // Absent quantity and user are exported as placeholders
        assert!(text.contains("c2,N/A,N/A,Glass,N/A,South,N/A,Pending"));
    }

    #[test]
    fn empty_selection_produces_no_file() {
        let records = entries();
        let f = Filter::default()
            .with_status(Selection::parse("Rejected"))
            .with_field(Field::RecyclingCenter, Selection::parse("East"))
            .with_field(Field::WasteType, Selection::All);
        let outcome = export(&records, &f, ExportFormat::Document, &ctx()).unwrap();
        let ExportOutcome::Empty(empty) = outcome else {
            panic!("expected no file");
        };
        assert_eq!(empty.kind, EntityKind::Recycling);
        assert_eq!(
            empty.active_filters,
            vec![
                ("Status".to_string(), "Rejected".to_string()),
                ("Recycling Center".to_string(), "East".to_string()),
            ]
        );
        assert_eq!(
            empty.available,
            vec![
                (
                    "Status".to_string(),
                    vec!["Pending".to_string(), "Verified".to_string()]
                ),
                (
                    "Recycling Center".to_string(),
                    vec!["North".to_string(), "South".to_string()]
                ),
            ]
        );
        let msg = empty.to_string();
        assert!(msg.starts_with("No recycling records to export matching the active filters"));
        assert!(msg.contains("Status: Rejected"));
        assert!(msg.contains("Recycling Center: East"));
        assert!(msg.contains("Available Recycling Center values: North, South."));
    }

    #[test]
    fn empty_input_without_filters() {
        let outcome = export::<Staff>(&[], &Filter::default(), ExportFormat::Workbook, &ctx()).unwrap();
        let ExportOutcome::Empty(empty) = outcome else {
            panic!("expected no file");
        };
        assert_eq!(empty.to_string(), "No staff records to export.");
    }

    #[test]
    fn period_filter_is_reported() {
        let records = entries();
        let f = Filter::default().with_period(DateRange {
            from: Some(date!(2030 - 01 - 01)),
            to: None,
        });
        let ExportOutcome::Empty(empty) =
            export(&records, &f, ExportFormat::Workbook, &ctx()).unwrap()
        else {
            panic!("expected no file");
        };
        assert_eq!(
            empty.active_filters,
            vec![("Period".to_string(), "from 2030-01-01".to_string())]
        );
        assert!(empty.available.is_empty());
    }
}
