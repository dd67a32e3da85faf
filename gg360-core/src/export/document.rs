//! Paginated plain text reports.
//!
//! Every page starts with the report header and ends with a
//! `Page n of m` footer. Pages are separated by a form feed.

use super::{or_na, ExportContext};
use crate::{filter::Filter, resource::Reportable, summary::Summary};

pub const MIN_PAGE_ROWS: usize = 5;

const PAGE_BREAK: &str = "\x0c\n";
const COLUMN_GAP: &str = "  ";

/// Fits a cell into a fixed width, marking truncation with `~`.
pub fn fit(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len <= width {
        return format!("{value:<width$}");
    }
    if width == 0 {
        return String::new();
    }
    let mut cell: String = value.chars().take(width - 1).collect();
    cell.push('~');
    cell
}

pub fn render<R: Reportable>(
    records: &[&R],
    summary: &Summary,
    filter: &Filter,
    ctx: &ExportContext,
) -> String {
    let columns = R::columns();
    let table_header = columns
        .iter()
        .map(|c| fit(c.header, c.width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    let table_header = table_header.trim_end().to_owned();
    let rule = "-".repeat(table_header.chars().count());
    let rows: Vec<String> = records
        .iter()
        .map(|r| {
            columns
                .iter()
                .map(|c| fit(&or_na((c.value)(r)), c.width))
                .collect::<Vec<_>>()
                .join(COLUMN_GAP)
                .trim_end()
                .to_owned()
        })
        .collect();

    let mut pages = Paginator::new(ctx.page_rows);
    for line in summary_lines(summary, filter) {
        pages.push(line);
    }
    pages.push(String::new());
    pages.push("Details".to_owned());
    for row in rows {
        pages.push_table_row(row, &table_header, &rule);
    }
    let pages = pages.finish();

    let title = format!("{} Report: {}", ctx.app_name.trim(), summary.kind.title());
    let generated = format!("Generated on {}", ctx.generated_on);
    let count = pages.len();
    pages
        .into_iter()
        .enumerate()
        .map(|(i, body)| {
            let mut page = String::new();
            page.push_str(&title);
            page.push('\n');
            page.push_str(&generated);
            page.push('\n');
            page.push_str(&"=".repeat(title.chars().count().max(generated.chars().count())));
            page.push('\n');
            for line in body {
                page.push_str(&line);
                page.push('\n');
            }
            page.push('\n');
            page.push_str(&format!("Page {} of {count}", i + 1));
            page.push('\n');
            page
        })
        .collect::<Vec<_>>()
        .join(PAGE_BREAK)
}

fn summary_lines(summary: &Summary, filter: &Filter) -> Vec<String> {
    let mut lines = vec!["Summary".to_owned()];
    let active = filter.active_filters();
    if active.is_empty() {
        lines.push("Filters: None".to_owned());
    } else {
        lines.push("Filters:".to_owned());
        lines.extend(
            active
                .into_iter()
                .map(|(name, value)| format!("  {name}: {value}")),
        );
    }
    lines.push(format!("Total records: {}", summary.total));
    lines.extend(
        summary
            .status_counts
            .iter()
            .map(|(label, count)| format!("  {label}: {count}")),
    );
    if let Some(measure) = &summary.measure {
        lines.push(format!(
            "Total {}: {}",
            measure.label,
            measure.format(measure.total)
        ));
    }
    for grouping in &summary.groupings {
        lines.push(format!("By {}:", grouping.field.title()));
        for (key, bucket) in &grouping.buckets {
            let line = match &summary.measure {
                Some(measure) => format!(
                    "  {key}: {} ({})",
                    bucket.count,
                    measure.format(bucket.quantity)
                ),
                None => format!("  {key}: {}", bucket.count),
            };
            lines.push(line);
        }
    }
    lines
}

/// Distributes body lines over pages of a fixed height.
struct Paginator {
    page_rows: usize,
    pages: Vec<Vec<String>>,
    current: Vec<String>,
    table_started: bool,
}

impl Paginator {
    fn new(page_rows: usize) -> Self {
        Self {
            page_rows: page_rows.max(MIN_PAGE_ROWS),
            pages: vec![],
            current: vec![],
            table_started: false,
        }
    }

    fn break_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        self.pages.push(page);
        self.table_started = false;
    }

    fn push(&mut self, line: String) {
        if self.current.len() >= self.page_rows {
            self.break_page();
        }
        self.current.push(line);
    }

    /// Table rows never start a page without the column header.
    fn push_table_row(&mut self, row: String, header: &str, rule: &str) {
        let needed = if self.table_started { 1 } else { 3 };
        if self.current.len() + needed > self.page_rows {
            self.break_page();
        }
        if !self.table_started {
            self.current.push(header.to_owned());
            self.current.push(rule.to_owned());
            self.table_started = true;
        }
        self.current.push(row);
    }

    fn finish(mut self) -> Vec<Vec<String>> {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.break_page();
        }
        self.pages
    }
}
