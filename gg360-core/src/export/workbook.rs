use super::{or_na, ExportContext, Error};
use crate::{filter::Filter, resource::Reportable, summary::Summary};

/// A named table of the workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Absent cells are replaced by [`NOT_AVAILABLE`](super::NOT_AVAILABLE).
    pub fn new(name: &str, header: &[&str], rows: Vec<Vec<Option<String>>>) -> Self {
        Self {
            name: name.to_owned(),
            header: header.iter().map(|h| (*h).to_owned()).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(or_na).collect())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new<R: Reportable>(
        records: &[&R],
        summary: &Summary,
        filter: &Filter,
        ctx: &ExportContext,
    ) -> Self {
        let mut sheets = vec![summary_sheet(summary, filter, ctx)];
        sheets.push(details_sheet(records));
        sheets.extend(distribution_sheets(summary));
        sheets.extend(R::sub_sheets(records));
        Self { sheets }
    }

    /// Writes all sheets one below the other, each introduced by a
    /// `Sheet: <name>` row and separated by an empty line.
    pub fn to_csv(&self) -> Result<Vec<u8>, Error> {
        let mut buf = vec![];
        for (i, sheet) in self.sheets.iter().enumerate() {
            if i > 0 {
                buf.push(b'\n');
            }
            buf.extend(sheet.to_csv()?);
        }
        Ok(buf)
    }
}

impl Sheet {
    fn to_csv(&self) -> Result<Vec<u8>, Error> {
        let mut wtr = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(vec![]);
        wtr.write_record([format!("Sheet: {}", self.name)])?;
        wtr.write_record(&self.header)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        wtr.into_inner().map_err(|err| Error::Io(err.into_error()))
    }
}

fn summary_sheet(summary: &Summary, filter: &Filter, ctx: &ExportContext) -> Sheet {
    let mut rows = vec![
        vec![
            Some("Report".to_owned()),
            Some(summary.kind.title().to_owned()),
        ],
        vec![
            Some("Generated on".to_owned()),
            Some(ctx.generated_on.to_string()),
        ],
        vec![
            Some("Total records".to_owned()),
            Some(summary.total.to_string()),
        ],
    ];
    let active = filter.active_filters();
    if active.is_empty() {
        rows.push(vec![Some("Filters".to_owned()), Some("None".to_owned())]);
    }
    for (name, value) in active {
        rows.push(vec![Some(format!("Filter: {name}")), Some(value)]);
    }
    for (label, count) in &summary.status_counts {
        rows.push(vec![
            Some(format!("Status: {label}")),
            Some(count.to_string()),
        ]);
    }
    if let Some(measure) = &summary.measure {
        rows.push(vec![
            Some(format!("Total {}", measure.label)),
            Some(measure.format(measure.total)),
        ]);
    }
    Sheet::new("Summary", &["Metric", "Value"], rows)
}

fn details_sheet<R: Reportable>(records: &[&R]) -> Sheet {
    let columns = R::columns();
    let header: Vec<_> = columns.iter().map(|c| c.header).collect();
    let rows = records
        .iter()
        .map(|r| columns.iter().map(|c| (c.value)(r)).collect())
        .collect();
    Sheet::new(&format!("{} Details", R::KIND.title()), &header, rows)
}

fn distribution_sheets(summary: &Summary) -> Vec<Sheet> {
    summary
        .groupings
        .iter()
        .map(|grouping| {
            let title = grouping.field.title();
            let mut header = vec![title.as_str(), "Count"];
            if let Some(measure) = &summary.measure {
                header.push(measure.label);
            }
            let rows = grouping
                .buckets
                .iter()
                .map(|(key, bucket)| {
                    let mut row = vec![Some(key.clone()), Some(bucket.count.to_string())];
                    if let Some(measure) = &summary.measure {
                        row.push(Some(measure.format(bucket.quantity)));
                    }
                    row
                })
                .collect();
            Sheet::new(&format!("By {title}"), &header, rows)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        entities::*,
        filter::Selection,
        summary::summarize,
    };
    use gg360_entities::builders::*;
    use time::macros::datetime;

    fn ctx() -> ExportContext {
        ExportContext {
            app_name: "GoGreen360".into(),
            generated_on: datetime!(2024-05-06 09:30 UTC).into(),
            page_rows: 20,
        }
    }

    fn sheet<'a>(wb: &'a Workbook, name: &str) -> &'a Sheet {
        wb.sheets.iter().find(|s| s.name == name).unwrap()
    }

    #[test]
    fn redeem_workbook_sheets() {
        let records = vec![
            Redeem::build()
                .id("r1")
                .user_name("Ann")
                .reward("Tote bag", 120)
                .city("Pune")
                .status(RedeemStatus::Pending)
                .finish(),
            Redeem::build()
                .id("r2")
                .reward("Tote bag", 80)
                .status(RedeemStatus::Shipped)
                .finish(),
        ];
        let all: Vec<_> = records.iter().collect();
        let summary = summarize(&all);
        let filter = Filter::default();
        let wb = Workbook::new(&all, &summary, &filter, &ctx());
        let names: Vec<_> = wb.sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Summary",
                "Redeem Details",
                "By Reward Name",
                "By City",
                "Shipping Details"
            ]
        );

        let s = sheet(&wb, "Summary");
        assert!(s.rows.contains(&vec!["Filters".to_string(), "None".to_string()]));
        assert!(s.rows.contains(&vec!["Status: pending".to_string(), "1".to_string()]));
        assert!(s.rows.contains(&vec!["Status: delivered".to_string(), "0".to_string()]));
        assert!(s.rows.contains(&vec![
            "Total Reward points".to_string(),
            "200".to_string()
        ]));

        let by_reward = sheet(&wb, "By Reward Name");
        assert_eq!(by_reward.header, vec!["Reward Name", "Count", "Reward points"]);
        assert_eq!(by_reward.rows, vec![vec!["Tote bag", "2", "200"]]);

        let by_city = sheet(&wb, "By City");
        assert_eq!(by_city.rows[0][0], "Pune");
        assert_eq!(by_city.rows[1][0], "unknown");

        let shipping = sheet(&wb, "Shipping Details");
        assert_eq!(shipping.rows.len(), 2);
        assert_eq!(shipping.rows[1][0], "r2");
        assert_eq!(shipping.rows[1][4], "N/A");
    }

    #[test]
    fn summary_lists_active_filters() {
        let records = vec![WasteReport::build()
            .id("w1")
            .status(ReportStatus::Pending)
            .finish()];
        let all: Vec<_> = records.iter().collect();
        let summary = summarize(&all);
        let filter = Filter::default().with_status(Selection::parse("Pending"));
        let wb = Workbook::new(&all, &summary, &filter, &ctx());
        let s = sheet(&wb, "Summary");
        assert!(s.rows.contains(&vec![
            "Filter: Status".to_string(),
            "Pending".to_string()
        ]));
        assert!(!s.rows.iter().any(|r| r[0] == "Filters"));
        // No measured quantity for waste reports
        assert!(!s.rows.iter().any(|r| r[0].starts_with("Total ") && r[0] != "Total records"));
        assert_eq!(sheet(&wb, "By Waste Type").header, vec!["Waste Type", "Count"]);
    }

    #[test]
    fn csv_layout() {
        let wb = Workbook {
            sheets: vec![
                Sheet::new("First", &["A", "B"], vec![vec![Some("1".into()), None]]),
                Sheet::new("Second", &["C"], vec![vec![Some("x, y".into())]]),
            ],
        };
        let csv = String::from_utf8(wb.to_csv().unwrap()).unwrap();
        assert_eq!(
            csv,
            "Sheet: First\nA,B\n1,N/A\n\nSheet: Second\nC\n\"x, y\"\n"
        );
    }
}
