use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use gg360_core::{
    entities::{parse_calendar_date, Date, EntityKind},
    export::ExportFormat,
    filter::{DateRange, Filter, Selection},
    resource::Field,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Configuration file (default: gg360.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export a filtered report of one kind of records
    Report(ReportArgs),
    /// Show a month of the events calendar
    Calendar(CalendarArgs),
    /// Move a redeem to the next status
    RedeemStatus { id: String, status: String },
    /// Change the status of a waste report
    ReportStatus { id: String, status: String },
    /// Request a reward
    Redeem(RedeemArgs),
    /// Delete a record
    Delete { kind: EntityKind, id: String },
    /// Show or acknowledge notifications
    Notifications {
        #[command(subcommand)]
        action: Option<NotificationAction>,
    },
}

#[derive(Subcommand, Debug)]
pub enum NotificationAction {
    /// List all notifications, newest first
    List,
    /// Mark a notification as read
    Read { id: String },
    /// Mark all notifications as read
    ReadAll,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// One of: user, redeem, waste-report, recycling, staff, article, event, volunteer
    pub kind: EntityKind,

    /// Status label, `all` selects every status
    #[arg(long)]
    pub status: Option<String>,

    /// Exact field match, e.g. `waste-type=Plastic`
    #[arg(long = "where", value_name = "FIELD=VALUE", value_parser = parse_field_value)]
    pub selections: Vec<(Field, String)>,

    /// Case-insensitive substring match, e.g. `location=market`
    #[arg(long = "search", value_name = "FIELD=TEXT", value_parser = parse_field_value)]
    pub searches: Vec<(Field, String)>,

    /// First day of the period (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub from: Option<Date>,

    /// Last day of the period (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub to: Option<Date>,

    #[arg(long, default_value_t)]
    pub format: ExportFormat,

    /// Read the records from a JSON file instead of the API
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output directory
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl ReportArgs {
    pub fn filter(&self) -> Filter {
        let mut filter = Filter::default()
            .with_status(Selection::parse(self.status.as_deref().unwrap_or_default()));
        for (field, value) in &self.selections {
            filter = filter.with_field(*field, Selection::parse(value));
        }
        for (field, text) in &self.searches {
            filter = filter.with_search(*field, text.as_str());
        }
        let period = DateRange {
            from: self.from,
            to: self.to,
        };
        if period.is_active() {
            filter = filter.with_period(period);
        }
        filter
    }
}

#[derive(Args, Debug)]
pub struct CalendarArgs {
    #[arg(long, requires = "month")]
    pub year: Option<i32>,

    /// 1 = January
    #[arg(long, requires = "year", value_parser = clap::value_parser!(u8).range(1..=12))]
    pub month: Option<u8>,

    /// Read the events from a JSON file instead of the API
    #[arg(long)]
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct RedeemArgs {
    #[arg(long)]
    pub user: String,
    #[arg(long)]
    pub reward: String,
    #[arg(long)]
    pub points: u32,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub postal_code: Option<String>,
}

fn parse_field_value(s: &str) -> Result<(Field, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{s}'"))?;
    let field = field
        .trim()
        .parse::<Field>()
        .map_err(|_| format!("unknown field '{}'", field.trim()))?;
    Ok((field, value.trim().to_owned()))
}

fn parse_date(s: &str) -> Result<Date, String> {
    parse_calendar_date(s).ok_or_else(|| format!("invalid date '{s}', expected YYYY-MM-DD"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("gg360").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn report_filter_from_args() {
        let cli = parse(&[
            "report",
            "recycling",
            "--status",
            "Verified",
            "--where",
            "recycling-center=North",
            "--search",
            "user-name=ann",
            "--from",
            "2024-01-01",
            "--format",
            "document",
        ]);
        let Command::Report(args) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(args.kind, EntityKind::Recycling);
        assert_eq!(args.format, ExportFormat::Document);
        let filter = args.filter();
        assert_eq!(filter.status, Selection::Only("Verified".into()));
        assert_eq!(
            filter.fields,
            vec![(Field::RecyclingCenter, Selection::Only("North".into()))]
        );
        assert_eq!(filter.searches, vec![(Field::UserName, "ann".to_string())]);
        assert_eq!(
            filter.period,
            Some(DateRange {
                from: Some(date!(2024 - 01 - 01)),
                to: None
            })
        );
    }

    #[test]
    fn report_defaults() {
        let cli = parse(&["report", "waste-report"]);
        let Command::Report(args) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(args.format, ExportFormat::Workbook);
        assert!(args.filter().is_empty());
    }

    #[test]
    fn reject_invalid_args() {
        let parse = |args: &[&str]| {
            Cli::try_parse_from(std::iter::once("gg360").chain(args.iter().copied()))
        };
        assert!(parse(&["report", "volunteer"]).is_err());
        assert!(parse(&["report", "event", "--where", "colour=green"]).is_err());
        assert!(parse(&["report", "event", "--from", "yesterday"]).is_err());
        assert!(parse(&["calendar", "--year", "2024"]).is_err());
        assert!(parse(&["calendar", "--year", "2024", "--month", "13"]).is_err());
    }
}
