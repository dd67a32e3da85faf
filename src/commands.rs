use std::{fs, path::Path};

use anyhow::{anyhow, Context, Result};
use time::OffsetDateTime;

use gg360_core::{
    calendar::{CalendarMonth, MonthCursor},
    entities::*,
    export::{export, ExportContext, ExportFile, ExportFormat, ExportOutcome},
    filter::Filter,
    gateways::NotificationStore,
    resource::Reportable,
    usecases,
};
use gg360_gateways::{JsonFileNotifications, Remote, RestApi};

use crate::{
    cli::{CalendarArgs, NotificationAction, RedeemArgs, ReportArgs},
    config::Config,
    input::read_records,
};

fn rest_api(cfg: &Config) -> Result<RestApi> {
    log::debug!("Connecting to {}", cfg.api.base_url);
    Ok(RestApi::try_new(&cfg.api.base_url, cfg.api.timeout)?)
}

fn notification_store(cfg: &Config) -> Result<JsonFileNotifications> {
    let dir = &cfg.notifications.store_dir;
    JsonFileNotifications::try_new(dir, cfg.notifications.capacity)
        .with_context(|| format!("Unable to open notification store in {}", dir.display()))
}

fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

pub fn report(cfg: &Config, args: ReportArgs) -> Result<()> {
    let filter = args.filter();
    let ctx = ExportContext {
        app_name: cfg.export.app_name.clone(),
        generated_on: Timestamp::now(),
        page_rows: cfg.export.page_rows,
    };
    let input = args.input.as_deref();
    let format = args.format;
    let outcome = match args.kind {
        EntityKind::User => export_kind::<User>(cfg, input, &filter, format, &ctx),
        EntityKind::Redeem => export_kind::<Redeem>(cfg, input, &filter, format, &ctx),
        EntityKind::WasteReport => export_kind::<WasteReport>(cfg, input, &filter, format, &ctx),
        EntityKind::Recycling => export_kind::<RecycleEntry>(cfg, input, &filter, format, &ctx),
        EntityKind::Staff => export_kind::<Staff>(cfg, input, &filter, format, &ctx),
        EntityKind::Article => export_kind::<Article>(cfg, input, &filter, format, &ctx),
        EntityKind::Event => export_kind::<Event>(cfg, input, &filter, format, &ctx),
        EntityKind::Volunteer => export_kind::<Volunteer>(cfg, input, &filter, format, &ctx),
    }?;
    match outcome {
        ExportOutcome::File(file) => {
            let dir = args.out.as_deref().unwrap_or(cfg.export.output_dir.as_path());
            let path = write_export(dir, &file)?;
            println!("{}", path.display());
        }
        ExportOutcome::Empty(empty) => {
            println!("{empty}");
        }
    }
    Ok(())
}

fn export_kind<R>(
    cfg: &Config,
    input: Option<&Path>,
    filter: &Filter,
    format: ExportFormat,
    ctx: &ExportContext,
) -> Result<ExportOutcome>
where
    R: Reportable + Remote,
{
    let outcome = match input {
        Some(path) => {
            let records = read_records::<R>(path)?;
            export(&records, filter, format, ctx)?
        }
        None => usecases::generate_report::<R, _>(&rest_api(cfg)?, filter, format, ctx)?,
    };
    Ok(outcome)
}

fn write_export(dir: &Path, file: &ExportFile) -> Result<std::path::PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("Unable to create {}", dir.display()))?;
    let path = dir.join(&file.file_name);
    fs::write(&path, &file.content)
        .with_context(|| format!("Unable to write {}", path.display()))?;
    log::info!("Exported {} bytes into {}", file.content.len(), path.display());
    Ok(path)
}

pub fn calendar(cfg: &Config, args: CalendarArgs) -> Result<()> {
    let cursor = match (args.year, args.month) {
        (Some(year), Some(month)) => MonthCursor::new(year, month - 1)?,
        _ => MonthCursor::from_date(today()),
    };
    let events = match args.input {
        Some(path) => read_records::<Event>(&path)?,
        None => usecases::load_calendar(&rest_api(cfg)?, cursor)?,
    };
    let month = CalendarMonth::new(cursor, &events);
    print!("{month}");
    for line in month.agenda() {
        println!("{line}");
    }
    Ok(())
}

pub fn redeem_status(cfg: &Config, id: &str, status: &str) -> Result<()> {
    let status = RedeemStatus::parse_label(status).ok_or_else(|| {
        anyhow!(
            "Unknown redeem status '{status}', expected one of {}",
            RedeemStatus::labels().join(", ")
        )
    })?;
    let api = rest_api(cfg)?;
    let store = notification_store(cfg)?;
    let redeem = usecases::change_redeem_status(&api, &store, &id.into(), status)?;
    println!("Redeem {} is now {}", redeem.id, status.label());
    Ok(())
}

pub fn report_status(cfg: &Config, id: &str, status: &str) -> Result<()> {
    let status = ReportStatus::parse_label(status).ok_or_else(|| {
        anyhow!(
            "Unknown report status '{status}', expected one of {}",
            ReportStatus::labels().join(", ")
        )
    })?;
    let api = rest_api(cfg)?;
    let store = notification_store(cfg)?;
    let report = usecases::change_report_status(&api, &store, &id.into(), status)?;
    println!("Waste report {} is now {}", report.id, status.label());
    Ok(())
}

pub fn redeem(cfg: &Config, args: RedeemArgs) -> Result<()> {
    let RedeemArgs {
        user,
        reward,
        points,
        name,
        address,
        phone,
        city,
        state,
        postal_code,
    } = args;
    let new_redeem = NewRedeem {
        user_id: user.into(),
        reward_name: reward,
        reward_points: points,
        shipping_info: ShippingInfo {
            name,
            address,
            phone,
            city,
            state,
            postal_code,
        },
    };
    let redeem = usecases::create_redeem(&rest_api(cfg)?, new_redeem)?;
    println!("Requested redeem {}", redeem.id);
    Ok(())
}

pub fn delete(cfg: &Config, kind: EntityKind, id: &str) -> Result<()> {
    let api = rest_api(cfg)?;
    let id = Id::from(id);
    match kind {
        EntityKind::User => usecases::delete_record::<User, _>(&api, &id),
        EntityKind::Redeem => usecases::delete_record::<Redeem, _>(&api, &id),
        EntityKind::WasteReport => usecases::delete_record::<WasteReport, _>(&api, &id),
        EntityKind::Recycling => usecases::delete_record::<RecycleEntry, _>(&api, &id),
        EntityKind::Staff => usecases::delete_record::<Staff, _>(&api, &id),
        EntityKind::Article => usecases::delete_record::<Article, _>(&api, &id),
        EntityKind::Event => usecases::delete_record::<Event, _>(&api, &id),
        EntityKind::Volunteer => usecases::delete_record::<Volunteer, _>(&api, &id),
    }?;
    println!("Deleted {} {id}", kind.title().to_lowercase());
    Ok(())
}

pub fn notifications(cfg: &Config, action: Option<NotificationAction>) -> Result<()> {
    let store = notification_store(cfg)?;
    match action.unwrap_or(NotificationAction::List) {
        NotificationAction::List => {
            let notifications = store.list()?;
            if notifications.is_empty() {
                println!("No notifications");
            }
            for n in notifications {
                let mark = if n.read { ' ' } else { '*' };
                println!("{mark} {} {} [{}]", n.created, n.title, n.id);
                println!("    {}", n.message);
            }
        }
        NotificationAction::Read { id } => {
            if !store.mark_read(&id.as_str().into())? {
                return Err(anyhow!("Notification {id} not found"));
            }
        }
        NotificationAction::ReadAll => {
            let count = store.mark_all_read()?;
            println!("Marked {count} notifications as read");
        }
    }
    Ok(())
}
