use super::{notify, prelude::*};

pub fn change_report_status<G, N>(
    gw: &G,
    notifications: &N,
    id: &Id,
    status: ReportStatus,
) -> Result<WasteReport>
where
    G: Collection<WasteReport> + StatusChange<WasteReport>,
    N: NotificationStore,
{
    let report = gw.get(id)?;
    if report.status == Some(status) {
        return Err(Error::SameStatus(status.label()));
    }
    let updated = gw.change_status(id, status)?;
    notify(
        notifications,
        "Report status updated",
        format!("Waste report {id} marked as {}", status.label()),
    );
    Ok(updated)
}
