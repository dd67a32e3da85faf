use super::prelude::*;
use crate::{
    export::{export, ExportContext, ExportFormat, ExportOutcome},
    filter::Filter,
};

/// Fetches all records of a kind and exports the filtered ones.
pub fn generate_report<R, G>(
    gw: &G,
    filter: &Filter,
    format: ExportFormat,
    ctx: &ExportContext,
) -> Result<ExportOutcome>
where
    R: Reportable,
    G: Collection<R>,
{
    let records = gw.list()?;
    log::debug!("Fetched {} {} records", records.len(), R::KIND);
    Ok(export(&records, filter, format, ctx)?)
}
