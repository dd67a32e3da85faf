use super::prelude::*;

pub fn delete_record<R, G>(gw: &G, id: &Id) -> Result<()>
where
    R: Reportable,
    G: Collection<R>,
{
    if !id.is_valid() {
        return Err(Error::Id);
    }
    gw.delete(id)?;
    log::info!("Deleted {} record {id}", R::KIND);
    Ok(())
}
