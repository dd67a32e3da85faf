use std::{fs, path::Path};

use anyhow::{Context, Result};

use gg360_boundary::ApiResponse;
use gg360_gateways::Remote;

/// Reads records from a JSON dump of an API response.
pub fn read_records<T: Remote>(path: &Path) -> Result<Vec<T>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Unable to read {}", path.display()))?;
    let response: ApiResponse<Vec<T::Json>> = serde_json::from_str(&json)
        .with_context(|| format!("Unexpected content in {}", path.display()))?;
    let records = response.into_result()?;
    log::debug!("Read {} records from {}", records.len(), path.display());
    Ok(records.into_iter().map(Into::into).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gg360_core::entities::{Event, EventStatus};
    use std::io::Write;

    #[test]
    fn read_wrapped_dump() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"success":true,"data":[{{"_id":"e1","title":"Clean-up","date":"2024-06-02T00:00:00.000Z","status":"upcoming"}}]}}"#
        )
        .unwrap();
        let events: Vec<Event> = read_records(file.path()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Clean-up");
        assert_eq!(events[0].status, Some(EventStatus::Upcoming));
    }

    #[test]
    fn reject_failed_response() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"success":false,"message":"Not allowed"}}"#).unwrap();
        let err = read_records::<Event>(file.path()).unwrap_err();
        assert_eq!(err.to_string(), "Not allowed");
    }
}
