use std::path::Path;

use chrono::NaiveDate;

use super::DataError;
use crate::model::AppData;

/// Serialize the whole application state as pretty-printed JSON.
pub fn serialize(data: &AppData) -> Result<String, DataError> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Parse application state from JSON.
///
/// A document without `projects` and `releases` arrays is rejected as
/// [`DataError::InvalidFormat`] before any field is decoded, so callers can
/// keep their current state untouched.
pub fn deserialize(json: &str) -> Result<AppData, DataError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let has_arrays = value.get("projects").is_some_and(|v| v.is_array())
        && value.get("releases").is_some_and(|v| v.is_array());
    if !has_arrays {
        return Err(DataError::InvalidFormat);
    }
    Ok(serde_json::from_value(value)?)
}

/// Write the state to a user-chosen file.
pub fn export_to_path(data: &AppData, path: &Path) -> Result<(), DataError> {
    let json = serialize(data)?;
    std::fs::write(path, json)?;
    tracing::info!(path = %path.display(), "exported data");
    Ok(())
}

/// Read state from a user-chosen file.
pub fn import_from_path(path: &Path) -> Result<AppData, DataError> {
    let json = std::fs::read_to_string(path)?;
    let data = deserialize(&json)?;
    tracing::info!(
        path = %path.display(),
        projects = data.projects.len(),
        releases = data.releases.len(),
        "imported data"
    );
    Ok(data)
}

/// `gantt-data-YYYY-MM-DD.json`
pub fn default_export_file_name(today: NaiveDate) -> String {
    format!("gantt-data-{}.json", today.format("%Y-%m-%d"))
}
