use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn is_false(value: &bool) -> bool {
    !*value
}

/// A planned deliverable: a committed work window (start to early finish)
/// followed by an uncertainty window (early finish to late finish).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub early_finish_date: NaiveDate,
    pub late_finish_date: NaiveDate,
    /// Excluded from the chart but kept in the data set and list views.
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden: bool,
    /// Drawn with the fixed "done" palette instead of the theme colors.
    #[serde(default, skip_serializing_if = "is_false")]
    pub completed: bool,
}

impl Release {
    /// Create a new release with a fresh id.
    pub fn new(
        project_id: impl Into<String>,
        name: impl Into<String>,
        start_date: NaiveDate,
        early_finish_date: NaiveDate,
        late_finish_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            project_id: project_id.into(),
            name: name.into(),
            start_date,
            early_finish_date,
            late_finish_date,
            hidden: false,
            completed: false,
        }
    }

    /// True when `start < early <= late`.
    pub fn has_ordered_dates(&self) -> bool {
        self.start_date < self.early_finish_date && self.early_finish_date <= self.late_finish_date
    }
}
