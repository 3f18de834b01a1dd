use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named grouping of releases with an optional target finish date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_date: Option<NaiveDate>,
}

impl Project {
    pub fn new(name: impl Into<String>, finish_date: Option<NaiveDate>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            finish_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_date_is_optional_on_disk() {
        let project: Project = serde_json::from_str(r#"{"id":"1","name":"Apollo"}"#).unwrap();
        assert_eq!(project.finish_date, None);
        let json = serde_json::to_string(&project).unwrap();
        assert!(!json.contains("finishDate"));

        let project: Project =
            serde_json::from_str(r#"{"id":"2","name":"Gemini","finishDate":"2026-06-30"}"#)
                .unwrap();
        assert_eq!(project.finish_date, NaiveDate::from_ymd_opt(2026, 6, 30));
    }

    #[test]
    fn new_projects_get_distinct_ids() {
        let a = Project::new("A", None);
        let b = Project::new("A", None);
        assert_ne!(a.id, b.id);
    }
}
