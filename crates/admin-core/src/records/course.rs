use serde::{Deserialize, Serialize};

use super::{opt_text, RecordId, Resource};
use crate::record::Record;

/// A course offered on the platform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
    /// Start date, `YYYY-MM-DD`
    #[serde(default)]
    pub schedule: String,
}

impl Record for Course {
    type Id = RecordId;

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => opt_text(self.id),
            "name" => Some(self.name.clone()),
            "code" => Some(self.code.clone()),
            "description" => Some(self.description.clone()),
            "schedule" => Some(self.schedule.clone()),
            _ => None,
        }
    }
}

impl Resource for Course {
    const BASE: &'static str = "courses";
    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "code", "description", "schedule"];
    const SEARCH_FIELDS: &'static [&'static str] = &["name", "code", "description"];
    const NOUN: &'static str = "Course";
}
