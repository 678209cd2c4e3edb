use serde::{Deserialize, Serialize};

use super::{opt_text, RecordId, Resource};
use crate::record::Record;

/// Score of one student in one exam
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub student_id: Option<RecordId>,
    #[serde(default)]
    pub student_name: String,
    /// Course name as reported by the results service
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub exam_date: String,
    #[serde(default)]
    pub score: f64,
}

impl Record for ExamResult {
    type Id = RecordId;

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => opt_text(self.id),
            "studentId" => opt_text(self.student_id),
            "studentName" => Some(self.student_name.clone()),
            "course" => Some(self.course.clone()),
            "examDate" => Some(self.exam_date.clone()),
            "score" => Some(self.score.to_string()),
            _ => None,
        }
    }
}

impl Resource for ExamResult {
    const BASE: &'static str = "results";
    const REQUIRED_FIELDS: &'static [&'static str] = &[];
    const SEARCH_FIELDS: &'static [&'static str] = &["studentName", "course"];
    const FILTER_FIELD: Option<&'static str> = Some("studentId");
    const NOUN: &'static str = "Result";
}
