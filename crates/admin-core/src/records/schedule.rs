use serde::{Deserialize, Serialize};

use super::{opt_text, RecordId, Resource};
use crate::record::Record;

/// A scheduled exam sitting for a course
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamSchedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub course_id: Option<RecordId>,
    /// `YYYY-MM-DD`
    #[serde(default)]
    pub exam_date: String,
    /// `HH:MM`
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub day_of_week: String,
    #[serde(default)]
    pub student_count: Option<u32>,
}

impl Record for ExamSchedule {
    type Id = RecordId;

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => opt_text(self.id),
            "courseId" => opt_text(self.course_id),
            "examDate" => Some(self.exam_date.clone()),
            "startTime" => Some(self.start_time.clone()),
            "durationMinutes" => opt_text(self.duration_minutes),
            "dayOfWeek" => Some(self.day_of_week.clone()),
            "studentCount" => opt_text(self.student_count),
            _ => None,
        }
    }
}

impl Resource for ExamSchedule {
    const BASE: &'static str = "exam-schedules";
    const REQUIRED_FIELDS: &'static [&'static str] = &[
        "courseId",
        "examDate",
        "startTime",
        "durationMinutes",
        "dayOfWeek",
        "studentCount",
    ];
    const SEARCH_FIELDS: &'static [&'static str] = &["dayOfWeek", "examDate"];
    const FILTER_FIELD: Option<&'static str> = Some("courseId");
    const NOUN: &'static str = "Exam";
}
