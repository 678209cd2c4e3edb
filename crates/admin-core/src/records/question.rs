use serde::{Deserialize, Serialize};

use super::{opt_text, RecordId, Resource};
use crate::record::Record;

/// A multiple-choice question in the bank
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub question_text: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default)]
    pub course_id: Option<RecordId>,
}

impl Record for Question {
    type Id = RecordId;

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => opt_text(self.id),
            "questionText" => Some(self.question_text.clone()),
            "options" => Some(self.options.join(", ")),
            "correctAnswer" => Some(self.correct_answer.clone()),
            "courseId" => opt_text(self.course_id),
            _ => None,
        }
    }
}

impl Resource for Question {
    const BASE: &'static str = "questions";
    const REQUIRED_FIELDS: &'static [&'static str] = &["questionText", "correctAnswer"];
    const SEARCH_FIELDS: &'static [&'static str] = &["questionText"];
    const FILTER_FIELD: Option<&'static str> = Some("courseId");
    const NOUN: &'static str = "Question";
}
