use serde::{Deserialize, Serialize};

use super::{opt_text, RecordId, Resource};
use crate::record::Record;

/// Enrolment of a user in a course
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCourseMapping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub user_id: Option<RecordId>,
    #[serde(default)]
    pub course_id: Option<RecordId>,
}

impl Record for UserCourseMapping {
    type Id = RecordId;

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn field(&self, name: &str) -> Option<String> {
        match name {
            "id" => opt_text(self.id),
            "userId" => opt_text(self.user_id),
            "courseId" => opt_text(self.course_id),
            _ => None,
        }
    }
}

// Search runs over the joined user and course names, which the screen
// supplies through `ManagedList::set_search_keys`.
impl Resource for UserCourseMapping {
    const BASE: &'static str = "user-course-mappings";
    const REQUIRED_FIELDS: &'static [&'static str] = &["userId", "courseId"];
    const SEARCH_FIELDS: &'static [&'static str] = &[];
    const NOUN: &'static str = "Mapping";
}
