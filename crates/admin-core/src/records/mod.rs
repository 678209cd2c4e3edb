//! Records
//!
//! One type per remote collection the console manages. Wire names are
//! camelCase; `id` is left out of request bodies until the server assigns it.

mod account;
mod course;
mod mapping;
mod question;
mod result;
mod schedule;
mod user;

pub use account::AdminAccount;
pub use course::Course;
pub use mapping::UserCourseMapping;
pub use question::Question;
pub use result::ExamResult;
pub use schedule::ExamSchedule;
pub use user::{UserRole, ROLE_OPTIONS, STUDENT_ROLE};

use crate::record::Record;

/// Identifier type used by every collection of the exam API
pub type RecordId = u64;

/// Static description of where a record lives and how its screen treats it.
pub trait Resource: Record {
    /// Path under the API base, e.g. `courses`
    const BASE: &'static str;
    /// Fields that must be non-blank before create/update is sent
    const REQUIRED_FIELDS: &'static [&'static str];
    /// Fields matched by free-text search
    const SEARCH_FIELDS: &'static [&'static str];
    /// Field used by the exact-match entity filter, if the screen has one
    const FILTER_FIELD: Option<&'static str> = None;
    /// Singular noun used in notifications ("Course added successfully!")
    const NOUN: &'static str;
}

pub(crate) fn opt_text<V: ToString>(value: Option<V>) -> Option<String> {
    value.map(|v| v.to_string())
}
