//! Transient notifications shown after list operations.

use crate::error::NetworkError;
use crate::list::Applied;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "notice success",
            Severity::Error => "notice error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub severity: Severity,
    pub message: String,
}

/// Queue of visible notices, newest last
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notices {
    next_id: u32,
    items: Vec<Notice>,
}

impl Notices {
    /// Push a notice and return its id (used to auto-dismiss it later).
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice {
            id,
            severity,
            message: message.into(),
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u32 {
        self.push(Severity::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u32 {
        self.push(Severity::Error, message)
    }

    /// Dismissing an unknown or already-dismissed id is a no-op.
    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// "Course added successfully!" / "Course updated successfully!" ...
pub fn saved_message(noun: &str, created: bool) -> String {
    if created {
        format!("{} added successfully!", noun)
    } else {
        format!("{} updated successfully!", noun)
    }
}

pub fn deleted_message(noun: &str) -> String {
    format!("{} deleted successfully!", noun)
}

pub fn reload_failed_message(base: &str) -> String {
    format!("Could not refresh {}; the table may be out of date.", base)
}

/// Notices for a mutation the server accepted: its success line, then an
/// error when the list could not be fetched again afterwards.
pub fn applied_notices<V>(base: &str, success: String, applied: &Applied<V>) -> Vec<(Severity, String)> {
    let mut out = vec![(Severity::Success, success)];
    if applied.reload.is_some() {
        out.push((Severity::Error, reload_failed_message(base)));
    }
    out
}

pub const UPLOADED_MESSAGE: &str = "CSV uploaded successfully!";
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload CSV.";
pub const REQUIRED_MESSAGE: &str = "All fields are required!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_removes_only_that_notice() {
        let mut notices = Notices::default();
        let first = notices.success("Course added successfully!");
        let second = notices.error("Failed to delete result.");
        notices.dismiss(first);
        assert_eq!(notices.items().len(), 1);
        assert_eq!(notices.items()[0].id, second);

        notices.dismiss(first);
        notices.dismiss(second);
        assert!(notices.is_empty());
    }

    #[test]
    fn failed_reload_adds_an_error_after_the_success() {
        let synced = Applied { value: (), reload: None };
        assert_eq!(
            applied_notices("courses", deleted_message("Course"), &synced),
            vec![(Severity::Success, "Course deleted successfully!".to_string())]
        );

        let stale = Applied {
            value: (),
            reload: Some(NetworkError::Status {
                method: "GET",
                url: "http://localhost:9000/api/courses".into(),
                status: 502,
            }),
        };
        let notices = applied_notices("courses", deleted_message("Course"), &stale);
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].0, Severity::Success);
        assert_eq!(
            notices[1],
            (
                Severity::Error,
                "Could not refresh courses; the table may be out of date.".to_string()
            )
        );
    }

    #[test]
    fn messages_use_the_noun() {
        assert_eq!(saved_message("Course", true), "Course added successfully!");
        assert_eq!(saved_message("User", false), "User updated successfully!");
        assert_eq!(deleted_message("Mapping"), "Mapping deleted successfully!");
    }
}
