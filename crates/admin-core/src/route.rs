//! Routes and the session guard.

use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Courses,
    Users,
    UserMapping,
    ScheduleExam,
    ExamResults,
    QuestionList,
}

impl Route {
    /// Sidebar order
    pub const ADMIN: [Route; 7] = [
        Route::Dashboard,
        Route::Courses,
        Route::Users,
        Route::UserMapping,
        Route::ScheduleExam,
        Route::ExamResults,
        Route::QuestionList,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Dashboard => "/admin/dashboard",
            Route::Courses => "/admin/courses",
            Route::Users => "/admin/users",
            Route::UserMapping => "/admin/users/mapping",
            Route::ScheduleExam => "/admin/exams/schedule",
            Route::ExamResults => "/admin/exams/results",
            Route::QuestionList => "/admin/questions/list",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Login => "Sign in",
            Route::Dashboard => "Dashboard",
            Route::Courses => "Courses",
            Route::Users => "User Management",
            Route::UserMapping => "User Mapping",
            Route::ScheduleExam => "Schedule Exam",
            Route::ExamResults => "Exam Results",
            Route::QuestionList => "Question List",
        }
    }

    /// Unknown paths fall back to the login screen.
    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
        // The upload screen was folded into the question list.
        if trimmed == "/admin/questions/upload" {
            return Route::QuestionList;
        }
        Route::ADMIN
            .into_iter()
            .find(|route| route.path() == trimmed)
            .unwrap_or(Route::Login)
    }

    pub fn requires_session(self) -> bool {
        self != Route::Login
    }
}

/// Where the user actually lands when asking for `requested`.
pub fn guard(requested: Route, session: Option<&Session>) -> Route {
    match (requested.requires_session(), session) {
        (true, None) => Route::Login,
        (false, Some(_)) => Route::Dashboard,
        _ => requested,
    }
}

/// Screen for an address-bar path, after the guard. Used on startup and
/// whenever the browser moves through its history.
pub fn resolve_path(path: &str, session: Option<&Session>) -> Route {
    guard(Route::from_path(path), session)
}
