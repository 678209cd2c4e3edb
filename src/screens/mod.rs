//! Screens
//!
//! One component per route. Every management screen is a `ListHandle` plus
//! its table and form.

mod courses;
mod dashboard;
mod exam_results;
mod login;
mod question_list;
mod schedule_exam;
mod user_mapping;
mod users;

pub use courses::CourseListScreen;
pub use dashboard::DashboardScreen;
pub use exam_results::ExamResultsScreen;
pub use login::LoginScreen;
pub use question_list::QuestionListScreen;
pub use schedule_exam::ScheduleExamScreen;
pub use user_mapping::UserCourseMappingScreen;
pub use users::UserListScreen;
