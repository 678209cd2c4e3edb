//! Dashboard summary computed from already-fetched collections.

use chrono::NaiveDate;

use crate::records::{Course, ExamResult, ExamSchedule, Question, UserRole};

#[derive(Debug, Clone, PartialEq)]
pub struct CourseOutcome {
    pub course: String,
    pub passed: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingExam {
    pub course: String,
    pub date: NaiveDate,
    pub students: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    pub courses: usize,
    pub users: usize,
    pub students: usize,
    pub questions: usize,
    pub passed: usize,
    pub failed: usize,
    pub per_course: Vec<CourseOutcome>,
    pub upcoming: Vec<UpcomingExam>,
}

pub struct DashboardInput<'a> {
    pub courses: &'a [Course],
    pub users: &'a [UserRole],
    pub questions: &'a [Question],
    pub results: &'a [ExamResult],
    pub schedules: &'a [ExamSchedule],
}

/// Summarise the console's collections. A result passes when its score is
/// at least `pass_mark`; exams dated before `today` are not upcoming, nor are
/// schedules whose date does not parse.
pub fn summarize(input: &DashboardInput<'_>, pass_mark: f64, today: NaiveDate) -> DashboardSummary {
    let passed = |r: &&ExamResult| r.score >= pass_mark;

    let per_course = input
        .courses
        .iter()
        .map(|course| {
            let of_course: Vec<&ExamResult> = input
                .results
                .iter()
                .filter(|r| r.course.eq_ignore_ascii_case(&course.name))
                .collect();
            let pass_count = of_course.iter().filter(|r| r.score >= pass_mark).count();
            CourseOutcome {
                course: course.name.clone(),
                passed: pass_count,
                failed: of_course.len() - pass_count,
            }
        })
        .collect();

    let mut upcoming: Vec<UpcomingExam> = input
        .schedules
        .iter()
        .filter_map(|s| {
            let date = NaiveDate::parse_from_str(&s.exam_date, "%Y-%m-%d").ok()?;
            if date < today {
                return None;
            }
            let course = input
                .courses
                .iter()
                .find(|c| c.id.is_some() && c.id == s.course_id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| format!("Course #{}", s.course_id.unwrap_or_default()));
            Some(UpcomingExam {
                course,
                date,
                students: s.student_count.unwrap_or(0),
            })
        })
        .collect();
    upcoming.sort_by_key(|u| u.date);

    let pass_total = input.results.iter().filter(passed).count();
    DashboardSummary {
        courses: input.courses.len(),
        users: input.users.len(),
        students: input.users.iter().filter(|u| u.is_student()).count(),
        questions: input.questions.len(),
        passed: pass_total,
        failed: input.results.len() - pass_total,
        per_course,
        upcoming,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn result(course: &str, score: f64) -> ExamResult {
        ExamResult {
            course: course.into(),
            score,
            ..Default::default()
        }
    }

    #[test]
    fn pass_fail_per_course() {
        let courses = vec![
            Course {
                id: Some(1),
                name: "React Basics".into(),
                ..Default::default()
            },
            Course {
                id: Some(2),
                name: "Advanced JavaScript".into(),
                ..Default::default()
            },
        ];
        let results = vec![
            result("React Basics", 72.0),
            result("react basics", 12.0),
            result("Advanced JavaScript", 40.0),
        ];
        let summary = summarize(
            &DashboardInput {
                courses: &courses,
                users: &[],
                questions: &[],
                results: &results,
                schedules: &[],
            },
            40.0,
            date("2024-12-01"),
        );
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(
            summary.per_course[0],
            CourseOutcome {
                course: "React Basics".into(),
                passed: 1,
                failed: 1
            }
        );
        assert_eq!(summary.per_course[1].passed, 1);
    }

    #[test]
    fn upcoming_exams_are_future_and_sorted() {
        let courses = vec![Course {
            id: Some(1),
            name: "React Basics".into(),
            ..Default::default()
        }];
        let schedules = vec![
            ExamSchedule {
                course_id: Some(1),
                exam_date: "2024-12-20".into(),
                student_count: Some(25),
                ..Default::default()
            },
            ExamSchedule {
                course_id: Some(1),
                exam_date: "2024-12-15".into(),
                student_count: Some(20),
                ..Default::default()
            },
            ExamSchedule {
                course_id: Some(7),
                exam_date: "2024-11-01".into(),
                ..Default::default()
            },
            ExamSchedule {
                exam_date: "soon".into(),
                ..Default::default()
            },
        ];
        let summary = summarize(
            &DashboardInput {
                courses: &courses,
                users: &[],
                questions: &[],
                results: &[],
                schedules: &schedules,
            },
            40.0,
            date("2024-12-01"),
        );
        let dates: Vec<NaiveDate> = summary.upcoming.iter().map(|u| u.date).collect();
        assert_eq!(dates, vec![date("2024-12-15"), date("2024-12-20")]);
        assert_eq!(summary.upcoming[0].course, "React Basics");
        assert_eq!(summary.upcoming[0].students, 20);
    }
}
