//! Dashboard Screen
//!
//! Landing page after login. Totals, pass/fail per course and the exams
//! still ahead, all computed from freshly fetched collections.

use admin_core::dashboard::{summarize, DashboardInput, DashboardSummary};
use admin_core::records::{ExamResult, ExamSchedule, Question, Resource};
use admin_core::{NetworkError, RemoteCollection};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, AppContext};
use crate::store::{refresh_courses, refresh_users, use_app_store, AppStateStoreFields};

async fn fetch_all<T: Resource>(ctx: AppContext) -> Vec<T> {
    let result: Result<Vec<T>, NetworkError> = ctx.client().collection::<T>().list().await;
    result.unwrap_or_else(|err| {
        log::error!("[DASHBOARD] Error fetching {}: {}", T::BASE, err);
        Vec::new()
    })
}

#[component]
fn StatCard(label: &'static str, #[prop(into)] value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-value">{move || value.get()}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

#[component]
pub fn DashboardScreen() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let questions = RwSignal::new(Vec::<Question>::new());
    let results = RwSignal::new(Vec::<ExamResult>::new());
    let schedules = RwSignal::new(Vec::<ExamSchedule>::new());

    spawn_local(async move {
        refresh_courses(store, ctx).await;
        refresh_users(store, ctx).await;
        questions.try_set(fetch_all(ctx).await);
        results.try_set(fetch_all(ctx).await);
        schedules.try_set(fetch_all(ctx).await);
        log::info!("[DASHBOARD] Collections loaded");
    });

    let pass_mark = ctx.config.with_value(|c| c.pass_mark);
    let summary = Memo::new(move |_| {
        let courses = store.courses().get();
        let users = store.users().get();
        let (questions, results, schedules) = (questions.get(), results.get(), schedules.get());
        summarize(
            &DashboardInput {
                courses: &courses,
                users: &users,
                questions: &questions,
                results: &results,
                schedules: &schedules,
            },
            pass_mark,
            chrono::Local::now().date_naive(),
        )
    });
    let stat = move |read: fn(&DashboardSummary) -> usize| Signal::derive(move || summary.with(read));

    view! {
        <section class="screen dashboard">
            <h1 class="screen-title">"Dashboard"</h1>
            <div class="stat-grid">
                <StatCard label="Courses" value=stat(|s| s.courses) />
                <StatCard label="Users" value=stat(|s| s.users) />
                <StatCard label="Students" value=stat(|s| s.students) />
                <StatCard label="Questions" value=stat(|s| s.questions) />
                <StatCard label="Passed" value=stat(|s| s.passed) />
                <StatCard label="Failed" value=stat(|s| s.failed) />
            </div>

            <h2 class="section-title">"Results by Course"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Course"</th>
                        <th>"Passed"</th>
                        <th>"Failed"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        summary
                            .with(|s| s.per_course.clone())
                            .into_iter()
                            .map(|outcome| {
                                view! {
                                    <tr>
                                        <td>{outcome.course}</td>
                                        <td>{outcome.passed}</td>
                                        <td>{outcome.failed}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <h2 class="section-title">"Upcoming Exams"</h2>
            <Show
                when=move || summary.with(|s| !s.upcoming.is_empty())
                fallback=|| view! { <p class="empty">"No upcoming exams"</p> }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Course"</th>
                            <th>"Date"</th>
                            <th>"Students"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            summary
                                .with(|s| s.upcoming.clone())
                                .into_iter()
                                .map(|exam| {
                                    view! {
                                        <tr>
                                            <td>{exam.course}</td>
                                            <td>{exam.date.format("%Y-%m-%d").to_string()}</td>
                                            <td>{exam.students}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
