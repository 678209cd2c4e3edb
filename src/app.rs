//! Exam Admin App
//!
//! Login screen, or the sidebar/navbar layout around the current screen.

use admin_core::{AppConfig, Route, SessionStore};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::browser::{self, BrowserSessionStore};
use crate::components::{Navbar, NoticeStack, Sidebar};
use crate::context::AppContext;
use crate::screens::{
    CourseListScreen, DashboardScreen, ExamResultsScreen, LoginScreen, QuestionListScreen,
    ScheduleExamScreen, UserCourseMappingScreen, UserListScreen,
};
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let session = BrowserSessionStore.load();
    let ctx = AppContext::new(config, session, browser::current_route());
    provide_context(ctx);
    provide_context(Store::new(AppState::default()));

    // Back/Forward buttons
    let _ = window_event_listener(leptos::ev::popstate, move |_| {
        ctx.follow_history(&browser::current_path());
    });

    view! {
        <NoticeStack />
        {move || match ctx.route.get() {
            Route::Login => view! { <LoginScreen /> }.into_any(),
            route => view! {
                <div class="admin-layout">
                    <Sidebar />
                    <main class="admin-main">
                        <Navbar />
                        {screen(route)}
                    </main>
                </div>
            }
            .into_any(),
        }}
    }
}

fn screen(route: Route) -> AnyView {
    match route {
        Route::Login | Route::Dashboard => view! { <DashboardScreen /> }.into_any(),
        Route::Courses => view! { <CourseListScreen /> }.into_any(),
        Route::Users => view! { <UserListScreen /> }.into_any(),
        Route::UserMapping => view! { <UserCourseMappingScreen /> }.into_any(),
        Route::ScheduleExam => view! { <ScheduleExamScreen /> }.into_any(),
        Route::ExamResults => view! { <ExamResultsScreen /> }.into_any(),
        Route::QuestionList => view! { <QuestionListScreen /> }.into_any(),
    }
}
