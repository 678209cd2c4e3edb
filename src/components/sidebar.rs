//! Sidebar Component
//!
//! Navigation between the admin screens.

use admin_core::Route;
use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="sidebar">
            <div class="sidebar-header">"Exam Admin"</div>
            {Route::ADMIN
                .into_iter()
                .map(|route| {
                    let is_active = move || ctx.route.get() == route;
                    view! {
                        <button
                            class=move || if is_active() { "sidebar-item active" } else { "sidebar-item" }
                            on:click=move |_| ctx.navigate(route)
                        >
                            {route.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
