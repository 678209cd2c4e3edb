//! Top bar with the signed-in admin and logout.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let username = move || {
        ctx.session
            .get()
            .map(|s| s.username)
            .unwrap_or_default()
    };

    view! {
        <header class="navbar">
            <span class="navbar-title">{move || ctx.route.get().label()}</span>
            <span class="navbar-user">{username}</span>
            <button class="logout-btn" on:click=move |_| ctx.logout()>
                "Logout"
            </button>
        </header>
    }
}
