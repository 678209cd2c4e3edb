//! Admin Login Screen
//!
//! Checks the form against the admin account and stores the session.

use admin_core::{sign_in, AuthError};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser::BrowserSessionStore;
use crate::context::use_app_context;

#[component]
pub fn LoginScreen() -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let email = email.get_untracked();
        let password = password.get_untracked();
        let username = ctx.config.with_value(|c| c.admin_username.clone());
        set_submitting.set(true);

        spawn_local(async move {
            let outcome = match ctx.client().admin_account(&username).await {
                Ok(account) => sign_in(&BrowserSessionStore, &account, &email, &password),
                Err(err) => Err(AuthError::Network(err)),
            };
            set_submitting.set(false);
            match outcome {
                Ok(session) => {
                    set_error.set(None);
                    ctx.sign_in(session);
                }
                Err(err) => {
                    log::warn!("[LOGIN] {}", err);
                    set_error.set(Some(err.to_string()));
                    ctx.notify_error(err.to_string());
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2 class="login-title">"Sign in"</h2>
                <p class="login-subtitle">"Sign in to access your account"</p>
                <form on:submit=on_submit>
                    <input
                        type="email"
                        placeholder="Enter Your Email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Enter Your Password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    {move || error.get().map(|msg| view! { <p class="login-error">{msg}</p> })}
                    <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                        "Login"
                    </button>
                </form>
            </div>
        </div>
    }
}
