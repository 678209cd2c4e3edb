//! Application Context
//!
//! Session, route, notifications and the REST client, provided to every
//! screen via Leptos Context API.

use admin_core::{guard, resolve_path, AppConfig, Notices, RestClient, Route, Session, SessionStore, Severity};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser::{self, BrowserSessionStore};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<AppConfig>,
    client: StoredValue<RestClient, LocalStorage>,
    /// Signed-in admin, `None` on the login screen
    pub session: RwSignal<Option<Session>>,
    /// Screen being shown (always passed through the guard)
    pub route: RwSignal<Route>,
    pub notices: RwSignal<Notices>,
}

impl AppContext {
    pub fn new(config: AppConfig, session: Option<Session>, requested: Route) -> Self {
        let client = RestClient::new(config.api_base.clone());
        let route = guard(requested, session.as_ref());
        browser::push_route(route);
        Self {
            config: StoredValue::new(config),
            client: StoredValue::new_local(client),
            session: RwSignal::new(session),
            route: RwSignal::new(route),
            notices: RwSignal::new(Notices::default()),
        }
    }

    pub fn client(&self) -> RestClient {
        self.client.get_value()
    }

    pub fn page_size(&self) -> usize {
        self.config.with_value(|c| c.page_size)
    }

    /// Go to `route`, or wherever the guard sends us instead.
    pub fn navigate(&self, route: Route) {
        let target = guard(route, self.session.get_untracked().as_ref());
        if target != route {
            log::debug!("[ROUTE] {:?} redirected to {:?}", route, target);
        }
        browser::push_route(target);
        self.route.set(target);
    }

    /// The browser moved through its history to `path`. The entry is already
    /// in place, so it is only rewritten when the guard sends us elsewhere.
    pub fn follow_history(&self, path: &str) {
        let target = resolve_path(path, self.session.get_untracked().as_ref());
        if target != Route::from_path(path) {
            log::debug!("[ROUTE] history entry {} redirected to {:?}", path, target);
            browser::replace_route(target);
        }
        self.route.set(target);
    }

    pub fn sign_in(&self, session: Session) {
        self.session.set(Some(session));
        self.navigate(Route::Dashboard);
    }

    pub fn logout(&self) {
        BrowserSessionStore.clear();
        self.session.set(None);
        self.navigate(Route::Login);
    }

    /// Show a notice that goes away by itself after the configured timeout.
    pub fn notify(&self, severity: Severity, message: impl Into<String>) {
        let mut id = 0;
        self.notices.update(|n| id = n.push(severity, message));
        let notices = self.notices;
        let timeout = self.config.with_value(|c| c.notice_timeout_ms);
        spawn_local(async move {
            TimeoutFuture::new(timeout).await;
            notices.try_update(|n| n.dismiss(id));
        });
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.notify(Severity::Success, message);
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.notify(Severity::Error, message);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
