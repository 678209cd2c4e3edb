//! Lookup Data Store
//!
//! Reference collections several screens read from (course and user names,
//! permission menus). Uses Leptos reactive_stores for fine-grained
//! reactivity. Each management screen still owns its own list.

use admin_core::records::{Course, RecordId, UserRole};
use admin_core::RemoteCollection;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::context::AppContext;

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub courses: Vec<Course>,
    pub users: Vec<UserRole>,
    /// Permission names offered in the user dialog
    pub menus: Vec<String>,
}

pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub async fn refresh_courses(store: AppStore, ctx: AppContext) {
    match ctx.client().collection::<Course>().list().await {
        Ok(courses) => *store.courses().write() = courses,
        Err(err) => {
            log::error!("[STORE] Error fetching courses: {}", err);
            ctx.notify_error(format!("Error fetching courses: {}", err));
        }
    }
}

pub async fn refresh_users(store: AppStore, ctx: AppContext) {
    match ctx.client().collection::<UserRole>().list().await {
        Ok(users) => *store.users().write() = users,
        Err(err) => {
            log::error!("[STORE] Error fetching users: {}", err);
            ctx.notify_error(format!("Error fetching users: {}", err));
        }
    }
}

pub async fn refresh_menus(store: AppStore, ctx: AppContext) {
    match ctx.client().permission_menus().await {
        Ok(menus) => *store.menus().write() = menus,
        Err(err) => {
            log::error!("[STORE] Error fetching roles and permissions: {}", err);
            ctx.notify_error(format!("Error fetching permissions: {}", err));
        }
    }
}

/// Course name for an id, without subscribing.
pub fn course_name(store: AppStore, id: Option<RecordId>) -> Option<String> {
    let id = id?;
    store
        .courses()
        .with_untracked(|courses| courses.iter().find(|c| c.id == Some(id)).map(|c| c.name.clone()))
}

/// Course name and code for an id, without subscribing.
pub fn course_keys(store: AppStore, id: Option<RecordId>) -> Vec<String> {
    let Some(id) = id else {
        return Vec::new();
    };
    store.courses().with_untracked(|courses| {
        courses
            .iter()
            .find(|c| c.id == Some(id))
            .map(|c| vec![c.name.clone(), c.code.clone()])
            .unwrap_or_default()
    })
}

/// User name for an id, without subscribing.
pub fn user_name(store: AppStore, id: Option<RecordId>) -> Option<String> {
    let id = id?;
    store
        .users()
        .with_untracked(|users| users.iter().find(|u| u.id == Some(id)).map(|u| u.name.clone()))
}
