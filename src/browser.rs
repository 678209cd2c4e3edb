//! Browser Glue
//!
//! Session persistence in `sessionStorage`, the address bar, and file reads.

use admin_core::session::{ROLE_KEY, USERNAME_KEY};
use admin_core::{Route, Session, SessionStore, UploadFile};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// `SessionStore` over the tab's `sessionStorage`
#[derive(Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }
}

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<Session> {
        let storage = Self::storage()?;
        let role = storage.get_item(ROLE_KEY).ok().flatten()?;
        if role.is_empty() {
            return None;
        }
        let username = storage.get_item(USERNAME_KEY).ok().flatten().unwrap_or_default();
        Some(Session { role, username })
    }

    fn save(&self, session: &Session) {
        let Some(storage) = Self::storage() else {
            log::warn!("sessionStorage unavailable, session will not survive a reload");
            return;
        };
        if storage.set_item(ROLE_KEY, &session.role).is_err()
            || storage.set_item(USERNAME_KEY, &session.username).is_err()
        {
            log::warn!("could not persist session");
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.clear();
        }
    }
}

/// Path currently in the address bar.
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Route named by the address bar.
pub fn current_route() -> Route {
    Route::from_path(&current_path())
}

/// Put `route` in the address bar without reloading.
pub fn push_route(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.location().pathname().ok().as_deref() == Some(route.path()) {
        return;
    }
    if let Ok(history) = window.history() {
        if history
            .push_state_with_url(&JsValue::NULL, "", Some(route.path()))
            .is_err()
        {
            log::warn!("could not push {}", route.path());
        }
    }
}

/// Read a picked file fully into memory.
pub async fn read_file(file: &web_sys::File) -> Result<UploadFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("could not read {}: {:?}", file.name(), e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let mime = match file.type_() {
        t if t.is_empty() => "text/csv".to_string(),
        t => t,
    };
    Ok(UploadFile {
        name: file.name(),
        mime,
        bytes,
    })
}

/// Overwrite the current history entry with `route`, e.g. after the guard
/// redirected a Back/Forward move.
pub fn replace_route(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(history) = window.history() {
        if history
            .replace_state_with_url(&JsValue::NULL, "", Some(route.path()))
            .is_err()
        {
            log::warn!("could not replace history entry with {}", route.path());
        }
    }
}
