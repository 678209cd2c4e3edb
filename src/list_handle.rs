//! List Handle
//!
//! Bridges a `ManagedList` into Leptos. The controller lives in a local
//! `StoredValue` owned by the screen (gone when the screen unmounts); a
//! version signal is bumped after every state change so views re-read it.
//! Outcomes of remote calls become notifications here, not in each screen.

use std::rc::Rc;

use admin_core::notify::{
    applied_notices, deleted_message, saved_message, REQUIRED_MESSAGE, UPLOADED_MESSAGE, UPLOAD_FAILED_MESSAGE,
};
use admin_core::records::Resource;
use admin_core::{Applied, ListConfig, ListError, ManagedList, PageWindow, Record, RestCollection, SearchKeys};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::context::AppContext;

pub type RestList<T> = ManagedList<T, RestCollection<T>>;

pub struct ListHandle<T: Resource> {
    list: StoredValue<Rc<RestList<T>>, LocalStorage>,
    version: RwSignal<u32>,
    busy: RwSignal<bool>,
    ctx: AppContext,
}

impl<T: Resource> Clone for ListHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Resource> Copy for ListHandle<T> {}

impl<T: Resource> ListHandle<T> {
    pub fn new(ctx: AppContext) -> Self {
        let remote = ctx.client().collection::<T>();
        let config = ListConfig::for_resource::<T>(ctx.page_size());
        Self {
            list: StoredValue::new_local(Rc::new(ManagedList::new(remote, config))),
            version: RwSignal::new(0),
            busy: RwSignal::new(false),
            ctx,
        }
    }

    fn bump(&self) {
        self.version.update(|v| *v = v.wrapping_add(1));
    }

    /// Read from the controller and subscribe to its changes.
    pub fn with<R>(&self, read: impl FnOnce(&RestList<T>) -> R) -> R {
        self.version.track();
        self.list.with_value(|list| read(list))
    }

    /// Change controller state and notify readers.
    fn apply(&self, change: impl FnOnce(&RestList<T>)) {
        self.list.with_value(|list| change(list));
        self.bump();
    }

    pub fn busy(&self) -> bool {
        self.busy.get()
    }

    pub fn rows(&self) -> Vec<T> {
        self.with(|l| l.page_items())
    }

    pub fn visible_len(&self) -> usize {
        self.with(|l| l.visible_len())
    }

    pub fn page_window(&self) -> PageWindow {
        self.with(|l| l.page_window())
    }

    pub fn page_count(&self) -> usize {
        self.with(|l| l.page_count())
    }

    pub fn search_text(&self) -> String {
        self.with(|l| l.search_text())
    }

    pub fn entity_filter(&self) -> Option<String> {
        self.with(|l| l.entity_filter())
    }

    // ========================
    // Synchronous mutators
    // ========================

    pub fn set_search_text(&self, text: String) {
        self.apply(|l| l.set_search_text(text));
    }

    pub fn set_entity_filter(&self, value: Option<String>) {
        self.apply(|l| l.set_entity_filter(value));
    }

    pub fn set_search_keys(&self, keys: SearchKeys<T>) {
        self.apply(|l| l.set_search_keys(keys));
    }

    pub fn set_page(&self, index: usize) {
        self.apply(|l| l.set_page(index));
    }

    pub fn set_page_size(&self, size: usize) {
        self.apply(|l| l.set_page_size(size));
    }

    // ========================
    // Draft
    // ========================

    pub fn open_draft(&self, record: Option<T>) {
        self.apply(|l| l.open_draft(record));
    }

    pub fn edit_draft(&self, edit: impl FnOnce(&mut T)) {
        self.apply(|l| l.edit_draft(edit));
    }

    pub fn discard_draft(&self) {
        self.apply(|l| l.discard_draft());
    }

    pub fn draft(&self) -> Option<T> {
        self.with(|l| l.draft())
    }

    /// Read one value off the draft; default when no draft is open.
    pub fn draft_value<V: Default>(&self, read: impl FnOnce(&T) -> V) -> V {
        self.with(|l| l.draft().map(|d| read(&d)).unwrap_or_default())
    }

    pub fn can_save(&self) -> bool {
        self.with(|l| l.draft().is_some() && l.draft_missing().is_empty())
    }

    // ========================
    // Remote operations
    // ========================

    fn run<F, Fut>(&self, op: F)
    where
        F: FnOnce(Rc<RestList<T>>) -> Fut + 'static,
        Fut: std::future::Future<Output = ()> + 'static,
    {
        let handle = *self;
        // Gone once the owning screen unmounts.
        let Some(list) = self.list.try_get_value() else {
            return;
        };
        handle.busy.set(true);
        spawn_local(async move {
            op(list).await;
            handle.busy.try_set(false);
            handle.version.try_update(|v| *v = v.wrapping_add(1));
        });
    }

    /// Fetch the collection.
    pub fn load(&self) {
        let ctx = self.ctx;
        self.run(move |list| async move {
            if let Err(err) = list.load().await {
                ctx.notify_error(format!("Error fetching {}: {}", list.config().base, err));
            }
        });
    }

    /// Success notice for an accepted mutation, plus an error notice when
    /// the table could not be refreshed after it.
    fn report<V>(&self, success: String, applied: &Applied<V>) {
        for (severity, message) in applied_notices(T::BASE, success, applied) {
            self.ctx.notify(severity, message);
        }
    }

    /// Create or update the open draft. `on_saved` runs once the server has
    /// accepted it, whether or not the reload after it worked.
    pub fn save_draft(&self, on_saved: impl FnOnce(T) + 'static) {
        let Some(draft) = self.list.with_value(|l| l.draft()) else {
            return;
        };
        if !self.list.with_value(|l| l.draft_missing().is_empty()) {
            self.ctx.notify_error(REQUIRED_MESSAGE);
            return;
        }
        let created = draft.id().is_none();
        let handle = *self;
        let ctx = self.ctx;
        self.run(move |list| async move {
            match list.save_draft().await {
                Ok(saved) => {
                    handle.report(saved_message(T::NOUN, created), &saved);
                    on_saved(saved.value);
                }
                Err(ListError::Validation(_)) => ctx.notify_error(REQUIRED_MESSAGE),
                Err(err) => {
                    ctx.notify_error(format!("Error saving {}: {}", T::NOUN.to_lowercase(), err));
                }
            }
        });
    }

    pub fn remove(&self, id: T::Id) {
        let handle = *self;
        let ctx = self.ctx;
        self.run(move |list| async move {
            match list.remove(id).await {
                Ok(applied) => handle.report(deleted_message(T::NOUN), &applied),
                Err(err) => {
                    log::error!("[{}] Error deleting {}: {}", T::BASE, id, err);
                    ctx.notify_error(format!("Failed to delete {}.", T::NOUN.to_lowercase()));
                }
            }
        });
    }

    /// Upload a picked CSV to the bulk-import endpoint.
    pub fn import(&self, file: web_sys::File) {
        let handle = *self;
        let ctx = self.ctx;
        self.run(move |list| async move {
            let upload = match browser::read_file(&file).await {
                Ok(upload) => upload,
                Err(err) => {
                    log::error!("[{}] {}", T::BASE, err);
                    ctx.notify_error(UPLOAD_FAILED_MESSAGE);
                    return;
                }
            };
            match list.bulk_import(upload).await {
                Ok(applied) => handle.report(UPLOADED_MESSAGE.to_string(), &applied),
                Err(_) => ctx.notify_error(UPLOAD_FAILED_MESSAGE),
            }
        });
    }

    /// Ask the server for records whose `field` equals `value`. The table
    /// is left as it is; `on_found` gets whatever came back.
    pub fn lookup(&self, field: &'static str, value: String, on_found: impl FnOnce(Vec<T>) + 'static) {
        let ctx = self.ctx;
        self.run(move |list| async move {
            match list.lookup(field, &value).await {
                Ok(found) => on_found(found),
                Err(err) => {
                    log::error!("[{}] lookup {}={} failed: {}", T::BASE, field, value, err);
                    ctx.notify_error(format!("Error searching {}: {}", T::BASE, err));
                }
            }
        });
    }
}
