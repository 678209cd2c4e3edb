//! Managed-List Controller
//!
//! Holds one remote-backed collection and derives what a management screen
//! shows from it: the visible subset (search text + entity filter) and the
//! current page of that subset. Mutations go to the remote collection and are
//! always followed by a full reload; nothing is merged locally.
//!
//! All methods take `&self`. State sits in a `RefCell` and no borrow is held
//! across an `.await`, so a controller can be shared (`Rc`) by the UI event
//! handlers of a single screen.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::{ListError, ListResult, NetworkError, ValidationError};
use crate::filter::{EntityFilter, SearchQuery};
use crate::page::PageWindow;
use crate::record::{missing_fields, Record};
use crate::records::Resource;
use crate::remote::{RemoteCollection, UploadFile};

/// Custom extraction of the text a record is searched by
pub type SearchKeys<T> = Rc<dyn Fn(&T) -> Vec<String>>;

/// Per-screen parameters of a managed list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    /// Collection path, used in log lines
    pub base: String,
    pub search_fields: Vec<&'static str>,
    pub required_fields: Vec<&'static str>,
    pub filter_field: Option<&'static str>,
    pub page_size: usize,
}

impl ListConfig {
    /// Defaults taken from the record's `Resource` description.
    pub fn for_resource<T: Resource>(page_size: usize) -> Self {
        Self {
            base: T::BASE.to_string(),
            search_fields: T::SEARCH_FIELDS.to_vec(),
            required_fields: T::REQUIRED_FIELDS.to_vec(),
            filter_field: T::FILTER_FIELD,
            page_size: page_size.max(1),
        }
    }
}

/// A mutation the server accepted, plus how the reload after it went.
///
/// `reload` is `Some` when the collection could not be fetched again; the
/// previous snapshot is still in place and the caller has to say so.
#[derive(Debug, Clone, PartialEq)]
pub struct Applied<V> {
    pub value: V,
    pub reload: Option<NetworkError>,
}

impl<V> Applied<V> {
    pub fn is_synced(&self) -> bool {
        self.reload.is_none()
    }
}

/// Whether a remote operation is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
}

struct ListState<T> {
    collection: Vec<T>,
    /// Positions in `collection` that pass the active predicates
    visible: Vec<usize>,
    search_text: String,
    query: SearchQuery,
    entity_filter: Option<EntityFilter>,
    window: PageWindow,
    draft: Option<T>,
}

/// Sets `Loading` for the life of an operation, then puts back whatever
/// phase was there before. A reload nested in a mutation keeps `Loading`.
struct Busy<'a> {
    phase: &'a Cell<Phase>,
    before: Phase,
}

impl<'a> Busy<'a> {
    fn start(phase: &'a Cell<Phase>) -> Self {
        let before = phase.replace(Phase::Loading);
        Self { phase, before }
    }
}

impl Drop for Busy<'_> {
    fn drop(&mut self) {
        self.phase.set(self.before);
    }
}

pub struct ManagedList<T: Record, R: RemoteCollection<T>> {
    remote: R,
    config: ListConfig,
    search_keys: RefCell<Option<SearchKeys<T>>>,
    state: RefCell<ListState<T>>,
    phase: Cell<Phase>,
}

impl<T: Record, R: RemoteCollection<T>> ManagedList<T, R> {
    /// An empty list; call `load` to populate it.
    pub fn new(remote: R, config: ListConfig) -> Self {
        let window = PageWindow::new(config.page_size);
        Self {
            remote,
            config,
            search_keys: RefCell::new(None),
            state: RefCell::new(ListState {
                collection: Vec::new(),
                visible: Vec::new(),
                search_text: String::new(),
                query: SearchQuery::default(),
                entity_filter: None,
                window,
                draft: None,
            }),
            phase: Cell::new(Phase::Idle),
        }
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    // ========================
    // Remote operations
    // ========================

    /// Replace the collection with a fresh copy from the server.
    ///
    /// On failure the previous collection is kept as is.
    pub async fn load(&self) -> ListResult<Vec<T>> {
        Ok(self.fetch().await?)
    }

    async fn fetch(&self) -> Result<Vec<T>, NetworkError> {
        let _busy = Busy::start(&self.phase);
        match self.remote.list().await {
            Ok(items) => {
                log::debug!("[{}] loaded {} records", self.config.base, items.len());
                let mut state = self.state.borrow_mut();
                state.collection = items;
                self.recompute(&mut state);
                let count = state.window.page_count(state.visible.len());
                if state.window.index >= count {
                    state.window.index = count - 1;
                }
                Ok(state.collection.clone())
            }
            Err(err) => {
                log::error!("[{}] load failed: {}", self.config.base, err);
                Err(err)
            }
        }
    }

    /// Validate, create remotely, then reload.
    pub async fn create(&self, draft: &T) -> ListResult<Applied<T>> {
        self.validate(draft)?;
        let _busy = Busy::start(&self.phase);
        let created = self.remote.create(draft).await.map_err(|err| {
            log::error!("[{}] create failed: {}", self.config.base, err);
            ListError::from(err)
        })?;
        log::info!("[{}] created {:?}", self.config.base, created.id());
        Ok(self.refresh(created).await)
    }

    /// Validate, replace the record under `id`, then reload.
    pub async fn update(&self, id: T::Id, draft: &T) -> ListResult<Applied<T>> {
        self.validate(draft)?;
        let _busy = Busy::start(&self.phase);
        let updated = self.remote.update(id, draft).await.map_err(|err| {
            log::error!("[{}] update of {} failed: {}", self.config.base, id, err);
            ListError::from(err)
        })?;
        log::info!("[{}] updated {}", self.config.base, id);
        Ok(self.refresh(updated).await)
    }

    /// Delete the record under `id`, then reload.
    pub async fn remove(&self, id: T::Id) -> ListResult<Applied<()>> {
        let _busy = Busy::start(&self.phase);
        self.remote.delete(id).await.map_err(|err| {
            log::error!("[{}] delete of {} failed: {}", self.config.base, id, err);
            ListError::from(err)
        })?;
        log::info!("[{}] deleted {}", self.config.base, id);
        Ok(self.refresh(()).await)
    }

    /// Hand a file to the bulk-import endpoint, then reload.
    ///
    /// The file's contents are the server's business.
    pub async fn bulk_import(&self, file: UploadFile) -> ListResult<Applied<()>> {
        let _busy = Busy::start(&self.phase);
        let name = file.name.clone();
        self.remote.upload(file).await.map_err(|err| {
            log::error!("[{}] import of {} failed: {}", self.config.base, name, err);
            ListError::from(err)
        })?;
        log::info!("[{}] imported {}", self.config.base, name);
        Ok(self.refresh(()).await)
    }

    /// Server-side lookup by attribute. Leaves the collection alone.
    pub async fn lookup(&self, field: &str, value: &str) -> ListResult<Vec<T>> {
        let _busy = Busy::start(&self.phase);
        Ok(self.remote.find_by(field, value).await?)
    }

    // The mutation itself already went through.
    async fn refresh<V>(&self, value: V) -> Applied<V> {
        let reload = self.fetch().await.err();
        if reload.is_some() {
            log::warn!("[{}] reload after mutation failed, keeping previous rows", self.config.base);
        }
        Applied { value, reload }
    }

    fn validate(&self, draft: &T) -> Result<(), ValidationError> {
        let missing = missing_fields(draft, &self.config.required_fields);
        if missing.is_empty() {
            Ok(())
        } else {
            log::debug!("[{}] rejected draft, missing {:?}", self.config.base, missing);
            Err(ValidationError { missing })
        }
    }

    // ========================
    // Filtering and paging
    // ========================

    /// Free-text search. Resets to the first page.
    pub fn set_search_text(&self, text: impl Into<String>) {
        let mut state = self.state.borrow_mut();
        state.search_text = text.into();
        state.query = SearchQuery::new(&state.search_text);
        self.recompute(&mut state);
        state.window.index = 0;
    }

    /// Exact-match filter on the configured field; `None` clears it.
    /// Resets to the first page.
    pub fn set_entity_filter(&self, value: Option<String>) {
        let Some(field) = self.config.filter_field else {
            log::warn!("[{}] no filter field configured", self.config.base);
            return;
        };
        let mut state = self.state.borrow_mut();
        state.entity_filter = value.map(|value| EntityFilter {
            field: field.to_string(),
            value,
        });
        self.recompute(&mut state);
        state.window.index = 0;
    }

    /// Replace how search text is taken from a record. Resets to the first page.
    pub fn set_search_keys(&self, keys: SearchKeys<T>) {
        *self.search_keys.borrow_mut() = Some(keys);
        let mut state = self.state.borrow_mut();
        self.recompute(&mut state);
        state.window.index = 0;
    }

    /// Jump to a page, clamped to the last one.
    pub fn set_page(&self, index: usize) {
        let mut state = self.state.borrow_mut();
        let last = state.window.page_count(state.visible.len()) - 1;
        state.window.index = index.min(last);
    }

    /// Change rows per page and go back to the first page.
    pub fn set_page_size(&self, size: usize) {
        let mut state = self.state.borrow_mut();
        state.window = PageWindow::new(size);
    }

    fn search_text_of(&self, keys: Option<&SearchKeys<T>>, item: &T) -> Vec<String> {
        match keys {
            Some(keys) => keys(item),
            None => self
                .config
                .search_fields
                .iter()
                .filter_map(|name| item.field(name))
                .collect(),
        }
    }

    fn recompute(&self, state: &mut ListState<T>) {
        let keys = self.search_keys.borrow();
        let ListState {
            collection,
            visible,
            query,
            entity_filter,
            ..
        } = state;
        *visible = collection
            .iter()
            .enumerate()
            .filter(|(_, item)| {
                entity_filter
                    .as_ref()
                    .map_or(true, |f| f.matches(item.field(&f.field).as_deref()))
            })
            .filter(|(_, item)| {
                query.is_empty() || query.matches(&self.search_text_of(keys.as_ref(), item))
            })
            .map(|(pos, _)| pos)
            .collect();
    }

    // ========================
    // Read accessors
    // ========================

    pub fn collection(&self) -> Vec<T> {
        self.state.borrow().collection.clone()
    }

    pub fn visible(&self) -> Vec<T> {
        let state = self.state.borrow();
        state
            .visible
            .iter()
            .map(|&pos| state.collection[pos].clone())
            .collect()
    }

    pub fn visible_len(&self) -> usize {
        self.state.borrow().visible.len()
    }

    /// Rows of the current page.
    pub fn page_items(&self) -> Vec<T> {
        let state = self.state.borrow();
        state
            .window
            .slice(&state.visible)
            .iter()
            .map(|&pos| state.collection[pos].clone())
            .collect()
    }

    pub fn page_window(&self) -> PageWindow {
        self.state.borrow().window
    }

    pub fn page_count(&self) -> usize {
        let state = self.state.borrow();
        state.window.page_count(state.visible.len())
    }

    pub fn search_text(&self) -> String {
        self.state.borrow().search_text.clone()
    }

    pub fn entity_filter(&self) -> Option<String> {
        self.state
            .borrow()
            .entity_filter
            .as_ref()
            .map(|f| f.value.clone())
    }

    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    // ========================
    // Draft
    // ========================

    /// Start editing `record`, or a blank record when `None`.
    pub fn open_draft(&self, record: Option<T>) {
        self.state.borrow_mut().draft = Some(record.unwrap_or_default());
    }

    pub fn edit_draft(&self, edit: impl FnOnce(&mut T)) {
        if let Some(draft) = self.state.borrow_mut().draft.as_mut() {
            edit(draft);
        }
    }

    pub fn draft(&self) -> Option<T> {
        self.state.borrow().draft.clone()
    }

    pub fn discard_draft(&self) {
        self.state.borrow_mut().draft = None;
    }

    /// Required fields still blank in the draft; empty when it can be saved.
    pub fn draft_missing(&self) -> Vec<String> {
        match self.state.borrow().draft.as_ref() {
            Some(draft) => missing_fields(draft, &self.config.required_fields),
            None => self
                .config
                .required_fields
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }

    /// Create or update from the open draft. The draft is discarded only when
    /// the save succeeds.
    pub async fn save_draft(&self) -> ListResult<Applied<T>> {
        let draft = self.draft().ok_or_else(|| ValidationError {
            missing: self.config.required_fields.iter().map(|f| f.to_string()).collect(),
        })?;
        let saved = match draft.id() {
            Some(id) => self.update(id, &draft).await?,
            None => self.create(&draft).await?,
        };
        self.discard_draft();
        Ok(saved)
    }
}
