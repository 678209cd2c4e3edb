//! Exam Admin Core
//!
//! Platform-neutral layer of the admin console:
//! - records: typed rows of every remote collection
//! - remote / rest: the collection seam and its REST implementation
//! - list: the managed-list controller every screen is built on
//! - session / route: login check, session value and route guard
//! - notify, dashboard, config: notifications, summary stats, settings

pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod list;
pub mod notify;
pub mod page;
pub mod record;
pub mod records;
pub mod remote;
pub mod rest;
pub mod route;
pub mod session;

#[cfg(test)]
mod tests;

pub use config::AppConfig;
pub use error::{AuthError, ConfigError, ListError, ListResult, NetworkError, UploadError, ValidationError};
pub use list::{Applied, ListConfig, ManagedList, Phase, SearchKeys};
pub use notify::{Notice, Notices, Severity};
pub use page::PageWindow;
pub use record::Record;
pub use remote::{RemoteCollection, UploadFile};
pub use rest::{RestClient, RestCollection};
pub use route::{guard, resolve_path, Route};
pub use session::{authenticate, sign_in, Session, SessionStore};
