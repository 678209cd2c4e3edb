//! Remote Collection - Core Trait
//!
//! Abstract interface to a REST-style collection resource. The REST client
//! is the production implementation; tests plug in an in-memory one.

use async_trait::async_trait;

use crate::error::{NetworkError, UploadError};
use crate::record::Record;

/// File handed to a bulk-import endpoint, already read into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn csv(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: "text/csv".to_string(),
            bytes,
        }
    }
}

/// CRUD access to one remote collection
///
/// Futures are not `Send`: the console runs on the browser's single event
/// loop.
#[async_trait(?Send)]
pub trait RemoteCollection<T: Record> {
    /// Fetch the full collection in server order
    async fn list(&self) -> Result<Vec<T>, NetworkError>;

    /// `GET <base>/<field>/<value>`; a single object comes back as one element
    async fn find_by(&self, field: &str, value: &str) -> Result<Vec<T>, NetworkError>;

    /// Create a record; the body carries no id
    async fn create(&self, record: &T) -> Result<T, NetworkError>;

    /// Replace the record stored under `id`
    async fn update(&self, id: T::Id, record: &T) -> Result<T, NetworkError>;

    /// Delete the record stored under `id`
    async fn delete(&self, id: T::Id) -> Result<(), NetworkError>;

    /// Post `file` as multipart field `file` to `<base>/upload`
    async fn upload(&self, file: UploadFile) -> Result<(), UploadError>;
}
