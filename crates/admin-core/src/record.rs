//! Core Record Trait
//!
//! The contract every row of a remote collection fulfils. Identity is the
//! `id`; everything else is payload the list controller only sees as text.

use std::fmt::{Debug, Display};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A row of a remote collection
pub trait Record: Clone + Debug + Default + Serialize + DeserializeOwned + 'static {
    /// The type of the record's unique identifier
    type Id: Copy + Eq + Debug + Display + 'static;

    /// Identifier assigned by the server; `None` for a record not yet created
    fn id(&self) -> Option<Self::Id>;

    /// Named field rendered as text, `None` when absent
    fn field(&self, name: &str) -> Option<String>;
}

/// True when the value is missing or only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Names from `required` whose value on `record` is blank.
pub fn missing_fields<T: Record>(record: &T, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|name| is_blank(record.field(name).as_deref()))
        .map(|name| name.to_string())
        .collect()
}
