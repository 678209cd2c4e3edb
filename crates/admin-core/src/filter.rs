//! Client-side predicates over a fetched collection.

/// Normalised free-text query; blank input matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: Option<String>,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        let trimmed = text.trim();
        Self {
            needle: (!trimmed.is_empty()).then(|| trimmed.to_lowercase()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_none()
    }

    /// Case-insensitive substring match against any of `keys`.
    pub fn matches<S: AsRef<str>>(&self, keys: &[S]) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => keys
                .iter()
                .any(|key| key.as_ref().to_lowercase().contains(needle.as_str())),
        }
    }
}

/// Exact-match filter on one named field, e.g. `courseId == "3"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityFilter {
    pub field: String,
    pub value: String,
}

impl EntityFilter {
    pub fn matches(&self, actual: Option<&str>) -> bool {
        actual == Some(self.value.as_str())
    }
}
