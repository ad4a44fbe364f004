//! Extra Map Module
//!
//! Defines the `Extra` value type: a string-to-string mapping with a
//! distinguished absent state.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// == Extra ==
/// Extra properties passed from a producer stage to a results stage.
///
/// The mapping is a value type: it is constructed once by a producer
/// (absent, empty, or populated), then treated as read-only while it flows
/// through the pipeline. Clones are independent copies, and equality ignores
/// internal storage order.
///
/// An **absent** mapping ("no metadata was ever attached") is distinct from
/// a present-but-empty one and survives clone, equality, and the byte
/// encoding. With serde, absent maps to `null` and present to an object, so
/// the distinction also survives embedding in a larger serde record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extra {
    /// `None` = absent, `Some` = present (possibly empty)
    entries: Option<HashMap<String, String>>,
}

impl Extra {
    // == Constructors ==
    /// Creates a present, empty mapping.
    pub fn new() -> Self {
        Self {
            entries: Some(HashMap::new()),
        }
    }

    /// Creates an absent mapping.
    ///
    /// This is also the `Default`, matching the convention that metadata is
    /// absent until a producer attaches some.
    pub fn absent() -> Self {
        Self { entries: None }
    }

    // == Insert ==
    /// Inserts a key-value pair, overwriting any existing value for the key.
    ///
    /// Inserting into an absent mapping first makes it present and empty.
    /// Intended for producer-side population; once the mapping is handed
    /// off, it is read-only by convention.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
    }

    // == Lookup ==
    /// Returns the value for a key, or None if the key is missing or the
    /// mapping is absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.as_ref()?.get(key).map(String::as_str)
    }

    // == State Queries ==
    /// Returns true if the mapping is absent (never attached).
    pub fn is_absent(&self) -> bool {
        self.entries.is_none()
    }

    /// Returns true if the mapping is present (possibly empty).
    pub fn is_present(&self) -> bool {
        self.entries.is_some()
    }

    /// Returns true if the mapping holds no entries.
    ///
    /// An absent mapping also reports empty; use [`is_absent`](Self::is_absent)
    /// to tell the two states apart.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of entries (0 for an absent mapping).
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, HashMap::len)
    }

    // == Iteration ==
    /// Iterates over the key-value pairs in unspecified order.
    ///
    /// Only the canonical encoding imposes an order (sorted by key); the
    /// in-memory storage order carries no meaning.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .flatten()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Accessor for the inner map, used by the codec.
    pub(crate) fn entries(&self) -> Option<&HashMap<String, String>> {
        self.entries.as_ref()
    }
}

// == Conversions ==
impl From<HashMap<String, String>> for Extra {
    /// Wraps an existing map as a present mapping.
    fn from(entries: HashMap<String, String>) -> Self {
        Self {
            entries: Some(entries),
        }
    }
}

impl FromIterator<(String, String)> for Extra {
    /// Collects key-value pairs into a present mapping (last write wins on
    /// duplicate keys).
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: Some(iter.into_iter().collect()),
        }
    }
}
