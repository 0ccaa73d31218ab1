//! Persistence of named state slices
//!
//! Each slice (generation settings, word list session) is stored as JSON
//! under its own key. Failures never reach the user: a slice that cannot be
//! read or parsed is treated as absent, and a failed write is only logged.

mod store;

pub use store::{FileStore, MemoryStore, SliceStore};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Names of the persisted state slices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliceName {
    FormData,
    WordList,
}

impl SliceName {
    /// Storage key for this slice
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FormData => "formData",
            Self::WordList => "wordList",
        }
    }
}

/// Load a slice, or `None` if it is missing, unreadable or malformed
pub fn load_slice<T, S>(store: &S, name: SliceName) -> Option<T>
where
    T: DeserializeOwned,
    S: SliceStore + ?Sized,
{
    let content = match store.read(name.key()) {
        Ok(Some(content)) => content,
        Ok(None) => {
            debug!(slice = name.key(), "no stored state; using defaults");
            return None;
        }
        Err(err) => {
            warn!(slice = name.key(), error = %err, "failed to read stored state");
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(slice = name.key(), error = %err, "ignoring malformed stored state");
            None
        }
    }
}

/// Load a slice, falling back to `T::default()`
pub fn load_slice_or_default<T, S>(store: &S, name: SliceName) -> T
where
    T: DeserializeOwned + Default,
    S: SliceStore + ?Sized,
{
    load_slice(store, name).unwrap_or_default()
}

/// Save a slice; returns whether it was written
///
/// Errors are logged and swallowed.
pub fn save_slice<T, S>(store: &mut S, name: SliceName, value: &T) -> bool
where
    T: Serialize,
    S: SliceStore + ?Sized,
{
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(err) => {
            warn!(slice = name.key(), error = %err, "failed to serialize state");
            return false;
        }
    };

    match store.write(name.key(), &json) {
        Ok(()) => true,
        Err(err) => {
            warn!(slice = name.key(), error = %err, "failed to write state");
            false
        }
    }
}
