//! Loaded application state
//!
//! Holds the generation settings and the word list session together with
//! the store they came from. Callers mutate the public fields and call
//! [`Workspace::save`] to write both slices back.

use crate::form::FormState;
use crate::persistence::{SliceName, SliceStore, load_slice_or_default, save_slice};
use crate::session::SessionState;

#[derive(Debug)]
pub struct Workspace<S: SliceStore> {
    store: S,
    pub form: FormState,
    pub words: SessionState,
}

impl<S: SliceStore> Workspace<S> {
    /// Load both slices from `store`, using defaults for anything missing
    pub fn open(store: S) -> Self {
        let form = load_slice_or_default(&store, SliceName::FormData);
        let words = load_slice_or_default(&store, SliceName::WordList);
        Self { store, form, words }
    }

    /// Write both slices; returns false if either write failed
    pub fn save(&mut self) -> bool {
        let form_saved = save_slice(&mut self.store, SliceName::FormData, &self.form);
        let words_saved = save_slice(&mut self.store, SliceName::WordList, &self.words);
        form_saved && words_saved
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
