//! Word list session state and its mutation operations
//!
//! `SessionState` is the single owner of the word list. Callers never touch
//! entries directly; every change goes through one of the named operations
//! below, each of which either applies completely or leaves the state as it
//! was and reports why.

use super::entry::WordListEntry;
use crate::core::{CueScore, Word, WordScore};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Error type for operations addressing a missing entry or sound
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("word index {index} out of range (list has {len} words)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("sound index {sound_index} out of range for word {word_index} ({len} sounds)")]
    SoundIndexOutOfRange {
        word_index: usize,
        sound_index: usize,
        len: usize,
    },
}

/// Session notes plus the ordered word list
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    notes: String,
    #[serde(rename = "words")]
    entries: Vec<WordListEntry>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Session-level notes
    #[inline]
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[WordListEntry] {
        &self.entries
    }

    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&WordListEntry> {
        self.entries.get(index)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the whole list with fresh, unscored entries
    ///
    /// Session notes are kept.
    pub fn initialize_entries<I>(&mut self, words: I)
    where
        I: IntoIterator<Item = Word>,
    {
        self.entries = words.into_iter().map(WordListEntry::new).collect();
        debug!(words = self.entries.len(), "word list initialized");
    }

    /// Append one unscored entry
    pub fn add_entry(&mut self, word: Word) {
        self.entries.push(WordListEntry::new(word));
    }

    /// Record the outcome for the word at `index`
    ///
    /// # Errors
    /// Returns `SessionError::IndexOutOfRange` if there is no such word.
    pub fn set_score(&mut self, index: usize, score: WordScore) -> Result<(), SessionError> {
        self.entry_mut(index)?.score = score;
        Ok(())
    }

    /// Record the cueing level for the word at `index`
    ///
    /// # Errors
    /// Returns `SessionError::IndexOutOfRange` if there is no such word.
    pub fn set_cue_score(&mut self, index: usize, cue_score: CueScore) -> Result<(), SessionError> {
        self.entry_mut(index)?.cue_score = cue_score;
        Ok(())
    }

    /// Replace the notes of the word at `index`
    ///
    /// # Errors
    /// Returns `SessionError::IndexOutOfRange` if there is no such word.
    pub fn set_notes(&mut self, index: usize, notes: impl Into<String>) -> Result<(), SessionError> {
        self.entry_mut(index)?.notes = notes.into();
        Ok(())
    }

    /// Select the spelling variant shown for one sound of a word
    ///
    /// `raw_index` wraps around the sound's variant count, so repeatedly
    /// incrementing it cycles through every spelling. Returns the effective
    /// index stored.
    ///
    /// # Errors
    /// Returns `SessionError` if either index is out of range.
    pub fn set_spelling_choice(
        &mut self,
        word_index: usize,
        sound_index: usize,
        raw_index: usize,
    ) -> Result<usize, SessionError> {
        let entry = self.entry_mut(word_index)?;
        let len = entry.sounds().len();
        entry
            .choose_spelling(sound_index, raw_index)
            .ok_or(SessionError::SoundIndexOutOfRange {
                word_index,
                sound_index,
                len,
            })
    }

    /// Advance a sound to its next spelling variant, wrapping to the first
    ///
    /// # Errors
    /// Returns `SessionError` if either index is out of range.
    pub fn cycle_spelling(&mut self, word_index: usize, sound_index: usize) -> Result<usize, SessionError> {
        let current = self.entry_mut(word_index)?.spelling_index(sound_index);
        self.set_spelling_choice(word_index, sound_index, current + 1)
    }

    /// Replace the session-level notes
    pub fn set_session_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Remove exactly the entry at `index`, keeping the others in order
    ///
    /// # Errors
    /// Returns `SessionError::IndexOutOfRange` if there is no such word.
    pub fn remove_entry(&mut self, index: usize) -> Result<WordListEntry, SessionError> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    /// Clear all entries and the session notes
    pub fn reset(&mut self) {
        self.entries.clear();
        self.notes.clear();
    }

    fn check_index(&self, index: usize) -> Result<(), SessionError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(SessionError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut WordListEntry, SessionError> {
        self.check_index(index)?;
        Ok(&mut self.entries[index])
    }
}
