//! Word list editing commands

use crate::core::{CueScore, Word, WordScore};
use crate::inventory::{InventoryError, SoundInventory};
use crate::session::{SessionError, SessionState, WordListEntry};

/// A change to one word list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryUpdate {
    Score(WordScore),
    Cue(CueScore),
    Notes(String),
    /// Choose a spelling for one sound; `raw` wraps around the variant count
    Spelling { sound: usize, raw: usize },
    /// Advance one sound to its next spelling
    CycleSpelling { sound: usize },
}

/// Append a hand-built word from inventory symbols; returns its index
///
/// # Errors
/// Returns `InventoryError::UnknownSound` for the first symbol not in the inventory.
pub fn add_word<S: AsRef<str>>(
    words: &mut SessionState,
    inventory: &SoundInventory,
    symbols: &[S],
) -> Result<usize, InventoryError> {
    let sounds = inventory.resolve(symbols)?;
    words.add_entry(Word::new(sounds));
    Ok(words.len() - 1)
}

/// Apply `update` to the entry at `index` and return the updated entry
///
/// # Errors
/// Returns `SessionError` if the word or sound index is out of range; the
/// session is left unchanged.
pub fn apply_update(
    words: &mut SessionState,
    index: usize,
    update: EntryUpdate,
) -> Result<&WordListEntry, SessionError> {
    match update {
        EntryUpdate::Score(score) => words.set_score(index, score)?,
        EntryUpdate::Cue(cue) => words.set_cue_score(index, cue)?,
        EntryUpdate::Notes(notes) => words.set_notes(index, notes)?,
        EntryUpdate::Spelling { sound, raw } => {
            words.set_spelling_choice(index, sound, raw)?;
        }
        EntryUpdate::CycleSpelling { sound } => {
            words.cycle_spelling(index, sound)?;
        }
    }
    words
        .entry(index)
        .ok_or(SessionError::IndexOutOfRange {
            index,
            len: words.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> (SessionState, SoundInventory) {
        let inventory = SoundInventory::en_us().unwrap();
        let mut words = SessionState::new();
        add_word(&mut words, &inventory, &["k", "æ", "t"]).unwrap();
        (words, inventory)
    }

    #[test]
    fn add_word_appends_unscored() {
        let (mut words, inventory) = session();
        let index = add_word(&mut words, &inventory, &["d", "ɔɪ"]).unwrap();

        assert_eq!(index, 1);
        assert_eq!(words.entries()[1].phonetic(), "dɔɪ");
        assert_eq!(words.entries()[1].score, WordScore::NotScored);
    }

    #[test]
    fn add_word_rejects_unknown_sound() {
        let (mut words, inventory) = session();
        assert!(add_word(&mut words, &inventory, &["k", "q"]).is_err());
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn updates_apply_to_entry() {
        let (mut words, _) = session();

        apply_update(&mut words, 0, EntryUpdate::Score(WordScore::Correct)).unwrap();
        apply_update(&mut words, 0, EntryUpdate::Cue(CueScore::Minimal)).unwrap();
        let entry = apply_update(&mut words, 0, EntryUpdate::Notes("fronted".into())).unwrap();

        assert_eq!(entry.score, WordScore::Correct);
        assert_eq!(entry.cue_score, CueScore::Minimal);
        assert_eq!(entry.notes, "fronted");
    }

    #[test]
    fn spelling_updates_wrap() {
        let (mut words, _) = session();
        let variants = words.entries()[0].sounds()[0].variant_count();

        let entry = apply_update(
            &mut words,
            0,
            EntryUpdate::Spelling {
                sound: 0,
                raw: variants + 1,
            },
        )
        .unwrap();
        assert_eq!(entry.spelling_index(0), 1 % variants);

        let entry = apply_update(&mut words, 0, EntryUpdate::CycleSpelling { sound: 0 }).unwrap();
        assert_eq!(entry.spelling_index(0), 2 % variants);
    }

    #[test]
    fn out_of_range_leaves_session_untouched() {
        let (mut words, _) = session();
        let before = words.clone();

        assert!(apply_update(&mut words, 3, EntryUpdate::Score(WordScore::Skipped)).is_err());
        assert!(apply_update(&mut words, 0, EntryUpdate::Spelling { sound: 9, raw: 0 }).is_err());
        assert_eq!(words, before);
    }
}
