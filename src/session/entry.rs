//! A single scored word in the session list

use crate::core::{CueScore, SoundUnit, Word, WordScore};
use serde::{Deserialize, Serialize};

/// A generated word plus its per-session annotations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordListEntry {
    sounds: Vec<SoundUnit>,
    /// Chosen spelling variant per sound
    #[serde(rename = "spellingIndexes")]
    spelling_choice: Vec<usize>,
    pub score: WordScore,
    pub cue_score: CueScore,
    pub notes: String,
}

impl WordListEntry {
    /// New, unscored entry showing the first spelling of every sound
    #[must_use]
    pub fn new(word: Word) -> Self {
        let sounds = word.into_sounds();
        Self {
            spelling_choice: vec![0; sounds.len()],
            sounds,
            score: WordScore::NotScored,
            cue_score: CueScore::NotScored,
            notes: String::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn sounds(&self) -> &[SoundUnit] {
        &self.sounds
    }

    #[inline]
    #[must_use]
    pub fn spelling_choice(&self) -> &[usize] {
        &self.spelling_choice
    }

    /// Chosen spelling index for the sound at `position` (0 if unset)
    #[must_use]
    pub fn spelling_index(&self, position: usize) -> usize {
        self.spelling_choice.get(position).copied().unwrap_or(0)
    }

    /// Store `raw` wrapped into the sound's variant range
    ///
    /// Returns the effective index, or `None` if `position` is not a sound
    /// of this entry.
    pub(crate) fn choose_spelling(&mut self, position: usize, raw: usize) -> Option<usize> {
        let effective = self.sounds.get(position)?.wrap_spelling_index(raw);
        if self.spelling_choice.len() < self.sounds.len() {
            self.spelling_choice.resize(self.sounds.len(), 0);
        }
        self.spelling_choice[position] = effective;
        Some(effective)
    }

    /// The displayed spelling: chosen variant of each sound, concatenated
    ///
    /// # Examples
    /// ```
    /// use pseudoword::core::{SoundCategory, SoundUnit, Word};
    /// use pseudoword::session::WordListEntry;
    ///
    /// let k = SoundUnit::new("k", ["k", "c"], SoundCategory::Consonant).unwrap();
    /// let i = SoundUnit::new("i", ["ee", "ea"], SoundCategory::Vowel).unwrap();
    /// let entry = WordListEntry::new(Word::new(vec![k, i]));
    /// assert_eq!(entry.rendered_spelling(), "kee");
    /// ```
    #[must_use]
    pub fn rendered_spelling(&self) -> String {
        self.sounds
            .iter()
            .enumerate()
            .map(|(position, sound)| sound.spelling(self.spelling_index(position)))
            .collect()
    }

    /// Concatenated phonetic symbols
    #[must_use]
    pub fn phonetic(&self) -> String {
        self.sounds.iter().map(SoundUnit::symbol).collect()
    }
}

impl From<Word> for WordListEntry {
    fn from(word: Word) -> Self {
        Self::new(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SoundCategory;

    fn entry() -> WordListEntry {
        let s = SoundUnit::new("s", ["s", "ss", "c"], SoundCategory::Consonant).unwrap();
        let i = SoundUnit::new("i", ["ee", "ea"], SoundCategory::Vowel).unwrap();
        WordListEntry::new(Word::new(vec![s, i]))
    }

    #[test]
    fn new_entry_defaults() {
        let e = entry();
        assert_eq!(e.score, WordScore::NotScored);
        assert_eq!(e.cue_score, CueScore::NotScored);
        assert!(e.notes.is_empty());
        assert_eq!(e.spelling_choice(), [0, 0]);
    }

    #[test]
    fn rendered_spelling_follows_choice() {
        let mut e = entry();
        assert_eq!(e.rendered_spelling(), "see");
        assert_eq!(e.phonetic(), "si");

        e.choose_spelling(0, 2);
        e.choose_spelling(1, 1);
        assert_eq!(e.rendered_spelling(), "cea");
    }

    #[test]
    fn choose_spelling_wraps() {
        let mut e = entry();
        assert_eq!(e.choose_spelling(0, 5), Some(2));
        assert_eq!(e.spelling_choice(), [2, 0]);
        assert_eq!(e.choose_spelling(7, 0), None);
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let json = serde_json::to_value(entry()).unwrap();
        assert_eq!(json["spellingIndexes"], serde_json::json!([0, 0]));
        assert_eq!(json["cueScore"], "NotScored");
        assert_eq!(json["score"], "not-scored");
        assert_eq!(json["notes"], "");
    }

    #[test]
    fn short_spelling_choice_is_tolerated() {
        let json = r#"{
            "sounds": [
                {"sound": "s", "letters": ["s", "ss"], "type": "consonant"},
                {"sound": "i", "letters": ["ee"], "type": "vowel"}
            ],
            "spellingIndexes": [1],
            "score": "correct",
            "cueScore": "Minimal",
            "notes": "ok"
        }"#;
        let mut e: WordListEntry = serde_json::from_str(json).unwrap();
        assert_eq!(e.rendered_spelling(), "ssee");

        e.choose_spelling(1, 3);
        assert_eq!(e.spelling_choice(), [1, 0]);
    }
}
