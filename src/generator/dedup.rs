//! Duplicate removal for generated batches

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Keep the first occurrence of each word, preserving order
///
/// Words are duplicates when their concatenated symbols are identical.
#[must_use]
pub fn unique_words(words: Vec<Word>) -> Vec<Word> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    words.into_iter().filter(|word| seen.insert(word.key())).collect()
}
