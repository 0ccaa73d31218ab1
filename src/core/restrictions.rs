//! Phonotactic adjacency restrictions
//!
//! Maps a preceding sound's symbol to the set of symbols that may not
//! immediately follow it. Restrictions are directional: forbidding `p → a`
//! says nothing about `a → p`, and they do not chain.

use super::SoundUnit;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestrictionTable(FxHashMap<String, FxHashSet<String>>);

impl RestrictionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forbid `next` from immediately following `previous`
    pub fn forbid(&mut self, previous: impl Into<String>, next: impl Into<String>) {
        self.0.entry(previous.into()).or_default().insert(next.into());
    }

    /// Whether `next` is forbidden directly after `previous`
    #[must_use]
    pub fn is_forbidden(&self, previous: &str, next: &str) -> bool {
        self.0
            .get(previous)
            .is_some_and(|forbidden| forbidden.contains(next))
    }

    /// Whether `candidate` may be placed after `previous`
    ///
    /// The first sound of a word (no `previous`) is always valid.
    ///
    /// # Examples
    /// ```
    /// use pseudoword::core::{RestrictionTable, SoundCategory, SoundUnit};
    ///
    /// let p = SoundUnit::new("p", ["p"], SoundCategory::Consonant).unwrap();
    /// let a = SoundUnit::new("a", ["a"], SoundCategory::Vowel).unwrap();
    ///
    /// let mut table = RestrictionTable::new();
    /// table.forbid("p", "a");
    ///
    /// assert!(!table.allows(Some(&p), &a));
    /// assert!(table.allows(Some(&a), &p));
    /// assert!(table.allows(None, &a));
    /// ```
    #[must_use]
    pub fn allows(&self, previous: Option<&SoundUnit>, candidate: &SoundUnit) -> bool {
        previous.is_none_or(|prev| !self.is_forbidden(prev.symbol(), candidate.symbol()))
    }

    /// Symbols forbidden after `previous`, in no particular order
    pub fn forbidden_after(&self, previous: &str) -> impl Iterator<Item = &str> {
        self.0
            .get(previous)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Number of preceding symbols that carry restrictions
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P, N, I> FromIterator<(P, I)> for RestrictionTable
where
    P: Into<String>,
    N: Into<String>,
    I: IntoIterator<Item = N>,
{
    fn from_iter<T: IntoIterator<Item = (P, I)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (previous, forbidden) in iter {
            let previous = previous.into();
            for next in forbidden {
                table.forbid(previous.clone(), next);
            }
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SoundCategory;

    fn consonant(symbol: &str) -> SoundUnit {
        SoundUnit::new(symbol, [symbol], SoundCategory::Consonant).unwrap()
    }

    #[test]
    fn empty_table_allows_everything() {
        let table = RestrictionTable::new();
        assert!(table.is_empty());
        assert!(table.allows(Some(&consonant("p")), &consonant("t")));
    }

    #[test]
    fn restriction_is_directional() {
        let table: RestrictionTable = [("p", vec!["t"])].into_iter().collect();

        assert!(table.is_forbidden("p", "t"));
        assert!(!table.is_forbidden("t", "p"));
        assert!(!table.allows(Some(&consonant("p")), &consonant("t")));
        assert!(table.allows(Some(&consonant("t")), &consonant("p")));
    }

    #[test]
    fn restriction_is_not_transitive() {
        let table: RestrictionTable = [("p", vec!["t"]), ("t", vec!["k"])].into_iter().collect();
        assert!(!table.is_forbidden("p", "k"));
    }

    #[test]
    fn forbidden_after_lists_symbols() {
        let table: RestrictionTable = [("ŋ", vec!["h", "w"])].into_iter().collect();
        let mut forbidden: Vec<&str> = table.forbidden_after("ŋ").collect();
        forbidden.sort_unstable();
        assert_eq!(forbidden, ["h", "w"]);
        assert_eq!(table.forbidden_after("x").count(), 0);
    }

    #[test]
    fn first_position_always_valid() {
        let mut table = RestrictionTable::new();
        table.forbid("p", "p");
        assert!(table.allows(None, &consonant("p")));
    }

    #[test]
    fn deserializes_from_symbol_map() {
        let table: RestrictionTable = serde_json::from_str(r#"{"p": ["a", "i"]}"#).unwrap();
        assert!(table.is_forbidden("p", "a"));
        assert!(table.is_forbidden("p", "i"));
        assert_eq!(table.len(), 1);
    }
}
