//! Sound selection commands

use crate::core::{SoundCategory, SoundUnit};
use crate::form::FormState;
use crate::inventory::{InventoryError, SoundGroup, SoundInventory};
use rustc_hash::FxHashSet;

/// Which symbols a selection command changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionChange {
    pub changed: Vec<String>,
    pub unchanged: Vec<String>,
}

/// One inventory group with selection marks
#[derive(Debug, Clone)]
pub struct SoundListing {
    pub group: SoundGroup,
    pub selected: Vec<bool>,
}

/// The inventory listing plus, per category, the sounds not yet selected
#[derive(Debug, Clone)]
pub struct SoundsOverview {
    pub listings: Vec<SoundListing>,
    pub unselected: Vec<(SoundCategory, Vec<SoundUnit>)>,
}

impl SoundListing {
    pub fn iter(&self) -> impl Iterator<Item = (&SoundUnit, bool)> {
        self.group.sounds.iter().zip(self.selected.iter().copied())
    }
}

/// Add sounds to the selection
///
/// Every symbol is resolved before anything changes, so an unknown symbol
/// leaves the form untouched.
///
/// # Errors
/// Returns `InventoryError::UnknownSound` for the first symbol not in the inventory.
pub fn select_sounds<S: AsRef<str>>(
    form: &mut FormState,
    inventory: &SoundInventory,
    symbols: &[S],
) -> Result<SelectionChange, InventoryError> {
    let sounds = inventory.resolve(symbols)?;
    let mut change = SelectionChange::default();

    for sound in sounds {
        let symbol = sound.symbol().to_string();
        if form.add_sound(sound) {
            change.changed.push(symbol);
        } else {
            change.unchanged.push(symbol);
        }
    }
    Ok(change)
}

/// Replace the selection with exactly `symbols`
///
/// Repeated symbols are kept once. The form is untouched if any symbol is unknown.
///
/// # Errors
/// Returns `InventoryError::UnknownSound` for the first symbol not in the inventory.
pub fn replace_sounds<S: AsRef<str>>(
    form: &mut FormState,
    inventory: &SoundInventory,
    symbols: &[S],
) -> Result<SelectionChange, InventoryError> {
    let mut sounds = inventory.resolve(symbols)?;
    let mut seen = FxHashSet::default();
    sounds.retain(|s| seen.insert(s.symbol().to_string()));

    let change = SelectionChange {
        changed: sounds.iter().map(|s| s.symbol().to_string()).collect(),
        unchanged: Vec::new(),
    };
    form.set_sounds(sounds);
    Ok(change)
}

/// Remove sounds from the selection by symbol
pub fn deselect_sounds<S: AsRef<str>>(form: &mut FormState, symbols: &[S]) -> SelectionChange {
    let mut change = SelectionChange::default();
    for symbol in symbols {
        let symbol = symbol.as_ref();
        if form.remove_sound(symbol) {
            change.changed.push(symbol.to_string());
        } else {
            change.unchanged.push(symbol.to_string());
        }
    }
    change
}

/// Inventory groups in order, each sound marked if it is selected
#[must_use]
pub fn list_sounds(inventory: &SoundInventory, form: &FormState) -> SoundsOverview {
    let listings = inventory
        .groups()
        .into_iter()
        .map(|group| {
            let selected = group
                .sounds
                .iter()
                .map(|s| form.is_selected(s.symbol()))
                .collect();
            SoundListing { group, selected }
        })
        .collect();

    let unselected = SoundCategory::ALL
        .into_iter()
        .map(|category| (category, inventory.remaining(category, &form.sounds)))
        .collect();

    SoundsOverview {
        listings,
        unselected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SoundCategory;

    #[test]
    fn select_reports_new_and_existing() {
        let inventory = SoundInventory::en_us().unwrap();
        let mut form = FormState::default();

        let first = select_sounds(&mut form, &inventory, &["p", "æ"]).unwrap();
        assert_eq!(first.changed, vec!["p", "æ"]);

        let second = select_sounds(&mut form, &inventory, &["p", "t"]).unwrap();
        assert_eq!(second.changed, vec!["t"]);
        assert_eq!(second.unchanged, vec!["p"]);
        assert_eq!(form.consonants().len(), 2);
        assert_eq!(form.vowels().len(), 1);
    }

    #[test]
    fn unknown_symbol_changes_nothing() {
        let inventory = SoundInventory::en_us().unwrap();
        let mut form = FormState::default();

        assert!(select_sounds(&mut form, &inventory, &["p", "q"]).is_err());
        assert!(form.sounds.is_empty());
    }

    #[test]
    fn replace_sets_exact_selection() {
        let inventory = SoundInventory::en_us().unwrap();
        let mut form = FormState::default();
        select_sounds(&mut form, &inventory, &["p", "t", "æ"]).unwrap();

        let change = replace_sounds(&mut form, &inventory, &["k", "i", "k"]).unwrap();
        assert_eq!(change.changed, vec!["k", "i"]);

        let symbols: Vec<&str> = form.sounds.iter().map(|s| s.symbol()).collect();
        assert_eq!(symbols, vec!["k", "i"]);

        assert!(replace_sounds(&mut form, &inventory, &["q"]).is_err());
        assert_eq!(form.sounds.len(), 2);
    }

    #[test]
    fn deselect_by_symbol() {
        let inventory = SoundInventory::en_us().unwrap();
        let mut form = FormState::default();
        select_sounds(&mut form, &inventory, &["p", "t"]).unwrap();

        let change = deselect_sounds(&mut form, &["t", "k"]);
        assert_eq!(change.changed, vec!["t"]);
        assert_eq!(change.unchanged, vec!["k"]);
        assert!(form.is_selected("p"));
        assert!(!form.is_selected("t"));
    }

    #[test]
    fn listing_marks_selection() {
        let inventory = SoundInventory::en_us().unwrap();
        let mut form = FormState::default();
        select_sounds(&mut form, &inventory, &["p", "aɪ"]).unwrap();

        let overview = list_sounds(&inventory, &form);
        let marked: Vec<&str> = overview
            .listings
            .iter()
            .flat_map(|l| l.iter())
            .filter(|(_, selected)| *selected)
            .map(|(sound, _)| sound.symbol())
            .collect();
        assert_eq!(marked, vec!["p", "aɪ"]);
        assert_eq!(
            overview.listings.last().map(|l| l.group.category),
            Some(SoundCategory::Diphthong)
        );
    }

    #[test]
    fn overview_counts_unselected_per_category() {
        let inventory = SoundInventory::en_us().unwrap();
        let mut form = FormState::default();
        select_sounds(&mut form, &inventory, &["p", "t", "i"]).unwrap();

        let overview = list_sounds(&inventory, &form);
        let counts: Vec<(SoundCategory, usize)> = overview
            .unselected
            .iter()
            .map(|(category, sounds)| (*category, sounds.len()))
            .collect();
        assert_eq!(
            counts,
            vec![
                (SoundCategory::Consonant, inventory.all_consonants().len() - 2),
                (SoundCategory::Vowel, inventory.all_vowels().len() - 1),
                (SoundCategory::Diphthong, inventory.all_diphthongs().len()),
            ]
        );
        assert!(
            overview.unselected[0]
                .1
                .iter()
                .all(|s| s.symbol() != "p" && s.symbol() != "t")
        );
    }
}
