//! Pattern-driven word generation
//!
//! Words are assembled slot by slot from shuffled consonant and vowel pools.
//! A candidate that the restriction table forbids after the previous sound is
//! rejected and redrawn; a word that exhausts its attempts is discarded. The
//! whole batch runs under a budget of failed words so that unsatisfiable
//! restrictions produce a partial result instead of looping forever.

use super::dedup::unique_words;
use super::pool::{self, Draw};
use crate::core::{Pattern, RestrictionTable, Slot, SoundUnit, Word};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Redraws allowed while assembling a single word
pub const MAX_WORD_ATTEMPTS: usize = 10;

/// Failed words tolerated per requested word before the batch gives up
pub const FAILED_WORDS_PER_REQUEST: usize = 100;

/// Input to a generation batch
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub pattern: Pattern,
    pub quantity: usize,
    pub consonant_pool: Vec<SoundUnit>,
    /// Vowels and diphthongs merged
    pub vowel_pool: Vec<SoundUnit>,
}

impl GenerationRequest {
    /// Whether this request can only produce an empty batch
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.quantity == 0
            || self.pattern.is_empty()
            || self.consonant_pool.is_empty()
            || self.vowel_pool.is_empty()
    }
}

/// Retry limits for a generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Redraws shared across all positions of one word
    pub max_word_attempts: usize,
    /// Discarded words tolerated across the batch (`None` = scale with quantity)
    pub max_failed_words: Option<usize>,
}

impl GeneratorConfig {
    /// Failed-word budget for a batch of `quantity` words
    #[must_use]
    pub fn failed_word_budget(&self, quantity: usize) -> usize {
        self.max_failed_words.unwrap_or_else(|| {
            quantity
                .saturating_mul(FAILED_WORDS_PER_REQUEST)
                .max(FAILED_WORDS_PER_REQUEST)
        })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_word_attempts: MAX_WORD_ATTEMPTS,
            max_failed_words: None,
        }
    }
}

/// Result of a generation batch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationOutcome {
    /// Unique words in generation order
    pub words: Vec<Word>,
    /// False when the failed-word budget ran out before `quantity` words were built
    pub complete: bool,
    pub failed_words: usize,
    pub duplicates_removed: usize,
}

impl GenerationOutcome {
    fn empty() -> Self {
        Self {
            complete: true,
            ..Self::default()
        }
    }
}

/// Word generator bound to a restriction table
///
/// Holds no state between batches; every call to [`WordGenerator::generate`]
/// works only from its request and random source.
pub struct WordGenerator<'a> {
    restrictions: &'a RestrictionTable,
    config: GeneratorConfig,
}

impl<'a> WordGenerator<'a> {
    #[must_use]
    pub fn new(restrictions: &'a RestrictionTable) -> Self {
        Self::with_config(restrictions, GeneratorConfig::default())
    }

    #[must_use]
    pub const fn with_config(restrictions: &'a RestrictionTable, config: GeneratorConfig) -> Self {
        Self {
            restrictions,
            config,
        }
    }

    /// Generate up to `request.quantity` unique words
    ///
    /// Degenerate requests (zero quantity, empty pattern, or an empty pool)
    /// yield an empty, complete outcome.
    ///
    /// # Examples
    /// ```
    /// use pseudoword::core::{RestrictionTable, SoundCategory, SoundUnit};
    /// use pseudoword::generator::{GenerationRequest, WordGenerator};
    /// use rand::SeedableRng;
    ///
    /// let c = |s: &str| SoundUnit::new(s, [s], SoundCategory::Consonant).unwrap();
    /// let v = |s: &str| SoundUnit::new(s, [s], SoundCategory::Vowel).unwrap();
    ///
    /// let request = GenerationRequest {
    ///     pattern: "CV".parse().unwrap(),
    ///     quantity: 3,
    ///     consonant_pool: vec![c("p"), c("t")],
    ///     vowel_pool: vec![v("a")],
    /// };
    /// let table = RestrictionTable::new();
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    ///
    /// let outcome = WordGenerator::new(&table).generate(&request, &mut rng);
    /// assert!(outcome.words.len() <= 3);
    /// assert!(outcome.words.iter().all(|w| w.len() == 2));
    /// ```
    pub fn generate<R: Rng + ?Sized>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> GenerationOutcome {
        if request.is_degenerate() {
            debug!(
                quantity = request.quantity,
                pattern = %request.pattern,
                consonants = request.consonant_pool.len(),
                vowels = request.vowel_pool.len(),
                "degenerate generation request; returning empty batch"
            );
            return GenerationOutcome::empty();
        }

        let pattern = &request.pattern;
        let consonants = pool::prepare(
            &request.consonant_pool,
            pattern.count(Slot::Consonant),
            rng,
        );
        let vowels = pool::prepare(&request.vowel_pool, pattern.count(Slot::Vowel), rng);

        let budget = self.config.failed_word_budget(request.quantity);
        let mut words = Vec::with_capacity(request.quantity);
        let mut failed_words = 0;

        while words.len() < request.quantity {
            if let Some(word) = self.assemble_word(pattern, &consonants, &vowels, rng) {
                words.push(word);
            } else {
                failed_words += 1;
                if failed_words >= budget {
                    warn!(
                        requested = request.quantity,
                        built = words.len(),
                        failed_words,
                        "could not satisfy restrictions; returning partial batch"
                    );
                    break;
                }
            }
        }

        let complete = words.len() == request.quantity;
        let built = words.len();
        let words = unique_words(words);
        let duplicates_removed = built - words.len();

        debug!(
            pattern = %pattern,
            requested = request.quantity,
            unique = words.len(),
            duplicates_removed,
            failed_words,
            "generation batch finished"
        );

        GenerationOutcome {
            words,
            complete,
            failed_words,
            duplicates_removed,
        }
    }

    /// Build one word, or `None` if the attempt budget runs out
    ///
    /// The attempt counter is shared by every position of the word. A cap of
    /// zero discards every word.
    fn assemble_word<R: Rng + ?Sized>(
        &self,
        pattern: &Pattern,
        consonants: &[SoundUnit],
        vowels: &[SoundUnit],
        rng: &mut R,
    ) -> Option<Word> {
        let mut consonant_draw = Draw::new(consonants, rng);
        let mut vowel_draw = Draw::new(vowels, rng);
        let mut sounds: Vec<SoundUnit> = Vec::with_capacity(pattern.len());
        let mut attempts = 0;

        for &slot in pattern.slots() {
            let draw = match slot {
                Slot::Consonant => &mut consonant_draw,
                Slot::Vowel => &mut vowel_draw,
            };

            let mut candidate = draw.pick(rng);
            while !self.restrictions.allows(sounds.last(), candidate)
                && attempts < self.config.max_word_attempts
            {
                attempts += 1;
                candidate = draw.pick(rng);
            }
            // Reaching the cap discards the word, even if the last draw fits
            if attempts >= self.config.max_word_attempts {
                return None;
            }
            sounds.push(candidate.clone());
        }

        Some(Word::new(sounds))
    }
}

/// Generate a batch with default limits
///
/// Convenience wrapper around [`WordGenerator::generate`].
pub fn generate<R: Rng + ?Sized>(
    request: &GenerationRequest,
    restrictions: &RestrictionTable,
    rng: &mut R,
) -> GenerationOutcome {
    WordGenerator::new(restrictions).generate(request, rng)
}


#[cfg(test)]
mod properties {
    use super::*;
    use crate::core::SoundCategory;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashSet;

    const CONSONANTS: [&str; 6] = ["p", "t", "k", "m", "s", "l"];
    const VOWELS: [&str; 4] = ["a", "i", "u", "e"];

    fn units(symbols: &[&str], category: SoundCategory) -> Vec<SoundUnit> {
        symbols
            .iter()
            .map(|s| SoundUnit::new(*s, [*s], category).unwrap())
            .collect()
    }

    fn table(pairs: &[(usize, usize)]) -> RestrictionTable {
        let mut table = RestrictionTable::new();
        for &(c, v) in pairs {
            table.forbid(CONSONANTS[c], VOWELS[v]);
            table.forbid(VOWELS[v], CONSONANTS[c]);
        }
        table
    }

    proptest! {
        #[test]
        fn generated_batches_hold_invariants(
            pattern in "[CV]{1,6}",
            quantity in 0usize..25,
            consonant_count in 0usize..=CONSONANTS.len(),
            vowel_count in 0usize..=VOWELS.len(),
            forbidden in proptest::collection::vec((0usize..6, 0usize..4), 0..6),
            seed in any::<u64>(),
        ) {
            let request = GenerationRequest {
                pattern: pattern.parse().unwrap(),
                quantity,
                consonant_pool: units(&CONSONANTS[..consonant_count], SoundCategory::Consonant),
                vowel_pool: units(&VOWELS[..vowel_count], SoundCategory::Vowel),
            };
            let restrictions = table(&forbidden);
            let mut rng = StdRng::seed_from_u64(seed);

            let outcome = generate(&request, &restrictions, &mut rng);

            prop_assert!(outcome.words.len() <= quantity);
            if request.is_degenerate() {
                prop_assert!(outcome.words.is_empty());
            }

            let mut keys = FxHashSet::default();
            for word in &outcome.words {
                prop_assert!(word.matches(&request.pattern));
                prop_assert!(keys.insert(word.key()));
                for pair in word.sounds().windows(2) {
                    prop_assert!(restrictions.allows(Some(&pair[0]), &pair[1]));
                }
            }
        }
    }
}
