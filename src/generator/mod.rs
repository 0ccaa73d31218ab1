//! Pseudo-word generation
//!
//! Samples words that follow a consonant/vowel pattern from pools of
//! candidate sounds, rejecting forbidden adjacencies and removing duplicates.

mod dedup;
mod engine;
mod pool;

pub use dedup::unique_words;
pub use engine::{
    FAILED_WORDS_PER_REQUEST, GenerationOutcome, GenerationRequest, GeneratorConfig,
    MAX_WORD_ATTEMPTS, WordGenerator, generate,
};
