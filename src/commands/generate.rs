//! Word generation command
//!
//! Applies optional overrides to the form, runs the generator on it and
//! starts a new scoring session with the result.

use crate::core::{Pattern, RestrictionTable};
use crate::form::FormState;
use crate::generator::{GenerationOutcome, GenerationRequest, WordGenerator};
use crate::session::SessionState;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

/// Overrides for a generation run
#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    pub pattern: Option<Pattern>,
    pub quantity: Option<usize>,
    /// Fixed seed for reproducible batches
    pub seed: Option<u64>,
}

/// Result of a generation run
pub struct GenerateResult {
    pub request: GenerationRequest,
    pub outcome: GenerationOutcome,
    pub seed: Option<u64>,
}

/// Generate a batch from the form and replace the session's words with it
///
/// Pattern and quantity overrides are written into the form first, so they
/// stick for later runs. Session notes are kept.
pub fn run_generate(
    config: GenerateConfig,
    form: &mut FormState,
    words: &mut SessionState,
    restrictions: &RestrictionTable,
) -> GenerateResult {
    if let Some(pattern) = config.pattern {
        form.set_pattern(pattern);
    }
    if let Some(quantity) = config.quantity {
        form.set_quantity(quantity);
    }

    let request = form.generation_request();
    let generator = WordGenerator::new(restrictions);
    let outcome = match config.seed {
        Some(seed) => generator.generate(&request, &mut StdRng::seed_from_u64(seed)),
        None => generator.generate(&request, &mut rand::rng()),
    };

    info!(
        pattern = %request.pattern,
        words = outcome.words.len(),
        complete = outcome.complete,
        "generated word list"
    );
    words.initialize_entries(outcome.words.iter().cloned());

    GenerateResult {
        request,
        outcome,
        seed: config.seed,
    }
}
