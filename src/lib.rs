//! Pseudoword
//!
//! Generates pronounceable pseudo-words from consonant/vowel patterns and
//! selected sounds, honoring phonotactic adjacency restrictions, and tracks
//! a scoring session over the generated list.
//!
//! # Quick Start
//!
//! ```rust
//! use pseudoword::form::FormState;
//! use pseudoword::generator::generate;
//! use pseudoword::inventory::SoundInventory;
//! use rand::SeedableRng;
//!
//! let inventory = SoundInventory::en_us().unwrap();
//! let sounds = inventory.resolve(&["p", "t", "k", "æ", "i"]).unwrap();
//! let form = FormState::new(sounds, "CVC".parse().unwrap(), 5);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(3);
//! let outcome = generate(&form.generation_request(), inventory.restrictions(), &mut rng);
//! for word in &outcome.words {
//!     println!("{word}");
//! }
//! ```

// Core domain types
pub mod core;

// Word generation
pub mod generator;

// Scoring session
pub mod session;

// Generation settings
pub mod form;

// Sound inventories
pub mod inventory;

// State persistence
pub mod persistence;
pub mod workspace;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
