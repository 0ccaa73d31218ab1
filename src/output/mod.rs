//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_entry, print_form, print_generation_result, print_selection_change, print_sounds,
    print_stats, print_word_list,
};
