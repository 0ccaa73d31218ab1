//! Embedded sound inventories
//!
//! Inventories compiled into the binary.

/// American English inventory (JSON)
pub const EN_US: &str = include_str!("../../data/en-us.json");
