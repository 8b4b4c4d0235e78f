//! Severity classification: keyword families plus the single-pass
//! classifier with its emergency short-circuit.

pub mod classifier;
pub mod keywords;

pub use classifier::{classify, disease_bonus, recommendations_for};
