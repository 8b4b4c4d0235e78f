//! Reference data: disease identifiers and the knowledge base.
//!
//! The only file access in the crate happens in [`loader`]. Scoring,
//! severity, comorbidity and personalization receive data by reference.

pub mod base;
pub mod disease;
pub mod loader;

pub use base::{InteractionRecord, KnowledgeBase};
pub use disease::DiseaseKey;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("Reference data load failed ({0}): {1}")]
    Load(String, String),

    #[error("Reference data parse failed ({0}): {1}")]
    Parse(String, String),
}
