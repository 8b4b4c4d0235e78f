//! Condition scoring: text normalization, the declarative lexicon, the
//! weighted-keyword scorer and arbitration.

pub mod arbitration;
pub mod lexicon;
pub mod normalize;
pub mod rules;
pub mod scorer;

pub use arbitration::{arbitrate, confidence_for};
pub use rules::{Boost, CategoryRule, Suppression};
pub use scorer::{ConditionScore, ConditionScorer, ScoreBoard, ScoreStatus};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexiconError {
    #[error("Category with empty name or label")]
    EmptyName,

    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("Category {0} has no keywords")]
    EmptyKeywords(String),

    #[error("Non-positive weight for '{keyword}' in {category}")]
    NonPositiveWeight { category: String, keyword: String },

    #[error("Phrase '{keyword}' in {category} is not in normalized form")]
    KeywordNotNormalized { category: String, keyword: String },

    #[error("Duplicate keyword '{keyword}' in {category}")]
    DuplicateKeyword { category: String, keyword: String },

    #[error("Invalid boost factor {factor} in {category}")]
    InvalidBoost { category: String, factor: f64 },

    #[error("Category {0} has an empty gate set")]
    EmptyGate(String),

    #[error("Category {category} is suppressed by unknown or later category {reference}")]
    UnknownSuppressor { category: String, reference: String },

    #[error("Suppression marker '{marker}' is also a keyword of {category}")]
    SelfSuppressingMarker { category: String, marker: String },
}
