use serde::{Deserialize, Serialize};

use super::enums::ConfidenceLevel;
use crate::config::FALLBACK_CONDITION;

/// Outcome of arbitration: one condition label and a bounded confidence.
///
/// Confidence is a clamped linear transform of a keyword-weight sum, not a
/// probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub condition: String,
    pub confidence: f64,
    pub confidence_level: ConfidenceLevel,
    /// Lexicon phrases that produced the score (empty for the fallback).
    pub matched_keywords: Vec<String>,
}

impl DiagnosisResult {
    pub fn new(condition: impl Into<String>, confidence: f64, matched_keywords: Vec<String>) -> Self {
        Self {
            condition: condition.into(),
            confidence,
            confidence_level: ConfidenceLevel::from_confidence(confidence),
            matched_keywords,
        }
    }

    /// Fallback label with the given baseline confidence.
    pub fn fallback(confidence: f64) -> Self {
        Self::new(FALLBACK_CONDITION, confidence, Vec::new())
    }

    /// Result for empty or whitespace-only input.
    pub fn no_input() -> Self {
        Self::fallback(0.0)
    }

    pub fn is_fallback(&self) -> bool {
        self.condition == FALLBACK_CONDITION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_follows_confidence() {
        let d = DiagnosisResult::new("Malaria", 0.8, vec!["malaria".into()]);
        assert_eq!(d.confidence_level, ConfidenceLevel::High);
        assert!(!d.is_fallback());
    }

    #[test]
    fn no_input_is_zero_confidence_fallback() {
        let d = DiagnosisResult::no_input();
        assert_eq!(d.condition, "General Condition");
        assert_eq!(d.confidence, 0.0);
        assert_eq!(d.confidence_level, ConfidenceLevel::Low);
        assert!(d.is_fallback());
    }
}
