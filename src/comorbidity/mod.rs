//! Multi-condition detection over ranked diagnosis candidates.

pub mod detector;
pub mod patterns;

pub use detector::ComorbidityDetector;
pub use patterns::find_pattern;

use crate::models::DiagnosisResult;
use crate::scoring::ConditionScorer;

/// Produces (condition, confidence) candidates, highest first.
pub trait CandidateRanker {
    fn rank(&self, text: &str) -> Vec<DiagnosisResult>;
}

impl CandidateRanker for ConditionScorer {
    fn rank(&self, text: &str) -> Vec<DiagnosisResult> {
        self.ranked_diagnoses(text)
    }
}
