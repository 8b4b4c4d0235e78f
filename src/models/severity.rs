use serde::{Deserialize, Serialize};

use super::enums::SeverityLevel;

/// Severity assessment for one symptom description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityScore {
    pub level: SeverityLevel,
    /// 0-100. Always 100 for Emergency.
    pub score: u8,
    pub contributing_factors: Vec<String>,
    pub recommendations: Vec<String>,
    pub urgent: bool,
}

impl SeverityScore {
    /// `urgent` is derived from the level.
    pub fn new(
        level: SeverityLevel,
        score: u8,
        contributing_factors: Vec<String>,
        recommendations: Vec<String>,
    ) -> Self {
        Self {
            level,
            score,
            contributing_factors,
            recommendations,
            urgent: level.is_urgent(),
        }
    }
}
