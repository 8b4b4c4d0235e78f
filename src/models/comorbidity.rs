use serde::{Deserialize, Serialize};

use super::diagnosis::DiagnosisResult;

/// A known co-occurring condition pair found among the ranked candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComorbidityPattern {
    /// "First + Second"
    pub pattern: String,
    pub description: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComorbidityResult {
    /// Top candidate after chronic filtering; `None` when nothing qualified.
    pub primary: Option<DiagnosisResult>,
    /// Candidates ranked 2+; empty unless `has_multiple_conditions`.
    pub comorbidities: Vec<DiagnosisResult>,
    pub has_multiple_conditions: bool,
    /// Primary minus secondary confidence. 1.0 with a single candidate,
    /// 0.0 with none.
    pub confidence_gap: f64,
    /// Every candidate that survived filtering, in rank order.
    pub candidates: Vec<DiagnosisResult>,
    pub pattern: Option<ComorbidityPattern>,
}

impl ComorbidityResult {
    pub fn empty() -> Self {
        Self {
            primary: None,
            comorbidities: Vec::new(),
            has_multiple_conditions: false,
            confidence_gap: 0.0,
            candidates: Vec::new(),
            pattern: None,
        }
    }
}
