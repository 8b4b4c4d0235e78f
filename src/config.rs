//! Application constants and the tunable thresholds of the triage core.
//!
//! The numeric thresholds are hand-tuned, not derived. They are grouped here
//! so callers can override them (for experiments or tests) without touching
//! the scoring tables.

use serde::{Deserialize, Serialize};

use crate::engine::TriageError;

/// Application-level constants
pub const APP_NAME: &str = "symptom-triage";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Label reported when no lexicon keyword fires.
pub const FALLBACK_CONDITION: &str = "General Condition";

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "symptom_triage=info"
}

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// Confidence normalization: `min(confidence_cap, raw_score / confidence_divisor)`.
///
/// This is a bounded linear transform of a keyword-weight sum, not a
/// calibrated probability. Categories with heavier lexicons reach the cap
/// with less text than light ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub confidence_divisor: f64,
    pub confidence_cap: f64,
    /// Confidence reported with the fallback label when text was present but
    /// nothing matched.
    pub fallback_confidence: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            confidence_divisor: 10.0,
            confidence_cap: 0.95,
            fallback_confidence: 0.50,
        }
    }
}

/// Multi-condition detection thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComorbidityConfig {
    /// Candidates below this confidence are never ranked.
    pub inclusion_floor: f64,
    /// Maximum number of ranked candidates considered.
    pub max_candidates: usize,
    /// Primary/secondary gap below which a case is multi-condition.
    pub gap_threshold: f64,
    /// Secondary confidence must exceed this to count.
    pub secondary_floor: f64,
    /// Chronic conditions are kept only above this confidence.
    pub chronic_bar: f64,
}

impl Default for ComorbidityConfig {
    fn default() -> Self {
        Self {
            inclusion_floor: 0.10,
            max_candidates: 5,
            gap_threshold: 0.20,
            secondary_floor: 0.20,
            chronic_bar: 0.60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    pub scoring: ScoringConfig,
    pub comorbidity: ComorbidityConfig,
}

impl TriageConfig {
    /// Parse a (possibly partial) JSON config; missing fields keep defaults.
    pub fn from_json_str(json: &str) -> Result<Self, TriageError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| TriageError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TriageError> {
        let s = &self.scoring;
        if !(s.confidence_divisor > 0.0) {
            return Err(TriageError::InvalidConfig(format!(
                "confidence_divisor must be positive, got {}",
                s.confidence_divisor
            )));
        }
        check_unit("confidence_cap", s.confidence_cap)?;
        check_unit("fallback_confidence", s.fallback_confidence)?;

        let c = &self.comorbidity;
        check_unit("inclusion_floor", c.inclusion_floor)?;
        check_unit("gap_threshold", c.gap_threshold)?;
        check_unit("secondary_floor", c.secondary_floor)?;
        check_unit("chronic_bar", c.chronic_bar)?;
        if c.max_candidates == 0 {
            return Err(TriageError::InvalidConfig(
                "max_candidates must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

fn check_unit(field: &str, value: f64) -> Result<(), TriageError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TriageError::InvalidConfig(format!(
            "{field} must be within [0, 1], got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let config = TriageConfig::default();
        assert_eq!(config.scoring.confidence_divisor, 10.0);
        assert_eq!(config.scoring.confidence_cap, 0.95);
        assert_eq!(config.scoring.fallback_confidence, 0.50);
        assert_eq!(config.comorbidity.gap_threshold, 0.20);
        assert_eq!(config.comorbidity.secondary_floor, 0.20);
        assert_eq!(config.comorbidity.chronic_bar, 0.60);
        assert_eq!(config.comorbidity.max_candidates, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            TriageConfig::from_json_str(r#"{"comorbidity": {"gap_threshold": 0.3}}"#).unwrap();
        assert_eq!(config.comorbidity.gap_threshold, 0.3);
        assert_eq!(config.comorbidity.chronic_bar, 0.60);
        assert_eq!(config.scoring, ScoringConfig::default());
    }

    #[test]
    fn rejects_non_positive_divisor() {
        let mut config = TriageConfig::default();
        config.scoring.confidence_divisor = 0.0;
        assert!(matches!(config.validate(), Err(TriageError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let result = TriageConfig::from_json_str(r#"{"comorbidity": {"chronic_bar": 1.5}}"#);
        assert!(matches!(result, Err(TriageError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_candidates() {
        let mut config = TriageConfig::default();
        config.comorbidity.max_candidates = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_json_is_config_error() {
        assert!(matches!(
            TriageConfig::from_json_str("{not json"),
            Err(TriageError::InvalidConfig(_))
        ));
    }

    #[test]
    fn default_filter_targets_crate() {
        assert!(default_log_filter().starts_with("symptom_triage"));
    }
}
