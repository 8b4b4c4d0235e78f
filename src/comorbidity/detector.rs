use std::sync::Arc;

use super::patterns::find_pattern;
use super::CandidateRanker;
use crate::config::ComorbidityConfig;
use crate::knowledge::DiseaseKey;
use crate::models::{ComorbidityResult, DiagnosisResult};

/// Finds cases where more than one condition is plausible.
pub struct ComorbidityDetector {
    ranker: Arc<dyn CandidateRanker + Send + Sync>,
    config: ComorbidityConfig,
}

impl ComorbidityDetector {
    pub fn new(ranker: Arc<dyn CandidateRanker + Send + Sync>, config: ComorbidityConfig) -> Self {
        Self { ranker, config }
    }

    pub fn config(&self) -> &ComorbidityConfig {
        &self.config
    }

    pub fn detect(&self, text: &str) -> ComorbidityResult {
        self.detect_from_candidates(self.ranker.rank(text))
    }

    /// Filter ranked candidates and decide whether the case is
    /// multi-condition.
    pub fn detect_from_candidates(&self, mut candidates: Vec<DiagnosisResult>) -> ComorbidityResult {
        let cfg = &self.config;

        candidates.retain(|c| c.confidence >= cfg.inclusion_floor);
        candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        candidates.truncate(cfg.max_candidates);

        let before = candidates.len();
        candidates.retain(|c| !is_chronic(c) || c.confidence > cfg.chronic_bar);
        if candidates.len() < before {
            tracing::debug!(excluded = before - candidates.len(), "Chronic candidates excluded");
        }

        let Some(primary) = candidates.first().cloned() else {
            return ComorbidityResult::empty();
        };

        let (confidence_gap, has_multiple_conditions) = match candidates.get(1) {
            Some(secondary) => {
                let gap = primary.confidence - secondary.confidence;
                let multiple = gap < cfg.gap_threshold && secondary.confidence > cfg.secondary_floor;
                (gap, multiple)
            }
            None => (1.0, false),
        };

        let comorbidities: Vec<DiagnosisResult> = if has_multiple_conditions {
            candidates[1..].to_vec()
        } else {
            Vec::new()
        };

        let pattern = if has_multiple_conditions {
            let present: Vec<DiseaseKey> = std::iter::once(&primary)
                .chain(comorbidities.iter())
                .flat_map(|c| DiseaseKey::all_in(&c.condition))
                .collect();
            find_pattern(&present)
        } else {
            None
        };

        ComorbidityResult {
            primary: Some(primary),
            comorbidities,
            has_multiple_conditions,
            confidence_gap,
            candidates,
            pattern,
        }
    }
}

fn is_chronic(candidate: &DiagnosisResult) -> bool {
    DiseaseKey::primary(&candidate.condition).is_some_and(|key| key.is_chronic())
}
