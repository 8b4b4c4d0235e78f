use super::scorer::{ConditionScore, ScoreBoard};
use crate::config::ScoringConfig;
use crate::models::DiagnosisResult;

/// `min(cap, raw / divisor)`. A bounded linear transform, not a calibrated
/// probability: categories with heavy lexicons reach the cap on less text.
pub fn confidence_for(raw_score: f64, config: &ScoringConfig) -> f64 {
    (raw_score / config.confidence_divisor)
        .min(config.confidence_cap)
        .max(0.0)
}

/// Pick the highest active raw score. Ties keep the first-declared
/// category. With nothing active, the fallback label and baseline
/// confidence are returned.
pub fn arbitrate(board: &ScoreBoard, config: &ScoringConfig) -> DiagnosisResult {
    let mut best: Option<&ConditionScore> = None;
    for score in board.active() {
        if best.map_or(true, |b| score.raw_score > b.raw_score) {
            best = Some(score);
        }
    }

    match best {
        Some(winner) => DiagnosisResult::new(
            winner.label,
            confidence_for(winner.raw_score, config),
            winner.matched_keywords.iter().map(|k| k.to_string()).collect(),
        ),
        None => DiagnosisResult::fallback(config.fallback_confidence),
    }
}
