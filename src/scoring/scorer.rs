use std::borrow::Cow;

use serde::Serialize;

use super::arbitration::{arbitrate, confidence_for};
use super::lexicon::standard_rules;
use super::normalize::clean;
use super::rules::{all_groups_present, any_present, validate, Boost, CategoryRule, Keywords, Suppression};
use super::LexiconError;
use crate::config::ScoringConfig;
use crate::models::DiagnosisResult;

/// Why a category does or does not take part in arbitration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreStatus {
    Active,
    /// Matched, but no gate anchor was present.
    Gated,
    /// Matched, but a suppression rule fired for this call.
    Suppressed,
    NoMatch,
}

/// Per-category result for one text. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionScore {
    pub category: &'static str,
    /// Label reported if this category wins (override or split label).
    pub label: &'static str,
    pub raw_score: f64,
    pub matched_keywords: Vec<&'static str>,
    pub status: ScoreStatus,
}

impl ConditionScore {
    pub fn is_active(&self) -> bool {
        self.status == ScoreStatus::Active
    }
}

/// All category scores for one text, in rule declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBoard {
    scores: Vec<ConditionScore>,
}

impl ScoreBoard {
    pub fn new(scores: Vec<ConditionScore>) -> Self {
        Self { scores }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConditionScore> {
        self.scores.iter()
    }

    pub fn get(&self, category: &str) -> Option<&ConditionScore> {
        self.scores.iter().find(|s| s.category == category)
    }

    pub fn active(&self) -> impl Iterator<Item = &ConditionScore> {
        self.scores.iter().filter(|s| s.is_active())
    }

    pub fn has_active(&self) -> bool {
        self.active().next().is_some()
    }

    /// Active scores, highest first; equal scores keep declaration order.
    pub fn ranked(&self) -> Vec<&ConditionScore> {
        let mut ranked: Vec<&ConditionScore> = self.active().collect();
        ranked.sort_by(|a, b| b.raw_score.total_cmp(&a.raw_score));
        ranked
    }
}

/// Weighted-keyword condition scorer over a validated rule table.
#[derive(Debug, Clone)]
pub struct ConditionScorer {
    rules: Cow<'static, [CategoryRule]>,
    config: ScoringConfig,
}

impl ConditionScorer {
    /// Scorer over a custom rule table. The table is validated here.
    pub fn new(rules: Vec<CategoryRule>, config: ScoringConfig) -> Result<Self, LexiconError> {
        validate(&rules)?;
        Ok(Self {
            rules: Cow::Owned(rules),
            config,
        })
    }

    /// Scorer over the built-in lexicon.
    pub fn standard(config: ScoringConfig) -> Self {
        Self {
            rules: Cow::Borrowed(standard_rules()),
            config,
        }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score every category against `text`.
    pub fn score(&self, text: &str) -> ScoreBoard {
        let text = clean(text);
        let mut scores: Vec<ConditionScore> = Vec::with_capacity(self.rules.len());
        for rule in self.rules.iter() {
            let score = score_rule(rule, &text, &scores);
            scores.push(score);
        }
        let board = ScoreBoard::new(scores);

        let top = board.ranked().first().map(|s| (s.label, s.raw_score));
        tracing::debug!(
            active = board.active().count(),
            top_label = top.map(|t| t.0),
            top_raw = top.map(|t| t.1),
            "Condition scores computed"
        );

        board
    }

    /// Score and arbitrate. Empty input returns the zero-confidence
    /// fallback without scoring.
    pub fn diagnose(&self, text: &str) -> DiagnosisResult {
        if clean(text).is_empty() {
            return DiagnosisResult::no_input();
        }
        arbitrate(&self.score(text), &self.config)
    }

    /// Active categories as ranked diagnoses (highest first).
    pub fn ranked_diagnoses(&self, text: &str) -> Vec<DiagnosisResult> {
        if clean(text).is_empty() {
            return Vec::new();
        }
        self.score(text)
            .ranked()
            .into_iter()
            .map(|s| {
                DiagnosisResult::new(
                    s.label,
                    confidence_for(s.raw_score, &self.config),
                    s.matched_keywords.iter().map(|k| k.to_string()).collect(),
                )
            })
            .collect()
    }
}

fn match_keywords(keywords: Keywords, text: &str) -> (Vec<&'static str>, f64) {
    let mut matched = Vec::new();
    let mut sum = 0.0;
    for (keyword, weight) in keywords {
        if text.contains(keyword) {
            matched.push(*keyword);
            sum += weight;
        }
    }
    (matched, sum)
}

fn score_rule(rule: &CategoryRule, text: &str, earlier: &[ConditionScore]) -> ConditionScore {
    let (mut matched, primary) = match_keywords(rule.keywords, text);
    let mut raw = primary;
    let mut label = rule.name;

    if let Some(split) = &rule.split {
        let (secondary_matched, secondary) = match_keywords(split.keywords, text);
        if primary + secondary > 0.0 && primary <= secondary {
            label = split.label;
            raw = primary + secondary;
            for kw in secondary_matched {
                if !matched.contains(&kw) {
                    matched.push(kw);
                }
            }
        }
    }

    let mut result = ConditionScore {
        category: rule.name,
        label,
        raw_score: raw,
        matched_keywords: matched,
        status: ScoreStatus::Active,
    };

    if raw <= 0.0 {
        result.raw_score = 0.0;
        result.status = ScoreStatus::NoMatch;
        return result;
    }

    if let Some(gate) = rule.gate {
        if !any_present(text, gate) {
            result.status = ScoreStatus::Gated;
            return result;
        }
    }

    let boosted = match rule.boost {
        Some(Boost::MinDistinct { count, factor }) if result.matched_keywords.len() >= count => {
            Some(factor)
        }
        Some(Boost::AllOf { groups, factor }) if all_groups_present(text, groups) => Some(factor),
        _ => None,
    };
    if let Some(factor) = boosted {
        result.raw_score *= factor;
    }

    let suppressed = match rule.suppression {
        Some(Suppression::TextMarkers(groups)) => all_groups_present(text, groups),
        Some(Suppression::WhenScored(names)) => earlier
            .iter()
            .any(|s| s.is_active() && names.contains(&s.category)),
        None => false,
    };
    if suppressed {
        result.status = ScoreStatus::Suppressed;
        return result;
    }

    if let Some(over) = &rule.label_override {
        if result.label == rule.name && any_present(text, over.markers) {
            result.label = over.label;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::lexicon::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn scorer() -> ConditionScorer {
        ConditionScorer::standard(ScoringConfig::default())
    }

    #[test]
    fn fever_with_joint_pain_and_rash_is_dengue() {
        let s = scorer();
        let board = s.score("fever with joint pain and rash");
        let dengue = board.get(DENGUE).unwrap();
        assert!(approx(dengue.raw_score, 4.2), "raw: {}", dengue.raw_score);
        assert_eq!(dengue.matched_keywords, vec!["joint pain", "rash"]);

        let d = s.diagnose("fever with joint pain and rash");
        assert_eq!(d.condition, DENGUE);
        assert!(approx(d.confidence, 0.42));
    }

    #[test]
    fn pcos_suppresses_dysmenorrhea() {
        let s = scorer();
        let text = "missed periods acne weight gain hair loss period pain";
        let board = s.score(text);

        let pcos = board.get(PCOS).unwrap();
        assert!(approx(pcos.raw_score, 18.125), "raw: {}", pcos.raw_score);
        let dys = board.get(DYSMENORRHEA).unwrap();
        assert_eq!(dys.status, ScoreStatus::Suppressed);
        assert!(approx(dys.raw_score, 3.5));

        let d = s.diagnose(text);
        assert_eq!(d.condition, PCOS);
        assert!(approx(d.confidence, 0.95));
    }

    #[test]
    fn period_pain_alone_is_dysmenorrhea() {
        let d = scorer().diagnose("bad period pain and cramps");
        assert_eq!(d.condition, DYSMENORRHEA);
        assert!(approx(d.confidence, 0.60));
    }

    #[test]
    fn flu_needs_a_fever_anchor() {
        let s = scorer();
        let board = s.score("body ache muscle pain fatigue");
        assert_eq!(board.get(INFLUENZA).unwrap().status, ScoreStatus::Gated);

        let d = s.diagnose("body ache muscle pain fatigue");
        assert_eq!(d.condition, FATIGUE_SYNDROME);
        assert!(approx(d.confidence, 0.25));
    }

    #[test]
    fn depression_wins_when_stronger_than_fatigue() {
        let d = scorer().diagnose("depressed and hopeless");
        assert_eq!(d.condition, DEPRESSION);
        assert!(approx(d.confidence, 0.50));
    }

    #[test]
    fn vomiting_and_diarrhea_boost() {
        let d = scorer().diagnose("vomiting and diarrhea since morning");
        assert_eq!(d.condition, GASTROENTERITIS);
        assert!(approx(d.confidence, 0.70));
    }

    #[test]
    fn heavy_bleeding_with_dizziness_boost() {
        let board = scorer().score("heavy bleeding and dizziness");
        let m = board.get(MENORRHAGIA).unwrap();
        assert!(approx(m.raw_score, 7.7), "raw: {}", m.raw_score);
        assert_eq!(board.get(CARDIAC).unwrap().status, ScoreStatus::Gated);
    }

    #[test]
    fn generic_fever_only_without_specific_fever() {
        let s = scorer();
        let board = s.score("fever with rash");
        assert_eq!(board.get(FEVER).unwrap().status, ScoreStatus::Suppressed);

        let d = s.diagnose("high temperature");
        assert_eq!(d.condition, FEVER);
        assert!(approx(d.confidence, 0.25));
    }

    #[test]
    fn muscle_strain_yields_to_arthritis() {
        let board = scorer().score("arthritis with muscle pain");
        assert!(board.get(ARTHRITIS).unwrap().is_active());
        assert_eq!(board.get(MUSCLE_STRAIN).unwrap().status, ScoreStatus::Suppressed);

        let board = scorer().score("muscle pain after gym");
        assert!(board.get(MUSCLE_STRAIN).unwrap().is_active());
    }

    #[test]
    fn throbbing_headache_reports_migraine() {
        let d = scorer().diagnose("throbbing headache");
        assert_eq!(d.condition, MIGRAINE);
        assert!(approx(d.confidence, 0.40));

        let d = scorer().diagnose("headache");
        assert_eq!(d.condition, HEADACHE);
    }

    #[test]
    fn apostrophes_are_normalized_before_matching() {
        let board = scorer().score("I can't sleep at all");
        assert!(board.get(INSOMNIA).unwrap().is_active());
    }

    #[test]
    fn no_match_is_general_condition() {
        let d = scorer().diagnose("my elbow feels funny");
        assert_eq!(d.condition, "General Condition");
        assert!(approx(d.confidence, 0.50));
        assert!(d.matched_keywords.is_empty());
    }

    #[test]
    fn empty_input_is_zero_confidence() {
        for text in ["", "   ", "\n\t", "?!"] {
            let d = scorer().diagnose(text);
            assert_eq!(d.condition, "General Condition");
            assert_eq!(d.confidence, 0.0);
        }
    }

    #[test]
    fn scoring_is_deterministic() {
        let s = scorer();
        let text = "runny nose sore throat cough with fever and body ache";
        assert_eq!(s.score(text), s.score(text));
        assert_eq!(s.diagnose(text), s.diagnose(text));
    }

    #[test]
    fn confidence_is_bounded() {
        let s = scorer();
        let texts = [
            "",
            "cough",
            "pcos polycystic missed periods acne hair loss weight gain facial hair hormonal",
            "dengue dengue fever fever with rash low platelet hemorrhagic joint pain",
            "random words",
        ];
        for text in texts {
            let d = s.diagnose(text);
            assert!((0.0..=0.95).contains(&d.confidence), "{text}: {}", d.confidence);
        }
    }

    #[test]
    fn ties_go_to_earlier_category() {
        static FIRST: Keywords = &[("itch", 2.0)];
        static SECOND: Keywords = &[("itch", 2.0)];
        let s = ConditionScorer::new(
            vec![CategoryRule::new("First", FIRST), CategoryRule::new("Second", SECOND)],
            ScoringConfig::default(),
        )
        .unwrap();
        assert_eq!(s.diagnose("itch").condition, "First");
        let ranked = s.ranked_diagnoses("itch");
        assert_eq!(ranked[0].condition, "First");
        assert_eq!(ranked[1].condition, "Second");
    }

    #[test]
    fn custom_table_is_validated() {
        static BAD: Keywords = &[("Itch", 2.0)];
        let err = ConditionScorer::new(vec![CategoryRule::new("Bad", BAD)], ScoringConfig::default())
            .unwrap_err();
        assert!(matches!(err, LexiconError::KeywordNotNormalized { .. }));
    }

    #[test]
    fn ranked_diagnoses_orders_by_confidence() {
        let ranked = scorer().ranked_diagnoses("runny nose sore throat cough with fever");
        assert_eq!(ranked[0].condition, INFLUENZA);
        assert!(approx(ranked[0].confidence, 0.52));
        assert_eq!(ranked[1].condition, COMMON_COLD);
        assert!(approx(ranked[1].confidence, 0.50));
    }
}
