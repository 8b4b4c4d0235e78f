use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::comorbidity::ComorbidityDetector;
use crate::config::TriageConfig;
use crate::knowledge::{KnowledgeBase, KnowledgeError};
use crate::models::enums::SeverityLevel;
use crate::models::{
    ComorbidityResult, DiagnosisResult, DrugCandidate, HerbCandidate, ModelError, PatientProfile,
    RecommendationBundle, SeverityScore,
};
use crate::personalization::Personalizer;
use crate::scoring::normalize::normalize;
use crate::scoring::{CategoryRule, ConditionScorer, LexiconError};
use crate::severity;

// ---------------------------------------------------------------------------
// TriageError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    #[error("Knowledge base error: {0}")]
    Knowledge(#[from] KnowledgeError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

// ---------------------------------------------------------------------------
// Request / report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageRequest {
    pub symptoms: String,
    /// Known or suspected disease; aliases such as "flu" are accepted.
    pub disease: Option<String>,
    pub profile: Option<PatientProfile>,
    pub drugs: Vec<DrugCandidate>,
    pub herbs: Vec<HerbCandidate>,
}

impl TriageRequest {
    pub fn new(symptoms: impl Into<String>) -> Self {
        Self {
            symptoms: symptoms.into(),
            ..Self::default()
        }
    }

    pub fn with_disease(mut self, disease: impl Into<String>) -> Self {
        self.disease = Some(disease.into());
        self
    }

    pub fn with_profile(mut self, profile: PatientProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_drugs(mut self, drugs: Vec<DrugCandidate>) -> Self {
        self.drugs = drugs;
        self
    }

    pub fn with_herbs(mut self, herbs: Vec<HerbCandidate>) -> Self {
        self.herbs = herbs;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageReport {
    pub id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub normalized_text: String,
    pub diagnosis: DiagnosisResult,
    pub severity: SeverityScore,
    pub comorbidity: ComorbidityResult,
    /// Present only when the request carried a patient profile.
    pub recommendations: Option<RecommendationBundle>,
    pub description: Option<String>,
    pub processing_time_ms: u64,
}

// ---------------------------------------------------------------------------
// TriageEngine
// ---------------------------------------------------------------------------

/// Runs the full analysis: normalize, score, arbitrate, classify severity,
/// detect comorbidities and personalize. Holds only immutable shared data.
pub struct TriageEngine {
    scorer: Arc<ConditionScorer>,
    knowledge: Arc<KnowledgeBase>,
    comorbidity: ComorbidityDetector,
    personalizer: Personalizer,
    config: TriageConfig,
}

impl TriageEngine {
    /// Engine over the built-in lexicon.
    pub fn new(config: TriageConfig, knowledge: KnowledgeBase) -> Result<Self, TriageError> {
        config.validate()?;
        let scorer = ConditionScorer::standard(config.scoring.clone());
        Ok(Self::assemble(scorer, config, knowledge))
    }

    /// Engine over a custom lexicon, validated before use.
    pub fn with_rules(
        config: TriageConfig,
        rules: Vec<CategoryRule>,
        knowledge: KnowledgeBase,
    ) -> Result<Self, TriageError> {
        config.validate()?;
        let scorer = ConditionScorer::new(rules, config.scoring.clone())?;
        Ok(Self::assemble(scorer, config, knowledge))
    }

    /// Engine with reference data loaded from `dir`.
    pub fn from_dir(config: TriageConfig, dir: &Path) -> Result<Self, TriageError> {
        let knowledge = KnowledgeBase::load(dir)?;
        Self::new(config, knowledge)
    }

    /// Default thresholds and built-in reference data.
    pub fn standard() -> Self {
        let config = TriageConfig::default();
        let scorer = ConditionScorer::standard(config.scoring.clone());
        Self::assemble(scorer, config, KnowledgeBase::builtin())
    }

    fn assemble(scorer: ConditionScorer, config: TriageConfig, knowledge: KnowledgeBase) -> Self {
        let scorer = Arc::new(scorer);
        let knowledge = Arc::new(knowledge);
        let comorbidity = ComorbidityDetector::new(scorer.clone(), config.comorbidity.clone());
        let personalizer = Personalizer::with_knowledge(knowledge.clone());
        Self {
            scorer,
            knowledge,
            comorbidity,
            personalizer,
            config,
        }
    }

    pub fn config(&self) -> &TriageConfig {
        &self.config
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn scorer(&self) -> &ConditionScorer {
        &self.scorer
    }

    /// Cleaned, spelling-corrected symptom text.
    pub fn normalize(&self, text: &str) -> String {
        normalize(text, self.knowledge.corrections())
    }

    pub fn diagnose(&self, text: &str) -> DiagnosisResult {
        self.scorer.diagnose(&self.normalize(text))
    }

    /// Severity of `text`; `disease` may be an alias.
    pub fn classify_severity(&self, text: &str, disease: Option<&str>) -> SeverityScore {
        let disease = disease.map(|d| self.knowledge.canonical_disease_name(d));
        severity::classify(&self.normalize(text), disease.as_deref())
    }

    pub fn detect_comorbidities(&self, text: &str) -> ComorbidityResult {
        self.comorbidity.detect(&self.normalize(text))
    }

    pub fn personalize(
        &self,
        disease: &str,
        severity: SeverityLevel,
        profile: &PatientProfile,
        drugs: Option<&[DrugCandidate]>,
        herbs: Option<&[HerbCandidate]>,
    ) -> RecommendationBundle {
        let disease = self.knowledge.canonical_disease_name(disease);
        self.personalizer
            .personalize(&disease, severity, profile, drugs, herbs)
    }

    pub fn analyze(&self, request: &TriageRequest) -> TriageReport {
        let start = Instant::now();

        let normalized_text = self.normalize(&request.symptoms);
        let diagnosis = self.scorer.diagnose(&normalized_text);

        let disease_context = match request.disease.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Some(self.knowledge.canonical_disease_name(name)),
            _ if diagnosis.is_fallback() => None,
            _ => Some(diagnosis.condition.clone()),
        };

        let severity = severity::classify(&normalized_text, disease_context.as_deref());
        let comorbidity = self.comorbidity.detect(&normalized_text);

        let recommendations = request.profile.as_ref().map(|profile| {
            let disease = disease_context
                .as_deref()
                .unwrap_or(diagnosis.condition.as_str());
            self.personalizer.personalize(
                disease,
                severity.level,
                profile,
                non_empty(&request.drugs),
                non_empty(&request.herbs),
            )
        });

        let description = self
            .knowledge
            .description_for(&diagnosis.condition)
            .map(str::to_string);

        let processing_time_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            condition = %diagnosis.condition,
            confidence = diagnosis.confidence,
            severity = severity.level.as_str(),
            urgent = severity.urgent,
            multiple = comorbidity.has_multiple_conditions,
            personalized = recommendations.is_some(),
            processing_ms = processing_time_ms,
            "Triage analysis complete"
        );

        TriageReport {
            id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            normalized_text,
            diagnosis,
            severity,
            comorbidity,
            recommendations,
            description,
            processing_time_ms,
        }
    }
}

fn non_empty<T>(items: &[T]) -> Option<&[T]> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;
    use crate::scoring::lexicon::{INFLUENZA, MALARIA};

    fn engine() -> TriageEngine {
        TriageEngine::standard()
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TriageEngine>();
    }

    #[test]
    fn emergency_text_end_to_end() {
        let report = engine().analyze(&TriageRequest::new(
            "severe crushing chest pain radiating to left arm cant breathe",
        ));
        assert_eq!(report.severity.level, SeverityLevel::Emergency);
        assert_eq!(report.severity.score, 100);
        assert!(report.severity.urgent);
        assert!(report.recommendations.is_none());
    }

    #[test]
    fn empty_text_end_to_end() {
        let report = engine().analyze(&TriageRequest::new(""));
        assert_eq!(report.diagnosis.condition, "General Condition");
        assert_eq!(report.diagnosis.confidence, 0.0);
        assert_eq!(report.severity.level, SeverityLevel::Mild);
        assert_eq!(report.severity.score, 20);
        assert_eq!(
            report.severity.contributing_factors,
            vec!["No severity indicators found (assumed mild)".to_string()]
        );
        assert_eq!(report.comorbidity, ComorbidityResult::empty());
        assert!(report.normalized_text.is_empty());
    }

    #[test]
    fn misspellings_corrected_before_scoring() {
        let report = engine().analyze(&TriageRequest::new("Fevr and CHILLS!"));
        assert_eq!(report.normalized_text, "fever and chills");
        assert_eq!(report.diagnosis.condition, INFLUENZA);
        assert!((report.diagnosis.confidence - 0.52).abs() < 1e-9);
    }

    #[test]
    fn diagnosed_label_feeds_severity_and_description() {
        let report = engine().analyze(&TriageRequest::new("malaria"));
        assert_eq!(report.diagnosis.condition, MALARIA);
        assert_eq!(report.severity.score, 5);
        assert!(report
            .severity
            .contributing_factors
            .contains(&"Disease severity factor: Malaria (+5)".to_string()));
        assert!(report.description.unwrap().contains("Parasitic"));
    }

    #[test]
    fn fallback_label_is_not_disease_context() {
        let report = engine().analyze(&TriageRequest::new("xyzzy"));
        assert!(report.diagnosis.is_fallback());
        assert!((report.diagnosis.confidence - 0.50).abs() < 1e-9);
        assert_eq!(report.severity.score, 20);
    }

    #[test]
    fn request_disease_alias_is_canonicalized() {
        let report = engine().analyze(&TriageRequest::new("cough").with_disease("tb"));
        assert_eq!(report.severity.score, 10);
        assert!(report
            .severity
            .contributing_factors
            .contains(&"Disease severity factor: Tuberculosis (+10)".to_string()));
    }

    #[test]
    fn profile_enables_personalization() {
        let profile = PatientProfile::builder().age(29).pregnant(true).build();
        let request = TriageRequest::new("burning urination and frequent urination")
            .with_profile(profile)
            .with_drugs(vec![
                DrugCandidate::new("Nitrofurantoin"),
                DrugCandidate::with_kind("Ciprofloxacin", "Fluoroquinolone"),
            ]);
        let report = engine().analyze(&request);
        let bundle = report.recommendations.unwrap();
        assert!(bundle.is_avoided("Ciprofloxacin"));
        assert!(bundle.is_safe("Nitrofurantoin"));
        assert_eq!(bundle.severity, report.severity.level);
    }

    #[test]
    fn engine_personalize_accepts_aliases() {
        let profile = PatientProfile::builder().age(35).build();
        let drugs = vec![DrugCandidate::new("Aspirin")];
        let bundle = engine().personalize("dengue", SeverityLevel::Moderate, &profile, Some(&drugs), None);
        assert!(bundle.is_avoided("Aspirin"));
    }

    #[test]
    fn invalid_config_rejected() {
        let config = TriageConfig {
            scoring: ScoringConfig {
                confidence_divisor: 0.0,
                ..ScoringConfig::default()
            },
            ..TriageConfig::default()
        };
        let result = TriageEngine::new(config, KnowledgeBase::builtin());
        assert!(matches!(result, Err(TriageError::InvalidConfig(_))));
    }

    #[test]
    fn invalid_lexicon_rejected() {
        const EMPTY: &[(&str, f64)] = &[];
        let result = TriageEngine::with_rules(
            TriageConfig::default(),
            vec![CategoryRule::new("Empty", EMPTY)],
            KnowledgeBase::builtin(),
        );
        assert!(matches!(result, Err(TriageError::Lexicon(_))));
    }

    #[test]
    fn missing_reference_dir_uses_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let engine = TriageEngine::from_dir(TriageConfig::default(), dir.path()).unwrap();
        assert_eq!(engine.knowledge().canonical_disease_name("flu"), "Influenza");
    }

    #[test]
    fn concurrent_analyses_agree() {
        let engine = Arc::new(engine());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = Arc::clone(&engine);
                std::thread::spawn(move || {
                    engine
                        .analyze(&TriageRequest::new("runny nose sore throat cough with fever"))
                        .diagnosis
                })
            })
            .collect();
        let results: Vec<DiagnosisResult> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(results[0].condition, INFLUENZA);
    }

    #[test]
    fn report_serializes() {
        let report = engine().analyze(&TriageRequest::new("slight runny nose occasional sneezing"));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["severity"]["level"], "Mild");
        assert_eq!(value["severity"]["urgent"], false);
        assert!(value["id"].is_string());
        assert!(value["recommendations"].is_null());
    }
}
