use std::sync::Arc;

use super::families::{allergy_matches, entry_matches};
use super::tables::{age_advice, disease_rule, population_rule, severity_rule};
use crate::knowledge::{DiseaseKey, KnowledgeBase};
use crate::models::enums::{SeverityLevel, WarningKind};
use crate::models::{
    Contraindication, DoseAdjustment, DrugCandidate, FlaggedDrug, FlaggedHerb, HerbCandidate,
    InteractionWarning, PatientProfile, RecommendationBundle, Warning,
};

const PREGNANCY_HERB_WARNING: &str = "Use with caution during pregnancy - consult herbalist";
const PEDIATRIC_HERB_WARNING: &str = "Pediatric dosing required - consult healthcare provider";

/// How a contraindication entry is matched against drug candidates.
#[derive(Debug, Clone, Copy, PartialEq)]
enum MatchMode {
    Listed,
    Allergen,
}

/// Builds a [`RecommendationBundle`] from the resolved disease, severity
/// level and patient profile. Never reads symptom text.
#[derive(Debug, Clone, Default)]
pub struct Personalizer {
    knowledge: Option<Arc<KnowledgeBase>>,
}

impl Personalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables the drug interaction check.
    pub fn with_knowledge(knowledge: Arc<KnowledgeBase>) -> Self {
        Self {
            knowledge: Some(knowledge),
        }
    }

    pub fn personalize(
        &self,
        disease: &str,
        severity: SeverityLevel,
        profile: &PatientProfile,
        drugs: Option<&[DrugCandidate]>,
        herbs: Option<&[HerbCandidate]>,
    ) -> RecommendationBundle {
        let populations = profile.special_populations();
        let disease_key = DiseaseKey::primary(disease);
        let sev = severity_rule(severity);

        let mut bundle = RecommendationBundle {
            disease: disease.to_string(),
            severity,
            patient_populations: populations.clone(),
            severity_message: sev.message.to_string(),
            self_care_appropriate: sev.self_care,
            otc_allowed: sev.otc_allowed,
            warnings: Vec::new(),
            contraindications: Vec::new(),
            dose_adjustments: Vec::new(),
            disease_notes: Vec::new(),
            safe_drugs: Vec::new(),
            avoid_drugs: Vec::new(),
            safe_herbs: Vec::new(),
            caution_herbs: Vec::new(),
            interaction_warnings: Vec::new(),
            lifestyle_advice: Vec::new(),
            immediate_actions: vec![sev.immediate_action.to_string()],
        };
        let mut modes: Vec<MatchMode> = Vec::new();

        // -- Allergies --------------------------------------------------------
        for allergen in profile.allergies() {
            bundle.warnings.push(Warning {
                kind: WarningKind::Allergy,
                population: None,
                message: format!("Patient is allergic to {allergen}"),
                action: Some(format!("Avoid {allergen} and related drugs")),
            });
            bundle.contraindications.push(Contraindication {
                drug: allergen.clone(),
                reason: format!("Allergy to {allergen}"),
            });
            modes.push(MatchMode::Allergen);
        }

        // -- Special populations ----------------------------------------------
        for &population in &populations {
            let rule = population_rule(population);
            bundle.warnings.push(Warning {
                kind: WarningKind::SpecialPopulation,
                population: Some(population),
                message: format!("Patient is {population} - special precautions required"),
                action: None,
            });
            for drug in rule.avoid {
                bundle.contraindications.push(Contraindication {
                    drug: drug.to_string(),
                    reason: format!("Contraindicated in {population}"),
                });
                modes.push(MatchMode::Listed);
            }
            bundle
                .dose_adjustments
                .extend(rule.caution.iter().map(|note| DoseAdjustment {
                    note: note.to_string(),
                    population,
                }));
        }

        // -- Disease rules ----------------------------------------------------
        if let Some(rule) = disease_key.and_then(disease_rule) {
            if !rule.avoid.is_empty() {
                bundle.warnings.push(Warning {
                    kind: WarningKind::Disease,
                    population: None,
                    message: format!("{}: avoid {}", rule.reason, rule.avoid.join(", ")),
                    action: None,
                });
            }
            for drug in rule.avoid {
                bundle.contraindications.push(Contraindication {
                    drug: drug.to_string(),
                    reason: rule.reason.to_string(),
                });
                modes.push(MatchMode::Listed);
            }
            bundle
                .disease_notes
                .extend(rule.notes.iter().map(|n| n.to_string()));
        }

        if let Some(group) = profile.age_group() {
            bundle
                .lifestyle_advice
                .extend(age_advice(group).iter().map(|a| a.to_string()));
        }

        // -- Drug filtering ---------------------------------------------------
        for drug in drugs.unwrap_or_default() {
            let hit = bundle
                .contraindications
                .iter()
                .zip(&modes)
                .find(|(contra, mode)| match mode {
                    MatchMode::Listed => entry_matches(&contra.drug, drug),
                    MatchMode::Allergen => allergy_matches(&contra.drug, drug),
                });
            match hit {
                Some((contra, _)) => bundle.avoid_drugs.push(FlaggedDrug {
                    drug: drug.clone(),
                    reason: contra.reason.clone(),
                }),
                None => bundle.safe_drugs.push(drug.clone()),
            }
        }

        // -- Herbs ------------------------------------------------------------
        let herb_warning = if profile.is_pregnant() {
            Some(PREGNANCY_HERB_WARNING)
        } else if profile.is_pediatric() {
            Some(PEDIATRIC_HERB_WARNING)
        } else {
            None
        };
        for herb in herbs.unwrap_or_default() {
            match herb_warning {
                Some(warning) => bundle.caution_herbs.push(FlaggedHerb {
                    herb: herb.clone(),
                    warning: warning.to_string(),
                }),
                None => bundle.safe_herbs.push(herb.clone()),
            }
        }

        // -- Cross-condition monitoring ---------------------------------------
        if profile.has_diabetes() && disease_key != Some(DiseaseKey::Diabetes) {
            bundle.warnings.push(Warning {
                kind: WarningKind::Comorbidity,
                population: None,
                message: "Patient has diabetes - monitor blood glucose closely".into(),
                action: Some("Avoid medications that affect blood sugar".into()),
            });
        }
        if profile.has_hypertension() && disease_key != Some(DiseaseKey::Hypertension) {
            bundle.warnings.push(Warning {
                kind: WarningKind::Comorbidity,
                population: None,
                message: "Patient has hypertension - avoid drugs that raise blood pressure".into(),
                action: Some("Monitor blood pressure regularly".into()),
            });
        }

        // -- Interactions -----------------------------------------------------
        if let Some(kb) = self.knowledge.as_deref().filter(|kb| kb.has_interactions()) {
            let names: Vec<&str> = drugs
                .unwrap_or_default()
                .iter()
                .map(|d| d.name.as_str())
                .chain(profile.current_medications().iter().map(String::as_str))
                .collect();
            for (i, first) in names.iter().enumerate() {
                for second in &names[i + 1..] {
                    if let Some(record) = kb.interaction(first, second) {
                        bundle.interaction_warnings.push(InteractionWarning {
                            drug1: first.to_string(),
                            drug2: second.to_string(),
                            severity: record.severity.clone(),
                            effect: record.effect.clone(),
                            recommendation: record.recommendation.clone(),
                        });
                    }
                }
            }
        }

        tracing::debug!(
            populations = bundle.patient_populations.len(),
            contraindications = bundle.contraindications.len(),
            avoid = bundle.avoid_drugs.len(),
            interactions = bundle.interaction_warnings.len(),
            "Recommendations personalized"
        );

        bundle
    }
}
