use serde::{Deserialize, Serialize};

use super::enums::{SeverityLevel, SpecialPopulation, WarningKind};

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// A pharmaceutical option offered by a collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugCandidate {
    pub name: String,
    /// Class label such as "Fluoroquinolone" or "NSAID", when known.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl DrugCandidate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
        }
    }

    pub fn with_kind(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: Some(kind.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HerbCandidate {
    pub name: String,
}

impl HerbCandidate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ---------------------------------------------------------------------------
// Bundle entries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<SpecialPopulation>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// A drug or drug class to avoid, with the reason it applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contraindication {
    pub drug: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseAdjustment {
    pub note: String,
    pub population: SpecialPopulation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedDrug {
    #[serde(flatten)]
    pub drug: DrugCandidate,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedHerb {
    #[serde(flatten)]
    pub herb: HerbCandidate,
    pub warning: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionWarning {
    pub drug1: String,
    pub drug2: String,
    pub severity: String,
    pub effect: String,
    pub recommendation: String,
}

// ---------------------------------------------------------------------------
// RecommendationBundle
// ---------------------------------------------------------------------------

/// Personalized recommendations for one (disease, severity, patient) triple.
/// Entries are only ever appended while the bundle is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub disease: String,
    pub severity: SeverityLevel,
    pub patient_populations: Vec<SpecialPopulation>,
    pub severity_message: String,
    pub self_care_appropriate: bool,
    pub otc_allowed: bool,
    pub warnings: Vec<Warning>,
    pub contraindications: Vec<Contraindication>,
    pub dose_adjustments: Vec<DoseAdjustment>,
    /// Disease-specific medication notes (e.g. the analgesic to prefer).
    pub disease_notes: Vec<String>,
    pub safe_drugs: Vec<DrugCandidate>,
    pub avoid_drugs: Vec<FlaggedDrug>,
    pub safe_herbs: Vec<HerbCandidate>,
    pub caution_herbs: Vec<FlaggedHerb>,
    pub interaction_warnings: Vec<InteractionWarning>,
    pub lifestyle_advice: Vec<String>,
    pub immediate_actions: Vec<String>,
}

impl RecommendationBundle {
    pub fn is_avoided(&self, drug_name: &str) -> bool {
        self.avoid_drugs
            .iter()
            .any(|f| f.drug.name.eq_ignore_ascii_case(drug_name))
    }

    pub fn is_safe(&self, drug_name: &str) -> bool {
        self.safe_drugs
            .iter()
            .any(|d| d.name.eq_ignore_ascii_case(drug_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drug_candidate_reads_type_field() {
        let drug: DrugCandidate =
            serde_json::from_str(r#"{"name": "Ciprofloxacin", "type": "Fluoroquinolone"}"#)
                .unwrap();
        assert_eq!(drug.kind.as_deref(), Some("Fluoroquinolone"));

        let bare: DrugCandidate = serde_json::from_str(r#"{"name": "Paracetamol"}"#).unwrap();
        assert_eq!(bare.kind, None);
    }

    #[test]
    fn flagged_drug_flattens_candidate() {
        let flagged = FlaggedDrug {
            drug: DrugCandidate::new("Aspirin"),
            reason: "Contraindicated in children".into(),
        };
        let value = serde_json::to_value(&flagged).unwrap();
        assert_eq!(value["name"], "Aspirin");
        assert_eq!(value["reason"], "Contraindicated in children");
    }
}
