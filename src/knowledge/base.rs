use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::disease::DiseaseKey;
use crate::scoring::normalize::{clean, SpellingCorrections};

/// Alias → canonical disease name.
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("flu", "Influenza"),
    ("cold", "Common Cold"),
    ("sore throat", "Common Cold"),
    ("rhinitis", "Common Cold"),
    ("sinusitis", "Common Cold"),
    ("covid", "COVID-19"),
    ("corona", "COVID-19"),
    ("food poisoning", "Gastroenteritis"),
    ("acidity", "Gastritis"),
    ("indigestion", "Gastritis"),
    ("acid reflux", "GERD"),
    ("high blood pressure", "Hypertension"),
    ("high bp", "Hypertension"),
    ("sugar", "Diabetes"),
    ("high sugar", "Diabetes"),
    ("uti", "Urinary Tract Infection"),
    ("joint pain", "Arthritis"),
    ("heart attack", "Heart Attack"),
    ("tb", "Tuberculosis"),
];

/// Short two-sentence descriptions by condition.
const BUILTIN_DESCRIPTIONS: &[(&str, &str)] = &[
    ("Asthma", "Asthma is a chronic inflammatory disease of the airways causing variable airflow obstruction. Symptoms include wheeze, breathlessness, chest tightness and cough; avoid triggers and use inhalers as prescribed."),
    ("Fever", "Fever is elevated body temperature often due to infection or inflammation. Monitor temperature, stay hydrated and seek care if very high or prolonged."),
    ("Common Cold", "A mild viral infection of the upper respiratory tract. Symptoms include runny nose, sore throat, cough and sneezing; usually self-limiting."),
    ("Gastroenteritis", "Inflammation of the stomach and intestines usually causing diarrhea and vomiting. Rehydration and rest are essential; seek help if dehydrated or severe."),
    ("Headache", "Pain in the head area with many potential causes (tension, migraine, infection). Manage with rest, hydration, analgesics; seek care if sudden severe or with neurological signs."),
    ("Migraine", "Recurrent moderate-to-severe headaches often with nausea and sensitivity to light/sound. Trigger management and targeted medications are used under guidance."),
    ("Arthritis", "Arthritis is inflammation of one or more joints causing pain, stiffness, and swelling. May be osteoarthritis (wear-and-tear) or rheumatoid (autoimmune); both need proper management."),
    ("Osteoarthritis", "Degenerative joint disease caused by wear-and-tear over time, common in older adults. Joint pain worsens with activity and improves with rest; physical therapy helps."),
    ("Rheumatoid Arthritis", "Autoimmune condition causing joint inflammation, often affecting multiple joints symmetrically. Early diagnosis and treatment with immunosuppressants can help prevent joint damage."),
    ("Dengue", "Mosquito-borne viral infection causing high fever, joint pain and low platelets. Medical follow-up is important to monitor platelet counts."),
    ("Malaria", "Parasitic infection causing cyclical fevers; can be severe without treatment. Prompt diagnosis and anti-malarial therapy are required."),
    ("UTI", "Infection of urinary tract often causing painful urination and frequency. Seek antibiotics if confirmed; hydrate and consult your clinician."),
];

/// One known interaction between two drugs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub severity: String,
    pub effect: String,
    pub recommendation: String,
}

/// Immutable reference data shared by every analysis.
///
/// Built once (from built-in tables, optionally extended by
/// [`KnowledgeBase::load`](super::loader)) and then only read.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    pub(crate) corrections: SpellingCorrections,
    pub(crate) aliases: HashMap<String, String>,
    pub(crate) descriptions_by_name: HashMap<String, String>,
    pub(crate) descriptions_by_key: HashMap<DiseaseKey, String>,
    pub(crate) interactions: HashMap<(String, String), InteractionRecord>,
}

impl KnowledgeBase {
    /// Built-in corrections, aliases and descriptions. No interaction table.
    pub fn builtin() -> Self {
        let mut kb = Self {
            corrections: SpellingCorrections::builtin(),
            ..Self::default()
        };
        for (alias, canonical) in BUILTIN_ALIASES {
            kb.add_alias(alias, canonical);
        }
        for (name, text) in BUILTIN_DESCRIPTIONS {
            kb.add_description(name, text);
        }
        kb
    }

    pub fn corrections(&self) -> &SpellingCorrections {
        &self.corrections
    }

    pub(crate) fn add_alias(&mut self, alias: &str, canonical: &str) {
        let key = clean(alias);
        if !key.is_empty() && !canonical.trim().is_empty() {
            self.aliases.insert(key, canonical.trim().to_string());
        }
    }

    pub(crate) fn add_description(&mut self, name: &str, text: &str) {
        let cleaned = clean(name);
        if cleaned.is_empty() {
            return;
        }
        let text = text.trim().to_string();
        if let Some(key) = DiseaseKey::exact(name) {
            // The canonical spelling takes precedence over a term spelling.
            if clean(key.as_str()) == cleaned {
                self.descriptions_by_key.insert(key, text.clone());
            } else {
                self.descriptions_by_key.entry(key).or_insert_with(|| text.clone());
            }
        }
        self.descriptions_by_name.insert(cleaned, text);
    }

    pub(crate) fn add_interaction(&mut self, drug1: &str, drug2: &str, record: InteractionRecord) {
        if let Some(key) = pair_key(drug1, drug2) {
            self.interactions.insert(key, record);
        }
    }

    /// Map an alias ("flu") to its canonical disease name ("Influenza").
    /// Unknown names come back trimmed and unchanged.
    pub fn canonical_disease_name(&self, name: &str) -> String {
        self.aliases
            .get(&clean(name))
            .cloned()
            .unwrap_or_else(|| name.trim().to_string())
    }

    /// Resolve a free-text disease name, after alias mapping.
    pub fn resolve_disease(&self, name: &str) -> Option<DiseaseKey> {
        DiseaseKey::primary(&self.canonical_disease_name(name))
    }

    /// Description for a condition label, if one is known.
    pub fn description_for(&self, label: &str) -> Option<&str> {
        if let Some(text) = self.descriptions_by_name.get(&clean(label)) {
            return Some(text.as_str());
        }
        self.resolve_disease(label)
            .and_then(|key| self.descriptions_by_key.get(&key))
            .map(String::as_str)
    }

    pub fn has_interactions(&self) -> bool {
        !self.interactions.is_empty()
    }

    /// Order-insensitive interaction lookup.
    pub fn interaction(&self, drug1: &str, drug2: &str) -> Option<&InteractionRecord> {
        pair_key(drug1, drug2).and_then(|key| self.interactions.get(&key))
    }

    /// Reference data for tests (no file I/O).
    #[cfg(test)]
    pub(crate) fn load_test() -> Self {
        let mut kb = Self::builtin();
        kb.add_interaction(
            "Warfarin",
            "Aspirin",
            InteractionRecord {
                severity: "HIGH".into(),
                effect: "Increased bleeding risk".into(),
                recommendation: "Avoid combination".into(),
            },
        );
        kb.add_interaction(
            "ciprofloxacin",
            "antacid",
            InteractionRecord {
                severity: "MODERATE".into(),
                effect: "Reduced antibiotic absorption".into(),
                recommendation: "Separate doses by 2 hours".into(),
            },
        );
        kb
    }
}

fn pair_key(a: &str, b: &str) -> Option<(String, String)> {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a.is_empty() || b.is_empty() || a == b {
        return None;
    }
    Some(if a <= b { (a, b) } else { (b, a) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_map_to_canonical() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.canonical_disease_name("Flu"), "Influenza");
        assert_eq!(kb.canonical_disease_name("  Appendicitis "), "Appendicitis");
        assert_eq!(kb.resolve_disease("flu"), Some(DiseaseKey::Influenza));
        assert_eq!(kb.resolve_disease("high BP"), Some(DiseaseKey::Hypertension));
    }

    #[test]
    fn description_by_label() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.description_for("Dengue / Viral Fever").unwrap().contains("platelet"));
        assert!(kb
            .description_for("Urinary Tract Infection (UTI)")
            .unwrap()
            .contains("urinary tract"));
        assert!(kb.description_for("Common Cold / Influenza").is_some());
        assert!(kb.description_for("Rheumatoid Arthritis").unwrap().starts_with("Autoimmune"));
        assert_eq!(kb.description_for("General Condition"), None);
    }

    #[test]
    fn interactions_are_order_insensitive() {
        let kb = KnowledgeBase::load_test();
        assert!(kb.has_interactions());
        let a = kb.interaction("aspirin", "WARFARIN").unwrap();
        let b = kb.interaction("Warfarin", "Aspirin").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.severity, "HIGH");
        assert!(kb.interaction("aspirin", "aspirin").is_none());
    }

    #[test]
    fn builtin_has_no_interactions() {
        assert!(!KnowledgeBase::builtin().has_interactions());
    }
}
