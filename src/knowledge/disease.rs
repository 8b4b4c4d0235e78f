//! Normalized disease identifiers.
//!
//! Condition labels are free text ("Dengue / Viral Fever", "Urinary Tract
//! Infection (UTI)"). Every decision table keyed by disease resolves the
//! label to a [`DiseaseKey`] once instead of substring-matching the label
//! at each use.

use serde::{Deserialize, Serialize};

use crate::models::enums::str_enum;
use crate::scoring::normalize::{clean, find_phrase};

str_enum!(DiseaseKey {
    Pcos => "PCOS",
    Dysmenorrhea => "Dysmenorrhea",
    Menorrhagia => "Menorrhagia",
    Influenza => "Influenza",
    Dengue => "Dengue",
    CommonCold => "Common Cold",
    Gastroenteritis => "Gastroenteritis",
    Gastritis => "Gastritis",
    Gerd => "GERD",
    PepticUlcer => "Peptic Ulcer",
    Arthritis => "Arthritis",
    RheumatoidArthritis => "Rheumatoid Arthritis",
    Osteoarthritis => "Osteoarthritis",
    MuscleStrain => "Muscle Strain",
    CervicalSpondylosis => "Cervical Spondylosis",
    Anxiety => "Anxiety Disorder",
    Insomnia => "Insomnia",
    Depression => "Depression",
    Hypertension => "Hypertension",
    HeartDisease => "Heart Disease",
    HeartAttack => "Heart Attack",
    Stroke => "Stroke",
    Sepsis => "Sepsis",
    Meningitis => "Meningitis",
    Anaphylaxis => "Anaphylaxis",
    AllergicReaction => "Allergic Reaction",
    Fever => "Fever",
    Headache => "Headache",
    Migraine => "Migraine",
    Asthma => "Asthma",
    Bronchitis => "Bronchitis",
    Copd => "COPD",
    Diabetes => "Diabetes",
    ChronicKidneyDisease => "Chronic Kidney Disease",
    Uti => "Urinary Tract Infection",
    Malaria => "Malaria",
    Typhoid => "Typhoid",
    Pneumonia => "Pneumonia",
    Tuberculosis => "Tuberculosis",
    Covid19 => "COVID-19",
    Hypothyroidism => "Hypothyroidism",
    Hyperthyroidism => "Hyperthyroidism",
});

const ALL: &[DiseaseKey] = &[
    DiseaseKey::Pcos,
    DiseaseKey::Dysmenorrhea,
    DiseaseKey::Menorrhagia,
    DiseaseKey::Influenza,
    DiseaseKey::Dengue,
    DiseaseKey::CommonCold,
    DiseaseKey::Gastroenteritis,
    DiseaseKey::Gastritis,
    DiseaseKey::Gerd,
    DiseaseKey::PepticUlcer,
    DiseaseKey::Arthritis,
    DiseaseKey::RheumatoidArthritis,
    DiseaseKey::Osteoarthritis,
    DiseaseKey::MuscleStrain,
    DiseaseKey::CervicalSpondylosis,
    DiseaseKey::Anxiety,
    DiseaseKey::Insomnia,
    DiseaseKey::Depression,
    DiseaseKey::Hypertension,
    DiseaseKey::HeartDisease,
    DiseaseKey::HeartAttack,
    DiseaseKey::Stroke,
    DiseaseKey::Sepsis,
    DiseaseKey::Meningitis,
    DiseaseKey::Anaphylaxis,
    DiseaseKey::AllergicReaction,
    DiseaseKey::Fever,
    DiseaseKey::Headache,
    DiseaseKey::Migraine,
    DiseaseKey::Asthma,
    DiseaseKey::Bronchitis,
    DiseaseKey::Copd,
    DiseaseKey::Diabetes,
    DiseaseKey::ChronicKidneyDisease,
    DiseaseKey::Uti,
    DiseaseKey::Malaria,
    DiseaseKey::Typhoid,
    DiseaseKey::Pneumonia,
    DiseaseKey::Tuberculosis,
    DiseaseKey::Covid19,
    DiseaseKey::Hypothyroidism,
    DiseaseKey::Hyperthyroidism,
];

impl DiseaseKey {
    pub fn all() -> &'static [DiseaseKey] {
        ALL
    }

    /// Cleaned phrases that identify this disease inside a label.
    pub fn terms(&self) -> &'static [&'static str] {
        match self {
            Self::Pcos => &["pcos", "polycystic ovary", "hormonal disorder"],
            Self::Dysmenorrhea => &["dysmenorrhea", "period pain", "menstrual cramps"],
            Self::Menorrhagia => &["menorrhagia", "heavy periods"],
            Self::Influenza => &["influenza", "flu", "viral fever"],
            Self::Dengue => &["dengue"],
            Self::CommonCold => &["common cold", "cold"],
            Self::Gastroenteritis => &["gastroenteritis", "food poisoning", "stomach flu"],
            Self::Gastritis => &["gastritis", "acidity", "indigestion"],
            Self::Gerd => &["gerd", "acid reflux"],
            Self::PepticUlcer => &["peptic ulcer", "stomach ulcer"],
            Self::Arthritis => &["arthritis"],
            Self::RheumatoidArthritis => &["rheumatoid arthritis"],
            Self::Osteoarthritis => &["osteoarthritis"],
            Self::MuscleStrain => &["muscle strain", "back pain"],
            Self::CervicalSpondylosis => &["cervical spondylosis"],
            Self::Anxiety => &["anxiety", "panic disorder"],
            Self::Insomnia => &["insomnia", "sleep disorder"],
            Self::Depression => &["depression"],
            Self::Hypertension => &["hypertension", "high blood pressure"],
            Self::HeartDisease => &["heart disease", "coronary artery disease"],
            Self::HeartAttack => &["heart attack", "myocardial infarction"],
            Self::Stroke => &["stroke"],
            Self::Sepsis => &["sepsis"],
            Self::Meningitis => &["meningitis"],
            Self::Anaphylaxis => &["anaphylaxis", "anaphylactic"],
            Self::AllergicReaction => &["allergic reaction", "allergy"],
            Self::Fever => &["fever"],
            Self::Headache => &["headache"],
            Self::Migraine => &["migraine"],
            Self::Asthma => &["asthma"],
            Self::Bronchitis => &["bronchitis"],
            Self::Copd => &["copd", "chronic obstructive pulmonary disease"],
            Self::Diabetes => &["diabetes", "diabetic"],
            Self::ChronicKidneyDisease => &["chronic kidney disease", "ckd", "kidney disease"],
            Self::Uti => &["urinary tract infection", "uti", "bladder infection"],
            Self::Malaria => &["malaria"],
            Self::Typhoid => &["typhoid"],
            Self::Pneumonia => &["pneumonia"],
            Self::Tuberculosis => &["tuberculosis", "tb"],
            Self::Covid19 => &["covid 19", "covid", "coronavirus"],
            Self::Hypothyroidism => &["hypothyroidism", "hypothyroid"],
            Self::Hyperthyroidism => &["hyperthyroidism", "hyperthyroid"],
        }
    }

    /// Conditions that must not be inferred from acute symptom text alone.
    pub fn is_chronic(&self) -> bool {
        matches!(
            self,
            Self::Hypertension
                | Self::Diabetes
                | Self::ChronicKidneyDisease
                | Self::HeartDisease
                | Self::Arthritis
                | Self::Copd
                | Self::Asthma
        )
    }

    /// Every disease mentioned in `name`, ordered by where it first appears.
    pub fn all_in(name: &str) -> Vec<DiseaseKey> {
        let cleaned = clean(name);
        let mut hits: Vec<(usize, usize, DiseaseKey)> = ALL
            .iter()
            .filter_map(|key| {
                key.terms()
                    .iter()
                    .filter_map(|term| find_phrase(&cleaned, term).map(|pos| (pos, term.len())))
                    .min_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)))
                    .map(|(pos, len)| (pos, len, *key))
            })
            .collect();
        // Earliest mention first; at the same position the longer term wins.
        hits.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));
        hits.into_iter().map(|(_, _, key)| key).collect()
    }

    /// The disease a label is primarily about: its earliest mention.
    pub fn primary(name: &str) -> Option<DiseaseKey> {
        Self::all_in(name).into_iter().next()
    }

    /// `name` is exactly this disease's canonical name or one of its terms.
    pub fn exact(name: &str) -> Option<DiseaseKey> {
        let cleaned = clean(name);
        ALL.iter().copied().find(|key| {
            clean(key.as_str()) == cleaned || key.terms().contains(&cleaned.as_str())
        })
    }
}
