//! Fixed personalization tables: special populations, severity handling,
//! age-band advice and disease contraindication rules.

use crate::knowledge::DiseaseKey;
use crate::models::enums::{AgeGroup, SeverityLevel, SpecialPopulation};

// ═══════════════════════════════════════════════════════════
// Special populations
// ═══════════════════════════════════════════════════════════

pub struct PopulationRule {
    pub avoid: &'static [&'static str],
    pub caution: &'static [&'static str],
}

pub fn population_rule(population: SpecialPopulation) -> &'static PopulationRule {
    match population {
        SpecialPopulation::Pregnant => &PopulationRule {
            avoid: &[
                "NSAIDs (after 20 weeks)",
                "ACE inhibitors",
                "ARBs",
                "Tetracyclines",
                "Fluoroquinolones",
                "Statins",
                "Warfarin",
                "Isotretinoin",
                "Certain antibiotics",
            ],
            caution: &[
                "Paracetamol (limited use)",
                "Some antibiotics",
                "Antacids (aluminum-free)",
                "Cough suppressants",
            ],
        },
        SpecialPopulation::Breastfeeding => &PopulationRule {
            avoid: &[
                "Aspirin",
                "Certain antibiotics",
                "Antihistamines (sedating)",
                "Decongestants (may reduce milk)",
                "Some antidepressants",
            ],
            caution: &[
                "NSAIDs (short-term only)",
                "Paracetamol (safe)",
                "Certain antibiotics (safe)",
                "Monitor infant for effects",
            ],
        },
        SpecialPopulation::Children => &PopulationRule {
            avoid: &[
                "Aspirin (<16 years - Reye syndrome risk)",
                "Adult formulations",
                "Certain cough medicines (<6 years)",
            ],
            caution: &[
                "Dose by weight, not age",
                "Use pediatric formulations",
                "Avoid honey <1 year",
                "Monitor for adverse reactions",
            ],
        },
        SpecialPopulation::Elderly => &PopulationRule {
            avoid: &[
                "Benzodiazepines (fall risk)",
                "Anticholinergics",
                "NSAIDs (bleeding risk)",
                "Multiple sedatives",
            ],
            caution: &[
                "Start low, go slow",
                "Check kidney function",
                "Watch for drug interactions",
                "Monitor side effects",
            ],
        },
        SpecialPopulation::Diabetic => &PopulationRule {
            avoid: &[
                "Corticosteroids (raise blood sugar)",
                "Thiazide diuretics",
                "Beta-blockers (mask hypoglycemia)",
            ],
            caution: &[
                "Monitor blood glucose closely",
                "Adjust insulin doses",
                "Avoid drugs that affect glucose",
                "Check HbA1c regularly",
            ],
        },
        SpecialPopulation::Hypertensive => &PopulationRule {
            avoid: &["Decongestants (raise blood pressure)"],
            caution: &[
                "Limit NSAID use (can raise blood pressure)",
                "Check sodium content of effervescent tablets",
                "Monitor blood pressure regularly",
            ],
        },
        SpecialPopulation::KidneyDisease => &PopulationRule {
            avoid: &[
                "NSAIDs",
                "Certain antibiotics (nephrotoxic)",
                "Metformin (if eGFR <30)",
                "Contrast dyes",
            ],
            caution: &[
                "Adjust doses for kidney function",
                "Monitor creatinine",
                "Avoid nephrotoxic drugs",
                "Stay hydrated",
            ],
        },
        SpecialPopulation::LiverDisease => &PopulationRule {
            avoid: &[],
            caution: &[
                "Limit paracetamol dose",
                "Avoid alcohol",
                "Monitor liver function",
            ],
        },
    }
}

// ═══════════════════════════════════════════════════════════
// Severity handling
// ═══════════════════════════════════════════════════════════

pub struct SeverityRule {
    pub message: &'static str,
    pub self_care: bool,
    pub otc_allowed: bool,
    pub immediate_action: &'static str,
}

pub fn severity_rule(level: SeverityLevel) -> SeverityRule {
    match level {
        SeverityLevel::Emergency => SeverityRule {
            message: "EMERGENCY: Call ambulance immediately",
            self_care: false,
            otc_allowed: false,
            immediate_action: "Emergency services required NOW",
        },
        SeverityLevel::Severe => SeverityRule {
            message: "Immediate medical attention required",
            self_care: false,
            otc_allowed: false,
            immediate_action: "Visit ER or urgent care today",
        },
        SeverityLevel::ModerateSevere => SeverityRule {
            message: "Medical consultation needed soon",
            self_care: false,
            otc_allowed: true,
            immediate_action: "See doctor within 24-48 hours",
        },
        SeverityLevel::Moderate => SeverityRule {
            message: "Medical advice recommended",
            self_care: true,
            otc_allowed: true,
            immediate_action: "Schedule doctor appointment this week",
        },
        SeverityLevel::Mild => SeverityRule {
            message: "Self-care appropriate",
            self_care: true,
            otc_allowed: true,
            immediate_action: "Monitor and self-care",
        },
    }
}

// ═══════════════════════════════════════════════════════════
// Age bands
// ═══════════════════════════════════════════════════════════

pub fn age_advice(group: AgeGroup) -> &'static [&'static str] {
    match group {
        AgeGroup::Elderly => &[
            "Start medications at lower doses",
            "Watch for increased side effects",
            "Maintain good hydration",
            "Regular medication review recommended",
        ],
        AgeGroup::Infant | AgeGroup::Child => &[
            "Use pediatric formulations only",
            "Dose by weight, not age",
            "Monitor closely for reactions",
            "Keep medications out of reach",
        ],
        AgeGroup::Teen => &[
            "Follow prescribed dosing carefully",
            "Discuss any concerns with parents/doctor",
            "Maintain healthy lifestyle habits",
        ],
        AgeGroup::Adult => &[
            "Follow medication instructions carefully",
            "Maintain healthy diet and exercise",
            "Monitor symptoms and report changes",
        ],
    }
}

// ═══════════════════════════════════════════════════════════
// Disease rules
// ═══════════════════════════════════════════════════════════

/// Drugs to avoid and prescribing notes for one disease.
pub struct ContraindicationRule {
    pub disease: DiseaseKey,
    pub avoid: &'static [&'static str],
    pub reason: &'static str,
    pub notes: &'static [&'static str],
}

const VIRAL_NOTE: &str = "Antibiotics are not effective against viral infections";

pub const DISEASE_RULES: &[ContraindicationRule] = &[
    ContraindicationRule {
        disease: DiseaseKey::Dengue,
        avoid: &["Aspirin", "Ibuprofen", "Diclofenac", "Naproxen"],
        reason: "Bleeding risk in dengue",
        notes: &["Use paracetamol for fever and pain; avoid NSAIDs and aspirin"],
    },
    ContraindicationRule {
        disease: DiseaseKey::Influenza,
        avoid: &[],
        reason: "",
        notes: &[VIRAL_NOTE],
    },
    ContraindicationRule {
        disease: DiseaseKey::CommonCold,
        avoid: &[],
        reason: "",
        notes: &[VIRAL_NOTE],
    },
    ContraindicationRule {
        disease: DiseaseKey::Covid19,
        avoid: &[],
        reason: "",
        notes: &[VIRAL_NOTE],
    },
];

pub fn disease_rule(disease: DiseaseKey) -> Option<&'static ContraindicationRule> {
    DISEASE_RULES.iter().find(|r| r.disease == disease)
}
