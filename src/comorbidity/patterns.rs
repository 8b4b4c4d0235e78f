use crate::knowledge::DiseaseKey;
use crate::models::ComorbidityPattern;

struct KnownPair {
    first: DiseaseKey,
    second: DiseaseKey,
    description: &'static str,
}

const RECOMMENDATION: &str = "Comprehensive evaluation recommended";

const KNOWN_PAIRS: &[KnownPair] = &[
    KnownPair {
        first: DiseaseKey::Diabetes,
        second: DiseaseKey::Hypertension,
        description: "Common metabolic comorbidity",
    },
    KnownPair {
        first: DiseaseKey::Asthma,
        second: DiseaseKey::AllergicReaction,
        description: "Allergic/respiratory overlap",
    },
    KnownPair {
        first: DiseaseKey::Gerd,
        second: DiseaseKey::PepticUlcer,
        description: "Gastrointestinal conditions",
    },
    KnownPair {
        first: DiseaseKey::RheumatoidArthritis,
        second: DiseaseKey::Osteoarthritis,
        description: "Joint conditions",
    },
    KnownPair {
        first: DiseaseKey::Covid19,
        second: DiseaseKey::Pneumonia,
        description: "Respiratory infection progression",
    },
    KnownPair {
        first: DiseaseKey::Hypothyroidism,
        second: DiseaseKey::Hyperthyroidism,
        description: "Thyroid disorder (check again)",
    },
];

/// First known pair with both sides among `present`, in either order.
pub fn find_pattern(present: &[DiseaseKey]) -> Option<ComorbidityPattern> {
    KNOWN_PAIRS
        .iter()
        .find(|pair| present.contains(&pair.first) && present.contains(&pair.second))
        .map(|pair| ComorbidityPattern {
            pattern: format!("{} + {}", pair.first, pair.second),
            description: pair.description.to_string(),
            recommendation: RECOMMENDATION.to_string(),
        })
}
