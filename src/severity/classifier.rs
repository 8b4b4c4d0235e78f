use super::keywords::{
    matches, CHRONIC_DURATION, EMERGENCY, EXTENDED_DURATION, FUNCTIONAL_IMPACT, HIGH_FEVER_MARKERS,
    MILD_INTENSITY, MODERATE_INTENSITY, PROGRESSION, SEVERE_INTENSITY, UNCONTROLLED_MARKERS,
};
use crate::knowledge::DiseaseKey;
use crate::models::enums::SeverityLevel;
use crate::models::SeverityScore;
use crate::scoring::normalize::clean;

const SEVERE_WEIGHT: u32 = 30;
const SEVERE_CAP: u32 = 60;
const MODERATE_WEIGHT: u32 = 15;
const MODERATE_CAP: u32 = 30;
const MILD_PENALTY: u32 = 10;
const CHRONIC_DURATION_BONUS: u32 = 20;
const EXTENDED_DURATION_BONUS: u32 = 10;
const IMPACT_BONUS: u32 = 40;
const PROGRESSION_BONUS: u32 = 20;
const BASELINE_SCORE: u8 = 20;
const MAX_SCORE: u32 = 100;

/// Factors quote at most this many phrases per family.
const QUOTED_PER_FAMILY: usize = 2;

pub const BASELINE_FACTOR: &str = "No severity indicators found (assumed mild)";

/// Ordered recommendations for a level.
pub fn recommendations_for(level: SeverityLevel) -> &'static [&'static str] {
    match level {
        SeverityLevel::Emergency => &[
            "CALL EMERGENCY SERVICES IMMEDIATELY (911/112/108)",
            "Do not wait or drive yourself",
            "Time is critical for this condition",
        ],
        SeverityLevel::Severe => &[
            "SEEK IMMEDIATE MEDICAL ATTENTION",
            "Visit emergency room or urgent care today",
            "Do not delay treatment",
            "Monitor symptoms closely",
        ],
        SeverityLevel::ModerateSevere => &[
            "MEDICAL CONSULTATION RECOMMENDED",
            "Schedule doctor appointment within 24-48 hours",
            "Monitor for worsening symptoms",
            "Avoid strenuous activities",
        ],
        SeverityLevel::Moderate => &[
            "MEDICAL ADVICE RECOMMENDED",
            "Consider scheduling doctor appointment this week",
            "Track symptoms and progression",
            "Rest and stay hydrated",
        ],
        SeverityLevel::Mild => &[
            "SELF-CARE APPROPRIATE",
            "Monitor symptoms over next few days",
            "Seek medical advice if symptoms worsen or persist",
            "Rest, hydration, and over-the-counter remedies may help",
        ],
    }
}

/// Disease-specific score adjustment. Unknown diseases add nothing.
pub fn disease_bonus(disease: DiseaseKey, text: &str) -> u32 {
    use DiseaseKey::*;
    match disease {
        HeartAttack | Stroke | Sepsis | Meningitis | Anaphylaxis => 50,
        Diabetes | Hypertension | Tuberculosis => {
            if matches(text, UNCONTROLLED_MARKERS).is_empty() {
                10
            } else {
                20
            }
        }
        Malaria | Dengue | Typhoid | Pneumonia => {
            if matches(text, HIGH_FEVER_MARKERS).is_empty() {
                5
            } else {
                15
            }
        }
        _ => 0,
    }
}

/// Classify symptom severity in one pass.
///
/// Any emergency phrase returns Emergency (score 100) immediately. Otherwise
/// each keyword family contributes independently, the disease context adds
/// its bonus, and the clamped total maps to a level.
pub fn classify(text: &str, disease: Option<&str>) -> SeverityScore {
    let text = clean(text);

    let emergency = matches(&text, EMERGENCY);
    if !emergency.is_empty() {
        tracing::debug!(matched = emergency.len(), "Emergency short-circuit");
        let factors = emergency
            .iter()
            .map(|kw| format!("Emergency keyword: '{kw}'"))
            .collect();
        return SeverityScore::new(
            SeverityLevel::Emergency,
            100,
            factors,
            owned(recommendations_for(SeverityLevel::Emergency)),
        );
    }

    let mut score: u32 = 0;
    let mut factors: Vec<String> = Vec::new();

    let severe = matches(&text, SEVERE_INTENSITY);
    if !severe.is_empty() {
        score += (severe.len() as u32 * SEVERE_WEIGHT).min(SEVERE_CAP);
        factors.extend(
            severe
                .iter()
                .take(QUOTED_PER_FAMILY)
                .map(|kw| format!("Severe intensity: '{kw}'")),
        );
    }

    let moderate = matches(&text, MODERATE_INTENSITY);
    if !moderate.is_empty() {
        score += (moderate.len() as u32 * MODERATE_WEIGHT).min(MODERATE_CAP);
        factors.extend(
            moderate
                .iter()
                .take(QUOTED_PER_FAMILY)
                .map(|kw| format!("Moderate intensity: '{kw}'")),
        );
    }

    if let Some(first) = matches(&text, MILD_INTENSITY).first() {
        score = score.saturating_sub(MILD_PENALTY);
        factors.push(format!("Mild indicator: '{first}'"));
    }

    let chronic = matches(&text, CHRONIC_DURATION);
    if let Some(first) = chronic.first() {
        score += CHRONIC_DURATION_BONUS;
        factors.push(format!("Chronic duration: '{first}'"));
    } else if let Some(first) = matches(&text, EXTENDED_DURATION).first() {
        score += EXTENDED_DURATION_BONUS;
        factors.push(format!("Extended duration: '{first}'"));
    }

    let impact = matches(&text, FUNCTIONAL_IMPACT);
    if !impact.is_empty() {
        score += IMPACT_BONUS;
        factors.extend(
            impact
                .iter()
                .take(QUOTED_PER_FAMILY)
                .map(|kw| format!("Functional impact: '{kw}'")),
        );
    }

    if let Some(first) = matches(&text, PROGRESSION).first() {
        score += PROGRESSION_BONUS;
        factors.push(format!("Progressive: '{first}'"));
    }

    if let Some(name) = disease.map(str::trim).filter(|d| !d.is_empty()) {
        let bonus = DiseaseKey::primary(name).map_or(0, |key| disease_bonus(key, &text));
        if bonus > 0 {
            score += bonus;
            factors.push(format!("Disease severity factor: {name} (+{bonus})"));
        }
    }

    let score: u8 = if score == 0 && factors.is_empty() {
        factors.push(BASELINE_FACTOR.to_string());
        BASELINE_SCORE
    } else {
        score.min(MAX_SCORE) as u8
    };

    let level = SeverityLevel::from_score(score);
    tracing::debug!(level = level.as_str(), score, factors = factors.len(), "Severity classified");

    SeverityScore::new(level, score, factors, owned(recommendations_for(level)))
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crushing_chest_pain_is_emergency() {
        let s = classify(
            "severe crushing chest pain radiating to left arm cant breathe",
            None,
        );
        assert_eq!(s.level, SeverityLevel::Emergency);
        assert_eq!(s.score, 100);
        assert!(s.urgent);
        assert!(s
            .contributing_factors
            .contains(&"Emergency keyword: 'chest pain'".to_string()));
        assert_eq!(s.recommendations[0], "CALL EMERGENCY SERVICES IMMEDIATELY (911/112/108)");
    }

    #[test]
    fn emergency_wins_over_mild_words() {
        let s = classify("mild slight occasional chest pain", Some("Common Cold"));
        assert_eq!(s.level, SeverityLevel::Emergency);
        assert_eq!(s.score, 100);
    }

    #[test]
    fn apostrophe_form_triggers_emergency() {
        let s = classify("I can't breathe", None);
        assert_eq!(s.level, SeverityLevel::Emergency);
    }

    #[test]
    fn empty_text_gets_mild_baseline() {
        let s = classify("", None);
        assert_eq!(s.level, SeverityLevel::Mild);
        assert_eq!(s.score, 20);
        assert!(!s.urgent);
        assert_eq!(s.contributing_factors, vec![BASELINE_FACTOR.to_string()]);
    }

    #[test]
    fn slight_runny_nose_is_mild() {
        let s = classify("slight runny nose occasional sneezing", Some("Common Cold"));
        assert_eq!(s.level, SeverityLevel::Mild);
        assert!(!s.urgent);
        assert!(s.score < 30);
        assert_eq!(s.score, 0);
        assert_eq!(s.contributing_factors, vec!["Mild indicator: 'slight'".to_string()]);
    }

    #[test]
    fn extreme_worsening_pain_is_severe() {
        let s = classify(
            "extreme abdominal pain for several days getting worse cant eat",
            Some("Appendicitis"),
        );
        assert_eq!(s.score, 100);
        assert_eq!(s.level, SeverityLevel::Severe);
        assert!(s.urgent);
        assert!(s
            .contributing_factors
            .contains(&"Extended duration: 'days'".to_string()));
        assert!(s
            .contributing_factors
            .contains(&"Functional impact: 'cant eat'".to_string()));
    }

    #[test]
    fn persistent_cough_for_days_is_moderate() {
        let s = classify("constant persistent cough for days", None);
        assert_eq!(s.score, 40);
        assert_eq!(s.level, SeverityLevel::Moderate);
        assert!(!s.urgent);
    }

    #[test]
    fn severe_worsening_cough_is_moderate_severe() {
        let s = classify("severe cough getting worse", None);
        assert_eq!(s.score, 50);
        assert_eq!(s.level, SeverityLevel::ModerateSevere);
        assert!(s.urgent);
    }

    #[test]
    fn severe_words_capped_at_sixty() {
        assert_eq!(classify("severe", None).score, 30);
        assert_eq!(classify("severe extreme", None).score, 60);
        assert_eq!(classify("severe extreme excruciating", None).score, 60);
    }

    #[test]
    fn adding_severe_words_never_lowers_score() {
        let base = "pain for days";
        let mut previous = classify(base, None).score;
        let mut text = base.to_string();
        for word in ["intense", "terrible", "horrible", "agonizing"] {
            text.push(' ');
            text.push_str(word);
            let current = classify(&text, None).score;
            assert!(current >= previous, "{text}: {current} < {previous}");
            previous = current;
        }
    }

    #[test]
    fn chronic_duration_excludes_extended() {
        let s = classify("ache for weeks and days", None);
        assert_eq!(s.score, 20);
        assert!(s
            .contributing_factors
            .contains(&"Chronic duration: 'weeks'".to_string()));
        assert!(!s
            .contributing_factors
            .iter()
            .any(|f| f.starts_with("Extended duration")));
    }

    #[test]
    fn mild_penalty_floors_at_zero() {
        let s = classify("a little ache", None);
        assert_eq!(s.score, 0);
        let s = classify("severe but minor", None);
        assert_eq!(s.score, 20);
    }

    #[test]
    fn febrile_disease_bonus_depends_on_high_fever() {
        let s = classify("high fever and chills", Some("Dengue / Viral Fever"));
        assert_eq!(s.score, 15);
        assert!(s
            .contributing_factors
            .contains(&"Disease severity factor: Dengue / Viral Fever (+15)".to_string()));

        let s = classify("chills", Some("Malaria"));
        assert_eq!(s.score, 5);
    }

    #[test]
    fn chronic_disease_bonus_depends_on_control() {
        assert_eq!(classify("sugar is uncontrolled", Some("Diabetes")).score, 20);
        assert_eq!(classify("tired", Some("Diabetes")).score, 10);
        assert_eq!(classify("headache", Some("Hypertension / Cardiac Stress")).score, 10);
    }

    #[test]
    fn life_threatening_disease_bonus() {
        let s = classify("pain in jaw", Some("Heart Attack"));
        assert_eq!(s.score, 50);
        assert_eq!(s.level, SeverityLevel::ModerateSevere);
    }

    #[test]
    fn unknown_disease_adds_nothing() {
        let s = classify("stomach ache", Some("Appendicitis"));
        assert_eq!(s.score, 20);
        assert_eq!(s.contributing_factors, vec![BASELINE_FACTOR.to_string()]);
    }

    #[test]
    fn score_clamped_to_hundred() {
        let s = classify(
            "severe extreme persistent constant pain for months cant walk getting worse",
            Some("Heart Attack"),
        );
        assert_eq!(s.score, 100);
        assert_eq!(s.level, SeverityLevel::Severe);
    }

    #[test]
    fn urgency_invariant_holds() {
        for text in [
            "",
            "slight cough",
            "persistent cough",
            "severe cough getting worse",
            "extreme pain cant walk for weeks",
            "seizure",
        ] {
            let s = classify(text, None);
            assert_eq!(s.urgent, s.level.is_urgent(), "{text}");
        }
    }
}
