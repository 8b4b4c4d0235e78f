//! The built-in condition lexicon.
//!
//! Declaration order matters twice: arbitration breaks ties in favour of the
//! earlier category, and `WhenScored` suppressions may only name earlier
//! categories. Phrases are matched as substrings of normalized text, so
//! apostrophes are omitted ("cant sleep").

use std::sync::LazyLock;

use super::rules::{validate, Boost, CategoryRule, Keywords, Suppression};

pub const PCOS: &str = "Hormonal Disorder (Possible PCOS)";
pub const DYSMENORRHEA: &str = "Dysmenorrhea";
pub const MENORRHAGIA: &str = "Menorrhagia";
pub const INFLUENZA: &str = "Influenza / Viral Fever";
pub const DENGUE: &str = "Dengue / Viral Fever";
pub const COMMON_COLD: &str = "Common Cold / Influenza";
pub const GASTROENTERITIS: &str = "Gastroenteritis / Gastritis";
pub const ACIDITY: &str = "Gastritis / Acidity";
pub const ARTHRITIS: &str = "Arthritis";
pub const BACK_PAIN: &str = "Muscle Strain / Cervical Spondylosis";
pub const MUSCLE_STRAIN: &str = "Muscle Strain";
pub const ANXIETY: &str = "Anxiety Disorder";
pub const INSOMNIA: &str = "Insomnia / Sleep Disorder";
pub const DEPRESSION: &str = "Depression";
pub const FATIGUE_SYNDROME: &str = "Anxiety Disorder / Fatigue Syndrome";
pub const CARDIAC: &str = "Hypertension / Cardiac Stress";
pub const FEVER: &str = "Fever";
pub const HEADACHE: &str = "Headache";
pub const MIGRAINE: &str = "Migraine";
pub const ASTHMA: &str = "Asthma / Bronchitis";
pub const DIABETES: &str = "Diabetes";
pub const UTI: &str = "Urinary Tract Infection (UTI)";
pub const MALARIA: &str = "Malaria";

// ═══════════════════════════════════════════════════════════
// Reproductive & hormonal
// ═══════════════════════════════════════════════════════════

const PCOS_KEYWORDS: Keywords = &[
    ("missed period", 3.5),
    ("missed periods", 3.5),
    ("period stopped", 3.5),
    ("no periods", 3.5),
    ("no period", 3.5),
    ("havent had period", 3.0),
    ("irregular cycle", 2.5),
    ("irregular periods", 2.5),
    ("irregular menstrual", 2.5),
    ("hair loss", 2.5),
    ("acne", 2.5),
    ("weight gain", 2.5),
    ("hormonal", 2.5),
    ("pcos", 4.0),
    ("polycystic", 4.0),
    ("facial hair", 2.5),
    ("oily skin", 2.0),
    ("dark patches", 2.0),
];

const DYSMENORRHEA_KEYWORDS: Keywords = &[
    ("period pain", 3.5),
    ("period cramp", 3.5),
    ("menstrual cramp", 3.5),
    ("cramps", 2.5),
    ("dysmenorrhea", 4.0),
    ("pelvic pain", 2.0),
    ("lower abdominal pain", 2.0),
    ("lower belly pain", 2.0),
    ("painful periods", 3.5),
    ("pain during period", 3.5),
];

/// Missed-period signature plus a metabolic sign points away from cramps.
const MISSED_PERIOD_MARKERS: &[&str] = &[
    "missed period",
    "missed periods",
    "no periods",
    "no period",
    "period stopped",
    "havent had period",
];
const METABOLIC_MARKERS: &[&str] = &["hair loss", "acne", "weight gain", "facial hair", "hormonal"];

const MENORRHAGIA_KEYWORDS: Keywords = &[
    ("heavy bleeding", 4.0),
    ("heavy menstrual", 3.5),
    ("excessive bleeding", 4.0),
    ("prolonged bleeding", 4.0),
    ("bleeding more than a week", 4.0),
    ("heavy flow", 3.5),
    ("flooding", 3.0),
    ("blood clots", 2.5),
    ("soaking pads", 3.0),
    ("weak and dizzy", 3.5),
    ("weakness and dizziness", 3.5),
    ("weak dizzy", 3.5),
    ("blood loss", 3.0),
    ("heavy period", 4.0),
    ("heavy periods", 4.0),
    ("prolonged period", 3.5),
    ("long period", 3.0),
    ("weak", 1.5),
    ("weakness", 1.5),
    ("dizzy", 1.5),
    ("dizziness", 1.5),
];

const HEAVY_BLEED_MARKERS: &[&str] = &[
    "heavy bleeding",
    "heavy flow",
    "flooding",
    "prolonged bleeding",
    "bleeding more than a week",
];
const WEAKNESS_MARKERS: &[&str] = &["weak", "dizzy", "weakness", "dizziness"];

// ═══════════════════════════════════════════════════════════
// Respiratory & infection
// ═══════════════════════════════════════════════════════════

const FLU_KEYWORDS: Keywords = &[
    ("fever", 1.5),
    ("high fever", 2.0),
    ("body ache", 2.5),
    ("muscle pain", 2.5),
    ("sore throat", 1.5),
    ("cough", 1.0),
    ("cold", 1.0),
    ("chills", 2.5),
    ("rigor", 2.5),
    ("fatigue", 1.5),
    ("tired", 1.0),
    ("flu", 3.5),
    ("influenza", 3.5),
    ("viral", 2.0),
];

/// Flu only counts with an explicit fever or chill term.
const FEVER_ANCHORS: &[&str] = &["fever", "high fever", "chills", "rigor"];

const DENGUE_KEYWORDS: Keywords = &[
    ("dengue", 4.0),
    ("dengue fever", 4.0),
    ("fever with rash", 3.0),
    ("rash with fever", 3.0),
    ("joint pain with fever", 3.0),
    ("fever and joint pain", 3.0),
    ("body pain with fever", 2.5),
    ("fever and body ache", 2.5),
    ("joint pain", 1.5),
    ("body ache", 1.0),
    ("rash", 2.0),
    ("platelet", 2.5),
    ("low platelet", 2.5),
    ("hemorrhagic", 3.0),
];

const COLD_KEYWORDS: Keywords = &[
    ("cold", 2.0),
    ("runny nose", 2.5),
    ("sore throat", 1.5),
    ("cough", 1.0),
    ("nasal congestion", 2.0),
    ("stuffy nose", 1.5),
    ("sneeze", 1.5),
    ("common cold", 3.0),
    ("nose congestion", 2.0),
];

// ═══════════════════════════════════════════════════════════
// Gastrointestinal
// ═══════════════════════════════════════════════════════════

const GASTRO_KEYWORDS: Keywords = &[
    ("vomiting", 2.5),
    ("diarrhea", 2.5),
    ("diarrhoea", 2.5),
    ("loose motion", 2.5),
    ("loose stool", 2.5),
    ("stomach pain", 2.0),
    ("stomach ache", 2.0),
    ("abdominal pain", 1.5),
    ("food poisoning", 3.0),
    ("gastroenteritis", 3.0),
    ("nausea", 1.5),
    ("vomit and diarrhea", 3.5),
    ("after eating", 1.0),
    ("stomach upset", 1.5),
];

const ACIDITY_KEYWORDS: Keywords = &[
    ("acidity", 3.0),
    ("acid reflux", 3.0),
    ("gerd", 3.0),
    ("indigestion", 2.5),
    ("heartburn", 2.5),
    ("gas", 1.0),
    ("bloating", 1.5),
    ("stomach upset", 1.5),
];

// ═══════════════════════════════════════════════════════════
// Musculoskeletal
// ═══════════════════════════════════════════════════════════

const ARTHRITIS_KEYWORDS: Keywords = &[
    ("arthritis", 3.0),
    ("joint pain", 2.0),
    ("joint ache", 2.0),
    ("rheumatoid arthritis", 3.5),
    ("osteoarthritis", 3.0),
    ("morning stiffness", 2.5),
    ("joint stiffness", 2.0),
    ("knee pain", 1.5),
    ("hip pain", 1.5),
    ("ankle pain", 1.5),
    ("joint inflammation", 2.5),
    ("swelling in joint", 2.0),
];

const BACK_PAIN_KEYWORDS: Keywords = &[
    ("back pain", 2.5),
    ("backache", 2.5),
    ("lower back pain", 2.5),
    ("upper back pain", 2.5),
    ("cervical", 3.0),
    ("cervical spondylosis", 3.0),
    ("neck pain", 2.0),
    ("neck strain", 2.0),
    ("neck stiffness", 2.0),
    ("spinal pain", 2.5),
    ("sciatica", 3.0),
    ("slipped disc", 3.0),
];

const MUSCLE_KEYWORDS: Keywords = &[
    ("muscle pain", 2.0),
    ("muscle ache", 2.0),
    ("muscle strain", 2.5),
    ("muscle soreness", 2.0),
    ("muscle cramp", 2.0),
    ("charley horse", 1.5),
];

// ═══════════════════════════════════════════════════════════
// Mental health & neurological
// ═══════════════════════════════════════════════════════════

const ANXIETY_KEYWORDS: Keywords = &[
    ("anxiety", 3.0),
    ("anxious", 2.5),
    ("panic", 3.0),
    ("panic attack", 3.0),
    ("worried", 1.5),
    ("stress", 1.5),
    ("stressed", 1.5),
    ("nervousness", 2.0),
    ("restless", 2.0),
    ("unease", 2.0),
];

const SLEEP_KEYWORDS: Keywords = &[
    ("insomnia", 3.0),
    ("trouble sleeping", 2.5),
    ("cant sleep", 2.5),
    ("unable to sleep", 2.5),
    ("sleepless", 2.5),
    ("waking up at night", 2.0),
    ("sleep problem", 2.0),
    ("insomnic", 2.5),
];

const DEPRESSION_KEYWORDS: Keywords = &[
    ("depression", 3.0),
    ("depressed", 2.5),
    ("sad", 2.0),
    ("hopeless", 2.5),
    ("low mood", 2.0),
    ("mood swings", 2.0),
];

const FATIGUE_KEYWORDS: Keywords = &[
    ("fatigue", 2.5),
    ("tired", 1.5),
    ("exhausted", 2.0),
    ("weakness", 1.5),
    ("weak", 1.0),
    ("lethargy", 2.0),
    ("low energy", 2.0),
    ("worn out", 1.5),
    ("fatigued", 2.0),
];

// ═══════════════════════════════════════════════════════════
// Cardiac & metabolic
// ═══════════════════════════════════════════════════════════

const CARDIAC_KEYWORDS: Keywords = &[
    ("high blood pressure", 3.0),
    ("high bp", 3.0),
    ("hypertension", 3.0),
    ("chest pain", 3.0),
    ("chest ache", 3.0),
    ("chest tightness", 3.0),
    ("heart palpitations", 3.0),
    ("irregular heartbeat", 3.0),
    ("shortness of breath", 1.5),
    ("difficulty breathing", 1.5),
    ("dizziness", 1.0),
    ("fatigue", 0.5),
];

/// General breathlessness or dizziness alone is not cardiac.
const CARDIAC_ANCHORS: &[&str] = &[
    "high blood pressure",
    "high bp",
    "hypertension",
    "chest pain",
    "chest ache",
    "chest tightness",
    "heart palpitations",
    "irregular heartbeat",
];

// ═══════════════════════════════════════════════════════════
// Other conditions
// ═══════════════════════════════════════════════════════════

const FEVER_KEYWORDS: Keywords = &[
    ("fever", 1.5),
    ("high temperature", 1.5),
    ("high fever", 1.5),
    ("feverish", 1.5),
    ("temperature", 1.0),
    ("hot", 0.5),
];

const HEADACHE_KEYWORDS: Keywords = &[
    ("headache", 2.0),
    ("head pain", 2.0),
    ("head ache", 2.0),
    ("migraine", 3.0),
    ("throbbing", 2.0),
    ("pounding", 2.0),
    ("tension headache", 2.5),
    ("cluster headache", 2.5),
    ("dizziness", 1.0),
    ("vertigo", 1.5),
];

const ASTHMA_KEYWORDS: Keywords = &[
    ("asthma", 3.0),
    ("asthmatic", 2.5),
    ("wheeze", 3.0),
    ("wheezing", 3.0),
    ("shortness of breath", 2.0),
    ("breathing difficulty", 2.5),
    ("difficulty breathing", 2.5),
    ("bronchitis", 2.5),
    ("bronchial", 2.0),
];

const DIABETES_KEYWORDS: Keywords = &[
    ("diabetes", 3.0),
    ("diabetic", 2.5),
    ("blood sugar", 2.5),
    ("glucose", 2.0),
    ("hyperglycemia", 3.0),
    ("high sugar", 2.5),
];

const UTI_KEYWORDS: Keywords = &[
    ("uti", 3.0),
    ("urinary tract", 3.0),
    ("urinary tract infection", 3.0),
    ("painful urination", 2.5),
    ("dysuria", 2.5),
    ("urination pain", 2.5),
    ("bladder infection", 3.0),
    ("kidney infection", 2.5),
    ("urination", 1.0),
];

const MALARIA_KEYWORDS: Keywords = &[
    ("malaria", 3.5),
    ("malarial", 3.0),
    ("intermittent fever", 2.5),
    ("chills with fever", 2.5),
];

fn build() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(PCOS, PCOS_KEYWORDS)
            .boosted(Boost::MinDistinct { count: 2, factor: 1.25 }),
        CategoryRule::new(DYSMENORRHEA, DYSMENORRHEA_KEYWORDS)
            .suppressed(Suppression::TextMarkers(&[MISSED_PERIOD_MARKERS, METABOLIC_MARKERS])),
        CategoryRule::new(MENORRHAGIA, MENORRHAGIA_KEYWORDS).boosted(Boost::AllOf {
            groups: &[HEAVY_BLEED_MARKERS, WEAKNESS_MARKERS],
            factor: 1.4,
        }),
        CategoryRule::new(INFLUENZA, FLU_KEYWORDS)
            .gated(FEVER_ANCHORS)
            .boosted(Boost::MinDistinct { count: 2, factor: 1.3 }),
        CategoryRule::new(DENGUE, DENGUE_KEYWORDS)
            .boosted(Boost::MinDistinct { count: 2, factor: 1.2 }),
        CategoryRule::new(COMMON_COLD, COLD_KEYWORDS),
        CategoryRule::new(GASTROENTERITIS, GASTRO_KEYWORDS).boosted(Boost::AllOf {
            groups: &[&["vomiting"], &["diarrhea", "loose motion"]],
            factor: 1.4,
        }),
        CategoryRule::new(ACIDITY, ACIDITY_KEYWORDS),
        CategoryRule::new(ARTHRITIS, ARTHRITIS_KEYWORDS),
        CategoryRule::new(BACK_PAIN, BACK_PAIN_KEYWORDS),
        CategoryRule::new(MUSCLE_STRAIN, MUSCLE_KEYWORDS)
            .suppressed(Suppression::WhenScored(&[ARTHRITIS])),
        CategoryRule::new(ANXIETY, ANXIETY_KEYWORDS),
        CategoryRule::new(INSOMNIA, SLEEP_KEYWORDS),
        CategoryRule::new(DEPRESSION, DEPRESSION_KEYWORDS).split(FATIGUE_KEYWORDS, FATIGUE_SYNDROME),
        CategoryRule::new(CARDIAC, CARDIAC_KEYWORDS).gated(CARDIAC_ANCHORS),
        CategoryRule::new(FEVER, FEVER_KEYWORDS)
            .suppressed(Suppression::WhenScored(&[INFLUENZA, DENGUE, COMMON_COLD])),
        CategoryRule::new(HEADACHE, HEADACHE_KEYWORDS).relabeled(&["migraine", "throbbing"], MIGRAINE),
        CategoryRule::new(ASTHMA, ASTHMA_KEYWORDS),
        CategoryRule::new(DIABETES, DIABETES_KEYWORDS),
        CategoryRule::new(UTI, UTI_KEYWORDS),
        CategoryRule::new(MALARIA, MALARIA_KEYWORDS),
    ]
}

static STANDARD_LEXICON: LazyLock<Vec<CategoryRule>> = LazyLock::new(|| {
    let rules = build();
    validate(&rules).expect("built-in lexicon must validate");
    rules
});

/// The validated built-in rule table.
pub fn standard_rules() -> &'static [CategoryRule] {
    &STANDARD_LEXICON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_lexicon_validates() {
        assert!(validate(&build()).is_ok());
        assert_eq!(standard_rules().len(), 21);
    }

    #[test]
    fn declaration_order_starts_with_reproductive() {
        let names: Vec<&str> = standard_rules().iter().map(|r| r.name).collect();
        assert_eq!(names[0], PCOS);
        assert_eq!(names[1], DYSMENORRHEA);
        assert_eq!(*names.last().unwrap(), MALARIA);
    }

    #[test]
    fn fallback_fever_follows_specific_fevers() {
        let pos = |name: &str| standard_rules().iter().position(|r| r.name == name).unwrap();
        assert!(pos(FEVER) > pos(INFLUENZA));
        assert!(pos(FEVER) > pos(DENGUE));
        assert!(pos(FEVER) > pos(COMMON_COLD));
        assert!(pos(MUSCLE_STRAIN) > pos(ARTHRITIS));
    }

    #[test]
    fn no_phrase_contains_an_apostrophe() {
        for rule in standard_rules() {
            for (kw, _) in rule.keywords {
                assert!(!kw.contains('\''), "{}: {kw}", rule.name);
            }
        }
    }
}
