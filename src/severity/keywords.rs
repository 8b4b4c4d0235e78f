//! Severity keyword families.
//!
//! Phrases are in normalized form (lowercase, no apostrophes) and are
//! matched as substrings. Order is significant only for which phrase is
//! quoted first in a contributing factor.

/// Any match short-circuits to Emergency.
pub const EMERGENCY: &[&str] = &[
    "chest pain",
    "crushing chest",
    "radiating pain",
    "left arm pain",
    "sudden weakness",
    "facial drooping",
    "slurred speech",
    "difficulty breathing",
    "cant breathe",
    "gasping",
    "severe bleeding",
    "heavy bleeding",
    "bleeding wont stop",
    "unconscious",
    "unresponsive",
    "seizure",
    "convulsion",
    "severe headache",
    "worst headache",
    "thunderclap",
    "confusion",
    "disoriented",
    "altered consciousness",
    "severe allergic",
    "throat swelling",
    "anaphylaxis",
    "poisoning",
    "overdose",
    "suicide",
];

pub const SEVERE_INTENSITY: &[&str] = &[
    "severe",
    "extreme",
    "excruciating",
    "unbearable",
    "agonizing",
    "intense",
    "terrible",
    "horrible",
    "worst",
    "acute",
    "massive",
    "violent",
    "crushing",
    "stabbing",
    "shooting",
];

pub const MODERATE_INTENSITY: &[&str] = &[
    "moderate",
    "significant",
    "considerable",
    "noticeable",
    "persistent",
    "constant",
    "ongoing",
    "worsening",
    "recurrent",
    "frequent",
    "regular",
    "chronic",
];

pub const MILD_INTENSITY: &[&str] = &[
    "mild",
    "slight",
    "minor",
    "little",
    "small",
    "occasional",
    "intermittent",
    "sometimes",
    "rare",
];

pub const CHRONIC_DURATION: &[&str] = &[
    "weeks",
    "months",
    "years",
    "long time",
    "forever",
    "constantly",
    "always",
    "never stops",
];

/// Only counted when no chronic-duration phrase matched.
pub const EXTENDED_DURATION: &[&str] = &["days", "several days", "week", "one week"];

pub const FUNCTIONAL_IMPACT: &[&str] = &[
    "cant walk",
    "cant stand",
    "cant move",
    "cant eat",
    "cant sleep",
    "cant work",
    "bedridden",
    "disabled",
    "unable to",
    "impossible to",
    "cant breathe",
];

pub const PROGRESSION: &[&str] = &[
    "getting worse",
    "worsening",
    "spreading",
    "increasing",
    "progressively",
    "deteriorating",
    "declining",
];

/// Qualifiers that raise the bonus for chronic diseases.
pub const UNCONTROLLED_MARKERS: &[&str] = &["uncontrolled", "very high"];

/// Qualifier that raises the bonus for febrile infections.
pub const HIGH_FEVER_MARKERS: &[&str] = &["high fever"];

/// Phrases from `family` present in `text`, in family order.
pub fn matches<'a>(text: &str, family: &[&'a str]) -> Vec<&'a str> {
    family.iter().copied().filter(|p| text.contains(p)).collect()
}
