use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err($crate::models::ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

pub(crate) use str_enum;

str_enum!(SeverityLevel {
    Mild => "Mild",
    Moderate => "Moderate",
    ModerateSevere => "Moderate-Severe",
    Severe => "Severe",
    Emergency => "Emergency",
});

impl SeverityLevel {
    /// Moderate-Severe and above require prompt medical attention.
    pub fn is_urgent(&self) -> bool {
        matches!(self, Self::ModerateSevere | Self::Severe | Self::Emergency)
    }

    /// Level for an accumulated (non-emergency) score. Emergency is never
    /// reachable from a score.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Severe,
            50..=79 => Self::ModerateSevere,
            30..=49 => Self::Moderate,
            _ => Self::Mild,
        }
    }
}

str_enum!(AgeGroup {
    Infant => "infant",
    Child => "child",
    Teen => "teen",
    Adult => "adult",
    Elderly => "elderly",
});

impl AgeGroup {
    /// 0-2 infant, 3-12 child, 13-17 teen, 18-64 adult, 65+ elderly.
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=2 => Self::Infant,
            3..=12 => Self::Child,
            13..=17 => Self::Teen,
            18..=64 => Self::Adult,
            _ => Self::Elderly,
        }
    }

    pub fn is_pediatric(&self) -> bool {
        matches!(self, Self::Infant | Self::Child)
    }
}

str_enum!(Gender {
    Female => "female",
    Male => "male",
    Other => "other",
});

str_enum!(SpecialPopulation {
    Pregnant => "pregnant",
    Breastfeeding => "breastfeeding",
    Children => "children",
    Elderly => "elderly",
    Diabetic => "diabetic",
    Hypertensive => "hypertensive",
    KidneyDisease => "kidney_disease",
    LiverDisease => "liver_disease",
});

str_enum!(ConfidenceLevel {
    High => "High",
    Medium => "Medium",
    Low => "Low",
});

impl ConfidenceLevel {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.75 {
            Self::High
        } else if confidence >= 0.45 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

str_enum!(WarningKind {
    SpecialPopulation => "Special Population",
    Comorbidity => "Comorbidity",
    Allergy => "Allergy",
    Disease => "Disease",
});
