use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::enums::{AgeGroup, Gender, SpecialPopulation};

/// Patient information used for personalization.
///
/// Profiles are immutable once built: `age_group` is derived from `age` at
/// construction. To change the age, build a new profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PatientProfileBuilder")]
pub struct PatientProfile {
    age: Option<u32>,
    age_group: Option<AgeGroup>,
    gender: Option<Gender>,
    is_pregnant: bool,
    is_breastfeeding: bool,
    has_diabetes: bool,
    has_hypertension: bool,
    has_kidney_disease: bool,
    has_liver_disease: bool,
    allergies: BTreeSet<String>,
    current_medications: Vec<String>,
}

impl PatientProfile {
    pub fn builder() -> PatientProfileBuilder {
        PatientProfileBuilder::default()
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn age_group(&self) -> Option<AgeGroup> {
        self.age_group
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn is_pregnant(&self) -> bool {
        self.is_pregnant
    }

    pub fn is_breastfeeding(&self) -> bool {
        self.is_breastfeeding
    }

    pub fn has_diabetes(&self) -> bool {
        self.has_diabetes
    }

    pub fn has_hypertension(&self) -> bool {
        self.has_hypertension
    }

    pub fn has_kidney_disease(&self) -> bool {
        self.has_kidney_disease
    }

    pub fn has_liver_disease(&self) -> bool {
        self.has_liver_disease
    }

    /// Lowercased, trimmed allergen names.
    pub fn allergies(&self) -> &BTreeSet<String> {
        &self.allergies
    }

    pub fn current_medications(&self) -> &[String] {
        &self.current_medications
    }

    pub fn is_pediatric(&self) -> bool {
        self.age_group.is_some_and(|g| g.is_pediatric())
    }

    /// Special populations this patient belongs to, in table order.
    /// Computed on every call.
    pub fn special_populations(&self) -> Vec<SpecialPopulation> {
        let mut populations = Vec::new();
        if self.is_pregnant {
            populations.push(SpecialPopulation::Pregnant);
        }
        if self.is_breastfeeding {
            populations.push(SpecialPopulation::Breastfeeding);
        }
        if self.is_pediatric() {
            populations.push(SpecialPopulation::Children);
        }
        if self.age_group == Some(AgeGroup::Elderly) {
            populations.push(SpecialPopulation::Elderly);
        }
        if self.has_diabetes {
            populations.push(SpecialPopulation::Diabetic);
        }
        if self.has_hypertension {
            populations.push(SpecialPopulation::Hypertensive);
        }
        if self.has_kidney_disease {
            populations.push(SpecialPopulation::KidneyDisease);
        }
        if self.has_liver_disease {
            populations.push(SpecialPopulation::LiverDisease);
        }
        populations
    }
}

/// Builder (and deserialization shape) for [`PatientProfile`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PatientProfileBuilder {
    age: Option<u32>,
    gender: Option<Gender>,
    is_pregnant: bool,
    is_breastfeeding: bool,
    has_diabetes: bool,
    has_hypertension: bool,
    has_kidney_disease: bool,
    has_liver_disease: bool,
    allergies: Vec<String>,
    current_medications: Vec<String>,
}

impl PatientProfileBuilder {
    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn pregnant(mut self, value: bool) -> Self {
        self.is_pregnant = value;
        self
    }

    pub fn breastfeeding(mut self, value: bool) -> Self {
        self.is_breastfeeding = value;
        self
    }

    pub fn diabetes(mut self, value: bool) -> Self {
        self.has_diabetes = value;
        self
    }

    pub fn hypertension(mut self, value: bool) -> Self {
        self.has_hypertension = value;
        self
    }

    pub fn kidney_disease(mut self, value: bool) -> Self {
        self.has_kidney_disease = value;
        self
    }

    pub fn liver_disease(mut self, value: bool) -> Self {
        self.has_liver_disease = value;
        self
    }

    pub fn allergy(mut self, allergen: impl Into<String>) -> Self {
        self.allergies.push(allergen.into());
        self
    }

    pub fn medication(mut self, name: impl Into<String>) -> Self {
        self.current_medications.push(name.into());
        self
    }

    pub fn build(self) -> PatientProfile {
        PatientProfile::from(self)
    }
}

impl From<PatientProfileBuilder> for PatientProfile {
    fn from(b: PatientProfileBuilder) -> Self {
        let allergies = b
            .allergies
            .iter()
            .map(|a| a.trim().to_lowercase())
            .filter(|a| !a.is_empty())
            .collect();
        let current_medications = b
            .current_medications
            .into_iter()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect();

        Self {
            age: b.age,
            age_group: b.age.map(AgeGroup::from_age),
            gender: b.gender,
            is_pregnant: b.is_pregnant,
            is_breastfeeding: b.is_breastfeeding,
            has_diabetes: b.has_diabetes,
            has_hypertension: b.has_hypertension,
            has_kidney_disease: b.has_kidney_disease,
            has_liver_disease: b.has_liver_disease,
            allergies,
            current_medications,
        }
    }
}
