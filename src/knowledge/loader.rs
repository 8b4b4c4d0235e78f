use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::base::{InteractionRecord, KnowledgeBase};
use super::KnowledgeError;

pub const ALIASES_FILE: &str = "disease_aliases.json";
pub const CORRECTIONS_FILE: &str = "spelling_corrections.json";
pub const DESCRIPTIONS_FILE: &str = "condition_descriptions.json";
pub const INTERACTIONS_FILE: &str = "drug_interactions.json";

/// A description may be a single string or a list of lines.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DescriptionText {
    One(String),
    Lines(Vec<String>),
}

impl DescriptionText {
    fn joined(self) -> String {
        match self {
            Self::One(text) => text.trim().to_string(),
            Self::Lines(lines) => lines
                .iter()
                .map(|l| l.trim())
                .filter(|l| !l.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

#[derive(Debug, Deserialize)]
struct InteractionRow {
    drug1: String,
    drug2: String,
    #[serde(default = "default_interaction_severity")]
    severity: String,
    #[serde(default)]
    effect: String,
    #[serde(default)]
    recommendation: String,
}

fn default_interaction_severity() -> String {
    "MODERATE".into()
}

impl KnowledgeBase {
    /// Load reference data from a directory of optional JSON files, layered
    /// over the built-in tables. Missing files keep the built-ins; unreadable
    /// or malformed files are errors.
    pub fn load(resources_dir: &Path) -> Result<Self, KnowledgeError> {
        let mut kb = Self::builtin();

        if let Some(aliases) = read_optional::<HashMap<String, String>>(resources_dir, ALIASES_FILE)? {
            for (alias, canonical) in &aliases {
                kb.add_alias(alias, canonical);
            }
        }

        if let Some(corrections) =
            read_optional::<HashMap<String, String>>(resources_dir, CORRECTIONS_FILE)?
        {
            for (from, to) in &corrections {
                kb.corrections.insert(from, to);
            }
        }

        if let Some(descriptions) =
            read_optional::<HashMap<String, DescriptionText>>(resources_dir, DESCRIPTIONS_FILE)?
        {
            for (name, text) in descriptions {
                kb.add_description(&name, &text.joined());
            }
        }

        if let Some(rows) = read_optional::<Vec<InteractionRow>>(resources_dir, INTERACTIONS_FILE)? {
            for row in rows {
                kb.add_interaction(
                    &row.drug1,
                    &row.drug2,
                    InteractionRecord {
                        severity: row.severity,
                        effect: row.effect,
                        recommendation: row.recommendation,
                    },
                );
            }
        }

        tracing::info!(
            dir = %resources_dir.display(),
            aliases = kb.aliases.len(),
            corrections = kb.corrections.len(),
            descriptions = kb.descriptions_by_name.len(),
            interactions = kb.interactions.len(),
            "Knowledge base loaded"
        );

        Ok(kb)
    }
}

fn read_optional<T: DeserializeOwned>(
    dir: &Path,
    file: &str,
) -> Result<Option<T>, KnowledgeError> {
    let path = dir.join(file);
    if !path.exists() {
        tracing::warn!(file, "Knowledge file missing, using built-in defaults");
        return Ok(None);
    }

    let json = std::fs::read_to_string(&path)
        .map_err(|e| KnowledgeError::Load(path.display().to_string(), e.to_string()))?;
    let parsed =
        serde_json::from_str(&json).map_err(|e| KnowledgeError::Parse(file.into(), e.to_string()))?;
    Ok(Some(parsed))
}
