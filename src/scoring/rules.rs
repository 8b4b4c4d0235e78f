//! Declarative condition rules.
//!
//! Each category is one [`CategoryRule`]: a weighted phrase table plus
//! optional gate, boost, suppression, label override and split. The scorer
//! interprets rules; it holds no per-category code.

use std::collections::HashSet;

use super::normalize::clean;
use super::LexiconError;

/// (phrase, weight). Phrases are stored in cleaned form.
pub type Keywords = &'static [(&'static str, f64)];

/// Groups of phrases; a group is present when any of its phrases occurs.
pub type MarkerGroups = &'static [&'static [&'static str]];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Boost {
    /// Multiply when at least `count` distinct phrases matched.
    MinDistinct { count: usize, factor: f64 },
    /// Multiply when every group is present in the text.
    AllOf { groups: MarkerGroups, factor: f64 },
}

impl Boost {
    pub fn factor(&self) -> f64 {
        match self {
            Self::MinDistinct { factor, .. } | Self::AllOf { factor, .. } => *factor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Suppression {
    /// Suppressed when every marker group is present in the text.
    TextMarkers(MarkerGroups),
    /// Suppressed when any of these (earlier) categories is active.
    WhenScored(&'static [&'static str]),
}

/// Report a different label when any marker occurs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelOverride {
    pub markers: &'static [&'static str],
    pub label: &'static str,
}

/// A competing lexicon evaluated alongside the primary one. The primary
/// label wins only with a strictly greater sum; otherwise `label` is
/// reported with the combined sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Split {
    pub keywords: Keywords,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryRule {
    pub name: &'static str,
    pub keywords: Keywords,
    pub gate: Option<&'static [&'static str]>,
    pub boost: Option<Boost>,
    pub suppression: Option<Suppression>,
    pub label_override: Option<LabelOverride>,
    pub split: Option<Split>,
}

impl CategoryRule {
    pub fn new(name: &'static str, keywords: Keywords) -> Self {
        Self {
            name,
            keywords,
            gate: None,
            boost: None,
            suppression: None,
            label_override: None,
            split: None,
        }
    }

    pub fn gated(mut self, anchors: &'static [&'static str]) -> Self {
        self.gate = Some(anchors);
        self
    }

    pub fn boosted(mut self, boost: Boost) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn suppressed(mut self, suppression: Suppression) -> Self {
        self.suppression = Some(suppression);
        self
    }

    pub fn relabeled(mut self, markers: &'static [&'static str], label: &'static str) -> Self {
        self.label_override = Some(LabelOverride { markers, label });
        self
    }

    pub fn split(mut self, keywords: Keywords, label: &'static str) -> Self {
        self.split = Some(Split { keywords, label });
        self
    }
}

/// Any phrase from `phrases` occurs in `text`.
pub fn any_present(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| text.contains(p))
}

/// Every group has at least one phrase in `text`.
pub fn all_groups_present(text: &str, groups: MarkerGroups) -> bool {
    groups.iter().all(|group| any_present(text, group))
}

/// Validate a rule table once, at construction.
pub fn validate(rules: &[CategoryRule]) -> Result<(), LexiconError> {
    let mut seen_names: HashSet<&str> = HashSet::new();

    for rule in rules {
        if rule.name.trim().is_empty() {
            return Err(LexiconError::EmptyName);
        }
        if !seen_names.insert(rule.name) {
            return Err(LexiconError::DuplicateCategory(rule.name.into()));
        }
        if rule.keywords.is_empty() {
            return Err(LexiconError::EmptyKeywords(rule.name.into()));
        }

        validate_keywords(rule.name, rule.keywords)?;
        if let Some(split) = &rule.split {
            if split.keywords.is_empty() {
                return Err(LexiconError::EmptyKeywords(rule.name.into()));
            }
            validate_keywords(rule.name, split.keywords)?;
        }

        if let Some(gate) = rule.gate {
            if gate.is_empty() {
                return Err(LexiconError::EmptyGate(rule.name.into()));
            }
            validate_phrases(rule.name, gate)?;
        }

        if let Some(boost) = &rule.boost {
            let factor = boost.factor();
            let bad_count = matches!(boost, Boost::MinDistinct { count: 0, .. });
            if !factor.is_finite() || factor < 1.0 || bad_count {
                return Err(LexiconError::InvalidBoost {
                    category: rule.name.into(),
                    factor,
                });
            }
            if let Boost::AllOf { groups, .. } = boost {
                for group in groups.iter() {
                    validate_phrases(rule.name, group)?;
                }
            }
        }

        match rule.suppression {
            Some(Suppression::TextMarkers(groups)) => {
                for group in groups {
                    validate_phrases(rule.name, group)?;
                    for marker in group.iter() {
                        if rule.keywords.iter().any(|(kw, _)| kw == marker) {
                            return Err(LexiconError::SelfSuppressingMarker {
                                category: rule.name.into(),
                                marker: (*marker).into(),
                            });
                        }
                    }
                }
            }
            Some(Suppression::WhenScored(names)) => {
                // Only categories evaluated earlier can be consulted.
                for name in names {
                    if !seen_names.contains(name) || *name == rule.name {
                        return Err(LexiconError::UnknownSuppressor {
                            category: rule.name.into(),
                            reference: (*name).into(),
                        });
                    }
                }
            }
            None => {}
        }

        if let Some(over) = &rule.label_override {
            if over.label.trim().is_empty() || over.markers.is_empty() {
                return Err(LexiconError::EmptyName);
            }
            validate_phrases(rule.name, over.markers)?;
        }
    }

    Ok(())
}

fn validate_keywords(category: &str, keywords: Keywords) -> Result<(), LexiconError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for (keyword, weight) in keywords {
        check_normalized(category, keyword)?;
        if !weight.is_finite() || *weight <= 0.0 {
            return Err(LexiconError::NonPositiveWeight {
                category: category.into(),
                keyword: (*keyword).into(),
            });
        }
        if !seen.insert(keyword) {
            return Err(LexiconError::DuplicateKeyword {
                category: category.into(),
                keyword: (*keyword).into(),
            });
        }
    }
    Ok(())
}

fn validate_phrases(category: &str, phrases: &[&str]) -> Result<(), LexiconError> {
    for phrase in phrases {
        check_normalized(category, phrase)?;
    }
    Ok(())
}

fn check_normalized(category: &str, phrase: &str) -> Result<(), LexiconError> {
    if phrase.is_empty() || clean(phrase) != phrase {
        return Err(LexiconError::KeywordNotNormalized {
            category: category.into(),
            keyword: phrase.into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLU: Keywords = &[("fever", 1.5), ("chills", 2.5)];
    const COLD: Keywords = &[("runny nose", 2.5)];

    #[test]
    fn valid_table_passes() {
        let rules = vec![
            CategoryRule::new("Flu", FLU)
                .gated(&["fever", "chills"])
                .boosted(Boost::MinDistinct { count: 2, factor: 1.3 }),
            CategoryRule::new("Cold", COLD).suppressed(Suppression::WhenScored(&["Flu"])),
        ];
        assert!(validate(&rules).is_ok());
    }

    #[test]
    fn duplicate_category_rejected() {
        let rules = vec![CategoryRule::new("Flu", FLU), CategoryRule::new("Flu", COLD)];
        assert_eq!(
            validate(&rules),
            Err(LexiconError::DuplicateCategory("Flu".into()))
        );
    }

    #[test]
    fn empty_keywords_rejected() {
        let rules = vec![CategoryRule::new("Empty", &[])];
        assert_eq!(validate(&rules), Err(LexiconError::EmptyKeywords("Empty".into())));
    }

    #[test]
    fn non_positive_weight_rejected() {
        let rules = vec![CategoryRule::new("Bad", &[("fever", 0.0)])];
        assert!(matches!(
            validate(&rules),
            Err(LexiconError::NonPositiveWeight { .. })
        ));
    }

    #[test]
    fn unnormalized_keyword_rejected() {
        let rules = vec![CategoryRule::new("Bad", &[("Can't Sleep", 2.5)])];
        assert!(matches!(
            validate(&rules),
            Err(LexiconError::KeywordNotNormalized { .. })
        ));
    }

    #[test]
    fn duplicate_keyword_rejected() {
        let rules = vec![CategoryRule::new("Bad", &[("dizziness", 1.0), ("dizziness", 1.0)])];
        assert!(matches!(
            validate(&rules),
            Err(LexiconError::DuplicateKeyword { .. })
        ));
    }

    #[test]
    fn shrinking_boost_rejected() {
        let rules = vec![CategoryRule::new("Flu", FLU)
            .boosted(Boost::MinDistinct { count: 2, factor: 0.5 })];
        assert!(matches!(validate(&rules), Err(LexiconError::InvalidBoost { .. })));
    }

    #[test]
    fn empty_gate_rejected() {
        let rules = vec![CategoryRule::new("Flu", FLU).gated(&[])];
        assert_eq!(validate(&rules), Err(LexiconError::EmptyGate("Flu".into())));
    }

    #[test]
    fn suppressor_must_be_earlier() {
        let rules = vec![
            CategoryRule::new("Cold", COLD).suppressed(Suppression::WhenScored(&["Flu"])),
            CategoryRule::new("Flu", FLU),
        ];
        assert!(matches!(
            validate(&rules),
            Err(LexiconError::UnknownSuppressor { .. })
        ));
    }

    #[test]
    fn marker_inside_own_lexicon_rejected() {
        let rules = vec![CategoryRule::new("Flu", FLU)
            .suppressed(Suppression::TextMarkers(&[&["chills"]]))];
        assert!(matches!(
            validate(&rules),
            Err(LexiconError::SelfSuppressingMarker { .. })
        ));
    }

    #[test]
    fn group_helpers() {
        let groups: MarkerGroups = &[&["vomiting"], &["diarrhea", "loose motion"]];
        assert!(all_groups_present("vomiting and loose motion", groups));
        assert!(!all_groups_present("vomiting only", groups));
        assert!(any_present("high fever", &["fever"]));
    }
}
