//! Facet vocabularies: the options a shopper can pick per facet.
//!
//! Club categories and brands come from configuration. Hand, condition and
//! player level are fixed enumerations.

use crate::types::Facet;
use serde::{Deserialize, Serialize};

/// One selectable option: a stable machine token and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
}

impl FacetOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

const HAND_OPTIONS: [(&str, &str); 2] = [("right", "Right Handed"), ("left", "Left Handed")];

const CONDITION_OPTIONS: [(&str, &str); 4] = [
    ("new", "New"),
    ("like-new", "Like New"),
    ("good", "Good"),
    ("fair", "Fair"),
];

const LEVEL_OPTIONS: [(&str, &str); 4] = [
    ("beginner", "Beginner"),
    ("intermediate", "Intermediate"),
    ("advanced", "Advanced"),
    ("pro", "Professional"),
];

/// Options offered for each facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacetVocabulary {
    pub categories: Vec<FacetOption>,
    pub brands: Vec<FacetOption>,
}

impl FacetVocabulary {
    /// The golf-club vocabulary the storefront ships with.
    pub fn golf_defaults() -> Self {
        let categories = [
            ("drivers", "Drivers"),
            ("irons", "Iron Sets"),
            ("wedges", "Wedges"),
            ("putters", "Putters"),
            ("woods", "Fairway Woods"),
            ("hybrids", "Hybrids"),
        ];
        let brands = [
            ("titleist", "Titleist"),
            ("taylormade", "TaylorMade"),
            ("callaway", "Callaway"),
            ("ping", "PING"),
            ("mizuno", "Mizuno"),
            ("cobra", "Cobra"),
        ];
        Self {
            categories: to_options(&categories),
            brands: to_options(&brands),
        }
    }

    /// Options for a facet, in display order.
    pub fn options(&self, facet: Facet) -> Vec<FacetOption> {
        match facet {
            Facet::Hand => to_options(&HAND_OPTIONS),
            Facet::Category => self.categories.clone(),
            Facet::Brand => self.brands.clone(),
            Facet::Condition => to_options(&CONDITION_OPTIONS),
            Facet::Level => to_options(&LEVEL_OPTIONS),
        }
    }

    /// Display label for a token, if the vocabulary knows it.
    pub fn label_for(&self, facet: Facet, token: &str) -> Option<String> {
        self.options(facet)
            .into_iter()
            .find(|option| option.value == token)
            .map(|option| option.label)
    }

    /// Whether a token belongs to the facet's vocabulary.
    pub fn contains(&self, facet: Facet, token: &str) -> bool {
        self.label_for(facet, token).is_some()
    }
}

impl Default for FacetVocabulary {
    fn default() -> Self {
        Self::golf_defaults()
    }
}

fn to_options(pairs: &[(&str, &str)]) -> Vec<FacetOption> {
    pairs
        .iter()
        .map(|(value, label)| FacetOption::new(*value, *label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_vocabularies() {
        let vocab = FacetVocabulary::golf_defaults();
        let conditions: Vec<String> = vocab
            .options(Facet::Condition)
            .into_iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(conditions, vec!["new", "like-new", "good", "fair"]);
        assert_eq!(vocab.label_for(Facet::Level, "pro").as_deref(), Some("Professional"));
        assert_eq!(vocab.label_for(Facet::Hand, "left").as_deref(), Some("Left Handed"));
    }

    #[test]
    fn test_configured_vocabularies() {
        let vocab = FacetVocabulary {
            categories: vec![FacetOption::new("putters", "Putters")],
            brands: vec![],
        };
        assert!(vocab.contains(Facet::Category, "putters"));
        assert!(!vocab.contains(Facet::Category, "drivers"));
        assert!(vocab.options(Facet::Brand).is_empty());
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let vocab: FacetVocabulary =
            serde_json::from_str(r#"{ "brands": [ { "value": "odyssey", "label": "Odyssey" } ] }"#)
                .unwrap();
        assert_eq!(vocab.brands.len(), 1);
        assert_eq!(vocab.categories, FacetVocabulary::golf_defaults().categories);
    }
}
