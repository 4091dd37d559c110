//! Name based category classification
//!
//! Rules are evaluated in declaration order and, within a rule, patterns in
//! declaration order. The first pattern found as a substring of the
//! lowercased channel name decides the category, so a name matching several
//! rules always lands in the earliest declared one.

use crate::config::{CatalogConfig, CategoryRule};

#[derive(Debug, Clone)]
struct CompiledRule {
    id: String,
    patterns: Vec<String>,
}

/// Outcome of classifying one name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification<'a> {
    pub category_id: &'a str,
    /// Pattern that matched, `None` when the default category was applied
    pub matched_pattern: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    rules: Vec<CompiledRule>,
    default_category: String,
}

impl CategoryClassifier {
    pub fn new(rules: &[CategoryRule], default_category: &str) -> Self {
        Self {
            rules: rules
                .iter()
                .map(|rule| CompiledRule {
                    id: rule.id.clone(),
                    patterns: rule.patterns.iter().map(|p| p.to_lowercase()).collect(),
                })
                .collect(),
            default_category: default_category.to_string(),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(&config.categories, &config.default_category)
    }

    /// Category id for a channel name; never fails
    pub fn classify(&self, name: &str) -> &str {
        self.classify_with_match(name).category_id
    }

    pub fn classify_with_match(&self, name: &str) -> Classification<'_> {
        let lower = name.to_lowercase();

        for rule in &self.rules {
            if let Some(pattern) = rule.patterns.iter().find(|p| lower.contains(p.as_str())) {
                return Classification {
                    category_id: &rule.id,
                    matched_pattern: Some(pattern),
                };
            }
        }

        Classification {
            category_id: &self.default_category,
            matched_pattern: None,
        }
    }

    /// Closed set of ids this classifier can return
    pub fn category_ids(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.id.as_str())
    }
}
