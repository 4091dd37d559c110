//! Curated "featured" flagging by fuzzy name containment

use crate::config::CatalogConfig;

/// Flags channels whose names overlap a curated reference list
///
/// Matching is case-insensitive containment in either direction, which
/// tolerates variants such as an added "HD" suffix on either side.
#[derive(Debug, Clone, Default)]
pub struct FeaturedSelector {
    references: Vec<String>,
}

impl FeaturedSelector {
    pub fn new(references: &[String]) -> Self {
        Self {
            references: references
                .iter()
                .map(|name| name.trim().to_lowercase())
                .filter(|name| !name.is_empty())
                .collect(),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(&config.featured)
    }

    pub fn is_featured(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return false;
        }
        self.references
            .iter()
            .any(|reference| name.contains(reference.as_str()) || reference.contains(name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector(names: &[&str]) -> FeaturedSelector {
        let names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        FeaturedSelector::new(&names)
    }

    #[test]
    fn test_channel_name_containing_reference() {
        assert!(selector(&["Aaj Tak"]).is_featured("Aaj Tak HD"));
    }

    #[test]
    fn test_reference_containing_channel_name() {
        assert!(selector(&["Zee TV HD"]).is_featured("zee tv"));
        // "Aaj Tak" contains "Aaj", so the short name is featured too
        assert!(selector(&["Aaj Tak"]).is_featured("Aaj"));
    }

    #[test]
    fn test_no_containment_in_either_direction() {
        let selector = selector(&["Aaj Tak"]);
        assert!(!selector.is_featured("Aajtak News"));
        assert!(!selector.is_featured("Tez"));
    }

    #[test]
    fn test_blank_names_never_match() {
        assert!(!selector(&["Aaj Tak"]).is_featured("   "));
        // Blank references are discarded instead of matching everything
        let selector = selector(&["", "9XM"]);
        assert_eq!(selector.len(), 1);
        assert!(!selector.is_featured("Colors"));
    }

    #[test]
    fn test_default_reference_list() {
        let selector = FeaturedSelector::from_config(&CatalogConfig::default());
        assert!(selector.is_featured("Star Sports 1 HD"));
        assert!(selector.is_featured("&Pictures HD"));
        assert!(!selector.is_featured("Shemaroo TV"));
    }
}
