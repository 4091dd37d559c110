use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One playlist record as found in the source text, before classification.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    /// Display name taken from after the last comma of the `#EXTINF` line
    pub name: String,
    pub stream_url: String,
    /// The full `#EXTINF` line, kept for attribute extraction
    pub raw_info_line: String,
    /// `key="value"` pairs found before the name
    pub attributes: HashMap<String, String>,
}

impl RawEntry {
    /// Attribute value by key, treating empty values as absent
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn tvg_id(&self) -> Option<&str> {
        self.attribute("tvg-id")
    }

    pub fn tvg_logo(&self) -> Option<&str> {
        self.attribute("tvg-logo")
    }

    pub fn group_title(&self) -> Option<&str> {
        self.attribute("group-title")
    }
}

/// Category as published in the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub order: i32,
}

/// Fully classified output record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub stream_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvg_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub is_featured: bool,
    pub is_active: bool,
    #[serde(default)]
    pub requires_auth: bool,
    #[serde(default)]
    pub geo_blocked: bool,
    #[serde(rename = "is24x7", default)]
    pub is_24x7: bool,
    // Always present in the document, serialized as null when unset
    #[serde(default)]
    pub http_referrer: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    pub display_order: i32,
}

/// Complete output document for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub version: String,
    pub last_updated: NaiveDate,
    pub categories: Vec<Category>,
    pub channels: Vec<Channel>,
    pub featured: Vec<String>,
}

impl Dataset {
    /// Language ids present in the dataset, in order of first appearance
    pub fn language_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for channel in &self.channels {
            if let Some(language) = &channel.language {
                let id = language_id(language);
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        ids
    }

    /// Dataset restricted to the channels of one language
    ///
    /// Categories and featured ids are narrowed to what the remaining channels
    /// reference, so the result keeps the same invariants as the full dataset.
    pub fn for_language(&self, language: &str) -> Dataset {
        let wanted = language_id(language);
        let channels: Vec<Channel> = self
            .channels
            .iter()
            .filter(|channel| {
                channel
                    .language
                    .as_deref()
                    .is_some_and(|lang| language_id(lang) == wanted)
            })
            .cloned()
            .collect();

        let categories = self
            .categories
            .iter()
            .filter(|category| channels.iter().any(|c| c.category_id == category.id))
            .cloned()
            .collect();

        let featured = self
            .featured
            .iter()
            .filter(|id| channels.iter().any(|c| &c.id == *id))
            .cloned()
            .collect();

        Dataset {
            version: self.version.clone(),
            last_updated: self.last_updated,
            categories,
            channels,
            featured,
        }
    }
}

/// Directory document listing the languages of a split output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDirectory {
    pub version: String,
    pub last_updated: NaiveDate,
    pub categories: Vec<Category>,
    pub languages: Vec<LanguageEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageEntry {
    pub id: String,
    pub name: String,
    pub channel_count: usize,
}

/// Per-channel playback document of a split output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetails {
    pub id: String,
    pub name: String,
    pub stream_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default)]
    pub http_referrer: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl From<&Channel> for PlayerDetails {
    fn from(channel: &Channel) -> Self {
        Self {
            id: channel.id.clone(),
            name: channel.name.clone(),
            stream_url: channel.stream_url.clone(),
            quality: channel.quality.clone(),
            logo: channel.logo.clone(),
            http_referrer: channel.http_referrer.clone(),
            user_agent: channel.user_agent.clone(),
        }
    }
}

/// Path-safe id of a language name, as used by downstream readers
pub fn language_id(language: &str) -> String {
    language.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn channel(id: &str, category_id: &str, language: &str) -> Channel {
        Channel {
            id: id.to_string(),
            name: id.to_string(),
            category_id: category_id.to_string(),
            stream_url: format!("http://example.com/{id}.m3u8"),
            quality: None,
            tvg_id: None,
            logo: None,
            language: Some(language.to_string()),
            is_featured: false,
            is_active: true,
            requires_auth: false,
            geo_blocked: false,
            is_24x7: true,
            http_referrer: None,
            user_agent: None,
            display_order: 2,
        }
    }

    fn category(id: &str, order: i32) -> Category {
        Category {
            id: id.to_string(),
            name: id.to_string(),
            icon: "tv".to_string(),
            order,
        }
    }

    #[test]
    fn test_channel_serializes_with_document_field_names() {
        let value = serde_json::to_value(channel("zee-tv", "entertainment", "Hindi")).unwrap();

        assert_eq!(value["categoryId"], json!("entertainment"));
        assert_eq!(value["streamUrl"], json!("http://example.com/zee-tv.m3u8"));
        assert_eq!(value["is24x7"], json!(true));
        assert_eq!(value["displayOrder"], json!(2));
        // Unset headers stay in the document as null
        assert_eq!(value["httpReferrer"], json!(null));
        assert_eq!(value["userAgent"], json!(null));
        // Unset attributes are omitted entirely
        assert!(value.get("quality").is_none());
        assert!(value.get("tvgId").is_none());
        assert!(value.get("logo").is_none());
    }

    #[test]
    fn test_dataset_last_updated_is_a_plain_date() {
        let dataset = Dataset {
            version: "1.0.0".to_string(),
            last_updated: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            categories: vec![],
            channels: vec![],
            featured: vec![],
        };
        let value = serde_json::to_value(&dataset).unwrap();
        assert_eq!(value["lastUpdated"], json!("2024-03-09"));
    }

    #[test]
    fn test_for_language_narrows_categories_and_featured() {
        let dataset = Dataset {
            version: "1.0.0".to_string(),
            last_updated: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            categories: vec![category("news", 1), category("sports", 5)],
            channels: vec![
                channel("aaj-tak", "news", "Hindi"),
                channel("sun-news", "news", "Tamil"),
                channel("star-sports-tamil", "sports", "Tamil"),
            ],
            featured: vec!["aaj-tak".to_string(), "star-sports-tamil".to_string()],
        };

        assert_eq!(dataset.language_ids(), vec!["hindi", "tamil"]);

        let hindi = dataset.for_language("Hindi");
        assert_eq!(hindi.channels.len(), 1);
        assert_eq!(hindi.categories, vec![category("news", 1)]);
        assert_eq!(hindi.featured, vec!["aaj-tak"]);

        let tamil = dataset.for_language("tamil");
        assert_eq!(tamil.channels.len(), 2);
        assert_eq!(tamil.categories.len(), 2);
        assert_eq!(tamil.featured, vec!["star-sports-tamil"]);
    }

    #[test]
    fn test_raw_entry_treats_empty_attributes_as_absent() {
        let mut attributes = HashMap::new();
        attributes.insert("tvg-id".to_string(), String::new());
        attributes.insert("tvg-logo".to_string(), "http://logo.example/a.png".to_string());
        let entry = RawEntry {
            name: "A".to_string(),
            stream_url: "http://example.com/a".to_string(),
            raw_info_line: "#EXTINF:-1,A".to_string(),
            attributes,
        };

        assert_eq!(entry.tvg_id(), None);
        assert_eq!(entry.tvg_logo(), Some("http://logo.example/a.png"));
        assert_eq!(entry.group_title(), None);
    }
}
