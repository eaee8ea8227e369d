use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};
use serde_json::from_str;
use std::collections::BTreeSet;

use crate::error::DatasetError;

static DATA_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/data");

const KANA_FILE: &str = "kana.json";

/// Group a kana belongs to in the chart
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
pub enum Category {
    /// basic characters
    #[serde(rename = "gojuon")]
    #[strum(serialize = "gojuon")]
    Gojuon,
    /// voiced and half-voiced characters
    #[serde(rename = "dakuon")]
    #[strum(serialize = "dakuon")]
    Dakuon,
    /// combination characters (small ya/yu/yo)
    #[serde(rename = "yuon")]
    #[strum(to_string = "yuon", serialize = "yoon")]
    Yoon,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Gojuon, Category::Dakuon, Category::Yoon];

    pub fn all() -> BTreeSet<Category> {
        Self::ALL.into_iter().collect()
    }

    /// Human readable label used by the setup form and the chart
    pub fn label(&self) -> &'static str {
        match self {
            Category::Gojuon => "Gojūon (Basic)",
            Category::Dakuon => "Dakuon (Voiced)",
            Category::Yoon => "Yōon (Combination)",
        }
    }
}

/// One kana with its romaji reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterEntry {
    #[serde(rename = "kana")]
    pub symbol: String,
    #[serde(rename = "romaji")]
    pub transliteration: String,
    #[serde(rename = "type")]
    pub category: Category,
}

impl CharacterEntry {
    pub fn new(symbol: &str, transliteration: &str, category: Category) -> Self {
        Self {
            symbol: symbol.to_string(),
            transliteration: transliteration.to_string(),
            category,
        }
    }

    /// Identity of an entry within a session. Symbols alone are not unique
    /// readings (じ and ぢ are both "ji"), so both halves are used.
    pub fn key(&self) -> String {
        format!("{}-{}", self.symbol, self.transliteration)
    }
}

/// The static, read-only kana table
#[derive(Debug, Clone)]
pub struct Dataset {
    entries: Vec<CharacterEntry>,
}

impl Dataset {
    /// Load the table embedded in the binary
    pub fn load() -> Result<Self, DatasetError> {
        read_dataset_from_file(KANA_FILE)
    }

    pub fn from_entries(entries: Vec<CharacterEntry>) -> Result<Self, DatasetError> {
        if entries.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CharacterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose category is in `categories`, in table order
    pub fn filter(&self, categories: &BTreeSet<Category>) -> Vec<CharacterEntry> {
        self.entries
            .iter()
            .filter(|e| categories.contains(&e.category))
            .cloned()
            .collect()
    }

    pub fn find_by_symbol(&self, symbol: &str) -> Option<&CharacterEntry> {
        if symbol.is_empty() {
            return None;
        }
        self.entries.iter().find(|e| e.symbol == symbol)
    }

    pub fn count(&self, category: Category) -> usize {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .count()
    }
}

fn read_dataset_from_file(file_name: &str) -> Result<Dataset, DatasetError> {
    let file = DATA_DIR
        .get_file(file_name)
        .ok_or_else(|| DatasetError::Missing(file_name.to_string()))?;

    let contents = file
        .contents_utf8()
        .ok_or_else(|| DatasetError::NotUtf8(file_name.to_string()))?;

    let entries: Vec<CharacterEntry> = from_str(contents)?;
    log::debug!("loaded {} kana from {}", entries.len(), file_name);

    Dataset::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn embedded_dataset_loads() {
        let dataset = Dataset::load().unwrap();

        assert_eq!(dataset.len(), 104);
        assert_eq!(dataset.count(Category::Gojuon), 46);
        assert_eq!(dataset.count(Category::Dakuon), 25);
        assert_eq!(dataset.count(Category::Yoon), 33);
    }

    #[test]
    fn embedded_dataset_starts_with_vowels() {
        let dataset = Dataset::load().unwrap();
        let first: Vec<&str> = dataset.entries()[..5]
            .iter()
            .map(|e| e.transliteration.as_str())
            .collect();
        assert_eq!(first, vec!["a", "i", "u", "e", "o"]);
    }

    #[test]
    fn entry_keys_are_unique() {
        let dataset = Dataset::load().unwrap();
        let keys: BTreeSet<String> = dataset.entries().iter().map(|e| e.key()).collect();
        assert_eq!(keys.len(), dataset.len());
    }

    #[test]
    fn shared_readings_stay_distinct_entries() {
        let dataset = Dataset::load().unwrap();
        let ji: Vec<&str> = dataset
            .entries()
            .iter()
            .filter(|e| e.transliteration == "ji")
            .map(|e| e.symbol.as_str())
            .collect();
        assert_eq!(ji, vec!["じ", "ぢ"]);
    }

    #[test]
    fn deserializes_original_field_names() {
        let json_data = r#"[{"kana": "か", "romaji": "ka", "type": "gojuon"},
                            {"kana": "きゃ", "romaji": "kya", "type": "yuon"}]"#;
        let entries: Vec<CharacterEntry> = from_str(json_data).unwrap();

        assert_eq!(entries[0], CharacterEntry::new("か", "ka", Category::Gojuon));
        assert_eq!(entries[1].category, Category::Yoon);
    }

    #[test]
    fn rejects_empty_table() {
        assert_matches!(Dataset::from_entries(vec![]), Err(DatasetError::Empty));
    }

    #[test]
    fn missing_file_is_reported() {
        assert_matches!(
            read_dataset_from_file("nonexistent.json"),
            Err(DatasetError::Missing(name)) if name == "nonexistent.json"
        );
    }

    #[test]
    fn filter_keeps_table_order() {
        let dataset = Dataset::from_entries(vec![
            CharacterEntry::new("あ", "a", Category::Gojuon),
            CharacterEntry::new("が", "ga", Category::Dakuon),
            CharacterEntry::new("か", "ka", Category::Gojuon),
        ])
        .unwrap();

        let only_gojuon: BTreeSet<Category> = [Category::Gojuon].into_iter().collect();
        let filtered = dataset.filter(&only_gojuon);
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].symbol, "あ");
        assert_eq!(filtered[1].symbol, "か");
    }

    #[test]
    fn find_by_symbol_ignores_blank_cells() {
        let dataset = Dataset::load().unwrap();
        assert_eq!(dataset.find_by_symbol("ん").unwrap().transliteration, "n");
        assert!(dataset.find_by_symbol("").is_none());
        assert!(dataset.find_by_symbol("ア").is_none());
    }

    #[test]
    fn category_tags_parse_and_display() {
        assert_eq!("gojuon".parse::<Category>(), Ok(Category::Gojuon));
        assert_eq!("yuon".parse::<Category>(), Ok(Category::Yoon));
        assert_eq!("yoon".parse::<Category>(), Ok(Category::Yoon));
        assert!(" yuon ".parse::<Category>().is_err());
        assert!("katakana".parse::<Category>().is_err());
        assert_eq!(Category::Dakuon.to_string(), "dakuon");
        assert_eq!(Category::Yoon.to_string(), "yuon");
    }
}
