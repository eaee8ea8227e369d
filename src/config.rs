use directories::ProjectDirs;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::dataset::Category;
use crate::error::Result;

/// Which side of an entry is shown and which one is typed
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum_macros::Display,
)]
pub enum Direction {
    /// show the kana, type the romaji
    #[serde(rename = "symbol-to-text")]
    #[strum(serialize = "symbol-to-text")]
    SymbolToTransliteration,
    /// show the romaji, type the kana
    #[default]
    #[serde(rename = "text-to-symbol")]
    #[strum(serialize = "text-to-symbol")]
    TransliterationToSymbol,
}

impl Direction {
    /// Lenient parse of the navigation parameter; unknown values yield the default
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("symbol-to-text") | Some("kana-to-romaji") => Direction::SymbolToTransliteration,
            Some("text-to-symbol") | Some("romaji-to-kana") | None => {
                Direction::TransliterationToSymbol
            }
            Some(other) => {
                log::warn!("unknown direction {other:?}, using {}", Direction::default());
                Direction::default()
            }
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Direction::TransliterationToSymbol => "Romaji → Kana",
            Direction::SymbolToTransliteration => "Kana → Romaji",
        }
    }

    pub fn instructions(&self) -> &'static str {
        match self {
            Direction::TransliterationToSymbol => "Type the correct Hiragana character",
            Direction::SymbolToTransliteration => "Type the correct romaji",
        }
    }

    /// Label for the script shown as the prompt
    pub fn prompt_label(&self) -> &'static str {
        match self {
            Direction::TransliterationToSymbol => "Romaji",
            Direction::SymbolToTransliteration => "Hiragana",
        }
    }
}

/// Traversal order of the working set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Sequential,
    Randomized,
}

impl Order {
    pub fn from_randomized(randomized: bool) -> Self {
        if randomized {
            Order::Randomized
        } else {
            Order::Sequential
        }
    }

    pub fn is_randomized(&self) -> bool {
        matches!(self, Order::Randomized)
    }
}

/// Options fixed for the lifetime of one practice session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub direction: Direction,
    pub order: Order,
    pub timer_enabled: bool,
    pub categories: BTreeSet<Category>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            order: Order::default(),
            timer_enabled: false,
            categories: Category::all(),
        }
    }
}

impl SessionConfig {
    /// Build a config from the string parameters a launcher hands over.
    /// Never fails: anything unrecognised falls back to its default.
    pub fn from_params(
        direction: Option<&str>,
        randomized: Option<&str>,
        timer: Option<&str>,
        categories: Option<&str>,
    ) -> Self {
        Self {
            direction: Direction::from_param(direction),
            order: Order::from_randomized(randomized == Some("true")),
            timer_enabled: timer == Some("true"),
            categories: parse_categories(categories.unwrap_or_default()),
        }
    }

    /// Comma separated category tags, the inverse of [`parse_categories`]
    pub fn categories_param(&self) -> String {
        self.categories.iter().join(",")
    }
}

/// Parse a comma separated list of category tags.
/// Unknown tags are dropped; an empty result selects every category.
pub fn parse_categories(value: &str) -> BTreeSet<Category> {
    let parsed: BTreeSet<Category> = value
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .filter_map(|tag| match tag.parse::<Category>() {
            Ok(category) => Some(category),
            Err(err) => {
                log::warn!("ignoring character type {tag:?}: {err}");
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        Category::all()
    } else {
        parsed
    }
}

/// Setup form defaults remembered between runs. Session progress is never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    pub direction: Direction,
    pub randomized: bool,
    pub timer: bool,
    pub categories: BTreeSet<Category>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            randomized: false,
            timer: false,
            categories: Category::all(),
        }
    }
}

impl From<&SessionConfig> for Preferences {
    fn from(cfg: &SessionConfig) -> Self {
        Self {
            direction: cfg.direction,
            randomized: cfg.order.is_randomized(),
            timer: cfg.timer_enabled,
            categories: cfg.categories.clone(),
        }
    }
}

impl From<&Preferences> for SessionConfig {
    fn from(prefs: &Preferences) -> Self {
        let categories = if prefs.categories.is_empty() {
            Category::all()
        } else {
            prefs.categories.clone()
        };
        Self {
            direction: prefs.direction,
            order: Order::from_randomized(prefs.randomized),
            timer_enabled: prefs.timer,
            categories,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Preferences;
    fn save(&self, prefs: &Preferences) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        let path = crate::app_dirs::AppDirs::config_path()
            .unwrap_or_else(|| PathBuf::from("kanapro_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Preferences {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => return Preferences::default(),
        };

        match serde_json::from_slice::<Preferences>(&bytes) {
            Ok(prefs) => prefs,
            Err(err) => {
                log::warn!(
                    "ignoring unreadable preferences at {}: {err}",
                    self.path.display()
                );
                Preferences::default()
            }
        }
    }

    fn save(&self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(prefs)?;
        fs::write(&self.path, data)?;
        log::info!("saved preferences to {}", self.path.display());
        Ok(())
    }
}

/// Config directory resolution shared with [`crate::app_dirs`]
pub(crate) fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "kanapro")
}
