use std::collections::BTreeSet;

use crate::config::{Direction, Order, Preferences, SessionConfig};
use crate::dataset::Category;

/// Entries on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeItem {
    Practice(Direction),
    Chart,
    Quit,
}

impl HomeItem {
    pub const ALL: [HomeItem; 4] = [
        HomeItem::Practice(Direction::TransliterationToSymbol),
        HomeItem::Practice(Direction::SymbolToTransliteration),
        HomeItem::Chart,
        HomeItem::Quit,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            HomeItem::Practice(direction) => direction.title(),
            HomeItem::Chart => "Hiragana Chart",
            HomeItem::Quit => "Quit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            HomeItem::Practice(Direction::TransliterationToSymbol) => {
                "See the romaji and type the correct Hiragana character  (ka → か)"
            }
            HomeItem::Practice(Direction::SymbolToTransliteration) => {
                "See the Hiragana character and type the correct romaji  (か → ka)"
            }
            HomeItem::Chart => "Explore all Hiragana characters and hear them spoken",
            HomeItem::Quit => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HomeMenu {
    pub selected: usize,
}

impl HomeMenu {
    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self) {
        self.selected = (self.selected + 1).min(HomeItem::ALL.len() - 1);
    }

    pub fn current(&self) -> HomeItem {
        HomeItem::ALL[self.selected]
    }
}

/// Focusable rows of the practice settings dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    Order,
    Category(Category),
    Timer,
    Start,
}

impl SetupField {
    pub const ALL: [SetupField; 6] = [
        SetupField::Order,
        SetupField::Category(Category::Gojuon),
        SetupField::Category(Category::Dakuon),
        SetupField::Category(Category::Yoon),
        SetupField::Timer,
        SetupField::Start,
    ];
}

/// Settings chosen before a practice session starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupForm {
    pub direction: Direction,
    pub randomized: bool,
    pub timer: bool,
    categories: BTreeSet<Category>,
    focus: usize,
}

impl SetupForm {
    pub fn new(direction: Direction, prefs: &Preferences) -> Self {
        let categories = if prefs.categories.is_empty() {
            Category::all()
        } else {
            prefs.categories.clone()
        };
        Self {
            direction,
            randomized: prefs.randomized,
            timer: prefs.timer,
            categories,
            focus: 0,
        }
    }

    pub fn focus(&self) -> SetupField {
        SetupField::ALL[self.focus]
    }

    pub fn focus_up(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    pub fn focus_down(&mut self) {
        self.focus = (self.focus + 1).min(SetupField::ALL.len() - 1);
    }

    pub fn categories(&self) -> &BTreeSet<Category> {
        &self.categories
    }

    pub fn is_selected(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Flip a character type. The last selected type cannot be turned off.
    pub fn toggle_category(&mut self, category: Category) {
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
        if self.categories.is_empty() {
            self.categories.insert(category);
        }
    }

    /// Flip the focused setting. Returns true when the focus is on Start.
    pub fn activate(&mut self) -> bool {
        match self.focus() {
            SetupField::Order => self.randomized = !self.randomized,
            SetupField::Category(category) => self.toggle_category(category),
            SetupField::Timer => self.timer = !self.timer,
            SetupField::Start => return true,
        }
        false
    }

    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig {
            direction: self.direction,
            order: Order::from_randomized(self.randomized),
            timer_enabled: self.timer,
            categories: self.categories.clone(),
        }
    }
}
