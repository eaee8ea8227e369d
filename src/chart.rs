use crate::dataset::{CharacterEntry, Dataset};

/// One section of the reference chart. Empty strings are blank cells.
#[derive(Debug, Clone, Copy)]
pub struct ChartGrid {
    pub title: &'static str,
    pub columns: &'static [&'static str],
    /// (row label, cells)
    pub rows: &'static [(&'static str, &'static [&'static str])],
}

impl ChartGrid {
    pub fn cell(&self, row: usize, col: usize) -> Option<&'static str> {
        self.rows
            .get(row)
            .and_then(|(_, cells)| cells.get(col))
            .copied()
            .filter(|cell| !cell.is_empty())
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

pub const GOJUON: ChartGrid = ChartGrid {
    title: "Gojūon (Basic Characters)",
    columns: &["a", "i", "u", "e", "o"],
    rows: &[
        ("", &["あ", "い", "う", "え", "お"]),
        ("k", &["か", "き", "く", "け", "こ"]),
        ("s", &["さ", "し", "す", "せ", "そ"]),
        ("t", &["た", "ち", "つ", "て", "と"]),
        ("n", &["な", "に", "ぬ", "ね", "の"]),
        ("h", &["は", "ひ", "ふ", "へ", "ほ"]),
        ("m", &["ま", "み", "む", "め", "も"]),
        ("y", &["や", "", "ゆ", "", "よ"]),
        ("r", &["ら", "り", "る", "れ", "ろ"]),
        ("w", &["わ", "", "", "", "を"]),
        ("n", &["ん", "", "", "", ""]),
    ],
};

pub const DAKUON: ChartGrid = ChartGrid {
    title: "Dakuon (Voiced Characters)",
    columns: &["a", "i", "u", "e", "o"],
    rows: &[
        ("g", &["が", "ぎ", "ぐ", "げ", "ご"]),
        ("z", &["ざ", "じ", "ず", "ぜ", "ぞ"]),
        ("d", &["だ", "ぢ", "づ", "で", "ど"]),
        ("b", &["ば", "び", "ぶ", "べ", "ぼ"]),
        ("p", &["ぱ", "ぴ", "ぷ", "ぺ", "ぽ"]),
    ],
};

pub const YOON: ChartGrid = ChartGrid {
    title: "Yōon (Combination Characters)",
    columns: &["ya", "yu", "yo"],
    rows: &[
        ("k", &["きゃ", "きゅ", "きょ"]),
        ("s", &["しゃ", "しゅ", "しょ"]),
        ("t", &["ちゃ", "ちゅ", "ちょ"]),
        ("n", &["にゃ", "にゅ", "にょ"]),
        ("h", &["ひゃ", "ひゅ", "ひょ"]),
        ("m", &["みゃ", "みゅ", "みょ"]),
        ("r", &["りゃ", "りゅ", "りょ"]),
        ("g", &["ぎゃ", "ぎゅ", "ぎょ"]),
        ("j", &["じゃ", "じゅ", "じょ"]),
        ("b", &["びゃ", "びゅ", "びょ"]),
        ("p", &["ぴゃ", "ぴゅ", "ぴょ"]),
    ],
};

pub static SECTIONS: [ChartGrid; 3] = [GOJUON, DAKUON, YOON];

/// Selected cell on the chart screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChartCursor {
    pub section: usize,
    pub row: usize,
    pub col: usize,
}

impl ChartCursor {
    pub fn grid(&self) -> &'static ChartGrid {
        &SECTIONS[self.section]
    }

    pub fn symbol(&self) -> Option<&'static str> {
        self.grid().cell(self.row, self.col)
    }

    pub fn selected_entry<'a>(&self, dataset: &'a Dataset) -> Option<&'a CharacterEntry> {
        self.symbol().and_then(|s| dataset.find_by_symbol(s))
    }

    pub fn left(&mut self) {
        self.col = self.col.saturating_sub(1);
    }

    pub fn right(&mut self) {
        if self.col + 1 < self.grid().width() {
            self.col += 1;
        }
    }

    /// Moves down, continuing into the next section past the last row
    pub fn down(&mut self) {
        if self.row + 1 < self.grid().rows.len() {
            self.row += 1;
        } else if self.section + 1 < SECTIONS.len() {
            self.section += 1;
            self.row = 0;
            self.clamp_col();
        }
    }

    /// Moves up, continuing into the previous section past the first row
    pub fn up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
        } else if self.section > 0 {
            self.section -= 1;
            self.row = self.grid().rows.len() - 1;
            self.clamp_col();
        }
    }

    pub fn next_section(&mut self) {
        self.section = (self.section + 1) % SECTIONS.len();
        self.row = 0;
        self.clamp_col();
    }

    fn clamp_col(&mut self) {
        self.col = self.col.min(self.grid().width() - 1);
    }
}
