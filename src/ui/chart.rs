use kanapro::{
    chart::{ChartCursor, ChartGrid, SECTIONS},
    dataset::Dataset,
    speech::Speaker,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Tabs},
    Frame,
};

use crate::{
    ui::{bold, dim, pad_display, HORIZONTAL_MARGIN, VERTICAL_MARGIN},
    App,
};

const CELL_WIDTH: usize = 6;
const LABEL_WIDTH: u16 = 4;
const HIGHLIGHT: Color = Color::Rgb(0xc8, 0xb0, 0x70);

/// Two-line cell: kana over its romaji
fn cell_text(symbol: &str, dataset: &Dataset) -> Vec<Line<'static>> {
    let romaji = dataset
        .find_by_symbol(symbol)
        .map(|e| e.transliteration.clone())
        .unwrap_or_default();
    vec![
        Line::from(pad_display(symbol, CELL_WIDTH)),
        Line::from(Span::styled(pad_display(&romaji, CELL_WIDTH), dim())),
    ]
}

fn grid_table<'a>(grid: &ChartGrid, cursor: &ChartCursor, dataset: &Dataset) -> Table<'a> {
    let header = Row::new(
        std::iter::once(Cell::from(""))
            .chain(grid.columns.iter().map(|c| Cell::from(*c)))
            .collect::<Vec<_>>(),
    )
    .style(bold().add_modifier(Modifier::DIM));

    let rows = grid.rows.iter().enumerate().map(|(r, (label, _))| {
        let mut cells = vec![Cell::from(Span::styled(*label, dim()))];
        for c in 0..grid.width() {
            let selected = cursor.row == r && cursor.col == c;
            let cell = match grid.cell(r, c) {
                Some(symbol) => Cell::from(cell_text(symbol, dataset)),
                None => Cell::from(""),
            };
            cells.push(if selected {
                cell.style(Style::default().fg(Color::Black).bg(HIGHLIGHT))
            } else {
                cell
            });
        }
        Row::new(cells).height(2)
    });

    let widths = std::iter::once(Constraint::Length(LABEL_WIDTH))
        .chain((0..grid.width()).map(|_| Constraint::Length(CELL_WIDTH as u16)));

    Table::new(rows, widths).header(header).column_spacing(1)
}

fn selection_line(app: &App) -> Line<'static> {
    match app.chart.selected_entry(&app.dataset) {
        Some(entry) => {
            let mut spans = vec![
                Span::styled(entry.symbol.clone(), bold().fg(HIGHLIGHT)),
                Span::raw("  "),
                Span::styled(entry.transliteration.clone(), bold()),
                Span::styled(format!("  ({})", entry.category.label()), dim()),
            ];
            if app.speaker.is_speaking() {
                spans.push(Span::styled("  ♪ speaking...", Style::default().fg(HIGHLIGHT)));
            }
            Line::from(spans)
        }
        None => Line::from(Span::styled("(empty cell)", dim())),
    }
}

fn footer_text(speaker: &dyn Speaker) -> &'static str {
    if speaker.is_supported() {
        "(arrows/hjkl) move  (tab) next section  (enter) hear it  (esc) home"
    } else {
        "(arrows/hjkl) move  (tab) next section  (esc) home  - speech unavailable"
    }
}

pub fn render_chart(app: &App, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(6),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let subtitle = if app.speaker.is_supported() {
        "Select any character to hear its pronunciation"
    } else {
        "All Hiragana characters with their romaji"
    };
    let header = Paragraph::new(vec![
        Line::from(Span::styled("Hiragana Chart", bold().fg(HIGHLIGHT))),
        Line::from(Span::styled(subtitle, dim())),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    let tabs = Tabs::new(SECTIONS.iter().map(|g| g.title).collect::<Vec<_>>())
        .select(app.chart.section)
        .style(dim())
        .highlight_style(bold().fg(HIGHLIGHT));
    f.render_widget(tabs, chunks[1]);

    let grid = app.chart.grid();
    let table = grid_table(grid, &app.chart, &app.dataset).block(
        Block::default()
            .title(Span::styled(format!(" {} ", grid.title), bold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(dim()),
    );
    f.render_widget(table, chunks[2]);

    f.render_widget(
        Paragraph::new(selection_line(app)).alignment(Alignment::Center),
        chunks[3],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            footer_text(app.speaker.as_ref()),
            Style::default()
                .add_modifier(Modifier::ITALIC)
                .add_modifier(Modifier::DIM),
        ))
        .alignment(Alignment::Center),
        chunks[4],
    );
}
