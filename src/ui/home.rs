use kanapro::{
    config::Direction as PracticeDirection,
    menu::{HomeItem, SetupField, SetupForm},
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::{
    ui::{accent, bold, centered_rect, dim, HORIZONTAL_MARGIN, VERTICAL_MARGIN},
    App,
};

const CARD_HEIGHT: u16 = 4;
const SETUP_WIDTH: u16 = 54;
const SETUP_HEIGHT: u16 = 17;

fn item_color(item: HomeItem) -> Color {
    match item {
        HomeItem::Practice(direction) => accent(direction),
        HomeItem::Chart => Color::Rgb(0xc8, 0xb0, 0x70),
        HomeItem::Quit => Color::Gray,
    }
}

pub fn render_home(app: &App, f: &mut Frame) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(2),
        ])
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Welcome to Kana Pro",
            bold().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!(
                "Master Japanese Hiragana characters ({} characters)",
                app.dataset.len()
            ),
            dim(),
        )),
        Line::from(Span::styled(
            "Choose your practice mode",
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    let cards = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            HomeItem::ALL
                .iter()
                .map(|item| match item {
                    HomeItem::Quit => Constraint::Length(3),
                    _ => Constraint::Length(CARD_HEIGHT),
                })
                .collect::<Vec<_>>(),
        )
        .split(chunks[1]);

    for (i, item) in HomeItem::ALL.iter().enumerate() {
        let selected = app.home.selected == i;
        let color = item_color(*item);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(if selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            });
        block = if selected {
            block.border_style(Style::default().fg(color))
        } else {
            block.border_style(dim())
        };

        let marker = if selected { "▶ " } else { "  " };
        let mut lines = vec![Line::from(vec![
            Span::styled(marker, Style::default().fg(color)),
            Span::styled(item.title(), bold().fg(color)),
        ])];
        if !item.description().is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  {}", item.description()),
                if selected { Style::default() } else { dim() },
            )));
        }

        let card = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(card, cards[i]);
    }

    let footer = Paragraph::new(Span::styled(
        "(↑/↓) select  (enter) open  (1/2) practice  (c) chart  (q) quit",
        Style::default()
            .add_modifier(Modifier::ITALIC)
            .add_modifier(Modifier::DIM),
    ))
    .alignment(Alignment::Center);
    f.render_widget(footer, chunks[2]);
}

fn toggle_pair(left: &str, right: &str, left_on: bool, color: Color) -> Vec<Span<'static>> {
    let on = Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD);
    let off = dim();
    vec![
        Span::styled(format!(" {left} "), if left_on { on } else { off }),
        Span::raw(" "),
        Span::styled(format!(" {right} "), if left_on { off } else { on }),
    ]
}

fn setup_lines(form: &SetupForm, color: Color) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let focused = form.focus();

    let cursor = |field: SetupField| -> Span<'static> {
        if focused == field {
            Span::styled("▶ ", Style::default().fg(color))
        } else {
            Span::raw("  ")
        }
    };

    lines.push(Line::from(Span::styled("Character Order", bold())));
    let mut order = vec![cursor(SetupField::Order)];
    order.extend(toggle_pair("Random", "In Order", form.randomized, color));
    lines.push(Line::from(order));
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Character Types", bold())));
    for field in SetupField::ALL {
        if let SetupField::Category(category) = field {
            let check = if form.is_selected(category) {
                "[x]"
            } else {
                "[ ]"
            };
            lines.push(Line::from(vec![
                cursor(field),
                Span::styled(check, Style::default().fg(color)),
                Span::raw(format!(" {}", category.label())),
            ]));
        }
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("Timer", bold())));
    let mut timer = vec![cursor(SetupField::Timer)];
    timer.extend(toggle_pair("Show Timer", "No Timer", form.timer, color));
    lines.push(Line::from(timer));
    lines.push(Line::default());

    let start_style = if focused == SetupField::Start {
        Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD)
    } else {
        bold().fg(color)
    };
    lines.push(Line::from(vec![
        cursor(SetupField::Start),
        Span::styled(" Start Practice ", start_style),
    ]));

    lines
}

pub fn render_setup(app: &App, f: &mut Frame) {
    let form = &app.setup;
    let color = accent(form.direction);
    let area = centered_rect(SETUP_WIDTH, SETUP_HEIGHT, f.area());

    let title = match form.direction {
        PracticeDirection::TransliterationToSymbol => " Romaji → Kana Practice Settings ",
        PracticeDirection::SymbolToTransliteration => " Kana → Romaji Practice Settings ",
    };
    let block = Block::default()
        .title(Span::styled(title, bold().fg(color)))
        .title_bottom(
            Line::from(Span::styled(
                " (↑/↓) move  (enter) toggle  (s) start  (esc) back ",
                dim(),
            ))
            .centered(),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color));

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(setup_lines(form, color)).block(block), area);
}
