use kanapro::{
    runtime::Clock,
    session::{MatchState, SessionController},
    util::{format_time, percent},
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph},
    Frame,
};
use rand::Rng;

use crate::{
    ui::{accent, bold, centered_rect, dim, HORIZONTAL_MARGIN, VERTICAL_MARGIN},
    App,
};

const DIALOG_WIDTH: u16 = 58;
const DIALOG_HEIGHT: u16 = 12;

fn match_color(state: MatchState) -> Option<Color> {
    match state {
        MatchState::Empty => None,
        MatchState::Correct => Some(Color::Green),
        MatchState::Incorrect => Some(Color::Red),
    }
}

fn feedback(state: MatchState) -> Line<'static> {
    match state {
        MatchState::Empty => Line::default(),
        MatchState::Correct => Line::from(Span::styled(
            "✓ Correct! Press Enter to continue",
            bold().fg(Color::Green),
        )),
        MatchState::Incorrect => Line::from(Span::styled(
            "Keep trying...",
            Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
        )),
    }
}

fn status_line<R: Rng, C: Clock>(session: &SessionController<R, C>) -> Line<'static> {
    let mut spans = vec![Span::styled(session.position_label(), dim())];
    if let Some(secs) = session.elapsed_secs() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(format!("⏱ {}", format_time(secs)), bold()));
    }
    Line::from(spans)
}

pub fn render_practice(app: &App, f: &mut Frame) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let config = session.config();
    let color = accent(config.direction);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let header = Paragraph::new(vec![
        Line::from(Span::styled(config.direction.title(), bold().fg(color))),
        Line::from(Span::styled(config.direction.instructions(), dim())),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, chunks[0]);

    let completed = session.completed_count();
    let total = session.working_set_len();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .percent(percent(completed, total))
        .label(format!("{completed} / {total} completed"));
    f.render_widget(gauge, chunks[1]);

    f.render_widget(
        Paragraph::new(status_line(session)).alignment(Alignment::Center),
        chunks[2],
    );

    let prompt_block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.direction.prompt_label()),
            dim(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color));
    let prompt_area = prompt_block.inner(chunks[4]);
    f.render_widget(prompt_block, chunks[4]);

    let [_, prompt_row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(prompt_area);
    f.render_widget(
        Paragraph::new(Span::styled(
            session.prompt().to_string(),
            bold().fg(Color::White),
        ))
        .alignment(Alignment::Center),
        prompt_row,
    );

    let input_style = match match_color(session.match_state()) {
        Some(c) => Style::default().fg(c),
        None => dim(),
    };
    let input = Paragraph::new(Line::from(vec![
        Span::styled(session.input().to_string(), bold().patch(input_style)),
        Span::styled("▏", Style::default().fg(color)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Your answer ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(input_style),
    );
    f.render_widget(input, chunks[5]);

    f.render_widget(
        Paragraph::new(feedback(session.match_state())).alignment(Alignment::Center),
        chunks[6],
    );

    let next_style = if session.can_advance() {
        bold().fg(color)
    } else {
        dim()
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("(enter) next", next_style),
        Span::styled("  (backspace) delete  (esc) home  (ctrl-c) quit", dim()),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(footer, chunks[7]);
}

fn completion_lines<R: Rng, C: Clock>(session: &SessionController<R, C>) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled("おめでとうございます！", bold().fg(Color::Yellow))),
        Line::from("🎉"),
        Line::from(Span::styled("Congratulations!", bold())),
        Line::default(),
        Line::from(format!(
            "You've completed all {} kana characters!",
            session.working_set_len()
        )),
    ];
    if let Some(secs) = session.elapsed_secs() {
        lines.push(Line::from(vec![
            Span::styled("Total Time: ", dim()),
            Span::styled(format_time(secs), bold()),
        ]));
    }
    lines
}

pub fn render_complete(app: &App, f: &mut Frame) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let color = accent(session.config().direction);
    let area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, f.area());

    let block = Block::default()
        .title_bottom(
            Line::from(Span::styled(
                " (h) Return to Home  (r) Practice Again  (esc) Close ",
                Style::default().fg(color),
            ))
            .centered(),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(color));

    f.render_widget(Clear, area);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [_, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
    f.render_widget(
        Paragraph::new(completion_lines(session)).alignment(Alignment::Center),
        body,
    );
}
