use ratatui::Frame;

use crate::{
    ui::{chart::render_chart, home::render_home, home::render_setup, practice::render_complete,
        practice::render_practice},
    App, AppState,
};

/// A UI Screen boundary: responsible for rendering one application state
pub trait Screen {
    fn render(&self, app: &App, f: &mut Frame);
}

/// Home screen - mode cards
pub struct HomeScreen;

impl Screen for HomeScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        render_home(app, f);
    }
}

/// Settings dialog drawn over the home screen
pub struct SetupScreen;

impl Screen for SetupScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        render_home(app, f);
        render_setup(app, f);
    }
}

/// Practice screen - prompt, answer field and progress
pub struct PracticeScreen;

impl Screen for PracticeScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        render_practice(app, f);
    }
}

/// Congratulations dialog drawn over the finished session
pub struct CompleteScreen;

impl Screen for CompleteScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        render_practice(app, f);
        render_complete(app, f);
    }
}

/// Hiragana reference chart
pub struct ChartScreen;

impl Screen for ChartScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        render_chart(app, f);
    }
}

/// Helper to construct the appropriate screen for the current state
pub fn current_screen(state: &AppState) -> Box<dyn Screen> {
    match state {
        AppState::Home => Box::new(HomeScreen),
        AppState::Setup => Box::new(SetupScreen),
        AppState::Practice => Box::new(PracticeScreen),
        AppState::Complete => Box::new(CompleteScreen),
        AppState::Chart => Box::new(ChartScreen),
    }
}
