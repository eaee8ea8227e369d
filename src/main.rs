mod ui;

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use kanapro::{
    app_dirs::AppDirs,
    chart::ChartCursor,
    config::{
        parse_categories, ConfigStore, Direction, FileConfigStore, Order, Preferences,
        SessionConfig,
    },
    dataset::Dataset,
    logging,
    menu::{HomeItem, HomeMenu, SetupField, SetupForm},
    runtime::{AppEvent, CrosstermEventSource, FixedTicker, Runner},
    session::{SessionController, SessionSignal},
    speech::{CommandSpeaker, Speaker},
};
use log::LevelFilter;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};

const TICK_RATE_MS: u64 = 1000;

/// terminal hiragana trainer
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Practice reading and writing hiragana: type the kana for a romaji prompt or the romaji for a kana, in chart order or at random, with an optional timer and a spoken reference chart."
)]
pub struct Cli {
    /// practice direction: text-to-symbol (romaji → kana) or symbol-to-text (kana → romaji)
    #[clap(short = 'd', long)]
    direction: Option<String>,

    /// pick characters at random instead of in chart order
    #[clap(short = 'r', long, num_args = 0..=1, default_missing_value = "true")]
    randomized: Option<bool>,

    /// show elapsed time while practicing
    #[clap(short = 't', long, num_args = 0..=1, default_missing_value = "true")]
    timer: Option<bool>,

    /// comma separated character types to practice: gojuon, dakuon, yuon (default: all)
    #[clap(short = 'c', long)]
    categories: Option<String>,

    /// skip the home screen and start practicing right away
    #[clap(short = 'p', long, conflicts_with = "chart")]
    practice: bool,

    /// open the hiragana chart
    #[clap(long)]
    chart: bool,

    /// remember the effective options as defaults for the next run
    #[clap(long)]
    save_defaults: bool,

    /// write a debug log to this file
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// log verbosity (off, error, warn, info, debug, trace); implies logging
    #[clap(long, value_parser = parse_level)]
    log_level: Option<LevelFilter>,
}

fn parse_level(value: &str) -> Result<LevelFilter, String> {
    value
        .parse()
        .map_err(|_| format!("unknown log level: {value}"))
}

impl Cli {
    /// Merge explicit flags over stored preferences
    fn to_session_config(&self, prefs: &Preferences) -> SessionConfig {
        let base = SessionConfig::from(prefs);
        SessionConfig {
            direction: self
                .direction
                .as_deref()
                .map(|d| Direction::from_param(Some(d)))
                .unwrap_or(base.direction),
            order: self
                .randomized
                .map(Order::from_randomized)
                .unwrap_or(base.order),
            timer_enabled: self.timer.unwrap_or(base.timer_enabled),
            categories: self
                .categories
                .as_deref()
                .map(parse_categories)
                .unwrap_or(base.categories),
        }
    }

    fn log_target(&self) -> Option<(PathBuf, LevelFilter)> {
        if self.log_file.is_none() && self.log_level.is_none() {
            return None;
        }
        let path = self.log_file.clone().or_else(AppDirs::log_path)?;
        Some((path, self.log_level.unwrap_or(LevelFilter::Info)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Home,
    Setup,
    Practice,
    Complete,
    Chart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct App {
    pub dataset: Dataset,
    pub prefs: Preferences,
    pub state: AppState,
    pub home: HomeMenu,
    pub setup: SetupForm,
    pub session: Option<SessionController>,
    pub chart: ChartCursor,
    pub speaker: Box<dyn Speaker>,
}

impl App {
    pub fn new(dataset: Dataset, prefs: Preferences, speaker: Box<dyn Speaker>) -> Self {
        Self {
            setup: SetupForm::new(prefs.direction, &prefs),
            dataset,
            prefs,
            state: AppState::Home,
            home: HomeMenu::default(),
            session: None,
            chart: ChartCursor::default(),
            speaker,
        }
    }

    pub fn start_session(&mut self, config: SessionConfig) {
        self.prefs = Preferences::from(&config);
        self.session = Some(SessionController::new(config, self.dataset.clone()));
        self.state = AppState::Practice;
    }

    pub fn on_tick(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.tick();
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Control {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Control::Quit;
        }

        match self.state {
            AppState::Home => return self.on_home_key(key),
            AppState::Setup => self.on_setup_key(key),
            AppState::Practice => self.on_practice_key(key),
            AppState::Complete => self.on_complete_key(key),
            AppState::Chart => self.on_chart_key(key),
        }
        Control::Continue
    }

    fn go_home(&mut self) {
        self.session = None;
        self.state = AppState::Home;
    }

    fn on_home_key(&mut self, key: KeyEvent) -> Control {
        let item = match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.home.up();
                return Control::Continue;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.home.down();
                return Control::Continue;
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.home.current(),
            KeyCode::Char('1') => HomeItem::ALL[0],
            KeyCode::Char('2') => HomeItem::ALL[1],
            KeyCode::Char('c') => HomeItem::Chart,
            KeyCode::Esc | KeyCode::Char('q') => HomeItem::Quit,
            _ => return Control::Continue,
        };

        match item {
            HomeItem::Practice(direction) => {
                self.setup = SetupForm::new(direction, &self.prefs);
                self.state = AppState::Setup;
            }
            HomeItem::Chart => self.state = AppState::Chart,
            HomeItem::Quit => return Control::Quit,
        }
        Control::Continue
    }

    fn on_setup_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state = AppState::Home,
            KeyCode::Up | KeyCode::BackTab => self.setup.focus_up(),
            KeyCode::Down | KeyCode::Tab => self.setup.focus_down(),
            KeyCode::Char('s') => self.start_session(self.setup.to_session_config()),
            KeyCode::Left | KeyCode::Right if self.setup.focus() != SetupField::Start => {
                self.setup.activate();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.setup.activate() {
                    self.start_session(self.setup.to_session_config());
                }
            }
            _ => {}
        }
    }

    fn on_practice_key(&mut self, key: KeyEvent) {
        let Some(session) = self.session.as_mut() else {
            self.state = AppState::Home;
            return;
        };

        let signal = match key.code {
            KeyCode::Esc => {
                self.go_home();
                return;
            }
            KeyCode::Enter => {
                session.advance();
                None
            }
            KeyCode::Backspace => session.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                session.push_char(c)
            }
            _ => None,
        };

        if signal == Some(SessionSignal::Completed) {
            self.state = AppState::Complete;
        }
    }

    fn on_complete_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') | KeyCode::Char('a') => {
                if let Some(session) = self.session.as_mut() {
                    session.reset();
                }
                self.state = AppState::Practice;
            }
            KeyCode::Char('h') => self.go_home(),
            KeyCode::Esc => self.state = AppState::Practice,
            // ignored so a reflexive Enter after the last answer keeps the dialog
            KeyCode::Enter => {}
            _ => {}
        }
    }

    fn on_chart_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.state = AppState::Home,
            KeyCode::Up | KeyCode::Char('k') => self.chart.up(),
            KeyCode::Down | KeyCode::Char('j') => self.chart.down(),
            KeyCode::Left | KeyCode::Char('h') => self.chart.left(),
            KeyCode::Right | KeyCode::Char('l') => self.chart.right(),
            KeyCode::Tab => self.chart.next_section(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.speaker.is_supported() {
                    if let Some(entry) = self.chart.selected_entry(&self.dataset) {
                        self.speaker.speak(&entry.symbol);
                    }
                }
            }
            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some((path, level)) = cli.log_target() {
        logging::init_file_logger(&path, level)?;
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let prefs = store.load();
    let config = cli.to_session_config(&prefs);
    if cli.save_defaults {
        store.save(&Preferences::from(&config))?;
    }

    let dataset = Dataset::load()?;
    let speaker = CommandSpeaker::detect();
    let mut app = App::new(dataset, Preferences::from(&config), Box::new(speaker));
    if cli.practice {
        app.start_session(config);
    } else if cli.chart {
        app.state = AppState::Chart;
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let mut runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    loop {
        terminal.draw(|f| ui::draw(app, f))?;

        match runner.step() {
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize => {}
            AppEvent::Key(key) => {
                if app.on_key(key) == Control::Quit {
                    break;
                }
            }
        }
    }

    log::info!("exiting");
    Ok(())
}
