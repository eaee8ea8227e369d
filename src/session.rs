//! Practice session state machine.
//!
//! [`SessionState`] is a plain value; every change goes through
//! [`SessionState::apply`] with randomness and time passed in, so a seeded
//! RNG and a manual clock make any run reproducible. [`SessionController`]
//! owns one state together with its dataset, RNG and clock and is what the
//! terminal UI drives.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::time::Instant;

use crate::config::{Direction, Order, SessionConfig};
use crate::dataset::{CharacterEntry, Dataset};
use crate::runtime::{Clock, SystemClock};

/// How the current input compares with the expected answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchState {
    #[default]
    Empty,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// the whole answer field, replaced on every keystroke
    Input(String),
    Advance,
    Tick,
}

/// Edge-triggered notifications for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSignal {
    /// every entry of the working set has been answered correctly once
    Completed,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    config: SessionConfig,
    working_set: Vec<CharacterEntry>,
    /// positions into `working_set`
    history: Vec<usize>,
    history_index: usize,
    completed: HashSet<String>,
    input: String,
    match_state: MatchState,
    started_at: Option<Instant>,
    elapsed_secs: u64,
    completion_signalled: bool,
}

impl SessionState {
    /// Start a fresh session. An empty category selection practices the whole table.
    pub fn initialize<R: Rng + ?Sized>(
        config: &SessionConfig,
        dataset: &Dataset,
        rng: &mut R,
        now: Instant,
    ) -> Self {
        let mut working_set = dataset.filter(&config.categories);
        if working_set.is_empty() {
            log::info!(
                "no kana match categories [{}], practicing the full table",
                config.categories_param()
            );
            working_set = dataset.entries().to_vec();
        }

        let first = match config.order {
            Order::Randomized => rng.gen_range(0..working_set.len()),
            Order::Sequential => 0,
        };

        log::debug!(
            "session started: {} kana, {:?}, {}, first {}",
            working_set.len(),
            config.order,
            config.direction,
            working_set[first].symbol
        );

        Self {
            config: config.clone(),
            working_set,
            history: vec![first],
            history_index: 0,
            completed: HashSet::new(),
            input: String::new(),
            match_state: MatchState::Empty,
            started_at: config.timer_enabled.then_some(now),
            elapsed_secs: 0,
            completion_signalled: false,
        }
    }

    /// Pure transition: consume the state and an event, return the next state
    pub fn apply<R: Rng + ?Sized>(
        mut self,
        event: SessionEvent,
        rng: &mut R,
        now: Instant,
    ) -> (Self, Option<SessionSignal>) {
        let signal = self.apply_in_place(event, rng, now);
        (self, signal)
    }

    fn apply_in_place<R: Rng + ?Sized>(
        &mut self,
        event: SessionEvent,
        rng: &mut R,
        now: Instant,
    ) -> Option<SessionSignal> {
        match event {
            SessionEvent::Input(text) => self.update_input(text),
            SessionEvent::Advance => {
                self.advance(rng);
                None
            }
            SessionEvent::Tick => {
                self.tick(now);
                None
            }
        }
    }

    fn update_input(&mut self, text: String) -> Option<SessionSignal> {
        self.match_state = if text.is_empty() {
            MatchState::Empty
        } else if text == self.expected_answer() {
            MatchState::Correct
        } else {
            MatchState::Incorrect
        };
        self.input = text;

        if self.match_state == MatchState::Correct {
            let key = self.current().key();
            if self.completed.insert(key) {
                log::debug!(
                    "answered {} ({}/{})",
                    self.current().symbol,
                    self.completed.len(),
                    self.working_set.len()
                );
                return self.check_completion();
            }
        }
        None
    }

    fn check_completion(&mut self) -> Option<SessionSignal> {
        if !self.completion_signalled && self.is_complete() {
            self.completion_signalled = true;
            log::info!("session complete after {}s", self.elapsed_secs);
            return Some(SessionSignal::Completed);
        }
        None
    }

    fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.match_state != MatchState::Correct {
            return;
        }

        let mut next = match self.config.order {
            Order::Randomized => rng.gen_range(0..self.working_set.len()),
            Order::Sequential => {
                let current = self.current_position();
                if current + 1 >= self.working_set.len() {
                    return;
                }
                current + 1
            }
        };

        if self.history_index == self.history.len() - 1 {
            self.history.push(next);
            self.history_index += 1;
        } else {
            self.history_index += 1;
            next = self.history[self.history_index];
        }

        log::debug!(
            "advanced to {} (history {}/{})",
            self.working_set[next].symbol,
            self.history_index + 1,
            self.history.len()
        );

        self.input.clear();
        self.match_state = MatchState::Empty;
    }

    fn tick(&mut self, now: Instant) {
        if let Some(started_at) = self.started_at {
            self.elapsed_secs = now.saturating_duration_since(started_at).as_secs();
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn working_set(&self) -> &[CharacterEntry] {
        &self.working_set
    }

    pub fn history(&self) -> impl Iterator<Item = &CharacterEntry> + '_ {
        self.history.iter().map(|&pos| &self.working_set[pos])
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history_index(&self) -> usize {
        self.history_index
    }

    fn current_position(&self) -> usize {
        self.history[self.history_index]
    }

    pub fn current(&self) -> &CharacterEntry {
        &self.working_set[self.current_position()]
    }

    /// What is shown to the user
    pub fn prompt(&self) -> &str {
        match self.config.direction {
            Direction::TransliterationToSymbol => &self.current().transliteration,
            Direction::SymbolToTransliteration => &self.current().symbol,
        }
    }

    /// What the user has to type
    pub fn expected_answer(&self) -> &str {
        match self.config.direction {
            Direction::TransliterationToSymbol => &self.current().symbol,
            Direction::SymbolToTransliteration => &self.current().transliteration,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn match_state(&self) -> MatchState {
        self.match_state
    }

    pub fn is_completed(&self, entry: &CharacterEntry) -> bool {
        self.completed.contains(&entry.key())
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn is_complete(&self) -> bool {
        !self.working_set.is_empty() && self.completed.len() == self.working_set.len()
    }

    /// Whether `advance` would move to another entry
    pub fn can_advance(&self) -> bool {
        self.match_state == MatchState::Correct
            && (self.config.order.is_randomized()
                || self.current_position() + 1 < self.working_set.len())
    }

    pub fn elapsed_secs(&self) -> Option<u64> {
        self.started_at.map(|_| self.elapsed_secs)
    }
}

/// Owns one practice session and the collaborators its transitions need
pub struct SessionController<R: Rng = StdRng, C: Clock = SystemClock> {
    dataset: Dataset,
    state: SessionState,
    rng: R,
    clock: C,
}

impl SessionController<StdRng, SystemClock> {
    pub fn new(config: SessionConfig, dataset: Dataset) -> Self {
        Self::with_parts(config, dataset, StdRng::from_entropy(), SystemClock)
    }
}

impl<R: Rng, C: Clock> SessionController<R, C> {
    pub fn with_parts(config: SessionConfig, dataset: Dataset, mut rng: R, clock: C) -> Self {
        let state = SessionState::initialize(&config, &dataset, &mut rng, clock.now());
        Self {
            dataset,
            state,
            rng,
            clock,
        }
    }

    fn dispatch(&mut self, event: SessionEvent) -> Option<SessionSignal> {
        let now = self.clock.now();
        self.state.apply_in_place(event, &mut self.rng, now)
    }

    /// Replace the answer field. Returns `Completed` the first time every entry is answered.
    pub fn update_input(&mut self, text: &str) -> Option<SessionSignal> {
        self.dispatch(SessionEvent::Input(text.to_string()))
    }

    pub fn push_char(&mut self, c: char) -> Option<SessionSignal> {
        let mut text = self.state.input().to_string();
        text.push(c);
        self.dispatch(SessionEvent::Input(text))
    }

    pub fn backspace(&mut self) -> Option<SessionSignal> {
        let mut text = self.state.input().to_string();
        text.pop()?;
        self.dispatch(SessionEvent::Input(text))
    }

    /// Move to the next entry. Returns false (and changes nothing) when not allowed.
    pub fn advance(&mut self) -> bool {
        let before = (self.state.history_index, self.state.history.len());
        self.dispatch(SessionEvent::Advance);
        before != (self.state.history_index, self.state.history.len())
    }

    /// Start over with the same configuration
    pub fn reset(&mut self) {
        let config = self.state.config.clone();
        self.state =
            SessionState::initialize(&config, &self.dataset, &mut self.rng, self.clock.now());
    }

    pub fn tick(&mut self) {
        self.dispatch(SessionEvent::Tick);
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &SessionConfig {
        self.state.config()
    }

    pub fn current(&self) -> &CharacterEntry {
        self.state.current()
    }

    pub fn prompt(&self) -> &str {
        self.state.prompt()
    }

    pub fn expected_answer(&self) -> &str {
        self.state.expected_answer()
    }

    pub fn input(&self) -> &str {
        self.state.input()
    }

    pub fn match_state(&self) -> MatchState {
        self.state.match_state()
    }

    pub fn completed_count(&self) -> usize {
        self.state.completed_count()
    }

    pub fn working_set_len(&self) -> usize {
        self.state.working_set().len()
    }

    /// Fraction of the working set answered, for the progress gauge
    pub fn progress_ratio(&self) -> f64 {
        self.completed_count() as f64 / self.working_set_len() as f64
    }

    pub fn history_index(&self) -> usize {
        self.state.history_index()
    }

    pub fn history_len(&self) -> usize {
        self.state.history_len()
    }

    /// Entries shown so far, oldest first
    pub fn history(&self) -> impl Iterator<Item = &CharacterEntry> + '_ {
        self.state.history()
    }

    pub fn position_label(&self) -> String {
        let n = self.history_index() + 1;
        if self.config().order.is_randomized() {
            format!("Practice {n} • Randomized")
        } else {
            format!("{n} / {}", self.working_set_len())
        }
    }

    pub fn can_advance(&self) -> bool {
        self.state.can_advance()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn elapsed_secs(&self) -> Option<u64> {
        self.state.elapsed_secs()
    }
}
