use std::collections::BTreeSet;
use std::time::Instant;

use kanapro::config::{Order, SessionConfig};
use kanapro::dataset::{Category, CharacterEntry, Dataset};
use kanapro::runtime::ManualClock;
use kanapro::session::{MatchState, SessionController, SessionEvent, SessionSignal, SessionState};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn two_kana() -> Dataset {
    Dataset::from_entries(vec![
        CharacterEntry::new("あ", "a", Category::Gojuon),
        CharacterEntry::new("か", "ka", Category::Gojuon),
    ])
    .unwrap()
}

fn controller(config: SessionConfig, dataset: Dataset) -> SessionController<StdRng, ManualClock> {
    SessionController::with_parts(config, dataset, StdRng::seed_from_u64(42), ManualClock::new())
}

#[test]
fn two_entry_walkthrough() {
    let config = SessionConfig::from_params(Some("symbol-to-text"), None, None, Some("gojuon"));
    let mut session = controller(config, two_kana());

    assert_eq!(session.current().symbol, "あ");
    assert_eq!(session.update_input("a"), None);
    assert_eq!(session.match_state(), MatchState::Correct);
    assert_eq!(session.completed_count(), 1);
    assert!(session.state().is_completed(&CharacterEntry::new("あ", "a", Category::Gojuon)));

    assert!(session.advance());
    assert_eq!(session.current().symbol, "か");
    assert_eq!(session.history_len(), 2);

    assert_eq!(session.update_input("ka"), Some(SessionSignal::Completed));
    assert_eq!(session.completed_count(), 2);
}

#[test]
fn romaji_prompt_expects_kana() {
    let config = SessionConfig::from_params(Some("text-to-symbol"), None, None, None);
    let mut session = controller(config, two_kana());

    assert_eq!(session.prompt(), "a");
    session.update_input("a");
    assert_eq!(session.match_state(), MatchState::Incorrect);
    session.update_input("あ");
    assert_eq!(session.match_state(), MatchState::Correct);
}

#[test]
fn empty_filter_uses_full_table() {
    let dataset = Dataset::load().unwrap();
    let mut config = SessionConfig::default();
    config.categories = BTreeSet::new();

    let session = controller(config, dataset.clone());
    assert_eq!(session.state().working_set(), dataset.entries());
}

#[test]
fn filter_without_matches_falls_back() {
    let config = SessionConfig::from_params(None, None, None, Some("dakuon"));
    let session = controller(config, two_kana());
    assert_eq!(session.working_set_len(), 2);
}

#[test]
fn sequential_visits_each_entry_once_in_order() {
    let dataset = Dataset::load().unwrap();
    let config = SessionConfig::from_params(Some("symbol-to-text"), None, None, Some("yuon"));
    let mut session = controller(config, dataset.clone());

    let expected: Vec<String> = dataset
        .filter(&[Category::Yoon].into_iter().collect())
        .into_iter()
        .map(|e| e.symbol)
        .collect();

    let mut visited = vec![session.current().symbol.clone()];
    loop {
        let answer = session.expected_answer().to_string();
        session.update_input(&answer);
        if !session.advance() {
            break;
        }
        visited.push(session.current().symbol.clone());
    }
    assert_eq!(visited, expected);

    // past the last entry nothing moves
    let before = session.state().clone();
    assert!(!session.advance());
    assert_eq!(session.history_len(), before.history_len());
    assert_eq!(session.history_index(), before.history_index());
    assert_eq!(session.match_state(), MatchState::Correct);
}

#[test]
fn randomized_picks_stay_in_working_set() {
    let dataset = Dataset::load().unwrap();
    let config = SessionConfig::from_params(None, Some("true"), None, Some("gojuon,dakuon"));
    assert_eq!(config.order, Order::Randomized);
    let mut session = controller(config, dataset);

    let keys: BTreeSet<String> = session
        .state()
        .working_set()
        .iter()
        .map(CharacterEntry::key)
        .collect();
    assert_eq!(keys.len(), 71);

    for _ in 0..100 {
        let answer = session.expected_answer().to_string();
        session.update_input(&answer);
        assert!(session.advance());
        assert!(keys.contains(&session.current().key()));
    }
    assert_eq!(session.history_len(), 101);
}

#[test]
fn correct_answer_is_counted_once() {
    let mut session = controller(SessionConfig::default(), two_kana());
    for _ in 0..3 {
        session.update_input("あ");
        session.update_input("");
    }
    assert_eq!(session.completed_count(), 1);
}

#[test]
fn completion_fires_again_only_after_reset() {
    let config = SessionConfig::from_params(Some("symbol-to-text"), None, None, None);
    let mut session = controller(config, two_kana());

    let mut fired = 0;
    for answer in ["a", "ka", "ka", "ka"] {
        if session.update_input(answer) == Some(SessionSignal::Completed) {
            fired += 1;
        }
        session.advance();
    }
    assert_eq!(fired, 1);

    session.reset();
    assert_eq!(session.completed_count(), 0);
    assert_eq!(session.history_index(), 0);
    assert_eq!(session.history_len(), 1);

    session.update_input("a");
    session.advance();
    assert_eq!(
        session.update_input("ka"),
        Some(SessionSignal::Completed)
    );
}

#[test]
fn pure_transitions_are_deterministic() {
    let dataset = Dataset::load().unwrap();
    let config = SessionConfig::from_params(None, Some("true"), None, None);
    let now = Instant::now();

    let run = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = SessionState::initialize(&config, &dataset, &mut rng, now);
        let mut seen = vec![state.current().key()];
        for _ in 0..10 {
            let answer = state.expected_answer().to_string();
            let (next, _) = state.apply(SessionEvent::Input(answer), &mut rng, now);
            let (next, _) = next.apply(SessionEvent::Advance, &mut rng, now);
            seen.push(next.current().key());
            state = next;
        }
        seen
    };

    assert_eq!(run(7), run(7));
}
