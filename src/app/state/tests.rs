use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use super::{AppMode, AppState, CommentaryState};
use crate::{
    app::{events::AppEvent, settings::PreferencesStore},
    domain::{
        i18n::dictionary,
        preferences::{EffectiveTheme, Language, ThemeMode, UserPreferences},
    },
    test_support::{madrid_place, offline_cli, paris_place, sample_report},
};

fn test_state() -> (AppState, mpsc::Sender<AppEvent>, mpsc::Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel(64);
    let state = AppState::new(
        &offline_cli(),
        PreferencesStore::in_memory(UserPreferences::default()),
    );
    (state, tx, rx)
}

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

async fn succeed(state: &mut AppState, tx: &mpsc::Sender<AppEvent>, place_is_paris: bool) {
    let place = if place_is_paris {
        paris_place()
    } else {
        madrid_place()
    };
    state
        .handle_event(
            AppEvent::FetchSucceeded {
                cycle: state.current_cycle(),
                place,
                report: sample_report(),
            },
            tx,
        )
        .await
        .expect("handle success");
}

#[tokio::test]
async fn starts_idle_with_pending_commentary() {
    let (state, _tx, _rx) = test_state();
    assert_eq!(state.mode, AppMode::Idle);
    assert_eq!(state.commentary, CommentaryState::Pending);
    assert!(state.view.is_none());
    assert!(state.error_message().is_none());
}

#[tokio::test]
async fn starting_a_cycle_keeps_previous_view_on_screen() {
    let (mut state, tx, _rx) = test_state();
    state.start_fetch(madrid_place(), &tx);
    succeed(&mut state, &tx, false).await;
    assert_eq!(state.mode, AppMode::Ready);

    state.start_fetch(paris_place(), &tx);
    assert_eq!(state.mode, AppMode::Loading);
    assert_eq!(state.commentary, CommentaryState::Pending);
    assert_eq!(state.view.as_ref().map(|v| v.place.name.as_str()), Some("Madrid"));
}

#[tokio::test]
async fn older_cycle_never_overwrites_newer_view() {
    let (mut state, tx, _rx) = test_state();
    state.start_fetch(madrid_place(), &tx);
    let madrid_cycle = state.current_cycle();
    state.start_fetch(paris_place(), &tx);

    succeed(&mut state, &tx, true).await;
    state
        .handle_event(
            AppEvent::FetchSucceeded {
                cycle: madrid_cycle,
                place: madrid_place(),
                report: sample_report(),
            },
            &tx,
        )
        .await
        .expect("stale success");

    assert_eq!(state.mode, AppMode::Ready);
    assert_eq!(state.view.as_ref().map(|v| v.place.name.as_str()), Some("Paris"));
}

#[tokio::test]
async fn failure_clears_view_and_marks_commentary_unavailable() {
    let (mut state, tx, _rx) = test_state();
    state.start_fetch(madrid_place(), &tx);
    succeed(&mut state, &tx, false).await;

    state.start_fetch(madrid_place(), &tx);
    let cycle = state.current_cycle();
    state
        .handle_event(
            AppEvent::FetchFailed {
                cycle,
                error: "forecast request returned 500".to_string(),
            },
            &tx,
        )
        .await
        .expect("handle failure");

    assert_eq!(state.mode, AppMode::Failed);
    assert!(state.view.is_none());
    assert_eq!(state.commentary, CommentaryState::Unavailable);
    assert_eq!(
        state.error_message(),
        Some(dictionary(Language::Es).fetch_error)
    );
    assert!(state.cycle_settled());
}

#[tokio::test]
async fn stale_failure_is_ignored() {
    let (mut state, tx, _rx) = test_state();
    state.start_fetch(madrid_place(), &tx);
    let stale = state.current_cycle();
    state.start_fetch(paris_place(), &tx);
    succeed(&mut state, &tx, true).await;

    state
        .handle_event(
            AppEvent::FetchFailed {
                cycle: stale,
                error: "timeout".to_string(),
            },
            &tx,
        )
        .await
        .expect("stale failure");
    assert_eq!(state.mode, AppMode::Ready);
    assert!(state.view.is_some());
}

#[tokio::test]
async fn commentary_from_an_older_cycle_is_discarded() {
    let (mut state, tx, _rx) = test_state();
    state.start_fetch(madrid_place(), &tx);
    let first = state.current_cycle();
    succeed(&mut state, &tx, false).await;
    state.start_fetch(paris_place(), &tx);

    state
        .handle_event(
            AppEvent::CommentaryResolved {
                cycle: first,
                text: Some("Sunny in Madrid".to_string()),
            },
            &tx,
        )
        .await
        .expect("stale commentary");
    assert_eq!(state.commentary, CommentaryState::Pending);

    succeed(&mut state, &tx, true).await;
    state
        .handle_event(
            AppEvent::CommentaryResolved {
                cycle: state.current_cycle(),
                text: None,
            },
            &tx,
        )
        .await
        .expect("current commentary");
    assert_eq!(state.commentary, CommentaryState::Unavailable);
    assert!(state.cycle_settled());
}

#[tokio::test]
async fn language_change_refetches_active_place() {
    let (mut state, tx, _rx) = test_state();
    state.start_fetch(madrid_place(), &tx);
    succeed(&mut state, &tx, false).await;
    let before = state.current_cycle();

    state.set_language(Language::En, &tx);

    assert!(state.current_cycle() > before);
    assert_eq!(state.mode, AppMode::Loading);
    assert_eq!(state.preferences().language, Language::En);
    assert_eq!(state.active_place().map(|p| p.name.as_str()), Some("Madrid"));
}

#[tokio::test]
async fn language_change_without_view_only_updates_preference() {
    let (mut state, tx, _rx) = test_state();
    let before = state.current_cycle();
    state.set_language(Language::Fr, &tx);
    assert_eq!(state.current_cycle(), before);
    assert_eq!(state.mode, AppMode::Idle);
    assert_eq!(state.preferences().language, Language::Fr);
}

#[tokio::test]
async fn function_keys_update_preferences() {
    let (mut state, tx, _rx) = test_state();
    state.handle_event(key(KeyCode::F(2)), &tx).await.expect("f2");
    assert_eq!(state.preferences().theme, ThemeMode::Light);
    state.handle_event(key(KeyCode::F(4)), &tx).await.expect("f4");
    assert_eq!(state.preferences().time_format.as_str(), "12h");
    state.handle_event(key(KeyCode::F(3)), &tx).await.expect("f3");
    assert_eq!(state.preferences().language, Language::Es.next());
}

#[tokio::test]
async fn auto_theme_follows_the_latest_view() {
    let (mut state, tx, _rx) = test_state();
    assert_eq!(state.effective_theme(), EffectiveTheme::Light);

    state.start_fetch(madrid_place(), &tx);
    let mut report = sample_report();
    report.snapshot.is_day = false;
    state
        .handle_event(
            AppEvent::FetchSucceeded {
                cycle: state.current_cycle(),
                place: madrid_place(),
                report,
            },
            &tx,
        )
        .await
        .expect("night view");
    assert_eq!(state.effective_theme(), EffectiveTheme::Dark);
}

#[tokio::test]
async fn escape_closes_suggestions_before_quitting() {
    let (mut state, tx, mut rx) = test_state();
    let token = state.search.set_query("Par").expect("searchable");
    state
        .handle_event(
            AppEvent::SuggestionsReady {
                token,
                places: vec![paris_place()],
            },
            &tx,
        )
        .await
        .expect("suggestions");
    assert!(state.search.showing_suggestions());

    state.handle_event(key(KeyCode::Esc), &tx).await.expect("esc");
    assert!(!state.search.showing_suggestions());
    assert!(rx.try_recv().is_err());

    assert!(state.running);

    state.handle_event(key(KeyCode::Esc), &tx).await.expect("esc");
    assert!(!state.running);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn ctrl_c_stops_the_loop_without_queueing_events() {
    let (mut state, tx, mut rx) = test_state();
    let token = state.search.set_query("Par").expect("searchable");
    state.search.apply_suggestions(token, vec![paris_place()]);

    state
        .handle_event(
            AppEvent::Input(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
            &tx,
        )
        .await
        .expect("ctrl-c");

    assert!(!state.running);
    assert_eq!(state.search.query(), "Par");
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn enter_fetches_first_suggestion() {
    let (mut state, tx, _rx) = test_state();
    let token = state.search.set_query("Par").expect("searchable");
    state.search.apply_suggestions(token, vec![paris_place(), madrid_place()]);

    state.handle_event(key(KeyCode::Enter), &tx).await.expect("enter");

    assert_eq!(state.mode, AppMode::Loading);
    assert_eq!(state.active_place().map(|p| p.name.as_str()), Some("Paris"));
    assert_eq!(state.search.query(), "Paris");
    assert!(state.search.suggestions().is_empty());
}

#[tokio::test]
async fn typing_edits_query_and_ignores_modified_keys() {
    let (mut state, tx, _rx) = test_state();
    for ch in ['M', 'a', 'd'] {
        state.handle_event(key(KeyCode::Char(ch)), &tx).await.expect("char");
    }
    state
        .handle_event(
            AppEvent::Input(Event::Key(KeyEvent::new(
                KeyCode::Char('x'),
                KeyModifiers::ALT,
            ))),
            &tx,
        )
        .await
        .expect("alt char");
    state.handle_event(key(KeyCode::Backspace), &tx).await.expect("backspace");
    assert_eq!(state.search.query(), "Ma");
}
