mod common;

use std::time::Duration;

use common::{
    COMMENTARY_PATH, FORECAST_PATH, GEOCODE_PATH, app_for, cli_for, commentary_body,
    forecast_body, geocode_body, madrid, paris, pump_for, pump_until,
};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use skycast::{
    app::{
        events::AppEvent,
        state::{AppMode, CommentaryState},
    },
    domain::{i18n::dictionary, preferences::Language},
};
use tokio::time::sleep;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, method, path, query_param},
};

async fn mount_forecast(server: &MockServer, latitude: &str, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .and(query_param("latitude", latitude))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(forecast_body(1, true))
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

async fn mount_commentary(server: &MockServer, city: &str, alert: &str, delay: Duration) {
    Mock::given(method("POST"))
        .and(path(COMMENTARY_PATH))
        .and(body_string_contains(city))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(commentary_body(alert))
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

#[tokio::test]
async fn default_load_for_madrid_reaches_ready() {
    let server = MockServer::start().await;
    mount_forecast(&server, "40.4165", Duration::ZERO).await;
    mount_commentary(&server, "Madrid", "Día agradable.", Duration::ZERO).await;

    let cli = cli_for(&server, &[]);
    let (mut app, tx, mut rx) = app_for(&cli);
    app.handle_event(AppEvent::Bootstrap, &tx)
        .await
        .expect("bootstrap");
    assert_eq!(app.mode, AppMode::Loading);

    pump_until(&mut app, &mut rx, &tx, |app| app.cycle_settled()).await;

    assert_eq!(app.mode, AppMode::Ready);
    let view = app.view.as_ref().expect("view");
    assert_eq!(view.place.name, "Madrid");
    assert_eq!(view.place.country, "ES");
    assert_eq!(view.forecast.len(), 4);
    assert_eq!(
        app.commentary,
        CommentaryState::Available("Día agradable.".to_string())
    );
    assert!(app.error_message().is_none());
}

#[tokio::test]
async fn server_error_fails_the_cycle_with_localized_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(commentary_body("never")))
        .expect(0)
        .mount(&server)
        .await;

    let cli = cli_for(&server, &[]);
    let (mut app, tx, mut rx) = app_for(&cli);
    app.handle_event(AppEvent::Bootstrap, &tx)
        .await
        .expect("bootstrap");
    pump_until(&mut app, &mut rx, &tx, |app| app.mode != AppMode::Loading).await;

    assert_eq!(app.mode, AppMode::Failed);
    assert!(app.view.is_none());
    assert_eq!(
        app.error_message(),
        Some(dictionary(Language::Es).fetch_error)
    );
    assert_eq!(app.commentary, CommentaryState::Unavailable);
}

#[tokio::test]
async fn commentary_failure_leaves_weather_ready_without_error() {
    let server = MockServer::start().await;
    mount_forecast(&server, "40.4165", Duration::ZERO).await;
    Mock::given(method("POST"))
        .and(path(COMMENTARY_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let cli = cli_for(&server, &[]);
    let (mut app, tx, mut rx) = app_for(&cli);
    app.handle_event(AppEvent::Bootstrap, &tx)
        .await
        .expect("bootstrap");
    pump_until(&mut app, &mut rx, &tx, |app| app.cycle_settled()).await;

    assert_eq!(app.mode, AppMode::Ready);
    assert!(app.view.is_some());
    assert_eq!(app.commentary, CommentaryState::Unavailable);
    assert!(app.error_message().is_none());
    assert!(app.last_error.is_none());
}

#[tokio::test]
async fn newer_cycle_wins_regardless_of_arrival_order() {
    let server = MockServer::start().await;
    mount_forecast(&server, "40.4165", Duration::from_millis(400)).await;
    mount_forecast(&server, "48.85341", Duration::ZERO).await;
    mount_commentary(&server, "Madrid", "Madrid text", Duration::ZERO).await;
    mount_commentary(&server, "Paris", "Paris text", Duration::ZERO).await;

    let cli = cli_for(&server, &[]);
    let (mut app, tx, mut rx) = app_for(&cli);
    app.start_fetch(madrid(), &tx);
    app.start_fetch(paris(), &tx);

    pump_for(&mut app, &mut rx, &tx, Duration::from_millis(900)).await;

    assert_eq!(app.mode, AppMode::Ready);
    assert_eq!(app.view.as_ref().map(|v| v.place.name.as_str()), Some("Paris"));
    assert_eq!(
        app.commentary,
        CommentaryState::Available("Paris text".to_string())
    );
    let madrid_calls = server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|req| req.url.query().is_some_and(|q| q.contains("latitude=40.4165")))
        .count();
    assert_eq!(madrid_calls, 1, "stale request still completes, only its result is dropped");
}

#[tokio::test]
async fn late_commentary_from_previous_cycle_is_discarded() {
    let server = MockServer::start().await;
    mount_forecast(&server, "40.4165", Duration::ZERO).await;
    mount_forecast(&server, "48.85341", Duration::ZERO).await;
    mount_commentary(&server, "Madrid", "Madrid text", Duration::from_millis(400)).await;
    mount_commentary(&server, "Paris", "Paris text", Duration::ZERO).await;

    let cli = cli_for(&server, &[]);
    let (mut app, tx, mut rx) = app_for(&cli);
    app.start_fetch(madrid(), &tx);
    pump_until(&mut app, &mut rx, &tx, |app| app.mode == AppMode::Ready).await;
    assert_eq!(app.commentary, CommentaryState::Pending);

    app.start_fetch(paris(), &tx);
    pump_for(&mut app, &mut rx, &tx, Duration::from_millis(900)).await;

    assert_eq!(app.view.as_ref().map(|v| v.place.name.as_str()), Some("Paris"));
    assert_eq!(
        app.commentary,
        CommentaryState::Available("Paris text".to_string())
    );
}

#[tokio::test]
async fn repeated_fetch_yields_structurally_equal_views() {
    let server = MockServer::start().await;
    mount_forecast(&server, "40.4165", Duration::ZERO).await;
    mount_commentary(&server, "Madrid", "Same again.", Duration::ZERO).await;

    let cli = cli_for(&server, &[]);
    let (mut app, tx, mut rx) = app_for(&cli);
    app.start_fetch(madrid(), &tx);
    pump_until(&mut app, &mut rx, &tx, |app| app.cycle_settled()).await;
    let first = app.view.clone().expect("first view");

    app.start_fetch(madrid(), &tx);
    pump_until(&mut app, &mut rx, &tx, |app| app.cycle_settled()).await;
    let second = app.view.clone().expect("second view");

    assert!(first.same_content(&second));
}

#[tokio::test]
async fn language_change_refetches_without_geocoding() {
    let server = MockServer::start().await;
    mount_forecast(&server, "40.4165", Duration::ZERO).await;
    mount_commentary(&server, "Spanish (es)", "Hace buen tiempo.", Duration::ZERO).await;
    mount_commentary(&server, "English (en)", "Nice weather.", Duration::ZERO).await;
    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocode_body(&[madrid()])))
        .expect(0)
        .mount(&server)
        .await;

    let cli = cli_for(&server, &[]);
    let (mut app, tx, mut rx) = app_for(&cli);
    app.handle_event(AppEvent::Bootstrap, &tx)
        .await
        .expect("bootstrap");
    pump_until(&mut app, &mut rx, &tx, |app| app.cycle_settled()).await;
    let first_cycle = app.current_cycle();

    app.set_language(Language::En, &tx);
    assert_eq!(app.mode, AppMode::Loading);
    pump_until(&mut app, &mut rx, &tx, |app| app.cycle_settled()).await;

    assert!(app.current_cycle() > first_cycle);
    assert_eq!(
        app.commentary,
        CommentaryState::Available("Nice weather.".to_string())
    );
}

#[tokio::test]
async fn typing_burst_issues_one_lookup_for_the_last_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocode_body(&[
            skycast::domain::weather::Place::new("London", 51.50853, -0.12574, "United Kingdom"),
        ])))
        .mount(&server)
        .await;

    let cli = cli_for(&server, &["--debounce-ms", "300"]);
    let (mut app, tx, mut rx) = app_for(&cli);
    app.set_query("Lon", &tx);
    sleep(Duration::from_millis(100)).await;
    app.set_query("Lond", &tx);
    sleep(Duration::from_millis(100)).await;
    app.set_query("London", &tx);

    pump_until(&mut app, &mut rx, &tx, |app| app.search.showing_suggestions()).await;
    pump_for(&mut app, &mut rx, &tx, Duration::from_millis(500)).await;

    let requests = server.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
    assert!(
        requests[0]
            .url
            .query_pairs()
            .any(|(key, value)| key == "name" && value == "London")
    );
    assert_eq!(app.search.suggestions()[0].country, "United Kingdom");
}

#[tokio::test]
async fn single_character_query_never_searches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocode_body(&[madrid()])))
        .expect(0)
        .mount(&server)
        .await;

    let cli = cli_for(&server, &["--debounce-ms", "20"]);
    let (mut app, tx, mut rx) = app_for(&cli);
    app.handle_event(key(KeyCode::Char('M')), &tx)
        .await
        .expect("type");
    pump_for(&mut app, &mut rx, &tx, Duration::from_millis(200)).await;

    assert!(app.search.suggestions().is_empty());
}

#[tokio::test]
async fn keyboard_selection_fetches_the_highlighted_place() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(geocode_body(&[madrid(), paris()])),
        )
        .mount(&server)
        .await;
    mount_forecast(&server, "48.85341", Duration::ZERO).await;
    mount_commentary(&server, "Paris", "Bonne journée.", Duration::ZERO).await;

    let cli = cli_for(&server, &["--debounce-ms", "20"]);
    let (mut app, tx, mut rx) = app_for(&cli);
    for ch in "Pa".chars() {
        app.handle_event(key(KeyCode::Char(ch)), &tx)
            .await
            .expect("type");
    }
    pump_until(&mut app, &mut rx, &tx, |app| app.search.showing_suggestions()).await;

    app.handle_event(key(KeyCode::Down), &tx).await.expect("down");
    app.handle_event(key(KeyCode::Down), &tx).await.expect("down");
    app.handle_event(key(KeyCode::Enter), &tx).await.expect("enter");
    assert_eq!(app.search.query(), "Paris");

    pump_until(&mut app, &mut rx, &tx, |app| app.cycle_settled()).await;
    let view = app.view.as_ref().expect("view");
    assert_eq!(view.place.heading(), "Paris, France");
    assert_eq!(
        app.commentary,
        CommentaryState::Available("Bonne journée.".to_string())
    );
}
