pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod resilience;
pub mod ui;

#[cfg(test)]
mod test_support;

use std::{
    fs::OpenOptions,
    io::{self, Stdout},
    sync::Mutex,
    time::Duration,
};

use anyhow::{Context, Result, anyhow, bail};
use app::events::{AppEvent, spawn_input_task};
use app::settings::PreferencesStore;
use app::state::{AppMode, AppState};
use chrono::Utc;
use cli::Cli;
use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{sync::mpsc, time::interval};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` wins over the defaults.
///
/// The full-screen UI owns stderr, so without `--log-file` it logs nothing
/// unless asked to.
pub fn init_logging(cli: &Cli) -> Result<()> {
    let default_directive = if cli.one_shot || cli.log_file.is_some() {
        "warn"
    } else {
        "off"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match &cli.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(io::stderr).try_init(),
    };
    installed.map_err(|err| anyhow!("initializing logging failed: {err}"))
}

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    let preferences = PreferencesStore::load(&cli, !cli.no_persist);
    if let Some(path) = preferences.path() {
        debug!(path = %path.display(), "using preferences file");
    }

    if cli.one_shot {
        return run_one_shot(&cli, preferences).await;
    }

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, &cli, preferences).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_inner(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    cli: &Cli,
    preferences: PreferencesStore,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);
    let mut app = AppState::new(cli, preferences);
    let mut preference_changes = app.subscribe_preferences();
    // Keeps the local clock current while nothing else happens.
    let mut clock = interval(Duration::from_secs(1));

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    app.handle_event(AppEvent::Input(input), &tx).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx).await?;
                }
            }
            changed = preference_changes.changed() => {
                if changed.is_ok() {
                    let prefs = *preference_changes.borrow_and_update();
                    debug!(
                        language = prefs.language.code(),
                        theme = prefs.theme.as_str(),
                        time_format = prefs.time_format.as_str(),
                        "preferences changed"
                    );
                }
            }
            _ = clock.tick() => {}
        }

        terminal.draw(|frame| ui::render(frame, &app, cli))?;
    }

    Ok(())
}

/// Runs a single cycle for the default place, waits for its commentary and
/// prints the result. A failed weather fetch is reported as an error.
async fn run_one_shot(cli: &Cli, preferences: PreferencesStore) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(16);
    let mut app = AppState::new(cli, preferences);
    app.handle_event(AppEvent::Bootstrap, &tx).await?;

    while !app.cycle_settled() {
        tokio::select! {
            maybe_event = rx.recv() => match maybe_event {
                Some(event) => app.handle_event(event, &tx).await?,
                None => break,
            },
            _ = tokio::signal::ctrl_c() => bail!("interrupted"),
        }
    }

    print!("{}", ui::text::render_text(&app, Utc::now()));

    if app.mode == AppMode::Failed {
        bail!(
            "weather fetch failed: {}",
            app.last_error.as_deref().unwrap_or("unknown error")
        );
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        existing(panic);
    }));
}
