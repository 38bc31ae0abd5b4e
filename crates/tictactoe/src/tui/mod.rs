//! Terminal UI: input capture, timers and rendering around the engine.

mod app;
mod input;
mod ui;

pub use app::App;

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, error, info, instrument};

/// Run the terminal UI until the player quits.
pub async fn run_tui(config: AppConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::from_config(&config);
    let res = run_loop(&mut terminal, &mut app).await;
    app.shutdown();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(stats = ?app.stats(), "Session ended");
    res
}

/// Draw, then wait for input or the next timer, whichever comes first.
#[instrument(skip_all)]
async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut screen = Rect::default();

    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| {
            screen = f.area();
            ui::draw(f, app, now);
        })?;

        if app.should_quit() {
            return Ok(());
        }

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => handle_event(app, event, screen),
                Some(Err(e)) => return Err(e.into()),
                None => {
                    debug!("Input stream closed");
                    return Ok(());
                }
            },
            _ = sleep_until(app.next_wakeup(now)) => {}
        }
    }
}

fn handle_event(app: &mut App, event: Event, screen: Rect) {
    let now = Instant::now();
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code, now),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            if let Some(pos) = ui::cell_at(screen, mouse.column, mouse.row) {
                debug!(%pos, "Square clicked");
                app.click(pos, now);
            }
        }
        _ => {}
    }
}
