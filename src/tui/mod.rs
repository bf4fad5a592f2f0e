//! Terminal UI for Desdemona

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use desdemona::{
    ChannelObserver, HttpDecisionClient, PacedAnimator, Position, SessionConfig, SessionEvent,
    SharedGrid, SyncEngine, lock_grid,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use app::App;

/// Run the TUI client
pub async fn run_tui(config: SessionConfig) -> Result<()> {
    // Log to a file so tracing output does not corrupt the screen
    let log_file = std::fs::File::create("desdemona_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(service_url = %config.service_url(), "Starting Desdemona TUI");

    let service = HttpDecisionClient::new(config.service_url(), config.request_timeout())?;
    let mut engine = SyncEngine::new(
        service,
        PacedAnimator::new(config.flip_duration()),
        config.engine_settings(),
    );
    let (observer, mut event_rx) = ChannelObserver::new();
    engine.subscribe(Box::new(observer));
    let grid = engine.grid();

    let session = tokio::spawn(async move { engine.run().await });

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_session_ui(&mut terminal, &grid, &mut event_rx).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if !session.is_finished() {
        info!("Abandoning session in progress");
        session.abort();
    }

    if let Err(err) = res {
        error!(error = ?err, "UI loop error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Renders the shared grid and forwards key presses until the user quits.
#[instrument(skip_all)]
async fn run_session_ui(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    grid: &SharedGrid,
    event_rx: &mut mpsc::UnboundedReceiver<SessionEvent>,
) -> Result<()> {
    let mut app = App::new(Position::new(3, 3)?);

    loop {
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        {
            // Eligibility changes under a resting cursor, so refresh its preview
            let mut view = lock_grid(grid);
            view.hover(app.cursor());
            terminal.draw(|frame| ui::draw(frame, &view, &app))?;
        }

        // Short poll keeps flip animations moving between key presses
        if !event::poll(Duration::from_millis(50))? {
            tokio::task::yield_now().await;
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    info!(finished = app.finished(), "User quit");
                    return Ok(());
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    debug!(position = %app.cursor(), "Submitting move");
                    lock_grid(grid).submit(app.cursor());
                }
                code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                    let next = input::move_cursor(app.cursor(), code);
                    lock_grid(grid).unhover(app.cursor());
                    app.set_cursor(next);
                }
                _ => {}
            }
        }
    }
}
