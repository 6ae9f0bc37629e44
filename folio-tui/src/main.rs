//! Folio TUI — portfolio performance dashboard.
//!
//! Layout: line chart on top, switchable lower panel (Series / View / Help),
//! one-line status bar. The dataset source comes from the first CLI
//! argument, falling back to `folio.toml`, falling back to synthetic demo
//! data.

mod app;
mod input;
mod theme;
mod ui;
mod worker;

use std::io::{self, stdout};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use folio_core::config::FolioConfig;
use folio_core::data::Source;

use crate::app::{AppState, LoadState};
use crate::worker::{WorkerCommand, WorkerResponse};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let config = FolioConfig::discover(std::path::Path::new("."))?;
    let source = std::env::args()
        .nth(1)
        .map(|arg| Source::parse(&arg))
        .or_else(|| config.source.as_deref().map(Source::parse));

    // Worker channels
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let worker_handle = worker::spawn_worker(cmd_rx, resp_tx);

    let mut app = AppState::new(cmd_tx.clone(), resp_rx, config, source);
    app.request_load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Shutdown worker
    let _ = cmd_tx.send(WorkerCommand::Shutdown);
    let _ = worker_handle.join();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain worker responses (non-blocking)
        while let Ok(response) = app.worker_rx.try_recv() {
            handle_worker_response(app, response);
        }

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

fn handle_worker_response(app: &mut AppState, response: WorkerResponse) {
    match response {
        WorkerResponse::DatasetLoaded { dataset, label } => {
            let summary = format!(
                "Loaded {label}: {} series, {} points",
                dataset.series.len(),
                dataset.points.len()
            );
            let empty = dataset.is_empty();
            app.install_dataset(dataset);
            if empty {
                app.set_warning(format!("Loaded {label}, but it has no chartable data"));
            } else {
                app.set_status(summary);
            }
        }
        WorkerResponse::LoadFailed { error } => {
            app.load = LoadState::Failed(error.clone());
            app.set_error(error);
        }
    }
}
