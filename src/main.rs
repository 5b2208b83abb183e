use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::Path, time::Duration};
use tokio::sync::mpsc;

use maildeck::app::events::AppEvent;
use maildeck::app::{input_handler, App, Message};
use maildeck::config::AppConfig;
use maildeck::ui;

/// Maildeck - a tiny terminal inbox with smart recipient truncation 📬
#[derive(Parser, Debug)]
#[command(name = "maildeck", version, about)]
struct Args {
    /// Disable mouse capture (no hover tooltips)
    #[arg(long)]
    no_mouse: bool,

    /// Write a debug log to the given file
    #[arg(long)]
    log: Option<std::path::PathBuf>,
}

fn init_logging(path: &Path) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let file = std::fs::File::create(path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    human_panic::setup_panic!();
    let args = Args::parse();

    // Keep the guard alive so buffered log lines flush on exit
    let _log_guard = match args.log.as_deref() {
        Some(path) => Some(init_logging(path)?),
        None => None,
    };

    let config = AppConfig::load();
    let theme = ui::theme::load_current_theme();
    let mouse_enabled = config.mouse && !args.no_mouse;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, theme, Message::samples());

    // Mount-time fitting pass. Runs before the event loop consumes anything,
    // so it always precedes the first resize-triggered pass.
    let size = terminal.size()?;
    app.recompute_fits(size.width);

    let (tx, mut rx) = mpsc::channel(100);

    // 1. Input Event Task
    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if tx_input.send(AppEvent::Input(event)).await.is_err() {
                break;
            }
        }
    });

    // 2. Redraw Tick Task
    let tx_tick = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(100));
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).await.is_err() {
                break;
            }
        }
    });

    while app.is_running {
        terminal.draw(|f| ui::ui(f, &mut app))?;

        if let Some(event) = rx.recv().await {
            match event {
                AppEvent::Input(Event::Key(key)) => input_handler::handle_key(key, &mut app),
                AppEvent::Input(Event::Mouse(mouse)) if mouse_enabled => {
                    input_handler::handle_mouse(mouse, &mut app)
                }
                AppEvent::Input(Event::Resize(width, _)) => {
                    tracing::debug!(width, "terminal resized, refitting recipients");
                    app.recompute_fits(width);
                }
                AppEvent::Input(_) => {}
                AppEvent::Tick => {}
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
