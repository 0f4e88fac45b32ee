use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};
use tracing::info;

use wordzenith::api::DatamuseClient;
use wordzenith::config::Config;
use wordzenith::{handlers, ui, utils, App};

/// Look up words that start with a letter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/wordzenith-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Word service endpoint
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    utils::init_tracing(args.debug);

    let (mut config, config_path) = Config::load(args.config)?;
    if let Some(path) = &config_path {
        info!(path = %path.display(), "Loaded config");
    }

    // Override config with CLI flags
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(timeout_secs) = args.timeout_secs {
        config.timeout_secs = timeout_secs;
    }

    let timeout = Duration::from_secs(config.timeout_secs.max(1));
    let client = DatamuseClient::new(config.base_url.clone(), timeout)?;
    info!(base_url = client.base_url(), timeout_secs = timeout.as_secs(), "Starting");

    let mut app = App::with_source(client, timeout);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Dropping the app closes the lookup channel and aborts anything in flight
    drop(app);
    info!("Exiting");

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_quit {
            break;
        }

        // Process lookup responses (non-blocking)
        app.drain_responses();
        app.tick();

        // Short poll keeps the spinner moving and responses prompt
        if event::poll(Duration::from_millis(80))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key);
            }
        }

        // Let the lookup tasks make progress between frames
        tokio::task::yield_now().await;
    }

    Ok(())
}
