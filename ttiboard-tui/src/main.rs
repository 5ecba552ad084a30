//! ttiboard TUI: ranking table and history chart for sandbox TTI benchmarks.
//!
//! Panels:
//! 1. Ranking: providers sorted by a clickable statistic column
//! 2. History: median TTI over time, toggleable per provider
//! 3. Help: keyboard and mouse bindings

use std::fs::{self, OpenOptions};
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use ttiboard_tui::{input, ui, AppState, DataSources, TuiConfig};

#[derive(Parser)]
#[command(
    name = "ttiboard-tui",
    about = "Sandbox time-to-interactive benchmark dashboard"
)]
struct Args {
    /// Results JSON file or directory of JSON files. Sample data when neither input is given.
    #[arg(long)]
    results: Option<PathBuf>,

    /// History JSON file.
    #[arg(long)]
    history: Option<PathBuf>,

    /// Config file. Defaults to <config dir>/ttiboard/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file. Defaults to <cache dir>/ttiboard/ttiboard.log.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.log_file)?;

    let config = match args.config.or_else(TuiConfig::default_path) {
        Some(path) => TuiConfig::load(&path)?,
        None => TuiConfig::default(),
    };

    let sources = DataSources {
        results: args.results,
        history: args.history,
    };
    let mut app = AppState::new(&config, sources)?;

    // Initial load fails hard; later reloads only report to the status bar.
    let (results, history) = app.sources.load().context("failed to load input data")?;
    app.replace_data(results, history);
    if app.sources.is_sample() {
        app.set_warning("No input files given; showing sample data");
    } else {
        app.set_status(format!("Loaded {} providers", app.results.len()));
    }

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    tracing::info!("exiting");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

/// Log to a file; the terminal belongs to the UI.
fn init_logging(path: Option<PathBuf>) -> Result<()> {
    let Some(path) = path.or_else(|| {
        dirs::cache_dir().map(|dir| dir.join("ttiboard").join("ttiboard.log"))
    }) else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log dir {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env("TTIBOARD_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    tracing::info!(log = %path.display(), "ttiboard-tui starting");
    Ok(())
}
