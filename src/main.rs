use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four_minimax::config::{AppConfig, OpponentKind};
use connect_four_minimax::controller::GameController;
use connect_four_minimax::ui::{self, App};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

/// Play Connect Four against a minimax opponent.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override search depth in plies
    #[arg(long)]
    depth: Option<usize>,

    /// Override the opponent
    #[arg(long, value_enum)]
    opponent: Option<OpponentKind>,

    /// Disable alpha-beta cutoffs (same moves, slower)
    #[arg(long)]
    no_pruning: bool,

    /// Threads used at the search root
    #[arg(long)]
    threads: Option<usize>,

    /// Play on stdin/stdout instead of the terminal UI
    #[arg(long)]
    headless: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.headless);

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(opponent) = cli.opponent {
        config.game.opponent = opponent;
    }
    if let Some(threads) = cli.threads {
        config.search.root_threads = threads;
    }
    if cli.no_pruning {
        config.search.pruning = false;
    }
    config.validate().context("invalid settings")?;

    let mut controller = GameController::from_config(&config);

    if cli.headless {
        let stdin = io::stdin();
        let outcome = ui::text::run(&mut controller, stdin.lock(), io::stdout().lock())?;
        tracing::info!(?outcome, "session ended");
        return Ok(());
    }

    run_tui(App::new(controller)).context("terminal UI failed")
}

/// Logs go to stderr. The TUI owns the screen, so it stays silent unless
/// RUST_LOG asks otherwise.
fn init_tracing(headless: bool) {
    let default = if headless { "warn" } else { "off" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_tui(mut app: App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even if the loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
