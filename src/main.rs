use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing_subscriber::EnvFilter;

use wp::config::Config;
use wp::editor::Editor;
use wp::plugins::ExtensionRegistry;
use wp::ui;

/// A WordPerfect-style terminal word processor
#[derive(Parser, Debug)]
#[command(name = "wp")]
#[command(version)]
struct Cli {
    /// Document to open at startup (a filename under the document root)
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the document root directory
    #[arg(long, value_name = "PATH")]
    root: Option<PathBuf>,

    /// Path to log file for editor diagnostics
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Skip the startup splash screen
    #[arg(long)]
    no_splash: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_file.as_deref())?;

    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(root) = cli.root {
        config.directories.root = root;
    }
    tracing::info!(root = %config.directories.root.display(), "starting editor");

    let mut editor = Editor::new(&config, ExtensionRegistry::with_builtins());
    if let Some(file) = cli.file.as_deref() {
        editor.open_file(file);
    }

    let terminal = ratatui::init();
    let result = run(terminal, &mut editor, &config, cli.no_splash);
    ratatui::restore();
    result
}

/// Route diagnostics to the given file. Without `--log-file` nothing is
/// initialized - stdout belongs to the terminal UI and must stay clean.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    editor: &mut Editor,
    config: &Config,
    no_splash: bool,
) -> Result<()> {
    if !no_splash {
        show_splash(&mut terminal, editor, config)?;
    }

    // One key event is fully processed - transition, mutation, redraw -
    // before the next is read. The poll timeout only bounds the wait so
    // the frame stays fresh; it never interrupts a transition.
    const POLL_TIMEOUT: Duration = Duration::from_millis(50);

    loop {
        terminal.draw(|frame| ui::render(editor, frame))?;

        if event::poll(POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    editor.handle_key(key.code, key.modifiers);
                }
                // Resizes are picked up by the next draw.
                _ => {}
            }
        }

        if editor.should_quit() {
            tracing::info!("quit requested");
            return Ok(());
        }
    }
}

/// Show the splash box until a key is pressed or the timeout passes. The
/// dismissing key is consumed and never reaches the editor.
fn show_splash(terminal: &mut DefaultTerminal, editor: &Editor, config: &Config) -> Result<()> {
    if config.splash.is_empty() {
        return Ok(());
    }
    terminal.draw(|frame| ui::splash::render_splash(&config.splash, editor.theme(), frame))?;

    let deadline = Instant::now() + Duration::from_millis(1500);
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Ok(());
        }
        if event::poll(remaining)? {
            let _ = event::read()?;
            return Ok(());
        }
    }
}
