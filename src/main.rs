use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{read as event_read, Event as CrosstermEvent, KeyEventKind};
use hunt::app::Editor;
use hunt::config::Config;
use hunt::services::terminal_modes::{self, TerminalModes};
use hunt::services::tracing_setup;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

/// A cursorless modal text editor
#[derive(Parser, Debug)]
#[command(name = "hunt")]
#[command(about = "A cursorless modal text editor", long_about = None)]
struct Args {
    /// File to edit; created on the first write if it does not exist
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for editor diagnostics (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn load_config(args: &Args) -> AnyhowResult<Config> {
    match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => match Config::default_path() {
            Some(path) => Config::load_or_default(&path)
                .with_context(|| format!("loading config {}", path.display())),
            None => Ok(Config::default()),
        },
    }
}

fn initialize_app(args: &Args) -> AnyhowResult<Config> {
    let config = load_config(args)?;

    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(tracing_setup::default_log_path);
    tracing_setup::init_global(&log_file, &config.log_filter);

    tracing::info!("Editor starting on {}", args.file.display());

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    Ok(config)
}

fn run_event_loop(
    editor: &mut Editor,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> AnyhowResult<()> {
    loop {
        terminal
            .draw(|frame| editor.render(frame))
            .context("drawing the screen")?;

        if editor.should_quit() {
            break;
        }

        let event = match event_read() {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!("input ended: {}", e);
                editor.quit();
                continue;
            }
        };

        match event {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind == KeyEventKind::Press {
                    editor.handle_key(key_event.code, key_event.modifiers)?;
                }
            }
            CrosstermEvent::Resize(w, h) => {
                editor.resize(w, h);
            }
            _ => {}
        }
    }
    Ok(())
}

fn run(args: &Args) -> AnyhowResult<()> {
    let config = initialize_app(args)?;

    let _modes = TerminalModes::enable().context("entering raw mode")?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("creating terminal")?;
    let size = terminal.size().context("querying terminal size")?;

    let mut editor = Editor::new(config, &args.file, size.width, size.height)?;
    let result = run_event_loop(&mut editor, &mut terminal);

    tracing::info!("Editor exiting ({})", editor.document().path().display());
    result
}

fn main() {
    let args = Args::parse();

    // The terminal guard inside `run` has been dropped by the time the
    // message is printed.
    if let Err(e) = run(&args) {
        tracing::error!("{:#}", e);
        eprintln!("error: {:#}", e);
    }
}
