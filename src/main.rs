use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::cell::RefCell;
use std::io::{IsTerminal, stdin, stdout};
use std::path::PathBuf;
use std::rc::Rc;

use scrolled::config;
use scrolled::error::ScrolledError;
use scrolled::input::FileLoader;
use scrolled::scroll::{ScrollMetrics, ScrollReporter, SharedStatus};
use scrolled::{App, ScrollStatus};

/// Scrollable text viewer that reports where it is scrolled
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Scrollable text viewer that reports its scroll position as six flags"
)]
struct Args {
    /// Input text file (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Print the status scope as JSON after quitting
    #[arg(long)]
    print_status: bool,

    /// Print the status for the given geometry and exit without opening the viewer
    #[arg(
        long,
        value_name = "TOP,HEIGHT,VIEW_HEIGHT,LEFT,WIDTH,VIEW_WIDTH",
        allow_hyphen_values = true
    )]
    probe: Option<ScrollMetrics>,
}

fn main() -> Result<()> {
    // Writes to /tmp/scrolled-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let args = Args::parse();

    if let Some(geometry) = args.probe {
        return probe(&geometry);
    }

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let loader = match args.input {
        Some(path) => {
            if !path.exists() {
                return Err(
                    ScrolledError::Io(format!("{}: file not found", path.display())).into(),
                );
            }
            FileLoader::spawn_load(path)
        }
        None if stdin().is_terminal() => {
            return Err(ScrolledError::Io(
                "no input: pass a file or pipe text on stdin".to_string(),
            )
            .into());
        }
        None => FileLoader::spawn_load_stdin(),
    };

    let terminal = init_terminal()?;

    let mut app = App::new_with_loader(loader, &config_result.config);
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    let result = run(terminal, app);

    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    if args.print_status {
        println!("{}", app.scope.to_json_pretty()?);
    }

    #[cfg(debug_assertions)]
    log::debug!("=== SCROLLED DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    use std::io::Write;

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/scrolled-debug.log")
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== SCROLLED DEBUG SESSION STARTED ===");
}

/// Compute the status for fixed geometry and print it as JSON
fn probe(geometry: &ScrollMetrics) -> Result<()> {
    let status: SharedStatus = Rc::new(RefCell::new(ScrollStatus::default()));
    ScrollReporter::initialize(geometry, status.clone());

    println!("{}", serde_json::to_string_pretty(&*status.borrow())?);
    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        // Poll before render to pick up text from the loader thread
        app.poll_file_loader();

        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}
