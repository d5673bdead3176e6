use std::fs::File;
use std::io::{self, Stdout, Write};
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use alien_invasion::app::App;
use alien_invasion::config::Config;
use alien_invasion::event::{Event, EventHandler};
use alien_invasion::game::{Session, Settings};
use alien_invasion::scores::HighScoreStore;
use alien_invasion::ui;

type Term = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config);
    for warning in &config.warnings {
        warn!("{warning}");
    }
    info!(?config, "starting");

    let store = HighScoreStore::new(config.score_file.clone());
    let session = Session::new(Settings::default(), store.load_high_score());

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let release_events = matches!(supports_keyboard_enhancement(), Ok(true));
    let mut terminal = match setup_terminal(release_events) {
        Ok(terminal) => terminal,
        Err(e) => {
            // Setup may have failed after entering the alternate screen.
            let _ = reset_display(&mut io::stdout(), release_events);
            let _ = disable_raw_mode();
            return Err(e);
        }
    };
    if !release_events {
        warn!("terminal does not report key releases; held keys release on a timer");
    }

    let mut app = App::new(session, store, release_events);
    let events = EventHandler::new(config.tick_rate_ms);
    let result = run(&mut terminal, &mut app, &events);

    // The score is written before the terminal is handed back, whatever happened.
    app.flush_high_score();
    restore_terminal(&mut terminal, release_events)?;
    info!("exiting");
    result
}

fn run(terminal: &mut Term, app: &mut App, events: &EventHandler) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        match events.next()? {
            Event::Tick => app.on_tick(Instant::now()),
            Event::Key(key) => app.on_key(key, Instant::now()),
            Event::Mouse(mouse) => app.on_mouse(mouse),
            Event::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn setup_terminal(release_events: bool) -> Result<Term> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter alternate screen")?;
    if release_events {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .context("failed to enable key release reporting")?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Term, release_events: bool) -> Result<()> {
    disable_raw_mode()?;
    reset_display(terminal.backend_mut(), release_events)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Undo the display changes made by `setup_terminal`. Every step is attempted
/// even if an earlier one fails.
fn reset_display<W: Write>(out: &mut W, release_events: bool) -> io::Result<()> {
    let popped = if release_events {
        execute!(out, PopKeyboardEnhancementFlags)
    } else {
        Ok(())
    };
    let left = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
    popped.and(left)
}

/// Log to a file; the terminal belongs to the game. Without a writable log
/// file the game runs silently.
fn init_logging(config: &Config) {
    let file = match File::create(&config.log_file) {
        Ok(file) => file,
        Err(_) => return,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
}
