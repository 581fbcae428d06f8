//! folio desktop entry point.
//!
//! Runs the portfolio terminal full-screen in the current tty. Type commands
//! at the prompt; F1-F9 trigger the buttons of the newest panel, PgUp/PgDn
//! scroll the transcript, Escape or Ctrl-C quits. `exit` also quits once its
//! navigation fires.
//!
//! Usage:
//!   folio [config.toml]
//!   FOLIO_CONFIG=config.toml FOLIO_CATALOG=catalog.json folio

mod host;
mod input;
mod setup;
mod ui;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

use folio_terminal::Terminal;
use folio_terminal::render::TranscriptView;

use host::TerminalHost;
use input::InputResult;

/// Longest wait for input when no timer is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Restores the tty on drop (including panics).
struct ScreenGuard;

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = setup::load_config(std::env::args().nth(1))?;
    let catalog = setup::load_catalog()?;
    let mut terminal = Terminal::new(config, catalog)?;
    terminal.boot();
    log::info!(
        "Starting folio terminal ({} commands)",
        terminal.registry().len()
    );

    let mut host = TerminalHost::new();
    let mut stdout = io::stdout();

    enable_raw_mode()?;
    let _guard = ScreenGuard;
    crossterm::execute!(stdout, EnterAlternateScreen)?;

    let mut size = crossterm::terminal::size()?;
    let mut view = TranscriptView::new(ui::transcript_height(size.1));
    let mut last_tick = Instant::now();

    loop {
        let now = Instant::now();
        terminal.advance(now - last_tick, &mut host);
        last_tick = now;
        host.reap_children();
        if host.left_terminal() {
            break;
        }

        ui::draw(&mut stdout, &terminal, &host, &mut view, size)?;

        let timeout = terminal
            .next_due()
            .map_or(IDLE_POLL, |due| due.min(IDLE_POLL));
        if !event::poll(timeout)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if input::handle_key(key, &mut terminal, &mut host, &mut view) == InputResult::Quit
                {
                    break;
                }
            },
            Event::Resize(cols, rows) => {
                size = (cols, rows);
                view.set_viewport_height(ui::transcript_height(rows));
            },
            _ => {},
        }
    }

    stdout.flush()?;
    let dropped = terminal.pending_effects();
    if dropped > 0 {
        log::info!("Dropping {dropped} scheduled effects on exit");
    }
    log::info!("folio terminal closed at {}", host.route());
    Ok(())
}
