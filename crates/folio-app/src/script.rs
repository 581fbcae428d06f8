//! Headless transcript runner.
//!
//! Feeds command lines from stdin through a terminal and prints the
//! resulting transcript as plain text. Scheduled effects are run to
//! completion after every line, so output matches what an interactive
//! session shows once all timers have fired.
//!
//! Usage:
//!   echo 'projects' | folio-script [config.toml]
//!   folio-script < demo-session.txt

mod setup;

use std::io::{self, BufRead, Write};

use anyhow::Result;

use folio_terminal::Terminal;
use folio_terminal::effects::RecordingHost;
use folio_terminal::render::render_entry;

/// Fire pending timers until none remain.
fn drain_timers(terminal: &mut Terminal, host: &mut RecordingHost) {
    while let Some(due) = terminal.next_due() {
        terminal.advance(due, host);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = setup::load_config(std::env::args().nth(1))?;
    let catalog = setup::load_catalog()?;
    let mut terminal = Terminal::new(config, catalog)?;
    let mut host = RecordingHost::new();
    terminal.boot();

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    let mut printed: Option<u64> = None;

    for line in stdin.lock().lines() {
        let line = line?;
        let routes_before = host.navigations.len();
        terminal.execute_command(&line, &mut host);
        drain_timers(&mut terminal, &mut host);

        let theme = &terminal.config().theme;
        for entry in terminal.transcript().entries() {
            if printed.is_some_and(|id| entry.id <= id) {
                continue;
            }
            for row in render_entry(entry, theme, terminal.prompt()) {
                writeln!(out, "{}", row.text())?;
            }
            printed = Some(entry.id);
        }
        for route in &host.navigations[routes_before..] {
            writeln!(out, "-> {route}")?;
        }
    }
    out.flush()?;
    Ok(())
}
