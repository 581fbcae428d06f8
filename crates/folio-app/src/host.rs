//! Host side of the terminal: route state, external links, clipboard.

use std::io::{self, Write};
use std::process::{Child, Command, Stdio};

use base64::Engine;

use folio_terminal::Host;

/// Route the standalone terminal starts on.
pub const TERMINAL_ROUTE: &str = "/terminal";

/// Desktop host. Navigation only tracks the route; the home route ends
/// the session.
pub struct TerminalHost {
    route: String,
    /// Link openers not yet reaped.
    children: Vec<Child>,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self {
            route: TERMINAL_ROUTE.to_string(),
            children: Vec::new(),
        }
    }

    /// Collect opener processes that have exited. Returns how many are
    /// still running.
    pub fn reap_children(&mut self) -> usize {
        self.children.retain_mut(|child| match child.try_wait() {
            Ok(Some(status)) => {
                log::debug!("Opener {} exited: {status}", child.id());
                false
            },
            Ok(None) => true,
            Err(e) => {
                log::warn!("Opener {}: {e}", child.id());
                false
            },
        });
        self.children.len()
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    /// `exit` navigates home, which leaves the terminal.
    pub fn left_terminal(&self) -> bool {
        self.route == "/"
    }
}

impl Default for TerminalHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for TerminalHost {
    fn navigate(&mut self, path: &str) {
        log::info!("Route {} -> {path}", self.route);
        self.route = path.to_string();
    }

    fn open_external(&mut self, url: &str) {
        self.reap_children();
        // Output is discarded so the child cannot draw over the raw-mode screen.
        let spawned = Command::new("xdg-open")
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => {
                log::info!("Opened {url} (pid {})", child.id());
                self.children.push(child);
            },
            Err(e) => log::warn!("xdg-open {url}: {e}"),
        }
    }

    fn copy_to_clipboard(&mut self, text: &str) -> bool {
        match write_osc52(&mut io::stdout(), text) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Clipboard write failed: {e}");
                false
            },
        }
    }
}

/// Ask the terminal emulator to set the clipboard (OSC 52).
fn write_osc52(out: &mut impl Write, text: &str) -> io::Result<()> {
    let b64 = base64::engine::general_purpose::STANDARD.encode(text);
    write!(out, "\x1b]52;c;{b64}\x07")?;
    out.flush()
}
