//! Fixtures shared by the command tests.

use folio_catalog::Catalog;
use folio_types::config::TerminalConfig;

use crate::effects::RecordingHost;
use crate::session::Terminal;
use crate::transcript::{EntryKind, HistoryEntry, Panel};

/// A demo-catalog terminal wired to a recording host.
pub(crate) struct Fixture {
    pub terminal: Terminal,
    pub host: RecordingHost,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_config(TerminalConfig::default())
    }

    pub fn with_config(config: TerminalConfig) -> Self {
        Self {
            terminal: Terminal::new(config, Catalog::demo()).unwrap(),
            host: RecordingHost::new(),
        }
    }

    /// Entries appended by one command line, without its echoed input.
    pub fn run(&mut self, line: &str) -> Vec<HistoryEntry> {
        let start = self.terminal.transcript().len();
        self.terminal.execute_command(line, &mut self.host);
        self.terminal
            .transcript()
            .entries()
            .get(start + 1..)
            .map(<[HistoryEntry]>::to_vec)
            .unwrap_or_default()
    }

    /// Error entries currently in the transcript.
    pub fn error_count(&self) -> usize {
        self.terminal
            .transcript()
            .entries()
            .iter()
            .filter(|e| e.kind == EntryKind::Error)
            .count()
    }

    /// Plain text of everything one command line produced.
    pub fn text(&mut self, line: &str) -> String {
        self.run(line)
            .iter()
            .map(|e| e.content.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The single panel a command produced.
    pub fn panel(&mut self, line: &str) -> Panel {
        let entries = self.run(line);
        assert_eq!(entries.len(), 1, "expected one entry for '{line}'");
        entries[0]
            .content
            .as_panel()
            .cloned()
            .unwrap_or_else(|| panic!("expected a panel for '{line}'"))
    }
}
