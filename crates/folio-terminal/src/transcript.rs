//! Append-only transcript of everything typed and produced in a session.
//!
//! Entries are only ever appended. `clear` drops all of them at once but the
//! id counter keeps running, so ids stay unique for the whole session.

use chrono::{DateTime, Local};

/// Visual category of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Input,
    Output,
    Error,
    Info,
    Success,
    Warning,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Input => "input",
            EntryKind::Output => "output",
            EntryKind::Error => "error",
            EntryKind::Info => "info",
            EntryKind::Success => "success",
            EntryKind::Warning => "warning",
        }
    }
}

/// An interactive control embedded in a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Run a command line as if the user had typed it.
    Run { label: String, command: String },
    /// Put text on the clipboard.
    Copy { label: String, text: String },
    /// Open a URL outside the terminal.
    Open { label: String, url: String },
}

impl Action {
    pub fn run(label: impl Into<String>, command: impl Into<String>) -> Self {
        Action::Run {
            label: label.into(),
            command: command.into(),
        }
    }

    pub fn copy(label: impl Into<String>, text: impl Into<String>) -> Self {
        Action::Copy {
            label: label.into(),
            text: text.into(),
        }
    }

    pub fn open(label: impl Into<String>, url: impl Into<String>) -> Self {
        Action::Open {
            label: label.into(),
            url: url.into(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Action::Run { label, .. } | Action::Copy { label, .. } | Action::Open { label, .. } => {
                label.as_str()
            },
        }
    }
}

/// A small structured fragment: title, body lines and action buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Panel {
    pub title: String,
    pub lines: Vec<String>,
    pub actions: Vec<Action>,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }
}

/// What an entry displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryContent {
    Text(String),
    Panel(Panel),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

impl EntryContent {
    /// Flatten to plain text (panel actions rendered as `[label]`).
    pub fn plain_text(&self) -> String {
        match self {
            EntryContent::Text(t) => t.clone(),
            EntryContent::Panel(p) => {
                let mut out = vec![p.title.clone()];
                out.extend(p.lines.iter().cloned());
                if !p.actions.is_empty() {
                    let buttons: Vec<String> =
                        p.actions.iter().map(|a| format!("[{}]", a.label())).collect();
                    out.push(buttons.join(" "));
                }
                out.join("\n")
            },
            EntryContent::Table { headers, rows } => {
                let mut out = headers.join(" | ");
                for row in rows {
                    out.push('\n');
                    out.push_str(&row.join(" | "));
                }
                out
            },
        }
    }

    pub fn as_panel(&self) -> Option<&Panel> {
        match self {
            EntryContent::Panel(p) => Some(p),
            _ => None,
        }
    }
}

impl From<&str> for EntryContent {
    fn from(s: &str) -> Self {
        EntryContent::Text(s.to_string())
    }
}

impl From<String> for EntryContent {
    fn from(s: String) -> Self {
        EntryContent::Text(s)
    }
}

impl From<Panel> for EntryContent {
    fn from(p: Panel) -> Self {
        EntryContent::Panel(p)
    }
}

/// One line of the transcript.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub id: u64,
    pub kind: EntryKind,
    pub content: EntryContent,
    pub timestamp: DateTime<Local>,
}

impl HistoryEntry {
    /// `HH:MM:SS` capture time, shown on hover.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Ordered, append-only log of entries.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<HistoryEntry>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry with a fresh id and the current time.
    pub fn append(&mut self, kind: EntryKind, content: impl Into<EntryContent>) -> &HistoryEntry {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(HistoryEntry {
            id,
            kind,
            content: content.into(),
            timestamp: Local::now(),
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Drop every entry. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        log::debug!("Transcript cleared ({} entries)", self.entries.len());
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }
}
