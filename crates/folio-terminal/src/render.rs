//! Render adapter: transcript entries to colored lines, plus the scrolling
//! viewport the front end draws through.

use folio_types::color::Color;
use folio_types::config::TerminalTheme;

use crate::transcript::{EntryContent, EntryKind, HistoryEntry, Panel, Transcript};

/// A run of text in one color.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub color: Color,
}

impl Span {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// One display row, tagged with the entry it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledLine {
    pub entry_id: u64,
    pub spans: Vec<Span>,
}

impl StyledLine {
    fn single(entry_id: u64, text: impl Into<String>, color: Color) -> Self {
        Self {
            entry_id,
            spans: vec![Span::new(text, color)],
        }
    }

    /// The row without styling.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Body color for an entry kind.
pub fn kind_color(theme: &TerminalTheme, kind: EntryKind) -> Color {
    match kind {
        EntryKind::Input => theme.input_color(),
        EntryKind::Output => theme.output_color(),
        EntryKind::Error => theme.error_color(),
        EntryKind::Info => theme.info_color(),
        EntryKind::Success => theme.success_color(),
        EntryKind::Warning => theme.warning_color(),
    }
}

/// Lay out one entry.
pub fn render_entry(entry: &HistoryEntry, theme: &TerminalTheme, prompt: &str) -> Vec<StyledLine> {
    let id = entry.id;
    match (&entry.content, entry.kind) {
        (EntryContent::Text(text), EntryKind::Input) => vec![StyledLine {
            entry_id: id,
            spans: vec![
                Span::new(format!("{prompt} "), theme.prompt_color()),
                Span::new(text, theme.input_color()),
            ],
        }],
        (EntryContent::Text(text), kind) => {
            let color = kind_color(theme, kind);
            text.lines()
                .map(|line| StyledLine::single(id, line, color))
                .collect()
        },
        (EntryContent::Panel(panel), _) => render_panel(id, panel, theme),
        (EntryContent::Table { headers, rows }, _) => render_table(id, headers, rows, theme),
    }
}

fn render_panel(id: u64, panel: &Panel, theme: &TerminalTheme) -> Vec<StyledLine> {
    let mut out = vec![StyledLine::single(id, &panel.title, theme.info_color())];
    let body = theme.output_color();
    out.extend(
        panel
            .lines
            .iter()
            .map(|line| StyledLine::single(id, format!("  {line}"), body)),
    );
    if !panel.actions.is_empty() {
        let action = theme.action_color();
        let mut spans = vec![Span::new("  ", body)];
        for (i, a) in panel.actions.iter().enumerate() {
            if i > 0 {
                spans.push(Span::new("  ", body));
            }
            spans.push(Span::new(format!("[{}] {}", i + 1, a.label()), action));
        }
        out.push(StyledLine { entry_id: id, spans });
    }
    out
}

fn render_table(
    id: u64,
    headers: &[String],
    rows: &[Vec<String>],
    theme: &TerminalTheme,
) -> Vec<StyledLine> {
    let cols = headers
        .len()
        .max(rows.iter().map(Vec::len).max().unwrap_or(0));
    let mut widths = vec![0usize; cols];
    for row in std::iter::once(headers).chain(rows.iter().map(Vec::as_slice)) {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }
    let format_row = |row: &[String]| -> String {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                format!("{cell:<width$}", width = *w)
            })
            .collect();
        cells.join("  ").trim_end().to_string()
    };

    let rule_width = widths.iter().sum::<usize>() + 2 * cols.saturating_sub(1);
    let mut out = vec![
        StyledLine::single(id, format_row(headers), theme.info_color()),
        StyledLine::single(id, "-".repeat(rule_width), theme.output_color().darken(0.4)),
    ];
    let body = theme.output_color();
    out.extend(rows.iter().map(|r| StyledLine::single(id, format_row(r.as_slice()), body)));
    out
}

/// Lay out the whole transcript, top to bottom.
pub fn render_transcript(
    transcript: &Transcript,
    theme: &TerminalTheme,
    prompt: &str,
) -> Vec<StyledLine> {
    transcript
        .entries()
        .iter()
        .flat_map(|e| render_entry(e, theme, prompt))
        .collect()
}

/// Scroll state for the transcript pane.
///
/// Follows the bottom by default. Scrolling up detaches it; any new entry
/// (a newest id it has not seen) snaps it back to the bottom.
#[derive(Debug, Clone)]
pub struct TranscriptView {
    pub viewport_height: usize,
    pub content_height: usize,
    pub scroll_top: usize,
    follow: bool,
    last_seen: Option<u64>,
}

impl TranscriptView {
    pub fn new(viewport_height: usize) -> Self {
        Self {
            viewport_height,
            content_height: 0,
            scroll_top: 0,
            follow: true,
            last_seen: None,
        }
    }

    pub fn max_scroll(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Whether the view is pinned to the newest line.
    pub fn is_following(&self) -> bool {
        self.follow
    }

    /// Update after a re-render.
    pub fn sync(&mut self, content_height: usize, newest_id: Option<u64>) {
        self.content_height = content_height;
        if newest_id != self.last_seen {
            self.last_seen = newest_id;
            self.follow = true;
        }
        if self.follow {
            self.scroll_top = self.max_scroll();
        }
        self.clamp_scroll();
    }

    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        if self.follow {
            self.scroll_top = self.max_scroll();
        }
        self.clamp_scroll();
    }

    /// Clamp scroll position to valid range.
    pub fn clamp_scroll(&mut self) {
        self.scroll_top = self.scroll_top.min(self.max_scroll());
    }

    /// Scroll by a delta amount (negative is up).
    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll_top = self.scroll_top.saturating_add_signed(delta);
        self.clamp_scroll();
        self.follow = self.scroll_top == self.max_scroll();
    }

    /// The rows currently in view.
    pub fn visible<'a>(&self, lines: &'a [StyledLine]) -> &'a [StyledLine] {
        let start = self.scroll_top.min(lines.len());
        let end = (start + self.viewport_height).min(lines.len());
        &lines[start..end]
    }

    pub fn needs_scrollbar(&self) -> bool {
        self.content_height > self.viewport_height
    }
}
