//! Full-screen drawing with crossterm.
//!
//! Layout, top to bottom: transcript pane (with a one-column scrollbar when
//! it overflows), status line, prompt line.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use folio_terminal::Terminal;
use folio_terminal::render::{StyledLine, TranscriptView, render_transcript};
use folio_types::color::Color;

use crate::host::TerminalHost;

/// Rows reserved below the transcript (status + prompt).
const CHROME_ROWS: u16 = 2;

/// Transcript rows available on a screen `rows` tall.
pub fn transcript_height(rows: u16) -> usize {
    rows.saturating_sub(CHROME_ROWS) as usize
}

fn term_color(c: Color) -> crossterm::style::Color {
    crossterm::style::Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Cut `text` to at most `width` terminal columns. A wide glyph that would
/// straddle the edge is dropped whole.
fn clip(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (i, c) in text.char_indices() {
        used += c.width().unwrap_or(0);
        if used > width {
            return &text[..i];
        }
    }
    text
}

fn draw_line(out: &mut impl Write, line: &StyledLine, width: usize) -> io::Result<()> {
    let mut remaining = width;
    for span in &line.spans {
        if remaining == 0 {
            break;
        }
        let text = clip(&span.text, remaining);
        remaining -= text.width();
        queue!(out, SetForegroundColor(term_color(span.color)), Print(text))?;
    }
    Ok(())
}

/// Scrollbar thumb `(top, height)` within a track of `track` rows.
fn thumb(view: &TranscriptView, track: usize) -> (usize, usize) {
    let ratio = view.viewport_height as f32 / view.content_height.max(1) as f32;
    let height = ((track as f32 * ratio) as usize).clamp(1, track.max(1));
    let range = view.max_scroll();
    let top = if range > 0 {
        track.saturating_sub(height) * view.scroll_top / range
    } else {
        0
    };
    (top, height)
}

/// Route, time of the newest entry, and key hints.
fn status_line(terminal: &Terminal, host: &TerminalHost, view: &TranscriptView) -> String {
    let mut status = format!(" {} ", host.route());
    if let Some(newest) = terminal.transcript().last() {
        status.push_str(&format!("| {} ", newest.time_label()));
    }
    let actions = terminal.latest_actions().len();
    if actions > 0 {
        status.push_str(&format!("| F1-F{actions} actions "));
    }
    if !view.is_following() {
        status.push_str("| scrolled ");
    }
    status.push_str("| PgUp/PgDn scroll | Esc quit");
    status
}

/// Redraw the whole screen.
pub fn draw(
    out: &mut impl Write,
    terminal: &Terminal,
    host: &TerminalHost,
    view: &mut TranscriptView,
    (cols, rows): (u16, u16),
) -> io::Result<()> {
    let theme = &terminal.config().theme;
    let lines = render_transcript(terminal.transcript(), theme, terminal.prompt());
    view.sync(lines.len(), terminal.transcript().last().map(|e| e.id));

    let bg = term_color(theme.background_color());
    let dim = term_color(theme.dim_color());
    let width = cols as usize;
    let scrollbar = view.needs_scrollbar();
    let text_width = if scrollbar { width.saturating_sub(1) } else { width };

    queue!(out, Hide, SetBackgroundColor(bg), Clear(ClearType::All))?;
    for (row, line) in view.visible(&lines).iter().enumerate() {
        queue!(out, MoveTo(0, row as u16))?;
        draw_line(out, line, text_width)?;
    }

    if scrollbar && cols > 0 && view.viewport_height > 0 {
        let track = view.viewport_height;
        let (top, height) = thumb(view, track);
        for row in 0..track {
            let glyph = if (top..top + height).contains(&row) { "█" } else { "│" };
            queue!(out, MoveTo(cols - 1, row as u16), SetForegroundColor(dim), Print(glyph))?;
        }
    }

    let status_row = rows.saturating_sub(CHROME_ROWS);
    let status = status_line(terminal, host, view);
    queue!(
        out,
        MoveTo(0, status_row),
        SetForegroundColor(dim),
        Print(clip(&status, width))
    )?;

    // Prompt line; the cursor rests after the draft.
    let prompt = format!("{} ", terminal.prompt());
    queue!(
        out,
        MoveTo(0, rows.saturating_sub(1)),
        SetForegroundColor(term_color(theme.prompt_color())),
        Print(clip(&prompt, width)),
        SetForegroundColor(term_color(theme.input_color())),
        Print(clip(terminal.draft(), width.saturating_sub(prompt.width()))),
        ResetColor,
        Show
    )?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_catalog::Catalog;
    use folio_terminal::render::Span;
    use folio_types::config::TerminalConfig;

    #[test]
    fn clip_respects_char_boundaries() {
        assert_eq!(clip("héllo", 2), "hé");
        assert_eq!(clip("abc", 10), "abc");
        assert_eq!(clip("abc", 0), "");
    }

    #[test]
    fn clip_counts_wide_glyphs_as_two_columns() {
        let line = "☕ A fresh cup of coffee";
        let kept = clip(line, 10);
        assert_eq!(kept, "☕ A fresh");
        assert!(kept.width() <= 10);
        assert_eq!(clip("☕☕", 3), "☕");
        assert_eq!(clip("☕", 1), "");
    }

    #[test]
    fn draw_line_stays_within_width() {
        let line = StyledLine {
            entry_id: 1,
            spans: vec![
                Span::new("🐛 ", Color::WHITE),
                Span::new("Bug fixed", Color::WHITE),
            ],
        };
        let mut out = Vec::new();
        draw_line(&mut out, &line, 6).unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("🐛 "));
        assert!(printed.contains("Bug"));
        assert!(!printed.contains("Bug "));
    }

    #[test]
    fn status_line_shows_newest_entry_time() {
        let mut terminal = Terminal::new(TerminalConfig::default(), Catalog::demo()).unwrap();
        terminal.boot();
        let host = TerminalHost::new();
        let view = TranscriptView::new(10);
        let label = terminal.transcript().last().unwrap().time_label();
        let status = status_line(&terminal, &host, &view);
        assert!(status.contains(&format!("| {label} ")));
        assert!(status.starts_with(" /terminal "));
    }

    #[test]
    fn thumb_tracks_scroll_position() {
        let mut view = TranscriptView::new(10);
        view.sync(40, Some(1));
        assert_eq!(thumb(&view, 10), (8, 2));
        view.scroll_by(-100);
        assert_eq!(thumb(&view, 10), (0, 2));
    }

    #[test]
    fn chrome_rows_reserved() {
        assert_eq!(transcript_height(24), 22);
        assert_eq!(transcript_height(1), 0);
    }
}
