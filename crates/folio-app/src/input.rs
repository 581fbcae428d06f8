//! Key handling for the desktop terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use folio_terminal::Terminal;
use folio_terminal::render::TranscriptView;

use crate::host::TerminalHost;

/// Result of handling a single key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Apply one key press.
pub fn handle_key(
    key: KeyEvent,
    terminal: &mut Terminal,
    host: &mut TerminalHost,
    view: &mut TranscriptView,
) -> InputResult {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let page = view.viewport_height.max(1) as isize;
    match key.code {
        KeyCode::Esc => return InputResult::Quit,
        KeyCode::Char('c') if ctrl => return InputResult::Quit,
        KeyCode::Char('l') if ctrl => terminal.execute_command("clear", host),
        KeyCode::Char(c) if !ctrl => terminal.insert_char(c),
        KeyCode::Backspace => terminal.backspace(),
        KeyCode::Enter => terminal.submit(host),
        KeyCode::Up => terminal.recall_previous(),
        KeyCode::Down => terminal.recall_next(),
        KeyCode::Tab => {
            terminal.complete();
        },
        KeyCode::PageUp => view.scroll_by(-page),
        KeyCode::PageDown => view.scroll_by(page),
        KeyCode::F(n @ 1..=9) => {
            if !terminal.activate_latest(usize::from(n - 1), host) {
                log::debug!("No action bound to F{n}");
            }
        },
        _ => {},
    }
    InputResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_catalog::Catalog;
    use folio_types::config::TerminalConfig;

    fn setup() -> (Terminal, TerminalHost, TranscriptView) {
        let terminal = Terminal::new(TerminalConfig::default(), Catalog::demo()).unwrap();
        (terminal, TerminalHost::new(), TranscriptView::new(10))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_line(t: &mut Terminal, h: &mut TerminalHost, v: &mut TranscriptView, line: &str) {
        for c in line.chars() {
            handle_key(press(KeyCode::Char(c)), t, h, v);
        }
        handle_key(press(KeyCode::Enter), t, h, v);
    }

    #[test]
    fn typed_line_is_submitted() {
        let (mut t, mut h, mut v) = setup();
        type_line(&mut t, &mut h, &mut v, "whoami");
        assert_eq!(t.transcript().len(), 2);
        assert_eq!(t.draft(), "");
    }

    #[test]
    fn function_keys_trigger_panel_actions() {
        let (mut t, mut h, mut v) = setup();
        type_line(&mut t, &mut h, &mut v, "whoami");
        handle_key(press(KeyCode::F(2)), &mut t, &mut h, &mut v);
        let last_input = t
            .transcript()
            .entries()
            .iter()
            .rev()
            .find(|e| e.kind == folio_terminal::transcript::EntryKind::Input)
            .unwrap();
        assert_eq!(last_input.content.plain_text(), "blog");
    }

    #[test]
    fn tab_and_recall_keys() {
        let (mut t, mut h, mut v) = setup();
        type_line(&mut t, &mut h, &mut v, "skills");
        handle_key(press(KeyCode::Char('w')), &mut t, &mut h, &mut v);
        handle_key(press(KeyCode::Tab), &mut t, &mut h, &mut v);
        assert_eq!(t.draft(), "whoami");
        handle_key(press(KeyCode::Up), &mut t, &mut h, &mut v);
        assert_eq!(t.draft(), "skills");
    }

    #[test]
    fn quit_keys() {
        let (mut t, mut h, mut v) = setup();
        assert_eq!(
            handle_key(press(KeyCode::Esc), &mut t, &mut h, &mut v),
            InputResult::Quit
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(ctrl_c, &mut t, &mut h, &mut v), InputResult::Quit);
        assert_eq!(t.draft(), "");
    }
}
