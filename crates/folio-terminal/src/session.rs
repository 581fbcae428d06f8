//! The terminal session: owns the registry, transcript, input line and
//! timer queue, and turns submitted lines into transcript entries.

use std::time::Duration;

use folio_catalog::Catalog;
use folio_types::config::TerminalConfig;
use folio_types::error::Result;

use crate::commands::register_builtins;
use crate::effects::{Effect, Host, TimerQueue};
use crate::input::InputLine;
use crate::interpreter::{CommandOutput, CommandRegistry, Environment, Outcome};
use crate::parse::parse_line;
use crate::transcript::{Action, EntryContent, EntryKind, Transcript};

/// One interactive terminal instance.
pub struct Terminal {
    registry: CommandRegistry,
    catalog: Catalog,
    config: TerminalConfig,
    transcript: Transcript,
    input: InputLine,
    timers: TimerQueue,
}

impl Terminal {
    /// A terminal with every built-in command registered.
    pub fn new(config: TerminalConfig, catalog: Catalog) -> Result<Self> {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry)?;
        Ok(Self::with_registry(config, catalog, registry))
    }

    /// A terminal over a caller-built registry.
    pub fn with_registry(config: TerminalConfig, catalog: Catalog, registry: CommandRegistry) -> Self {
        let input = InputLine::new(config.recall_capacity);
        Self {
            registry,
            catalog,
            config,
            transcript: Transcript::new(),
            input,
            timers: TimerQueue::new(),
        }
    }

    /// Post the welcome banner.
    pub fn boot(&mut self) {
        for line in &self.config.welcome {
            self.transcript.append(EntryKind::Info, line.as_str());
        }
    }

    /// Submit the current draft (Enter). Blank drafts do nothing.
    pub fn submit(&mut self, host: &mut dyn Host) {
        if let Some(line) = self.input.take_submission() {
            self.execute_command(&line, host);
        }
    }

    /// Run a line as if it had been typed and submitted.
    pub fn execute_command(&mut self, line: &str, host: &mut dyn Host) {
        let line = line.trim();
        let Some(invocation) = parse_line(line) else {
            return;
        };
        self.transcript.append(EntryKind::Input, line);
        self.input.recall_mut().push(line);

        let outcome = {
            let mut env = Environment {
                catalog: &self.catalog,
                config: &self.config,
                registry: &self.registry,
                recall: self.input.recall(),
                transcript: &mut self.transcript,
                scheduler: &mut self.timers,
                host,
            };
            self.registry.execute(&invocation, &mut env)
        };
        self.apply(outcome);
    }

    fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Completed(output) => match output {
                CommandOutput::Text(text) => {
                    if !text.is_empty() {
                        self.transcript.append(EntryKind::Output, text);
                    }
                },
                CommandOutput::Panel(panel) => {
                    self.transcript.append(EntryKind::Output, panel);
                },
                CommandOutput::Table { headers, rows } => {
                    self.transcript
                        .append(EntryKind::Output, EntryContent::Table { headers, rows });
                },
                CommandOutput::Error(text) => {
                    self.transcript.append(EntryKind::Error, text);
                },
                CommandOutput::None => {},
                CommandOutput::Clear => {
                    self.transcript.clear();
                    self.input.clear_draft();
                },
            },
            Outcome::NotFound(name) => {
                self.transcript.append(
                    EntryKind::Error,
                    format!("Command not found: {name}. Type 'help' for available commands."),
                );
            },
            Outcome::Failed(e) => {
                self.transcript
                    .append(EntryKind::Error, format!("Error executing command: {e}"));
            },
        }
    }

    /// Perform a panel action.
    pub fn activate(&mut self, action: &Action, host: &mut dyn Host) {
        match action {
            Action::Run { command, .. } => self.execute_command(command, host),
            Action::Copy { text, .. } => {
                if host.copy_to_clipboard(text) {
                    self.transcript
                        .append(EntryKind::Success, format!("Copied to clipboard: {text}"));
                } else {
                    log::warn!("Clipboard write failed");
                    self.transcript.append(
                        EntryKind::Warning,
                        format!("Could not copy to clipboard. Copy it manually: {text}"),
                    );
                }
            },
            Action::Open { url, .. } => {
                log::info!("Opening external link {url}");
                host.open_external(url);
                self.transcript
                    .append(EntryKind::Info, format!("Opening {url}"));
            },
        }
    }

    /// Actions of the newest panel that has any.
    pub fn latest_actions(&self) -> &[Action] {
        self.transcript
            .entries()
            .iter()
            .rev()
            .filter_map(|e| e.content.as_panel())
            .find(|p| !p.actions.is_empty())
            .map(|p| p.actions.as_slice())
            .unwrap_or(&[])
    }

    /// Activate the `index`-th action of the newest panel. Returns `false`
    /// if there is no such action.
    pub fn activate_latest(&mut self, index: usize, host: &mut dyn Host) -> bool {
        let Some(action) = self.latest_actions().get(index).cloned() else {
            return false;
        };
        self.activate(&action, host);
        true
    }

    /// Move the timer clock forward and apply every effect that came due.
    /// Returns how many fired.
    pub fn advance(&mut self, elapsed: Duration, host: &mut dyn Host) -> usize {
        let due = self.timers.advance(elapsed);
        let fired = due.len();
        for effect in due {
            match effect {
                Effect::Navigate(path) => {
                    log::info!("Navigating to {path}");
                    host.navigate(&path);
                },
                Effect::Post { kind, text } => {
                    self.transcript.append(kind, text);
                },
            }
        }
        fired
    }

    /// Time until the next scheduled effect.
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.next_due()
    }

    /// Scheduled effects that have not fired yet.
    pub fn pending_effects(&self) -> usize {
        self.timers.pending()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    pub fn prompt(&self) -> &str {
        &self.config.prompt
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn draft(&self) -> &str {
        self.input.draft()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.input.set_draft(text);
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.insert_char(c);
    }

    pub fn backspace(&mut self) {
        self.input.backspace();
    }

    pub fn recall_previous(&mut self) {
        self.input.recall_previous();
    }

    pub fn recall_next(&mut self) {
        self.input.recall_next();
    }

    /// Tab completion. Returns `true` if the draft changed.
    pub fn complete(&mut self) -> bool {
        self.input.complete(&self.registry)
    }
}
