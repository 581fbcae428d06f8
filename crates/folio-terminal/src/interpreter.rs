//! Command trait, registry, and dispatch logic.
//!
//! The registry keeps commands in registration order (that order drives
//! `help` and tab completion) plus a secondary index from every name and
//! alias to its command. Names and aliases share one namespace, so a
//! collision is rejected at registration time.

use std::collections::HashMap;
use std::time::Duration;

use folio_catalog::Catalog;
use folio_types::config::{Profile, TerminalConfig};
use folio_types::error::{FolioError, Result};

use crate::effects::{Effect, Host, Scheduler};
use crate::input::RecallBuffer;
use crate::parse::Invocation;
use crate::transcript::{EntryKind, Panel, Transcript};

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain text, appended as an output entry. Empty text appends nothing.
    Text(String),
    /// Structured fragment with optional action buttons.
    Panel(Panel),
    /// Tabular data (header row + data rows).
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// A handled failure shown with error styling.
    Error(String),
    /// The command wrote its own entries, or has nothing to show.
    None,
    /// Signal to empty the transcript and the draft.
    Clear,
}

/// Everything a command may read or affect while it runs.
pub struct Environment<'a> {
    pub catalog: &'a Catalog,
    pub config: &'a TerminalConfig,
    /// The registry dispatching this command (for `help`).
    pub registry: &'a CommandRegistry,
    pub recall: &'a RecallBuffer,
    pub transcript: &'a mut Transcript,
    pub scheduler: &'a mut dyn Scheduler,
    pub host: &'a mut dyn Host,
}

impl Environment<'_> {
    pub fn profile(&self) -> &Profile {
        &self.config.profile
    }

    /// Append an entry right away, ahead of the command's own output.
    pub fn post(&mut self, kind: EntryKind, text: impl Into<String>) {
        self.transcript.append(kind, text.into());
    }

    /// Navigate after `delay`.
    pub fn navigate_after(&mut self, delay: Duration, path: impl Into<String>) {
        self.scheduler.after(delay, Effect::Navigate(path.into()));
    }
}

/// A single executable command.
pub trait Command {
    /// The canonical name (lowercase).
    fn name(&self) -> &str;

    /// Extra tokens that resolve to this command.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "project <id-or-name>").
    fn usage(&self) -> &str;

    /// Hidden commands are left out of the `help` listing.
    fn hidden(&self) -> bool {
        false
    }

    /// Execute the command. User mistakes are ordinary output; `Err` is
    /// reserved for unexpected faults.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput>;
}

/// Result of dispatching one invocation.
#[derive(Debug)]
pub enum Outcome {
    Completed(CommandOutput),
    /// No name or alias matched the (lowercased) token.
    NotFound(String),
    Failed(FolioError),
}

/// Ordered registry of commands with alias resolution.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. Fails if its name or an alias is already taken
    /// or is not a lowercase, whitespace-free token.
    pub fn register(&mut self, cmd: Box<dyn Command>) -> Result<()> {
        let mut tokens = vec![cmd.name().to_string()];
        tokens.extend(cmd.aliases().iter().map(|a| a.to_string()));

        for (i, token) in tokens.iter().enumerate() {
            if token.is_empty()
                || token.chars().any(char::is_whitespace)
                || *token != token.to_lowercase()
            {
                return Err(FolioError::Registry(format!(
                    "invalid command token '{token}'"
                )));
            }
            if let Some(&owner) = self.index.get(token) {
                return Err(FolioError::Registry(format!(
                    "'{token}' already belongs to '{}'",
                    self.commands[owner].name()
                )));
            }
            if tokens[..i].contains(token) {
                return Err(FolioError::Registry(format!(
                    "'{token}' repeated in '{}'",
                    cmd.name()
                )));
            }
        }

        let slot = self.commands.len();
        for token in tokens {
            self.index.insert(token, slot);
        }
        self.commands.push(cmd);
        Ok(())
    }

    /// Look up a command by name or alias, ignoring case.
    pub fn resolve(&self, token: &str) -> Option<&dyn Command> {
        self.index
            .get(&token.to_lowercase())
            .map(|&i| self.commands[i].as_ref())
    }

    /// All commands in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.iter().map(|c| c.as_ref())
    }

    /// Non-hidden commands in registration order.
    pub fn visible(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands().filter(|c| !c.hidden())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Canonical name of the first command (registration order) whose name
    /// or any alias starts with `partial`.
    pub fn complete(&self, partial: &str) -> Option<&str> {
        let lower = partial.to_lowercase();
        if lower.is_empty() {
            return None;
        }
        self.commands()
            .find(|c| c.name().starts_with(&lower) || c.aliases().iter().any(|a| a.starts_with(&lower)))
            .map(|c| c.name())
    }

    /// Resolve and run one invocation.
    pub fn execute(&self, invocation: &Invocation, env: &mut Environment<'_>) -> Outcome {
        let Some(cmd) = self.resolve(&invocation.name) else {
            log::debug!("Unresolved command token '{}'", invocation.name);
            return Outcome::NotFound(invocation.name.clone());
        };
        log::debug!("Dispatching '{}' ({} args)", cmd.name(), invocation.args.len());
        let args: Vec<&str> = invocation.args.iter().map(String::as_str).collect();
        match cmd.execute(&args, env) {
            Ok(output) => Outcome::Completed(output),
            Err(e) => {
                log::warn!("Command '{}' failed: {e}", cmd.name());
                Outcome::Failed(e)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::{RecordingHost, TimerQueue};

    struct Named {
        name: &'static str,
        aliases: &'static [&'static str],
        hidden: bool,
    }

    impl Command for Named {
        fn name(&self) -> &str {
            self.name
        }
        fn aliases(&self) -> &[&str] {
            self.aliases
        }
        fn description(&self) -> &str {
            "test command"
        }
        fn usage(&self) -> &str {
            self.name
        }
        fn hidden(&self) -> bool {
            self.hidden
        }
        fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
            Ok(CommandOutput::Text(format!("{}:{}", self.name, args.join(","))))
        }
    }

    fn named(name: &'static str, aliases: &'static [&'static str]) -> Box<dyn Command> {
        Box::new(Named {
            name,
            aliases,
            hidden: false,
        })
    }

    struct Faulty;
    impl Command for Faulty {
        fn name(&self) -> &str {
            "faulty"
        }
        fn description(&self) -> &str {
            "always fails"
        }
        fn usage(&self) -> &str {
            "faulty"
        }
        fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
            Err(FolioError::Command("boom".into()))
        }
    }

    fn run(reg: &CommandRegistry, name: &str, args: &[&str]) -> Outcome {
        let catalog = Catalog::default();
        let config = TerminalConfig::default();
        let recall = RecallBuffer::new(4);
        let mut transcript = Transcript::new();
        let mut timers = TimerQueue::new();
        let mut host = RecordingHost::new();
        let mut env = Environment {
            catalog: &catalog,
            config: &config,
            registry: reg,
            recall: &recall,
            transcript: &mut transcript,
            scheduler: &mut timers,
            host: &mut host,
        };
        let inv = Invocation {
            name: name.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
        };
        reg.execute(&inv, &mut env)
    }

    #[test]
    fn register_and_resolve_by_alias() {
        let mut reg = CommandRegistry::new();
        reg.register(named("clear", &["cls"])).unwrap();
        assert_eq!(reg.resolve("cls").unwrap().name(), "clear");
        assert_eq!(reg.resolve("CLEAR").unwrap().name(), "clear");
        assert!(reg.resolve("cl").is_none());
    }

    #[test]
    fn alias_colliding_with_name_rejected() {
        let mut reg = CommandRegistry::new();
        reg.register(named("help", &[])).unwrap();
        let err = reg.register(named("manual", &["help"])).unwrap_err();
        assert!(matches!(err, FolioError::Registry(_)));
        // The failed registration left nothing behind.
        assert!(reg.resolve("manual").is_none());
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn alias_colliding_with_alias_rejected() {
        let mut reg = CommandRegistry::new();
        reg.register(named("clear", &["cls"])).unwrap();
        assert!(reg.register(named("reset", &["cls"])).is_err());
    }

    #[test]
    fn name_colliding_with_alias_rejected() {
        let mut reg = CommandRegistry::new();
        reg.register(named("clear", &["cls"])).unwrap();
        assert!(reg.register(named("cls", &[])).is_err());
    }

    #[test]
    fn uppercase_or_repeated_tokens_rejected() {
        let mut reg = CommandRegistry::new();
        assert!(reg.register(named("Help", &[])).is_err());
        assert!(reg.register(named("x", &["y", "y"])).is_err());
        assert!(reg.register(named("two words", &[])).is_err());
        assert!(reg.is_empty());
    }

    #[test]
    fn completion_follows_registration_order() {
        let mut reg = CommandRegistry::new();
        reg.register(named("projects", &[])).unwrap();
        reg.register(named("project", &[])).unwrap();
        reg.register(named("clear", &["cls"])).unwrap();
        assert_eq!(reg.complete("pro"), Some("projects"));
        assert_eq!(reg.complete("CL"), Some("clear"));
        assert_eq!(reg.complete("cls"), Some("clear"));
        assert_eq!(reg.complete(""), None);
        assert_eq!(reg.complete("zzz"), None);
    }

    #[test]
    fn visible_skips_hidden() {
        let mut reg = CommandRegistry::new();
        reg.register(named("help", &[])).unwrap();
        reg.register(Box::new(Named {
            name: "secret",
            aliases: &[],
            hidden: true,
        }))
        .unwrap();
        let names: Vec<&str> = reg.visible().map(|c| c.name()).collect();
        assert_eq!(names, vec!["help"]);
        assert!(reg.resolve("secret").is_some());
    }

    #[test]
    fn execute_passes_args_through() {
        let mut reg = CommandRegistry::new();
        reg.register(named("echo", &[])).unwrap();
        match run(&reg, "echo", &["a", "B"]) {
            Outcome::Completed(CommandOutput::Text(s)) => assert_eq!(s, "echo:a,B"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn unknown_command_is_not_found() {
        let reg = CommandRegistry::new();
        assert!(matches!(run(&reg, "frobnicate", &[]), Outcome::NotFound(n) if n == "frobnicate"));
    }

    #[test]
    fn handler_error_is_failed_outcome() {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(Faulty)).unwrap();
        assert!(matches!(run(&reg, "faulty", &[]), Outcome::Failed(_)));
    }
}
