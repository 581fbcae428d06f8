//! Built-in commands for the folio terminal.

use folio_types::error::Result;

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};
use crate::transcript::{Action, Panel};

/// Register every built-in command into a registry.
///
/// Registration order is the order `help` lists commands and the order tab
/// completion prefers, so the informational commands come first.
pub fn register_builtins(reg: &mut CommandRegistry) -> Result<()> {
    reg.register(Box::new(HelpCmd))?;
    reg.register(Box::new(WhoamiCmd))?;
    reg.register(Box::new(AboutCmd))?;
    reg.register(Box::new(SkillsCmd))?;
    // Catalog browsing.
    crate::register_content_commands(reg)?;
    reg.register(Box::new(ContactCmd))?;
    // Navigation and social links.
    crate::register_nav_commands(reg)?;
    reg.register(Box::new(VersionCmd))?;
    reg.register(Box::new(HistoryCmd))?;
    reg.register(Box::new(ClearCmd))?;
    // Easter eggs.
    crate::register_fun_commands(reg)?;
    log::debug!("Registered {} built-in commands", reg.len());
    Ok(())
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "List available commands"
    }
    fn usage(&self) -> &str {
        "help [command]"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        if let Some(topic) = args.first() {
            let Some(cmd) = env.registry.resolve(topic) else {
                return Ok(CommandOutput::Text(format!(
                    "No help for '{topic}'. Type 'help' for available commands."
                )));
            };
            let mut lines = vec![format!("usage: {}", cmd.usage()), cmd.description().to_string()];
            if !cmd.aliases().is_empty() {
                lines.push(format!("aliases: {}", cmd.aliases().join(", ")));
            }
            return Ok(CommandOutput::Text(lines.join("\n")));
        }

        let mut lines = vec!["Available commands:".to_string()];
        for cmd in env.registry.visible() {
            lines.push(format!("  {:<10} {}", cmd.name(), cmd.description()));
        }
        lines.push(String::new());
        lines.push("Type 'help <command>' for usage.".to_string());
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// whoami
// ---------------------------------------------------------------------------

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> &str {
        "whoami"
    }
    fn description(&self) -> &str {
        "Who is behind this site"
    }
    fn usage(&self) -> &str {
        "whoami"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let profile = env.profile();
        let panel = Panel::new(&profile.name)
            .line(&profile.role)
            .line(&profile.tagline)
            .line(format!("Based in {}", profile.location))
            .action(Action::run("View projects", "projects"))
            .action(Action::run("Read the blog", "blog"))
            .action(Action::run("Get in touch", "contact"));
        Ok(CommandOutput::Panel(panel))
    }
}

// ---------------------------------------------------------------------------
// about
// ---------------------------------------------------------------------------

struct AboutCmd;
impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn description(&self) -> &str {
        "A short introduction"
    }
    fn usage(&self) -> &str {
        "about"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let profile = env.profile();
        let panel = Panel::new(format!("About {}", profile.name))
            .lines(profile.about.iter().cloned())
            .action(Action::run("Skills", "skills"))
            .action(Action::run("Projects", "projects"));
        Ok(CommandOutput::Panel(panel))
    }
}

// ---------------------------------------------------------------------------
// skills
// ---------------------------------------------------------------------------

struct SkillsCmd;
impl Command for SkillsCmd {
    fn name(&self) -> &str {
        "skills"
    }
    fn description(&self) -> &str {
        "Languages, tools and practices"
    }
    fn usage(&self) -> &str {
        "skills"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let skills = &env.profile().skills;
        if skills.is_empty() {
            return Ok(CommandOutput::Text("No skills listed.".to_string()));
        }
        let panel = Panel::new("Skills").lines(
            skills
                .iter()
                .map(|group| format!("{}: {}", group.name, group.items.join(", "))),
        );
        Ok(CommandOutput::Panel(panel))
    }
}

// ---------------------------------------------------------------------------
// contact
// ---------------------------------------------------------------------------

struct ContactCmd;
impl Command for ContactCmd {
    fn name(&self) -> &str {
        "contact"
    }
    fn description(&self) -> &str {
        "Email and social profiles"
    }
    fn usage(&self) -> &str {
        "contact"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let profile = env.profile();
        let mut panel = Panel::new("Contact");
        if !profile.email.is_empty() {
            panel = panel
                .line(format!("Email:    {}", profile.email))
                .action(Action::copy("Copy email", &profile.email));
        }
        for (label, url) in [
            ("GitHub", &profile.github),
            ("Twitter", &profile.twitter),
            ("LinkedIn", &profile.linkedin),
        ] {
            if url.is_empty() {
                continue;
            }
            panel = panel
                .line(format!("{:<9} {url}", format!("{label}:")))
                .action(Action::open(label, url));
        }
        Ok(CommandOutput::Panel(panel))
    }
}

// ---------------------------------------------------------------------------
// version
// ---------------------------------------------------------------------------

struct VersionCmd;
impl Command for VersionCmd {
    fn name(&self) -> &str {
        "version"
    }
    fn description(&self) -> &str {
        "Show terminal version"
    }
    fn usage(&self) -> &str {
        "version"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(format!(
            "folio terminal v{}",
            env!("CARGO_PKG_VERSION")
        )))
    }
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

struct HistoryCmd;
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "List recently submitted lines"
    }
    fn usage(&self) -> &str {
        "history"
    }
    fn hidden(&self) -> bool {
        true
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        if env.recall.is_empty() {
            return Ok(CommandOutput::Text("No history.".to_string()));
        }
        let lines: Vec<String> = env
            .recall
            .iter()
            .rev()
            .enumerate()
            .map(|(i, line)| format!("{:>4}  {line}", i + 1))
            .collect();
        Ok(CommandOutput::Text(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn aliases(&self) -> &[&str] {
        &["cls"]
    }
    fn description(&self) -> &str {
        "Clear the terminal"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Clear)
    }
}
