//! Navigation commands: open, exit, and the social profile shortcuts.
//!
//! Navigation is always "announce now, move later": the command posts an
//! info entry and schedules the route change, so the notice is visible
//! before the page changes.

use folio_types::error::Result;

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};
use crate::transcript::EntryKind;

/// Register the navigation commands.
pub fn register_nav_commands(reg: &mut CommandRegistry) -> Result<()> {
    reg.register(Box::new(OpenCmd))?;
    reg.register(Box::new(SocialCmd::GITHUB))?;
    reg.register(Box::new(SocialCmd::TWITTER))?;
    reg.register(Box::new(SocialCmd::LINKEDIN))?;
    reg.register(Box::new(ExitCmd))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// open
// ---------------------------------------------------------------------------

struct OpenCmd;

impl OpenCmd {
    const SECTIONS: [&'static str; 3] = ["projects", "blog", "contact"];

    fn go(env: &mut Environment<'_>, notice: String, path: String) -> CommandOutput {
        log::info!("Navigating to {path}");
        env.post(EntryKind::Info, notice);
        let delay = env.config.open_delay();
        env.navigate_after(delay, path);
        CommandOutput::None
    }
}

impl Command for OpenCmd {
    fn name(&self) -> &str {
        "open"
    }
    fn description(&self) -> &str {
        "Go to a page of the site"
    }
    fn usage(&self) -> &str {
        "open <projects|blog|contact> | open project <slug> | open post <slug>"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(target) = args.first().map(|t| t.to_lowercase()) else {
            return Ok(CommandOutput::Text(format!("usage: {}", self.usage())));
        };
        let rest = args[1..].join(" ");

        if Self::SECTIONS.contains(&target.as_str()) {
            return Ok(Self::go(
                env,
                format!("Opening {target}..."),
                format!("/{target}"),
            ));
        }

        match target.as_str() {
            "project" => {
                if rest.is_empty() {
                    return Ok(CommandOutput::Text("usage: open project <slug>".to_string()));
                }
                let Some(project) = env.catalog.find_project(&rest) else {
                    return Ok(CommandOutput::Text(format!("Project not found: {rest}")));
                };
                let notice = format!("Opening project {}...", project.title);
                let path = format!("/projects/{}", project.slug);
                Ok(Self::go(env, notice, path))
            },
            "post" => {
                if rest.is_empty() {
                    return Ok(CommandOutput::Text("usage: open post <slug>".to_string()));
                }
                let Some(post) = env.catalog.find_post(&rest) else {
                    return Ok(CommandOutput::Text(format!("Post not found: {rest}")));
                };
                let notice = format!("Opening post {}...", post.title);
                let path = format!("/blog/{}", post.slug);
                Ok(Self::go(env, notice, path))
            },
            _ => Ok(CommandOutput::Text(format!(
                "Unknown target '{target}'.\nusage: {}",
                self.usage()
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// github / twitter / linkedin
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
enum Network {
    GitHub,
    Twitter,
    LinkedIn,
}

struct SocialCmd {
    network: Network,
    name: &'static str,
    label: &'static str,
}

impl SocialCmd {
    const GITHUB: Self = Self {
        network: Network::GitHub,
        name: "github",
        label: "GitHub",
    };
    const TWITTER: Self = Self {
        network: Network::Twitter,
        name: "twitter",
        label: "Twitter",
    };
    const LINKEDIN: Self = Self {
        network: Network::LinkedIn,
        name: "linkedin",
        label: "LinkedIn",
    };
}

impl Command for SocialCmd {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        match self.network {
            Network::GitHub => "Open my GitHub profile",
            Network::Twitter => "Open my Twitter profile",
            Network::LinkedIn => "Open my LinkedIn profile",
        }
    }
    fn usage(&self) -> &str {
        self.name
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let profile = env.profile();
        let url = match self.network {
            Network::GitHub => profile.github.clone(),
            Network::Twitter => profile.twitter.clone(),
            Network::LinkedIn => profile.linkedin.clone(),
        };
        if url.is_empty() {
            return Ok(CommandOutput::Text(format!("No {} profile configured.", self.label)));
        }
        log::info!("Opening external link {url}");
        env.host.open_external(&url);
        Ok(CommandOutput::Text(format!("Opening {} profile: {url}", self.label)))
    }
}

// ---------------------------------------------------------------------------
// exit
// ---------------------------------------------------------------------------

struct ExitCmd;
impl Command for ExitCmd {
    fn name(&self) -> &str {
        "exit"
    }
    fn description(&self) -> &str {
        "Leave the terminal"
    }
    fn usage(&self) -> &str {
        "exit"
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        env.post(EntryKind::Info, "Goodbye! Returning to the home page...");
        let delay = env.config.exit_delay();
        env.navigate_after(delay, "/");
        Ok(CommandOutput::None)
    }
}
