//! Terminal configuration loaded from TOML.
//!
//! Every field has a default, so an empty document is a valid config. The
//! `[profile]` table feeds the informational commands (`whoami`, `contact`,
//! `skills`, social links) and `[theme]` feeds the render adapter.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::color::{Color, parse_hex_color};
use crate::error::{FolioError, Result};

/// Top-level terminal configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TerminalConfig {
    /// Prompt shown before the draft and before echoed input entries.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Maximum number of lines kept in the recall buffer.
    #[serde(default = "default_recall_capacity")]
    pub recall_capacity: usize,
    /// How many projects `projects` lists.
    #[serde(default = "default_preview")]
    pub projects_preview: usize,
    /// How many posts `blog` lists.
    #[serde(default = "default_preview")]
    pub blog_preview: usize,
    /// Delay between the `exit` notice and navigation to the site root.
    #[serde(default = "default_exit_delay_ms")]
    pub exit_delay_ms: u64,
    /// Delay between an `open` notice and the navigation it announces.
    #[serde(default = "default_open_delay_ms")]
    pub open_delay_ms: u64,
    /// Lines posted as info entries when the terminal boots.
    #[serde(default = "default_welcome")]
    pub welcome: Vec<String>,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub theme: TerminalTheme,
}

fn default_prompt() -> String {
    "guest@folio:~$".to_string()
}
fn default_recall_capacity() -> usize {
    20
}
fn default_preview() -> usize {
    5
}
fn default_exit_delay_ms() -> u64 {
    1000
}
fn default_open_delay_ms() -> u64 {
    800
}
fn default_welcome() -> Vec<String> {
    vec![
        "Welcome to the folio terminal.".to_string(),
        "Type 'help' to see available commands.".to_string(),
    ]
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            recall_capacity: default_recall_capacity(),
            projects_preview: default_preview(),
            blog_preview: default_preview(),
            exit_delay_ms: default_exit_delay_ms(),
            open_delay_ms: default_open_delay_ms(),
            welcome: default_welcome(),
            profile: Profile::default(),
            theme: TerminalTheme::default(),
        }
    }
}

impl TerminalConfig {
    /// Parse a config document. Theme colors are validated eagerly.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.theme.validate()?;
        if config.recall_capacity == 0 {
            return Err(FolioError::Config(
                "recall_capacity must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        log::debug!("Loaded config from {}", path.display());
        Self::from_toml(&source)
    }

    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }

    pub fn open_delay(&self) -> Duration {
        Duration::from_millis(self.open_delay_ms)
    }
}

/// Identity and contact details shown by the informational commands.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    pub github: String,
    pub twitter: String,
    pub linkedin: String,
    /// Free-form paragraphs for `about`.
    pub about: Vec<String>,
    pub skills: Vec<SkillGroup>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Sam Carter".to_string(),
            role: "Backend & Distributed Systems Engineer".to_string(),
            tagline: "I build streaming pipelines, storage engines and the tooling around them."
                .to_string(),
            location: "Lisbon, Portugal".to_string(),
            email: "hello@samcarter.dev".to_string(),
            github: "https://github.com/samcarter".to_string(),
            twitter: "https://twitter.com/samcarter_dev".to_string(),
            linkedin: "https://www.linkedin.com/in/samcarter".to_string(),
            about: vec![
                "Eight years shipping backend services, mostly in Go and Rust.".to_string(),
                "Currently focused on event streaming and observability.".to_string(),
                "Writes about systems design on the blog; type 'blog' to read.".to_string(),
            ],
            skills: vec![
                SkillGroup::new("Languages", &["Rust", "Go", "TypeScript", "Python", "SQL"]),
                SkillGroup::new("Infrastructure", &["Kafka", "Redis", "PostgreSQL", "Kubernetes"]),
                SkillGroup::new("Practices", &["Distributed tracing", "Load testing", "CI/CD"]),
            ],
        }
    }
}

/// A named group of skills for the `skills` panel.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl SkillGroup {
    pub fn new(name: &str, items: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Color scheme for the transcript, one color per entry kind.
#[derive(Debug, Clone, Deserialize)]
pub struct TerminalTheme {
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_prompt_color")]
    pub prompt: String,
    #[serde(default = "default_input")]
    pub input: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_error")]
    pub error: String,
    #[serde(default = "default_info")]
    pub info: String,
    #[serde(default = "default_success")]
    pub success: String,
    #[serde(default = "default_warning")]
    pub warning: String,
    /// Action buttons inside panels.
    #[serde(default = "default_action")]
    pub action: String,
    /// Timestamps and other secondary text.
    #[serde(default = "default_dim")]
    pub dim: String,
}

fn default_background() -> String {
    "#0D1117".to_string()
}
fn default_prompt_color() -> String {
    "#00FF00".to_string()
}
fn default_input() -> String {
    "#FFFFFF".to_string()
}
fn default_output() -> String {
    "#CCCCCC".to_string()
}
fn default_error() -> String {
    "#FF4444".to_string()
}
fn default_info() -> String {
    "#58A6FF".to_string()
}
fn default_success() -> String {
    "#3FB950".to_string()
}
fn default_warning() -> String {
    "#D29922".to_string()
}
fn default_action() -> String {
    "#BC8CFF".to_string()
}
fn default_dim() -> String {
    "#808080".to_string()
}

impl Default for TerminalTheme {
    fn default() -> Self {
        Self {
            background: default_background(),
            prompt: default_prompt_color(),
            input: default_input(),
            output: default_output(),
            error: default_error(),
            info: default_info(),
            success: default_success(),
            warning: default_warning(),
            action: default_action(),
            dim: default_dim(),
        }
    }
}

impl TerminalTheme {
    /// Check that every color string parses.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("background", &self.background),
            ("prompt", &self.prompt),
            ("input", &self.input),
            ("output", &self.output),
            ("error", &self.error),
            ("info", &self.info),
            ("success", &self.success),
            ("warning", &self.warning),
            ("action", &self.action),
            ("dim", &self.dim),
        ];
        for (name, value) in fields {
            if parse_hex_color(value).is_none() {
                return Err(FolioError::Theme(format!("{name}: invalid color '{value}'")));
            }
        }
        Ok(())
    }

    pub fn background_color(&self) -> Color {
        parse_hex_color(&self.background).unwrap_or(Color::BLACK)
    }

    pub fn prompt_color(&self) -> Color {
        parse_hex_color(&self.prompt).unwrap_or(Color::rgb(0, 255, 0))
    }

    pub fn input_color(&self) -> Color {
        parse_hex_color(&self.input).unwrap_or(Color::WHITE)
    }

    pub fn output_color(&self) -> Color {
        parse_hex_color(&self.output).unwrap_or(Color::rgb(204, 204, 204))
    }

    pub fn error_color(&self) -> Color {
        parse_hex_color(&self.error).unwrap_or(Color::rgb(255, 68, 68))
    }

    pub fn info_color(&self) -> Color {
        parse_hex_color(&self.info).unwrap_or(Color::rgb(88, 166, 255))
    }

    pub fn success_color(&self) -> Color {
        parse_hex_color(&self.success).unwrap_or(Color::rgb(63, 185, 80))
    }

    pub fn warning_color(&self) -> Color {
        parse_hex_color(&self.warning).unwrap_or(Color::rgb(210, 153, 34))
    }

    pub fn action_color(&self) -> Color {
        parse_hex_color(&self.action).unwrap_or(Color::rgb(188, 140, 255))
    }

    pub fn dim_color(&self) -> Color {
        parse_hex_color(&self.dim).unwrap_or(Color::rgb(128, 128, 128))
    }
}
