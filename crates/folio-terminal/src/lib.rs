//! Command interpreter and terminal session.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name and alias. A `Terminal` owns
//! the registry, the transcript and the input line; it tokenizes submitted
//! lines, dispatches them, and appends what the command produced. Anything
//! that leaves the terminal (navigation, external links, clipboard) goes
//! through the `Host` trait, and delayed effects through a `Scheduler`.

mod commands;
pub mod content_commands;
pub mod effects;
pub mod fun_commands;
pub mod input;
mod interpreter;
pub mod nav_commands;
pub mod parse;
pub mod render;
mod session;
pub mod transcript;

#[cfg(test)]
mod testing;

/// Register catalog browsing commands (projects, blog, tags) into a registry.
pub use content_commands::register_content_commands;
/// Register all built-in commands into a registry.
pub use commands::register_builtins;
/// Side-effect sink implemented by the front end.
pub use effects::Host;
/// Delayed effect capability and its manual clock.
pub use effects::{Effect, Scheduler, TimerQueue};
/// Register easter-egg commands (summon, echo) into a registry.
pub use fun_commands::register_fun_commands;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (text, panel, table, signals).
pub use interpreter::CommandOutput;
/// Registry of available commands with alias resolution and dispatch.
pub use interpreter::CommandRegistry;
/// Everything a command may read or affect while it runs.
pub use interpreter::Environment;
/// Result of dispatching one invocation.
pub use interpreter::Outcome;
/// Register navigation commands (open, exit, social links) into a registry.
pub use nav_commands::register_nav_commands;
/// One interactive terminal instance.
pub use session::Terminal;
