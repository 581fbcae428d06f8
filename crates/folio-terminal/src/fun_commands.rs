//! Hidden easter-egg commands: summon, echo.

use std::time::Duration;

use folio_types::error::Result;

use crate::effects::Effect;
use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};
use crate::transcript::EntryKind;

/// Register the easter-egg commands.
pub fn register_fun_commands(reg: &mut CommandRegistry) -> Result<()> {
    reg.register(Box::new(SummonCmd))?;
    reg.register(Box::new(EchoCmd))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// summon
// ---------------------------------------------------------------------------

/// Things that can be summoned, with what appears.
const SUMMONS: &[(&str, &str)] = &[
    (
        "coffee",
        "☕ A fresh cup of coffee materializes. Productivity +10.",
    ),
    (
        "bug_fix",
        "🐛 The bug has been fixed. It was a missing semicolon all along.",
    ),
    (
        "kafka_cluster",
        "🌊 A three-broker Kafka cluster rises from the depths. Consumers are rebalancing...",
    ),
    (
        "rubber_duck",
        "🦆 A rubber duck appears and listens patiently to your problem.",
    ),
    (
        "documentation",
        "📚 Documentation summoned. It is two versions out of date.",
    ),
    (
        "deadline_extension",
        "⏳ Nice try. Deadlines cannot be summoned away.",
    ),
];

/// Follow-up posted once the summoned cluster settles.
const REBALANCE_DONE: &str = "Rebalance complete. All partitions assigned.";
const REBALANCE_DELAY: Duration = Duration::from_millis(1500);

struct SummonCmd;
impl Command for SummonCmd {
    fn name(&self) -> &str {
        "summon"
    }
    fn description(&self) -> &str {
        "Summon something useful"
    }
    fn usage(&self) -> &str {
        "summon(\"item\")"
    }
    fn hidden(&self) -> bool {
        true
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(item) = args.first() else {
            return Ok(CommandOutput::Text(format!("usage: {}", self.usage())));
        };
        let key = item.to_lowercase();
        let Some((name, text)) = SUMMONS.iter().find(|(name, _)| *name == key) else {
            let valid: Vec<&str> = SUMMONS.iter().map(|(name, _)| *name).collect();
            return Ok(CommandOutput::Error(format!(
                "Cannot summon '{item}'. Available items: {}",
                valid.join(", ")
            )));
        };
        if *name == "kafka_cluster" {
            env.scheduler.after(
                REBALANCE_DELAY,
                Effect::Post {
                    kind: EntryKind::Success,
                    text: REBALANCE_DONE.to_string(),
                },
            );
        }
        Ok(CommandOutput::Text((*text).to_string()))
    }
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Print arguments"
    }
    fn usage(&self) -> &str {
        "echo [text...]"
    }
    fn hidden(&self) -> bool {
        true
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
        Ok(CommandOutput::Text(args.join(" ")))
    }
}
