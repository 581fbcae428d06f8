//! Input line tokenizer.
//!
//! There is no grammar beyond whitespace splitting. The one exception is the
//! `summon("item")` call form, which is rewritten to `summon item`.

use std::sync::LazyLock;

use regex::Regex;

/// Matches `summon("item")` and `summon('item')`.
static SUMMON_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?i:summon)\(\s*(?:"([^"]*)"|'([^']*)')\s*\)$"#)
        .expect("summon pattern is a valid regex")
});

/// A tokenized command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Lowercased command token.
    pub name: String,
    /// Remaining tokens, original casing.
    pub args: Vec<String>,
}

/// Tokenize a raw line. Returns `None` for blank input.
pub fn parse_line(line: &str) -> Option<Invocation> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(caps) = SUMMON_CALL.captures(line) {
        let item = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        return Some(Invocation {
            name: "summon".to_string(),
            args: vec![item],
        });
    }

    let mut tokens = line.split_whitespace();
    let name = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some(Invocation { name, args })
}

/// Rejoin arguments with single spaces and strip one surrounding pair of
/// double quotes, for commands taking a quoted multi-word argument.
pub fn quoted_argument(args: &[&str]) -> String {
    let joined = args.join(" ");
    let trimmed = joined.trim();
    match trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => inner.to_string(),
        None => trimmed.to_string(),
    }
}
