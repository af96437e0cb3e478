//! The alias line grammar: decoding and encoding of `alias NAME=VALUE` lines.
//!
//! Decode and encode are pure functions over single lines. A line that does
//! not match the grammar is opaque to the store and passes through rewrites
//! verbatim.

use std::fmt::{Display, Formatter};

use crate::error::Error::{EmptyName, InvalidName};
use crate::error::Result;

/// One named alias: the identifier and the shell command it expands to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRecord {
    pub name: String,
    pub command: String,
}

impl Display for AliasRecord {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} → {}", self.name, self.command)
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | ':' | '-')
}

/// Validates an alias name against the grammar's NAME pattern.
///
/// # Errors
///
/// Returns [`EmptyName`] for an empty string and [`InvalidName`] when any
/// character falls outside `[A-Za-z0-9_.:-]`.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(EmptyName);
    }

    if !name.chars().all(is_name_char) {
        return Err(InvalidName(name.to_string()));
    }

    Ok(())
}

/// Splits a line into its alias NAME and the raw text after `=`.
///
/// Grammar: optional leading whitespace, literal `alias`, at least one
/// whitespace character, NAME (`[A-Za-z0-9_.:-]+`), `=`, VALUE (rest of the
/// line). Returns `None` for any line that does not match.
fn split_alias_line(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim_start().strip_prefix("alias")?;

    // "alias" must be followed by whitespace, not e.g. "aliasfoo=..."
    let rest = rest.strip_prefix(|c: char| c.is_whitespace())?;
    let rest = rest.trim_start();

    let name_end = rest.find(|c: char| !is_name_char(c))?;
    if name_end == 0 {
        return None;
    }

    let (name, tail) = rest.split_at(name_end);
    let value = tail.strip_prefix('=')?;
    Some((name, value))
}

/// Extracts just the NAME from an alias line, without decoding the value.
///
/// Used by the rewrite filters, which only need to know which name a line
/// belongs to.
pub fn parse_name(line: &str) -> Option<&str> {
    split_alias_line(line).map(|(name, _)| name)
}

/// Decodes one line into an [`AliasRecord`], or `None` if it is opaque.
///
/// The value is trimmed, then a single symmetric pair of leading/trailing
/// `"` or `'` is stripped. Quotes embedded in the middle of the value, or an
/// unbalanced quote on one end only, are left untouched.
pub fn parse(line: &str) -> Option<AliasRecord> {
    let (name, raw_value) = split_alias_line(line)?;
    let command = strip_symmetric_quotes(raw_value.trim());

    Some(AliasRecord {
        name: name.to_string(),
        command: command.to_string(),
    })
}

fn strip_symmetric_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }

    value
}

/// Encodes a record as `alias NAME="COMMAND"`.
///
/// The command is always re-wrapped in double quotes on write, regardless of
/// how it was originally quoted. Quote characters inside the command are not
/// escaped; a command containing `"` will not round-trip through [`parse`]
/// intact. This matches the shell's own behavior closely enough for the
/// launch commands this tool writes and is kept as a known limitation.
pub fn format(name: &str, command: &str) -> String {
    format!("alias {name}=\"{command}\"")
}
