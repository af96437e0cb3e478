//! The alias store: CRUD over named alias records backed by a text file.
//!
//! Each operation is a full read-modify-write against the alias file, which
//! is the single source of truth; nothing is cached between calls. Lines
//! that do not match the alias grammar are opaque and survive every rewrite
//! in their original relative order.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;

use log::debug;

use crate::alias_line::{self, AliasRecord};
use crate::config::{INCLUDE_COMMENT, INCLUDE_LINE};
use crate::error::Error::EmptySelection;
use crate::error::{Error, Result};
use crate::injector;

const ALIAS_FILE_DESCRIPTION: &str = "alias file";

/// Store for alias records, bound to an alias file and the shell profile
/// that sources it.
///
/// Paths are explicit construction-time configuration so tests can point the
/// store at temporary files.
pub struct AliasStore {
    alias_path: String,
    profile_path: String,
}

impl AliasStore {
    pub fn new(alias_path: String, profile_path: String) -> Self {
        Self {
            alias_path,
            profile_path,
        }
    }

    /// Reads the alias file as raw lines, or `None` if it does not exist.
    fn read_lines(&self) -> Result<Option<Vec<String>>> {
        match fs::read_to_string(&self.alias_path) {
            Ok(content) => Ok(Some(content.lines().map(str::to_string).collect())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io_error(ALIAS_FILE_DESCRIPTION, &self.alias_path, e)),
        }
    }

    /// Rewrites the whole alias file from `lines`, joined with `\n` and a
    /// single trailing newline.
    fn write_lines(&self, lines: &[String]) -> Result<()> {
        let mut content = lines.join("\n");
        content.push('\n');

        fs::write(&self.alias_path, content)
            .map_err(|e| Error::io_error(ALIAS_FILE_DESCRIPTION, &self.alias_path, e))
    }

    /// Returns every alias record in the file, in file order.
    ///
    /// Opaque lines (comments, blanks, anything not matching the grammar)
    /// are omitted from the listing only; the file is not touched.
    ///
    /// # Errors
    ///
    /// A missing alias file yields an empty list, not an error. Any other
    /// read failure surfaces as [`Error::Io`].
    pub fn list(&self) -> Result<Vec<AliasRecord>> {
        let Some(lines) = self.read_lines()? else {
            return Ok(Vec::new());
        };

        Ok(lines.iter().filter_map(|l| alias_line::parse(l)).collect())
    }

    /// Creates or replaces the alias named `name`.
    ///
    /// The name is validated before any file I/O. The shell profile is wired
    /// up first so the alias file is sourced before it is ever relied upon.
    /// Every existing line for `name` is dropped (pre-existing duplicates
    /// collapse to one) and a freshly encoded `alias NAME="COMMAND"` line is
    /// appended at the end; all other lines keep their relative order.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyName`] or [`Error::InvalidName`] when the name violates
    /// the grammar (no file is touched in that case), [`Error::Io`] on any
    /// read or write failure.
    pub fn upsert(&self, name: &str, command: &str) -> Result<()> {
        alias_line::validate_name(name)?;

        injector::ensure_directive(&self.profile_path, INCLUDE_LINE, Some(INCLUDE_COMMENT))?;

        let mut lines = self.read_lines()?.unwrap_or_default();
        lines.retain(|line| alias_line::parse_name(line) != Some(name));
        lines.push(alias_line::format(name, command));

        debug!(
            "Writing {} line(s) to `{}` after upsert of `{name}`",
            lines.len(),
            self.alias_path
        );
        self.write_lines(&lines)
    }

    /// Removes every alias whose name is in `names`, returning how many
    /// lines were dropped.
    ///
    /// # Errors
    ///
    /// [`Error::EmptySelection`] when `names` is empty (no file is touched).
    /// A missing alias file is a no-op returning 0; other I/O failures
    /// surface as [`Error::Io`].
    pub fn delete(&self, names: &HashSet<String>) -> Result<usize> {
        if names.is_empty() {
            return Err(EmptySelection);
        }

        let Some(lines) = self.read_lines()? else {
            return Ok(0);
        };

        let before = lines.len();
        let kept: Vec<String> = lines
            .into_iter()
            .filter(|line| match alias_line::parse_name(line) {
                Some(name) => !names.contains(name),
                None => true,
            })
            .collect();
        let removed = before - kept.len();

        debug!(
            "Removing {removed} line(s) from `{}` for {} selected name(s)",
            self.alias_path,
            names.len()
        );
        self.write_lines(&kept)?;
        Ok(removed)
    }
}
