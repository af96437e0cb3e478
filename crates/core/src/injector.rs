//! Idempotent injection of a directive line into a shell profile file.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};

use log::debug;

use crate::error::{Error, Result};

const PROFILE_DESCRIPTION: &str = "shell profile";

/// Guarantees that `directive` appears in the file at `path` exactly once,
/// without disturbing any other content.
///
/// A missing file is created empty first so the append below succeeds. The
/// presence check is a substring check, not line-exact: it tolerates
/// whitespace or comment variations a user already hand-edited in. When the
/// directive is absent, a blank line, the optional `comment` and the
/// directive are appended, each newline-terminated.
///
/// Calling this twice with the same arguments leaves the file byte-identical
/// to the state after the first call.
///
/// # Errors
///
/// Any I/O failure other than "file not found" on the initial read surfaces
/// as [`Error::Io`]; nothing has been written when the read fails.
pub fn ensure_directive(path: &str, directive: &str, comment: Option<&str>) -> Result<()> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            fs::write(path, "").map_err(|e| Error::io_error(PROFILE_DESCRIPTION, path, e))?;
            String::new()
        }
        Err(e) => return Err(Error::io_error(PROFILE_DESCRIPTION, path, e)),
    };

    if content.contains(directive) {
        debug!("Directive already present in `{path}`, nothing to do");
        return Ok(());
    }

    let mut addition = String::from("\n");
    if let Some(comment) = comment {
        addition.push_str(comment);
        addition.push('\n');
    }
    addition.push_str(directive);
    addition.push('\n');

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| Error::io_error(PROFILE_DESCRIPTION, path, e))?;

    file.write_all(addition.as_bytes())
        .map_err(|e| Error::io_error(PROFILE_DESCRIPTION, path, e))?;

    debug!("Appended directive to `{path}`");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const DIRECTIVE: &str = "[ -f \"$HOME/.apps\" ] && source \"$HOME/.apps\"";

    #[test]
    fn test_ensure_creates_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile");
        let path_str = path.to_str().unwrap();

        ensure_directive(path_str, DIRECTIVE, Some("# apps")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("\n# apps\n{DIRECTIVE}\n"));
    }

    #[test]
    fn test_ensure_appends_after_existing_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile");
        fs::write(&path, "export PATH=/bin\n").unwrap();

        ensure_directive(path.to_str().unwrap(), DIRECTIVE, None).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("export PATH=/bin\n\n{DIRECTIVE}\n"));
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile");
        let path_str = path.to_str().unwrap();

        ensure_directive(path_str, DIRECTIVE, Some("# apps")).unwrap();
        let after_first = fs::read_to_string(&path).unwrap();

        ensure_directive(path_str, DIRECTIVE, Some("# apps")).unwrap();
        let after_second = fs::read_to_string(&path).unwrap();

        assert_eq!(after_first, after_second);
    }

    #[test]
    fn test_ensure_substring_match_suppresses_append() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("profile");
        // Directive present but indented: still counts as present.
        fs::write(&path, format!("  {DIRECTIVE} # keep\n")).unwrap();

        ensure_directive(path.to_str().unwrap(), DIRECTIVE, None).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("  {DIRECTIVE} # keep\n"));
    }

    #[test]
    fn test_ensure_path_is_directory_errors() {
        let dir = tempdir().unwrap();
        let result = ensure_directive(dir.path().to_str().unwrap(), DIRECTIVE, None);
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
