//! Configuration path utilities for electron-aliases.
//!
//! This module provides the well-known file locations and directive text,
//! along with functions for resolving custom paths and expanding shell
//! variables like `~` in them.

/// Default path for the managed alias file
const DEFAULT_ALIAS_FILE_PATH: &str = "~/.electron-apps";
/// Default path for the shell profile that sources the alias file
const DEFAULT_PROFILE_PATH: &str = "~/.bashrc";

/// The literal line that makes the shell profile source the alias file
pub const INCLUDE_LINE: &str =
    "[ -f \"$HOME/.electron-apps\" ] && source \"$HOME/.electron-apps\"";

/// Comment written above [`INCLUDE_LINE`] when it is first added
pub const INCLUDE_COMMENT: &str = "# Load custom Electron app aliases";

/// Electron binary used to build launch commands for new aliases
pub const DEFAULT_LAUNCHER: &str = "/usr/lib/electron37/electron";

/// Resolves the alias file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// alias file path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use electron_aliases_core::config::get_alias_file_path;
///
/// // Use default path
/// let default_path = get_alias_file_path(&None);
///
/// // Use custom path
/// let custom_path = get_alias_file_path(&Some("/path/to/aliases".to_string()));
/// ```
pub fn get_alias_file_path(alias_file_path_arg: &Option<String>) -> String {
    let alias_file_path = match alias_file_path_arg {
        Some(alias_file_path) => alias_file_path,
        None => DEFAULT_ALIAS_FILE_PATH,
    };

    shellexpand::tilde(alias_file_path).to_string()
}

/// Resolves the shell profile path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// profile path. Shell expansions like `~` are resolved.
pub fn get_profile_path(profile_path_arg: &Option<String>) -> String {
    let profile_path = match profile_path_arg {
        Some(profile_path) => profile_path,
        None => DEFAULT_PROFILE_PATH,
    };

    shellexpand::tilde(profile_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_alias_file_path_with_custom_path() {
        let custom_path = Some("/custom/path/aliases".to_string());
        let result = get_alias_file_path(&custom_path);
        assert_eq!(result, "/custom/path/aliases");
    }

    #[test]
    fn test_get_alias_file_path_with_none() {
        let result = get_alias_file_path(&None);
        // Should expand the tilde in the default path
        assert!(result.ends_with(".electron-apps"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_alias_file_path_with_tilde() {
        let tilde_path = Some("~/my-aliases".to_string());
        let result = get_alias_file_path(&tilde_path);
        // Should expand the tilde
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-aliases"));
    }

    #[test]
    fn test_get_profile_path_with_custom_path() {
        let custom_path = Some("/custom/bashrc".to_string());
        let result = get_profile_path(&custom_path);
        assert_eq!(result, "/custom/bashrc");
    }

    #[test]
    fn test_get_profile_path_with_none() {
        let result = get_profile_path(&None);
        // Should expand the tilde in the default path
        assert!(result.ends_with(".bashrc"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_include_line_references_alias_file() {
        assert!(INCLUDE_LINE.contains(".electron-apps"));
        assert!(INCLUDE_LINE.contains("source"));
    }
}
