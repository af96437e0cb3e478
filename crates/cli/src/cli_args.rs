//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate. Without a subcommand the tool starts its interactive menu.

use clap::{Parser, Subcommand};

/// Command-line arguments for the electron-aliases CLI tool.
///
/// This structure defines all available command-line options and arguments
/// that can be passed to the `ea` binary. It supports both interactive and
/// direct subcommand modes.
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the managed alias file.
    ///
    /// If not provided, defaults to `~/.electron-apps`.
    #[arg(long, short = 'a')]
    pub alias_file_path: Option<String>,

    /// Path to the shell profile that sources the alias file.
    ///
    /// If not provided, defaults to `~/.bashrc`.
    #[arg(long, short = 'p')]
    pub profile_path: Option<String>,

    /// The action to perform directly.
    ///
    /// If not provided, interactive menu mode is used.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all aliases
    List,

    /// Create or replace an alias that launches an application
    Add {
        /// Name of the alias
        name: String,

        /// Application URL or path handed to the Electron launcher
        target: String,
    },

    /// Remove one or more aliases by name
    Remove {
        /// Names of the aliases to remove
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["ea"]);

        assert!(args.alias_file_path.is_none());
        assert!(args.profile_path.is_none());
        assert!(args.command.is_none());
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from(["ea", "-a", "/custom/aliases", "-p", "/custom/bashrc"]);

        assert_eq!(args.alias_file_path, Some("/custom/aliases".to_string()));
        assert_eq!(args.profile_path, Some("/custom/bashrc".to_string()));
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "ea",
            "--alias-file-path",
            "/custom/aliases",
            "--profile-path",
            "/custom/bashrc",
        ]);

        assert_eq!(args.alias_file_path, Some("/custom/aliases".to_string()));
        assert_eq!(args.profile_path, Some("/custom/bashrc".to_string()));
    }

    #[test]
    fn test_args_list_subcommand() {
        let args = Args::parse_from(["ea", "list"]);
        assert!(matches!(args.command, Some(Command::List)));
    }

    #[test]
    fn test_args_add_subcommand() {
        let args = Args::parse_from(["ea", "add", "chat", "https://chat.example.com"]);

        match args.command {
            Some(Command::Add { name, target }) => {
                assert_eq!(name, "chat");
                assert_eq!(target, "https://chat.example.com");
            }
            _ => panic!("Expected Add subcommand"),
        }
    }

    #[test]
    fn test_args_remove_subcommand_multiple_names() {
        let args = Args::parse_from(["ea", "remove", "chat", "mail"]);

        match args.command {
            Some(Command::Remove { names }) => {
                assert_eq!(names, vec!["chat".to_string(), "mail".to_string()]);
            }
            _ => panic!("Expected Remove subcommand"),
        }
    }

    #[test]
    fn test_args_remove_requires_at_least_one_name() {
        let result = Args::try_parse_from(["ea", "remove"]);
        assert!(result.is_err());
    }
}
