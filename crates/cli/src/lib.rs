//! Electron Aliases CLI Library
//!
//! This crate provides the command-line interface for electron-aliases, a
//! tool for managing shell aliases that launch Electron applications. It
//! handles argument parsing, the interactive menu, prompting and rendering;
//! all file semantics live in `electron-aliases-core`.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`interaction`]: Interactive menu, prompts and listing output
//! - [`launch`]: Construction of the launch command stored behind an alias
//!
//! # Examples
//!
//! The CLI binary (`ea`) can be used in several ways:
//!
//! ```bash
//! # Interactive mode - shows the menu
//! ea
//!
//! # Direct subcommands
//! ea list
//! ea add chat https://chat.example.com
//! ea remove chat mail
//!
//! # Against custom files (mainly for trying things out)
//! ea -a /tmp/aliases -p /tmp/bashrc list
//! ```

pub mod cli_args;
pub mod interaction;
pub mod launch;
