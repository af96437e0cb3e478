//! Electron Aliases Core Library
//!
//! This crate provides the core functionality for electron-aliases, a tool
//! that manages shell aliases for launching Electron applications. It owns
//! the two managed files: the alias file holding one `alias NAME=VALUE` line
//! per record, and the shell profile that sources it.
//!
//! # Key Features
//!
//! - **Alias Store**: Create, list and remove alias records while preserving
//!   any unrelated content in the alias file
//! - **Directive Injection**: Idempotently wire the alias file into the
//!   shell profile, at most once
//! - **Line Grammar**: Pure decode/encode of the `alias NAME=VALUE` syntax
//! - **Configuration Management**: Resolve the managed file paths
//! - **Error Handling**: Dedicated error types for validation and file I/O
//!
//! # Examples
//!
//! Listing the aliases currently on disk:
//!
//! ```no_run
//! use electron_aliases_core::store::AliasStore;
//!
//! let store = AliasStore::new(
//!     "/home/me/.electron-apps".to_string(),
//!     "/home/me/.bashrc".to_string(),
//! );
//! for record in store.list()? {
//!     println!("{record}");
//! }
//! # Ok::<(), electron_aliases_core::error::Error>(())
//! ```

pub mod alias_line;
pub mod config;
pub mod error;
pub mod injector;
pub mod store;
