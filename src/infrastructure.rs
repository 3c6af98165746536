//! Infrastructure layer
//!
//! External-facing plumbing with no domain logic:
//! - [`cli`] - Command line argument parsing
//! - [`config`] - Configuration loading and keybindings
//! - [`tui`] - Terminal backends (real and test)

pub mod cli;
pub mod config;
pub mod tui;
