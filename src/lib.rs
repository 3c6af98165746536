//! # Feedtui - A social feed playground for the terminal
//!
//! A single-screen feed of synthesized post cards with a settings panel for
//! live appearance preview and ten switchable scrolling behaviors, built with
//! Rust and Ratatui. This library implements an Elm-like architecture for
//! predictable state management.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): Application state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects (timers, simulated latency)
//! - **View** (`presentation`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use feedtui::core::msg::{settings::SettingsMsg, Msg};
//! use feedtui::core::state::AppState;
//! use feedtui::core::update::update;
//! use feedtui::domain::mode::ScrollMode;
//!
//! // Initialize state
//! let initial_state = AppState::default();
//!
//! // Process messages
//! let (new_state, commands) = update(
//!     Msg::Settings(SettingsMsg::SetScrollMode(ScrollMode::Parallax)),
//!     initial_state,
//! );
//!
//! // State is now updated; commands contain side effects to execute
//! assert_eq!(new_state.scroll.active(), ScrollMode::Parallax);
//! assert!(commands.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, the update function, commands
//! - [`domain`] - Posts, geometry, per-mode visual math
//! - [`infrastructure`] - CLI, configuration, terminal backends
//! - [`presentation`] - Components and widgets
//! - [`integration`] - The async runner loop
//! - [`utils`] - Logging, panic handling, paths

#![deny(warnings)]
#![allow(dead_code)]

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::cmd::Cmd;
pub use crate::core::msg::Msg;
pub use crate::core::raw_msg::RawMsg;
pub use crate::core::state::AppState;
pub use crate::core::translator::translate_raw_to_domain;
pub use crate::core::update::update;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
