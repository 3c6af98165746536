//! Presentation layer
//!
//! Stateless rendering of [`crate::core::state::AppState`]:
//! - [`theme`] - Settings-driven palettes
//! - [`components`] - Screen regions (header, feed, settings panel, status bar)
//! - [`widgets`] - Reusable ratatui widgets (post card, post menu)

pub mod components;
pub mod theme;
pub mod widgets;
