//! Integration layer
//!
//! Wires the Elm core to the terminal: the async runner loop.

pub mod app_runner;

pub use app_runner::AppRunner;
