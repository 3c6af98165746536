//! Elm-style application core
//!
//! - **State** ([`state`]): the application model, split into substates
//! - **Message** ([`msg`], [`raw_msg`]): domain and raw event types
//! - **Update** ([`update`]): pure state transitions
//! - **Command** ([`cmd`], [`cmd_executor`]): side effects and their runner
//! - **Translator** ([`translator`]): raw events to domain messages

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
