//! Command Renderer
//!
//! Turns a sub-command and a target into the sentence posted back to the
//! channel. Word lists and the command table are read-only statics.

pub mod commands;
pub mod error;
pub mod helpers;
pub mod words;

pub use commands::{command_names, lookup, render, Command, RenderContext, HELP};
pub use error::RenderError;
