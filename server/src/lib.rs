//! Awkawk Server
//!
//! Answers the `/awkawk` slash command with a randomly assembled act of
//! violence against the named victim.

pub mod api;
pub mod awk;
pub mod config;
pub mod util;
