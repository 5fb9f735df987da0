//! vc-jj - Jujutsu backend for editor version-control layers
//!
//! Runs the `jj` command-line tool and maps its output onto the small
//! vocabulary a generic version-control layer understands.
//!
//! This library provides:
//! - [`config`]: Backend configuration
//! - [`jj`]: Jujutsu command execution and parsing
//! - [`logging`]: Tracing subscriber setup
//! - [`model`]: Domain models
//! - [`terminal`]: Styled text output
//! - [`vc`]: Classification, formatting and the backend contract

pub mod config;
pub mod jj;
pub mod logging;
pub mod model;
pub mod terminal;
pub mod vc;
