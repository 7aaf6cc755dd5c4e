//! Synchronize JSON locale files with WebTranslateIt.
//!
//! The library exposes the pieces the `wti` binary is built from: project
//! configuration, the remote API seam, and the pull/push sync engine.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod output;
pub mod project;
pub mod status;
pub mod sync;

pub use config::{GlobalConfig, Project, ProjectContext};
pub use error::{Result, WtiError};
