//! Pull/push synchronization of locale files.
//!
//! # Flow
//!
//! ```text
//! resolver (project files, master id)
//!    -> filter (locales / master only / all but master)
//!    -> engine (one independent pipeline per file, fanned out)
//!    -> SyncReport (one outcome per file, in selection order)
//! ```
//!
//! A failure on one file never stops the others. Only resolving the file
//! set can fail the whole run.

pub mod engine;
pub mod filter;
pub mod local;
pub mod resolver;

pub use engine::SyncEngine;
pub use filter::{filter_files, Selection};
pub use resolver::{resolve_files, FileSet};

use crate::api::RemoteFile;

/// Sync direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncDirection {
    /// Remote -> local
    Pull,
    /// Local -> remote
    Push,
}

impl SyncDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncDirection::Pull => "pull",
            SyncDirection::Push => "push",
        }
    }
}

/// Which files a pull or push should touch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncRequest {
    /// Explicit locale codes; empty means every non-master locale
    pub locales: Vec<String>,
    /// Only the master file, ignoring `locales`
    pub master_only: bool,
}

impl SyncRequest {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn locales<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            locales: locales.into_iter().map(Into::into).collect(),
            master_only: false,
        }
    }

    pub fn master() -> Self {
        Self {
            locales: Vec::new(),
            master_only: true,
        }
    }

    /// Parse a space-separated locale list as given on the command line.
    pub fn parse_locales(raw: Option<&str>) -> Vec<String> {
        raw.map(|s| s.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Succeeded,
    Failed,
}

/// Result of syncing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub locale_code: String,
    pub file_name: String,
    pub status: SyncStatus,
    /// Failure reason, or a note for successful pushes
    pub detail: Option<String>,
}

impl SyncOutcome {
    pub fn succeeded(file: &RemoteFile, detail: Option<String>) -> Self {
        Self {
            locale_code: file.locale_code.clone(),
            file_name: file.name.clone(),
            status: SyncStatus::Succeeded,
            detail,
        }
    }

    pub fn failed(file: &RemoteFile, detail: impl Into<String>) -> Self {
        Self {
            locale_code: file.locale_code.clone(),
            file_name: file.name.clone(),
            status: SyncStatus::Failed,
            detail: Some(detail.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == SyncStatus::Succeeded
    }
}

/// Everything a pull or push produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub direction: SyncDirection,
    pub outcomes: Vec<SyncOutcome>,
    /// Requested locales with no remote file
    pub unmatched_locales: Vec<String>,
}

impl SyncReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn outcome(&self, locale_code: &str) -> Option<&SyncOutcome> {
        self.outcomes.iter().find(|o| o.locale_code == locale_code)
    }
}

/// Observer for per-file progress.
///
/// Called once when a file goes in flight and once when it settles.
pub trait SyncProgress: Send + Sync {
    fn file_started(&self, direction: SyncDirection, file: &RemoteFile);
    fn file_finished(&self, direction: SyncDirection, outcome: &SyncOutcome);
}

/// Progress observer that ignores every event
pub struct NoProgress;

impl SyncProgress for NoProgress {
    fn file_started(&self, _direction: SyncDirection, _file: &RemoteFile) {}
    fn file_finished(&self, _direction: SyncDirection, _outcome: &SyncOutcome) {}
}
