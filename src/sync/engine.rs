//! Sync engine: one independent pipeline per selected file.
//!
//! Every selected file goes `Pending -> InFlight -> Succeeded | Failed`.
//! The pipelines run concurrently and share nothing: each touches its own
//! local path and its own locale endpoint. Errors inside a pipeline become
//! a failed [`SyncOutcome`]; they never cancel sibling files.

use super::local::{read_upload, resolve_local_path, upload_file_name, write_document};
use super::{
    filter_files, resolve_files, FileSet, SyncDirection, SyncOutcome, SyncProgress, SyncReport,
    SyncRequest,
};
use crate::api::{self, FileId, RemoteFile, TranslationApi};
use crate::document::strip_null_values;
use crate::error::Result;
use futures::future::join_all;
use std::path::PathBuf;
use tracing::{debug, info};

/// Shown after a successful push; imports are processed asynchronously.
pub const PUSH_IMPORT_NOTE: &str = "import takes about 1 min per 1000 segments";

/// Orchestrator for pull and push
pub struct SyncEngine<'a> {
    api: &'a dyn TranslationApi,
    /// Directory that remote file names are relative to
    root: PathBuf,
    remove_null_values: bool,
    progress: &'a dyn SyncProgress,
}

impl<'a> SyncEngine<'a> {
    pub fn new(
        api: &'a dyn TranslationApi,
        root: PathBuf,
        remove_null_values: bool,
        progress: &'a dyn SyncProgress,
    ) -> Self {
        Self {
            api,
            root,
            remove_null_values,
            progress,
        }
    }

    /// Download the selected locales and write them locally.
    pub async fn pull(&self, request: &SyncRequest) -> Result<SyncReport> {
        let set = resolve_files(self.api).await?;
        Ok(self.pull_files(&set, request).await)
    }

    /// Upload the selected local files.
    pub async fn push(&self, request: &SyncRequest) -> Result<SyncReport> {
        let set = resolve_files(self.api).await?;
        Ok(self.push_files(&set, request).await)
    }

    /// Pull against an already resolved file set.
    pub async fn pull_files(&self, set: &FileSet, request: &SyncRequest) -> SyncReport {
        self.run(SyncDirection::Pull, set, request).await
    }

    /// Push against an already resolved file set.
    pub async fn push_files(&self, set: &FileSet, request: &SyncRequest) -> SyncReport {
        self.run(SyncDirection::Push, set, request).await
    }

    async fn run(
        &self,
        direction: SyncDirection,
        set: &FileSet,
        request: &SyncRequest,
    ) -> SyncReport {
        let selection = filter_files(&set.files, set.master_id, request);
        for locale in &selection.unmatched_locales {
            debug!(%locale, "Requested locale has no file in project");
        }
        info!(
            direction = direction.as_str(),
            files = selection.files.len(),
            "Starting sync"
        );

        let pipelines = selection
            .files
            .iter()
            .map(|file| self.sync_file(direction, set.master_id, file));
        let outcomes = join_all(pipelines).await;

        SyncReport {
            direction,
            outcomes,
            unmatched_locales: selection.unmatched_locales,
        }
    }

    async fn sync_file(
        &self,
        direction: SyncDirection,
        master_id: FileId,
        file: &RemoteFile,
    ) -> SyncOutcome {
        self.progress.file_started(direction, file);

        let result = match direction {
            SyncDirection::Pull => self.pull_file(master_id, file).await,
            SyncDirection::Push => self.push_file(master_id, file).await,
        };

        let outcome = match result {
            Ok(()) => {
                let detail = match direction {
                    SyncDirection::Pull => None,
                    SyncDirection::Push => Some(PUSH_IMPORT_NOTE.to_string()),
                };
                SyncOutcome::succeeded(file, detail)
            }
            Err(e) => {
                debug!(
                    direction = direction.as_str(),
                    locale = %file.locale_code,
                    file = %file.name,
                    error = %e,
                    "File sync failed"
                );
                SyncOutcome::failed(file, e.to_string())
            }
        };

        self.progress.file_finished(direction, &outcome);
        outcome
    }

    async fn pull_file(&self, master_id: FileId, file: &RemoteFile) -> Result<()> {
        // Validate before the request so a bad name never costs a download
        let path = resolve_local_path(&self.root, &file.name)?;

        let mut doc = api::fetch_locale(self.api, master_id, &file.locale_code).await?;
        if self.remove_null_values {
            strip_null_values(&mut doc);
        }

        write_document(&path, &doc).await?;
        debug!(locale = %file.locale_code, path = %path.display(), "Pulled");
        Ok(())
    }

    async fn push_file(&self, master_id: FileId, file: &RemoteFile) -> Result<()> {
        let path = resolve_local_path(&self.root, &file.name)?;
        let content = read_upload(&path).await?;
        let bytes = content.len();

        api::upload_locale(
            self.api,
            master_id,
            &file.locale_code,
            &upload_file_name(&file.name),
            content,
        )
        .await?;
        debug!(locale = %file.locale_code, bytes, "Pushed");
        Ok(())
    }
}
