//! Narrow a file set down to the files a sync should touch.

use super::SyncRequest;
use crate::api::{FileId, RemoteFile};

/// Files chosen for a sync, plus requested locales that matched nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub files: Vec<RemoteFile>,
    pub unmatched_locales: Vec<String>,
}

/// Select files for `request`, preserving remote order.
///
/// - `master_only`: exactly the master file, `locales` ignored
/// - explicit locales: the files with those locale codes
/// - otherwise: every file except the master
pub fn filter_files(files: &[RemoteFile], master_id: FileId, request: &SyncRequest) -> Selection {
    if request.master_only {
        return Selection {
            files: files.iter().find(|f| f.id == master_id).cloned().into_iter().collect(),
            unmatched_locales: Vec::new(),
        };
    }

    if request.locales.is_empty() {
        return Selection {
            files: files.iter().filter(|f| f.id != master_id).cloned().collect(),
            unmatched_locales: Vec::new(),
        };
    }

    let selected: Vec<RemoteFile> = files
        .iter()
        .filter(|f| request.locales.iter().any(|l| *l == f.locale_code))
        .cloned()
        .collect();

    let mut unmatched_locales: Vec<String> = Vec::new();
    for locale in &request.locales {
        if !files.iter().any(|f| f.locale_code == *locale) && !unmatched_locales.contains(locale) {
            unmatched_locales.push(locale.clone());
        }
    }

    Selection {
        files: selected,
        unmatched_locales,
    }
}
