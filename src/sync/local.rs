//! Local side of a sync: reading and writing locale files.
//!
//! Remote file names are untrusted paths relative to the working directory.
//! They are checked before any disk access so a file can never land outside
//! it.

use crate::document;
use crate::error::{Result, WtiError};
use serde_json::Value;
use std::io;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Resolve `relative` under `root`.
///
/// A leading `/` is dropped so the name still lands under `root`. `..` and
/// drive prefixes fail with a `LocalIo` error, as does a name with no file
/// component at all.
pub fn resolve_local_path(root: &Path, relative: &str) -> Result<PathBuf> {
    let mut path = root.to_path_buf();
    let mut has_file = false;

    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => {
                path.push(part);
                has_file = true;
            }
            Component::RootDir | Component::CurDir => {}
            Component::ParentDir => return Err(rejected(relative, "path traversal not allowed")),
            Component::Prefix(_) => return Err(rejected(relative, "prefix paths not allowed")),
        }
    }

    if !has_file {
        return Err(rejected(relative, "no file name"));
    }
    Ok(path)
}

fn rejected(relative: &str, reason: &str) -> WtiError {
    WtiError::local_io(relative, io::Error::new(io::ErrorKind::InvalidInput, reason))
}

/// Write `doc` pretty-printed to `path`, creating parent directories.
pub async fn write_document(path: &Path, doc: &Value) -> Result<()> {
    let body = document::to_pretty_string(doc)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| WtiError::local_io(parent, e))?;
    }
    fs::write(path, body)
        .await
        .map_err(|e| WtiError::local_io(path, e))
}

/// Read a local locale file for upload.
pub async fn read_upload(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).await.map_err(|e| WtiError::local_io(path, e))
}

/// File name sent with a multipart upload
pub fn upload_file_name(relative: &str) -> String {
    Path::new(relative)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| relative.to_string())
}
