//! Remote translation service API.
//!
//! [`TranslationApi`] is the transport seam: one implementation talks HTTP
//! with reqwest, tests substitute an in-memory double. The typed helpers in
//! this module build the endpoint paths and decode responses.
//!
//! ```text
//! GET  <base>.json                                  project descriptor
//! GET  <base>/stats.json                            per-locale statistics
//! GET  <base>/files/<master>/locales/<locale>       translation document
//! PUT  <base>/files/<master>/locales/<locale>       multipart upload (`file`)
//! ```

pub mod http;

use crate::error::{Result, WtiError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

pub use http::{HttpApi, DEFAULT_API_URL};

/// Identifier of a remote project file
pub type FileId = u64;

/// Authenticated access to one project's API.
///
/// Paths are relative to the project base (`/api/projects/<api_key>`).
/// Implementations treat a body carrying an `error` key as a failure.
#[async_trait]
pub trait TranslationApi: Send + Sync {
    /// GET `path` and return the parsed JSON body.
    async fn get_json(&self, path: &str) -> Result<Value>;

    /// PUT `content` to `path` as the multipart field `file`.
    async fn put_file(&self, path: &str, file_name: &str, content: Vec<u8>) -> Result<Value>;
}

/// One locale's file as known by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteFile {
    pub id: FileId,
    pub name: String,
    pub locale_code: String,
    #[serde(default)]
    pub master_project_file_id: Option<FileId>,
}

impl RemoteFile {
    pub fn is_master(&self) -> bool {
        self.master_project_file_id.is_none()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectInfo {
    pub name: String,
    #[serde(default)]
    pub project_files: Vec<RemoteFile>,
}

#[derive(Debug, Clone, Deserialize)]
struct ProjectEnvelope {
    project: ProjectInfo,
}

/// Translation counters for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LocaleStats {
    pub count_strings: u64,
    pub count_strings_to_translate: u64,
}

/// Fail when a response body carries the API's `error` key.
pub fn check_api_error(body: &Value) -> Result<()> {
    match body.get("error") {
        None | Some(Value::Null) => Ok(()),
        Some(Value::String(msg)) => Err(WtiError::Remote(msg.clone())),
        Some(other) => Err(WtiError::Remote(other.to_string())),
    }
}

fn decode<T: DeserializeOwned>(body: Value, what: &str) -> Result<T> {
    serde_json::from_value(body)
        .map_err(|e| WtiError::Remote(format!("unexpected {} response: {}", what, e)))
}

fn locale_path(master_id: FileId, locale_code: &str) -> String {
    format!("/files/{}/locales/{}", master_id, locale_code)
}

/// Fetch the project descriptor (name and file list).
pub async fn fetch_project(api: &dyn TranslationApi) -> Result<ProjectInfo> {
    let body = api.get_json(".json").await?;
    let envelope: ProjectEnvelope = decode(body, "project")?;
    Ok(envelope.project)
}

/// Fetch per-locale statistics, in response order.
pub async fn fetch_stats(api: &dyn TranslationApi) -> Result<Vec<(String, LocaleStats)>> {
    let body = api.get_json("/stats.json").await?;
    let map = match body {
        Value::Object(map) => map,
        other => {
            return Err(WtiError::Remote(format!(
                "unexpected stats response: {}",
                other
            )))
        }
    };

    map.into_iter()
        .map(|(locale, stats)| -> Result<(String, LocaleStats)> {
            Ok((locale, decode(stats, "stats")?))
        })
        .collect()
}

/// Download the document for `locale_code` of the master file `master_id`.
pub async fn fetch_locale(
    api: &dyn TranslationApi,
    master_id: FileId,
    locale_code: &str,
) -> Result<Value> {
    api.get_json(&locale_path(master_id, locale_code)).await
}

/// Upload `content` as the document for `locale_code`.
pub async fn upload_locale(
    api: &dyn TranslationApi,
    master_id: FileId,
    locale_code: &str,
    file_name: &str,
    content: Vec<u8>,
) -> Result<()> {
    let body = api
        .put_file(&locale_path(master_id, locale_code), file_name, content)
        .await?;
    check_api_error(&body)
}
