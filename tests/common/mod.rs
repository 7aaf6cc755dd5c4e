//! Shared test double for the remote API.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use wti_sync::api::{FileId, TranslationApi};
use wti_sync::{Result, WtiError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Get(String),
    Put {
        path: String,
        file_name: String,
        content: Vec<u8>,
    },
}

/// In-memory translation service that records every request.
#[derive(Default)]
pub struct MockApi {
    project: Value,
    docs: HashMap<String, Value>,
    failing_locales: HashSet<String>,
    calls: Mutex<Vec<Call>>,
}

impl MockApi {
    /// Project with files given as `(id, locale, name, master_id)`.
    pub fn with_files(files: &[(FileId, &str, &str, Option<FileId>)]) -> Self {
        let files: Vec<Value> = files
            .iter()
            .map(|(id, locale, name, master)| {
                json!({
                    "id": id,
                    "name": name,
                    "locale_code": locale,
                    "master_project_file_id": master,
                })
            })
            .collect();
        Self {
            project: json!({"project": {"name": "Demo", "project_files": files}}),
            ..Default::default()
        }
    }

    pub fn doc(mut self, locale: &str, doc: Value) -> Self {
        self.docs.insert(locale.to_string(), doc);
        self
    }

    /// Every request for `locale` fails with a transport error.
    pub fn failing(mut self, locale: &str) -> Self {
        self.failing_locales.insert(locale.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn puts(&self) -> Vec<(String, Vec<u8>)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Put { path, content, .. } => Some((path, content)),
                Call::Get(_) => None,
            })
            .collect()
    }

    fn locale_of(path: &str) -> Option<&str> {
        path.split("/locales/").nth(1)
    }

    fn check_failure(&self, path: &str) -> Result<()> {
        match Self::locale_of(path) {
            Some(locale) if self.failing_locales.contains(locale) => Err(WtiError::Remote(
                format!("connection reset while syncing {}", locale),
            )),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl TranslationApi for MockApi {
    async fn get_json(&self, path: &str) -> Result<Value> {
        self.calls.lock().unwrap().push(Call::Get(path.to_string()));
        if path == ".json" {
            return Ok(self.project.clone());
        }
        self.check_failure(path)?;
        let locale = Self::locale_of(path).unwrap_or_default();
        self.docs
            .get(locale)
            .cloned()
            .ok_or_else(|| WtiError::Remote("File not found".to_string()))
    }

    async fn put_file(&self, path: &str, file_name: &str, content: Vec<u8>) -> Result<Value> {
        self.calls.lock().unwrap().push(Call::Put {
            path: path.to_string(),
            file_name: file_name.to_string(),
            content,
        });
        self.check_failure(path)?;
        Ok(json!({}))
    }
}
