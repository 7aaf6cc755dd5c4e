//! Project configuration stored in `wti_config.json`.
//!
//! The file is loaded once per invocation and handed to every operation by
//! reference. Selecting a project yields a [`ProjectContext`] that the caller
//! threads through the API client and sync engine.

use crate::error::{Result, WtiError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the configuration file, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "wti_config.json";

/// A configured remote project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub api_key: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Contents of `wti_config.json`.
///
/// Projects keep their file order and keys this tool does not know about
/// survive a rewrite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub projects: IndexMap<String, Project>,
    #[serde(rename = "removeNullValues", default)]
    pub remove_null_values: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The project an operation runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    pub key: String,
    pub name: String,
    pub api_key: String,
}

impl ProjectContext {
    /// Display name, falling back to the local key when the name is empty.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.key
        } else {
            &self.name
        }
    }
}

/// Build the local key for a project from its remote name.
///
/// Whitespace, `-` and `_` are removed and the rest is lowercased, then
/// prefixed with `project_`.
pub fn project_key(name: &str) -> String {
    let slug: String = name
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect();
    format!("project_{}", slug)
}

/// Path of the configuration file inside `dir`.
pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

impl GlobalConfig {
    pub fn new(remove_null_values: bool) -> Self {
        Self {
            remove_null_values,
            ..Self::default()
        }
    }

    /// Load the configuration from `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = config_path(dir);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(WtiError::ConfigMissing(dir.to_path_buf()));
            }
            Err(e) => return Err(WtiError::local_io(path, e)),
        };

        let config: GlobalConfig =
            serde_json::from_str(&content).map_err(|e| WtiError::ConfigInvalid(e.to_string()))?;
        debug!(path = %path.display(), projects = config.projects.len(), "Loaded config");
        Ok(config)
    }

    /// Write the configuration to `dir`, pretty-printed with 4-space indentation.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let path = config_path(dir);
        let body = crate::document::to_pretty_string(self)?;
        fs::write(&path, body).map_err(|e| WtiError::local_io(&path, e))?;
        debug!(path = %path.display(), "Wrote config");
        Ok(())
    }

    pub fn has_api_key(&self, api_key: &str) -> bool {
        self.projects.values().any(|p| p.api_key == api_key)
    }

    /// Register a project under its derived key and return that key.
    ///
    /// Fails when a project with the same API key is already configured, or
    /// when another project already owns the derived key.
    pub fn add_project(&mut self, name: &str, api_key: &str) -> Result<String> {
        let key = project_key(name);
        if self.has_api_key(api_key) || self.projects.contains_key(&key) {
            return Err(WtiError::DuplicateProject(name.to_string()));
        }
        self.projects.insert(
            key.clone(),
            Project {
                name: name.to_string(),
                api_key: api_key.to_string(),
                extra: Map::new(),
            },
        );
        Ok(key)
    }

    /// Pick the project to run against.
    ///
    /// An explicit key must exist. Without one, a single configured project
    /// is selected; several projects require an explicit choice.
    pub fn select_project(&self, requested: Option<&str>) -> Result<ProjectContext> {
        let key = match requested {
            Some(key) => {
                if !self.projects.contains_key(key) {
                    return Err(WtiError::InvalidProject(key.to_string()));
                }
                key.to_string()
            }
            None => match self.projects.len() {
                0 => {
                    return Err(WtiError::ConfigInvalid(
                        "no projects configured, run `wti add-project`".to_string(),
                    ))
                }
                1 => self.projects.keys().next().cloned().unwrap_or_default(),
                _ => {
                    let keys: Vec<&str> = self.projects.keys().map(String::as_str).collect();
                    return Err(WtiError::InvalidProject(format!(
                        "several projects configured, choose one with --project ({})",
                        keys.join(", ")
                    )));
                }
            },
        };

        let project = &self.projects[&key];
        Ok(ProjectContext {
            key,
            name: project.name.clone(),
            api_key: project.api_key.clone(),
        })
    }
}
