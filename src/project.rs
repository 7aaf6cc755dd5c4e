//! Registering projects: `init` creates the config, `add-project` extends it.
//!
//! Both look the project up remotely with the given API key first, so a
//! config only ever holds keys the service accepted.

use crate::api::{self, TranslationApi};
use crate::config::{config_path, GlobalConfig};
use crate::error::{Result, WtiError};
use std::path::Path;
use tracing::info;

/// Project registered by `init` or `add-project`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registered {
    pub key: String,
    pub name: String,
}

fn require_key(api_key: &str) -> Result<&str> {
    let key = api_key.trim();
    if key.is_empty() {
        return Err(WtiError::ConfigInvalid(
            "You need to specify an API key in order to add a project".to_string(),
        ));
    }
    Ok(key)
}

/// Create `wti_config.json` in `dir` with a single project.
///
/// `api` must be authenticated with `api_key`.
pub async fn init_config(
    api: &dyn TranslationApi,
    dir: &Path,
    api_key: &str,
    remove_null_values: bool,
) -> Result<Registered> {
    if config_path(dir).exists() {
        return Err(WtiError::ConfigExists(config_path(dir)));
    }
    let api_key = require_key(api_key)?;

    let project = api::fetch_project(api).await?;
    let mut config = GlobalConfig::new(remove_null_values);
    let key = config.add_project(&project.name, api_key)?;
    config.save(dir)?;

    info!(project = %project.name, %key, "Created config");
    Ok(Registered {
        key,
        name: project.name,
    })
}

/// Add the project behind `api_key` to an existing config and save it.
pub async fn add_project(
    api: &dyn TranslationApi,
    config: &mut GlobalConfig,
    dir: &Path,
    api_key: &str,
) -> Result<Registered> {
    let api_key = require_key(api_key)?;
    let project = api::fetch_project(api).await?;

    let key = config.add_project(&project.name, api_key)?;
    config.save(dir)?;

    info!(project = %project.name, %key, "Added project");
    Ok(Registered {
        key,
        name: project.name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    struct DescriptorApi(&'static str);

    #[async_trait]
    impl TranslationApi for DescriptorApi {
        async fn get_json(&self, _path: &str) -> Result<Value> {
            Ok(json!({"project": {"name": self.0, "project_files": []}}))
        }

        async fn put_file(
            &self,
            _path: &str,
            _file_name: &str,
            _content: Vec<u8>,
        ) -> Result<Value> {
            Ok(json!({}))
        }
    }

    #[tokio::test]
    async fn test_init_writes_config() {
        let dir = tempfile::tempdir().unwrap();
        let registered = init_config(&DescriptorApi("Web Shop"), dir.path(), "k1", true)
            .await
            .unwrap();
        assert_eq!(registered.key, "project_webshop");

        let config = GlobalConfig::load(dir.path()).unwrap();
        assert!(config.remove_null_values);
        assert_eq!(config.projects["project_webshop"].api_key, "k1");
    }

    #[tokio::test]
    async fn test_init_refuses_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        GlobalConfig::new(false).save(dir.path()).unwrap();
        let err = init_config(&DescriptorApi("Demo"), dir.path(), "k1", false)
            .await
            .unwrap_err();
        assert!(matches!(err, WtiError::ConfigExists(_)));
    }

    #[tokio::test]
    async fn test_init_requires_key() {
        let dir = tempfile::tempdir().unwrap();
        let err = init_config(&DescriptorApi("Demo"), dir.path(), "  ", false)
            .await
            .unwrap_err();
        assert!(matches!(err, WtiError::ConfigInvalid(_)));
        assert!(!config_path(dir.path()).exists());
    }

    #[tokio::test]
    async fn test_add_project_and_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = GlobalConfig::new(false);
        config.add_project("First", "k1").unwrap();

        let registered = add_project(&DescriptorApi("Second"), &mut config, dir.path(), "k2")
            .await
            .unwrap();
        assert_eq!(registered.name, "Second");
        assert_eq!(GlobalConfig::load(dir.path()).unwrap().projects.len(), 2);

        let err = add_project(&DescriptorApi("Again"), &mut config, dir.path(), "k2")
            .await
            .unwrap_err();
        assert!(matches!(err, WtiError::DuplicateProject(_)));
    }
}
