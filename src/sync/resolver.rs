//! Resolve a project's remote file set and its master file.

use crate::api::{self, FileId, RemoteFile, TranslationApi};
use crate::error::{Result, WtiError};
use tracing::debug;

/// Remote files of a project, in response order, plus the master file id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSet {
    pub project_name: String,
    pub master_id: FileId,
    pub files: Vec<RemoteFile>,
}

impl FileSet {
    /// Identify the master in `files`: the first entry with no master reference.
    pub fn from_files(project_name: String, files: Vec<RemoteFile>) -> Result<Self> {
        let master_id = files
            .iter()
            .find(|f| f.is_master())
            .map(|f| f.id)
            .ok_or_else(|| WtiError::NoMasterFile(project_name.clone()))?;

        Ok(Self {
            project_name,
            master_id,
            files,
        })
    }

    pub fn master(&self) -> Option<&RemoteFile> {
        self.files.iter().find(|f| f.id == self.master_id)
    }
}

/// Fetch the project descriptor and identify its master file.
pub async fn resolve_files(api: &dyn TranslationApi) -> Result<FileSet> {
    let project = api::fetch_project(api).await?;
    let set = FileSet::from_files(project.name, project.project_files)?;
    debug!(
        project = %set.project_name,
        master_id = set.master_id,
        files = set.files.len(),
        "Resolved project files"
    );
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(id: FileId, locale: &str, master: Option<FileId>) -> RemoteFile {
        RemoteFile {
            id,
            name: format!("locales/{}.json", locale),
            locale_code: locale.to_string(),
            master_project_file_id: master,
        }
    }

    #[test]
    fn test_master_found_at_any_position() {
        for pos in 0..3 {
            let mut files = vec![remote(2, "fr", Some(9)), remote(3, "de", Some(9))];
            files.insert(pos, remote(9, "en", None));
            let set = FileSet::from_files("Demo".into(), files).unwrap();
            assert_eq!(set.master_id, 9);
            assert_eq!(set.master().unwrap().locale_code, "en");
        }
    }

    #[test]
    fn test_first_null_master_wins() {
        let files = vec![
            remote(4, "fr", Some(1)),
            remote(1, "en", None),
            remote(5, "es", None),
        ];
        let set = FileSet::from_files("Demo".into(), files).unwrap();
        assert_eq!(set.master_id, 1);
    }

    #[test]
    fn test_no_master_file() {
        let files = vec![remote(4, "fr", Some(1))];
        let err = FileSet::from_files("Demo".into(), files).unwrap_err();
        assert!(matches!(err, WtiError::NoMasterFile(name) if name == "Demo"));
    }

    #[test]
    fn test_empty_project() {
        let err = FileSet::from_files("Empty".into(), vec![]).unwrap_err();
        assert!(matches!(err, WtiError::NoMasterFile(_)));
    }
}
