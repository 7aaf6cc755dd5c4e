use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WtiError {
    #[error("There is no wti_config.json configuration file in {}", .0.display())]
    ConfigMissing(PathBuf),

    #[error("The configuration is not a valid JSON: {0}")]
    ConfigInvalid(String),

    #[error("A configuration file is already present at {}", .0.display())]
    ConfigExists(PathBuf),

    #[error("Invalid project specified: {0}")]
    InvalidProject(String),

    #[error("Project \"{0}\" is already in your config file")]
    DuplicateProject(String),

    #[error("Remote error: {0}")]
    Remote(String),

    #[error("No master file found for project {0}")]
    NoMasterFile(String),

    #[error("Local I/O error on {}: {source}", path.display())]
    LocalIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl WtiError {
    pub fn local_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WtiError::LocalIo {
            path: path.into(),
            source,
        }
    }
}

impl From<reqwest::Error> for WtiError {
    fn from(err: reqwest::Error) -> Self {
        WtiError::Remote(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WtiError>;
