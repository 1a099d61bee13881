use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures surfaced by the note and to-do stores. Neither is fatal: the
/// caller reports them and keeps running.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not load To-dos: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not save: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    pub(crate) fn load(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Load { path: path.into(), source }
    }

    pub(crate) fn save(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Save { path: path.into(), source }
    }

    pub fn path(&self) -> &Path {
        match self {
            StoreError::Load { path, .. } | StoreError::Save { path, .. } => {
                path
            }
        }
    }
}
