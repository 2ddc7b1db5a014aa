mod fs_store;

pub use fs_store::FsDocumentStore;

use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("read failed `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("json parse failed `{path}`: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ReadError {
    pub fn path(&self) -> &str {
        match self {
            ReadError::Io { path, .. } | ReadError::Parse { path, .. } => path,
        }
    }
}

pub trait DocumentStore {
    fn list_json_files(&self, root: &Path) -> Result<Vec<PathBuf>, ReadError>;

    fn exists(&self, path: &Path) -> bool;

    fn read_json(&self, path: &Path) -> Result<Value, ReadError>;
}
