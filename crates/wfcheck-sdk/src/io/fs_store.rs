use super::{DocumentStore, ReadError};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FsDocumentStore {
    excluded_dirs: Vec<String>,
}

impl Default for FsDocumentStore {
    fn default() -> Self {
        Self {
            excluded_dirs: vec!["node_modules".to_string()],
        }
    }
}

impl FsDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_excluded_dirs(mut self, dirs: impl IntoIterator<Item = String>) -> Self {
        for dir in dirs {
            if !self.excluded_dirs.contains(&dir) {
                self.excluded_dirs.push(dir);
            }
        }
        self
    }

    pub fn excluded_dirs(&self) -> &[String] {
        &self.excluded_dirs
    }

    fn skip_dir(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            return false;
        };
        name.starts_with('.') || self.excluded_dirs.iter().any(|excluded| excluded == name)
    }
}

impl DocumentStore for FsDocumentStore {
    fn list_json_files(&self, root: &Path) -> Result<Vec<PathBuf>, ReadError> {
        let mut files = Vec::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(current) = pending.pop() {
            let entries = match fs::read_dir(&current) {
                Ok(entries) => entries,
                Err(source) if current.as_path() == root => {
                    return Err(ReadError::Io {
                        path: current.display().to_string(),
                        source,
                    });
                }
                Err(error) => {
                    tracing::warn!(dir = %current.display(), %error, "skipping unreadable directory");
                    continue;
                }
            };

            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(error) => {
                        tracing::warn!(dir = %current.display(), %error, "skipping unreadable entry");
                        continue;
                    }
                };
                let path = entry.path();
                if path.is_dir() {
                    if !self.skip_dir(path.as_path()) {
                        pending.push(path);
                    }
                    continue;
                }
                if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                    files.push(path);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_json(&self, path: &Path) -> Result<Value, ReadError> {
        let text = fs::read_to_string(path).map_err(|source| ReadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str::<Value>(text.as_str()).map_err(|source| ReadError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "fs_store_test.rs"]
mod tests;
