use serde::{de::DeserializeOwned, Serialize};
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::Mutex;

use crate::domain::repositories::RepositoryError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode records: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<StorageError> for RepositoryError {
    fn from(err: StorageError) -> Self {
        RepositoryError::Storage(err.to_string())
    }
}

/// A JSON array of records kept in a single file
///
/// Every mutation is a full read-modify-write of the file. The cycle runs
/// under an async mutex, and the new contents are written to a sibling temp
/// file that is renamed over the target, so readers never see a partial file.
///
/// A missing file reads as an empty list; it is created on first write.
pub struct JsonFileStore<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record
    pub async fn load(&self) -> Result<Vec<T>, StorageError> {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    /// Runs `f` over the records and persists the result if `f` succeeds
    ///
    /// When `f` returns an error the file is left untouched.
    pub async fn update<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, E>,
        E: From<StorageError>,
    {
        let _guard = self.lock.lock().await;
        let mut records = self.read().await?;
        let output = f(&mut records)?;
        self.write(&records).await?;
        Ok(output)
    }

    async fn read(&self) -> Result<Vec<T>, StorageError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|source| StorageError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    async fn write(&self, records: &[T]) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(records)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StorageError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|source| StorageError::Io {
                path: tmp.clone(),
                source,
            })?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|source| StorageError::Io {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(path = %self.path.display(), records = records.len(), "Persisted records");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: u32,
    }

    fn store(dir: &tempfile::TempDir) -> JsonFileStore<Note> {
        JsonFileStore::new(dir.path().join("notes.json"))
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store(&dir).load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        tokio::fs::write(store.path(), "  \n").await.unwrap();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        tokio::fs::write(store.path(), "{not json").await.unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StorageError::Malformed { .. }));
    }

    #[tokio::test]
    async fn update_persists_and_returns_output() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        let len = store
            .update(|notes| {
                notes.push(Note { id: 1 });
                Ok::<_, StorageError>(notes.len())
            })
            .await
            .unwrap();

        assert_eq!(len, 1);
        assert_eq!(store.load().await.unwrap(), vec![Note { id: 1 }]);
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn failed_update_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        store
            .update(|notes| {
                notes.push(Note { id: 1 });
                Ok::<_, StorageError>(())
            })
            .await
            .unwrap();

        let result: Result<(), RepositoryError> = store
            .update(|notes| {
                notes.clear();
                Err(RepositoryError::conflict("nope"))
            })
            .await;

        assert!(result.is_err());
        assert_eq!(store.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn concurrent_updates_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(store(&dir));

        let mut handles = Vec::new();
        for id in 0..20 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store
                    .update(|notes| {
                        notes.push(Note { id });
                        Ok::<_, StorageError>(())
                    })
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.load().await.unwrap().len(), 20);
    }

    #[tokio::test]
    async fn creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonFileStore<Note> = JsonFileStore::new(dir.path().join("nested/notes.json"));

        store
            .update(|notes| {
                notes.push(Note { id: 9 });
                Ok::<_, StorageError>(())
            })
            .await
            .unwrap();

        assert_eq!(store.load().await.unwrap().len(), 1);
    }
}
