//! Whole-file JSON documents.
//!
//! A document is read in full, changed in memory and written back in full.
//! Writes land in a sibling temp file that is renamed over the target, so a
//! reader sees either the old or the new document, never a torn one.

use super::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Reads and parses `path`, falling back to `default` when the file is
/// missing or does not parse.
pub async fn load<T: DeserializeOwned>(path: &Path, default: T) -> T {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "Document missing, using default");
            return default;
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read document, using default");
            return default;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Corrupt document, using default");
            default
        }
    }
}

/// Serializes `document` with two-space indentation and replaces `path`.
pub async fn save<T: Serialize>(path: &Path, document: &T) -> Result<(), StoreError> {
    let data = serde_json::to_vec_pretty(document)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let tmp = temp_path(path);
    if let Err(e) = write_file(&tmp, &data).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    if let Err(e) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(e.into());
    }

    debug!(path = %path.display(), bytes = data.len(), "Document saved");
    Ok(())
}

async fn write_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path).await?;
    file.write_all(data).await?;
    file.sync_all().await?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    path.with_file_name(format!(".{}.{}.tmp", name, uuid::Uuid::new_v4()))
}

/// A document on disk plus the lock that serializes its read-modify-write
/// cycles inside this process.
pub struct JsonDocument<T> {
    path: PathBuf,
    default: T,
    lock: Mutex<()>,
}

impl<T> JsonDocument<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    pub fn new(path: impl Into<PathBuf>, default: T) -> Self {
        Self {
            path: path.into(),
            default,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self) -> T {
        load(&self.path, self.default.clone()).await
    }

    /// Loads the document, applies `change` and saves the result.
    ///
    /// Nothing is written when `change` returns an error.
    pub async fn update<R, E, F>(&self, change: F) -> Result<R, E>
    where
        F: FnOnce(&mut T) -> Result<R, E>,
        E: From<StoreError>,
    {
        let _guard = self.lock.lock().await;
        let mut doc = self.read().await;
        let out = change(&mut doc)?;
        save(&self.path, &doc).await?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Counter {
        hits: Vec<u32>,
    }

    #[tokio::test]
    async fn test_load_missing_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent.json");
        let doc: Counter = load(&path, Counter { hits: vec![7] }).await;
        assert_eq!(doc.hits, vec![7]);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_load_corrupt_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.json");
        std::fs::write(&path, b"{\"hits\": [1, 2").unwrap();

        let doc: Counter = load(&path, Counter::default()).await;
        assert_eq!(doc, Counter::default());

        std::fs::write(&path, b"").unwrap();
        let doc: Counter = load(&path, Counter::default()).await;
        assert_eq!(doc, Counter::default());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("doc.json");
        let mut doc = BTreeMap::new();
        doc.insert("abc".to_string(), serde_json::json!({"customName": "Plex"}));

        save(&path, &doc).await.unwrap();
        let loaded: BTreeMap<String, serde_json::Value> = load(&path, BTreeMap::new()).await;
        assert_eq!(loaded, doc);
    }

    #[tokio::test]
    async fn test_save_writes_pretty_json_and_no_temp_files() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("doc.json");
        save(&path, &Counter { hits: vec![1] }).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n  \"hits\": [\n    1\n  ]\n}");

        let leftovers: Vec<_> = std::fs::read_dir(tmp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn test_update_failure_leaves_file_untouched() {
        let tmp = TempDir::new().unwrap();
        let doc = JsonDocument::new(tmp.path().join("doc.json"), Counter::default());
        doc.update(|c| {
            c.hits.push(1);
            Ok::<_, StoreError>(())
        })
        .await
        .unwrap();
        let before = std::fs::read(doc.path()).unwrap();

        let result: Result<(), StoreError> = doc
            .update(|c| {
                c.hits.push(2);
                Err(StoreError::Io(std::io::Error::new(ErrorKind::Other, "rejected")))
            })
            .await;
        assert!(result.is_err());
        assert_eq!(std::fs::read(doc.path()).unwrap(), before);
    }

    #[tokio::test]
    async fn test_concurrent_updates_are_not_lost() {
        let tmp = TempDir::new().unwrap();
        let doc = Arc::new(JsonDocument::new(tmp.path().join("doc.json"), Counter::default()));

        let mut handles = Vec::new();
        for i in 0..16 {
            let doc = doc.clone();
            handles.push(tokio::spawn(async move {
                doc.update(|c| {
                    c.hits.push(i);
                    Ok::<_, StoreError>(())
                })
                .await
            }));
        }
        for h in handles {
            h.await.unwrap().unwrap();
        }

        let mut hits = doc.read().await.hits;
        hits.sort_unstable();
        assert_eq!(hits, (0..16).collect::<Vec<_>>());
    }
}
