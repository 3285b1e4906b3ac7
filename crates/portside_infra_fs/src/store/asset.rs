use super::StoreError;
use bytes::Bytes;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

const STAGING_DIR: &str = ".staging";

/// The public `assets/` directory icons are written into.
///
/// Uploads are first staged under `assets/.staging/` so that the final rename
/// stays on one filesystem.
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub async fn ensure_dirs(&self) -> Result<(), StoreError> {
        fs::create_dir_all(self.root.join(STAGING_DIR)).await?;
        Ok(())
    }

    pub fn asset_file(&self, filename: &str) -> Result<PathBuf, StoreError> {
        if filename.is_empty()
            || filename.starts_with('.')
            || filename.contains(|c: char| c == '/' || c == '\\')
        {
            return Err(StoreError::Io(Error::new(
                ErrorKind::InvalidInput,
                format!("Refusing asset name {:?}", filename),
            )));
        }
        Ok(self.root.join(filename))
    }

    /// Writes an incoming upload to a fresh staging file and returns its path.
    pub async fn stage(&self, data: Bytes) -> Result<PathBuf, StoreError> {
        let dir = self.root.join(STAGING_DIR);
        fs::create_dir_all(&dir).await?;
        let path = dir.join(uuid::Uuid::new_v4().to_string());
        let mut file = File::create(&path).await?;
        file.write_all(&data).await?;
        file.flush().await?;
        Ok(path)
    }

    /// Best-effort removal of a staged upload that will not be used.
    pub async fn discard(&self, staged: &Path) {
        if let Err(e) = fs::remove_file(staged).await {
            if e.kind() != ErrorKind::NotFound {
                warn!(path = %staged.display(), error = %e, "Failed to remove staged upload");
            }
        }
    }

    /// Moves a staged upload to `filename`, replacing any previous file.
    pub async fn place_staged(&self, staged: &Path, filename: &str) -> Result<PathBuf, StoreError> {
        let target = self.asset_file(filename)?;
        fs::create_dir_all(&self.root).await?;
        fs::rename(staged, &target).await?;
        info!(from = %staged.display(), to = %target.display(), "Stored uploaded asset");
        Ok(target)
    }

    /// Writes `data` to `filename`, replacing any previous file.
    pub async fn write(&self, filename: &str, data: Bytes) -> Result<PathBuf, StoreError> {
        let target = self.asset_file(filename)?;
        fs::create_dir_all(&self.root).await?;
        let mut file = File::create(&target).await?;
        file.write_all(&data).await?;
        file.flush().await?;
        info!(to = %target.display(), bytes = data.len(), "Stored fetched asset");
        Ok(target)
    }
}
