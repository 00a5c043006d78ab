//! File system operations (read, directory listing, creation, copy).

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) async fn read_to_string_impl(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .await
            .context("Failed to read file to string")
    }

    #[tracing::instrument(skip(self))]
    pub(crate) async fn read_dir_impl(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut entries = fs::read_dir(path)
            .await
            .context("Failed to read directory")?;
        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            paths.push(entry.path());
        }
        Ok(paths)
    }

    #[tracing::instrument(skip(self))]
    pub(crate) async fn create_dir_all_impl(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .await
            .context("Failed to create directory")?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub(crate) async fn canonicalize_impl(&self, path: &Path) -> Result<PathBuf> {
        fs::canonicalize(path)
            .await
            .with_context(|| format!("Failed to canonicalize path: {:?}", path))
    }

    #[tracing::instrument(skip(self))]
    pub(crate) async fn copy_impl(&self, from: &Path, to: &Path) -> Result<u64> {
        fs::copy(from, to).await.context("Failed to copy file")
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn exists_impl(&self, path: &Path) -> bool {
        path.exists()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn is_dir_impl(&self, path: &Path) -> bool {
        path.is_dir()
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn is_file_impl(&self, path: &Path) -> bool {
        path.is_file()
    }
}
