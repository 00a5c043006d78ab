//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over the filesystem and
//! platform directories, enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `env` - Platform directories (home, local data)
//! - `fs` - File system operations (read, directory listing, creation, copy)

mod env;
mod fs;

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Runtime: Send + Sync {
    // File System
    async fn read_to_string(&self, path: &Path) -> Result<String>;
    async fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Create a directory and any missing parents. An existing directory is not an error.
    async fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Canonicalize a path by resolving all symlinks and returning the canonical absolute path.
    async fn canonicalize(&self, path: &Path) -> Result<PathBuf>;

    async fn copy(&self, from: &Path, to: &Path) -> Result<u64>;

    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn is_file(&self, path: &Path) -> bool;

    // Directories
    fn home_dir(&self) -> Option<PathBuf>;
    fn data_local_dir(&self) -> Option<PathBuf>;
}

pub struct RealRuntime;

#[async_trait]
impl Runtime for RealRuntime {
    async fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path).await
    }

    async fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        self.read_dir_impl(path).await
    }

    async fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.create_dir_all_impl(path).await
    }

    async fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        self.canonicalize_impl(path).await
    }

    async fn copy(&self, from: &Path, to: &Path) -> Result<u64> {
        self.copy_impl(from, to).await
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.is_dir_impl(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.is_file_impl(path)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home_dir_impl()
    }

    fn data_local_dir(&self) -> Option<PathBuf> {
        self.data_local_dir_impl()
    }
}
