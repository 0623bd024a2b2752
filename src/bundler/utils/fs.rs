//! File system utilities for bundling.
//!
//! Thin async wrappers that attach path context to every error and create
//! parent directories where a write needs them.

use crate::bundler::error::{ErrorExt, Result};
use std::path::Path;
use tokio::fs;

/// Creates all of the directories of the specified path.
///
/// Idempotent: an existing directory is not an error.
pub async fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Creates the parent directory of `path`, if it has one.
pub async fn create_parent_dirs(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => create_dir_all(parent).await,
        _ => Ok(()),
    }
}

/// Writes `contents` to `path`, creating missing ancestors and replacing any
/// existing file.
pub async fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    create_parent_dirs(path).await?;
    fs::write(path, contents)
        .await
        .fs_context("writing file", path)
}

/// Reads a UTF-8 text file.
pub async fn read_to_string(path: &Path, context: &'static str) -> Result<String> {
    fs::read_to_string(path).await.fs_context(context, path)
}

/// Returns true if `path` exists. Permission errors count as absent.
pub async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}
