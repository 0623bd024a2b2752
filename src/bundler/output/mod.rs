//! Output writers: the destinations a locale bundle can be written to.
//!
//! Both writers share one contract. [`OutputWriter::init`] prepares the
//! destination, [`OutputWriter::add_file`] stages one named entry and
//! [`OutputWriter::finalize`] makes every staged entry durable. They differ
//! only in *when* content becomes durable:
//!
//! - [`DirectoryWriter`] writes each entry immediately; `finalize` just closes
//!   the writer.
//! - [`ArchiveWriter`] appends entries to a ZIP stream that is only a valid
//!   container once `finalize` has run.
//!
//! Entry names are `/`-separated relative paths such as `locale/fr.json`.

mod archive;
mod directory;

pub use archive::ArchiveWriter;
pub use directory::DirectoryWriter;

use crate::bundler::error::{Error, Result};
use std::{
    future::Future,
    path::{Path, PathBuf},
};

/// A destination accepting named bundle entries.
pub trait OutputWriter {
    /// Prepares the destination. Must complete before any [`add_file`](Self::add_file).
    fn init(&mut self) -> impl Future<Output = Result<()>> + Send;

    /// Stages `content` under the bundle entry `name`.
    fn add_file(&mut self, content: &[u8], name: &str) -> impl Future<Output = Result<()>> + Send;

    /// Flushes and closes the destination. Called exactly once per run.
    fn finalize(&mut self) -> impl Future<Output = Result<()>> + Send;

    /// Absolute path of the directory or archive being written.
    fn destination(&self) -> &Path;
}

/// Shape of the bundle destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputKind {
    /// Plain directory tree
    #[default]
    Directory,
    /// Single ZIP container
    Archive,
}

impl OutputKind {
    /// Creates the writer for this kind targeting `destination`.
    pub fn writer(self, destination: PathBuf) -> BundleOutput {
        match self {
            Self::Directory => BundleOutput::Directory(DirectoryWriter::new(destination)),
            Self::Archive => BundleOutput::Archive(ArchiveWriter::new(destination)),
        }
    }
}

impl std::fmt::Display for OutputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Directory => f.write_str("directory"),
            Self::Archive => f.write_str("zip archive"),
        }
    }
}

/// Either writer, selected at runtime.
#[derive(Debug)]
pub enum BundleOutput {
    /// See [`DirectoryWriter`]
    Directory(DirectoryWriter),
    /// See [`ArchiveWriter`]
    Archive(ArchiveWriter),
}

impl OutputWriter for BundleOutput {
    async fn init(&mut self) -> Result<()> {
        match self {
            Self::Directory(w) => w.init().await,
            Self::Archive(w) => w.init().await,
        }
    }

    async fn add_file(&mut self, content: &[u8], name: &str) -> Result<()> {
        match self {
            Self::Directory(w) => w.add_file(content, name).await,
            Self::Archive(w) => w.add_file(content, name).await,
        }
    }

    async fn finalize(&mut self) -> Result<()> {
        match self {
            Self::Directory(w) => w.finalize().await,
            Self::Archive(w) => w.finalize().await,
        }
    }

    fn destination(&self) -> &Path {
        match self {
            Self::Directory(w) => w.destination(),
            Self::Archive(w) => w.destination(),
        }
    }
}

/// Lifecycle shared by the writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum WriterState {
    #[default]
    Pending,
    Open,
    Finalized,
}

impl WriterState {
    pub(crate) fn ensure_pending(self) -> Result<()> {
        match self {
            Self::Pending => Ok(()),
            Self::Open => Err(Error::SinkState("is already initialized")),
            Self::Finalized => Err(Error::SinkState("is already finalized")),
        }
    }

    pub(crate) fn ensure_open(self) -> Result<()> {
        match self {
            Self::Open => Ok(()),
            Self::Pending => Err(Error::SinkState("has not been initialized")),
            Self::Finalized => Err(Error::SinkState("is already finalized")),
        }
    }
}

/// Checks that `name` is a relative `/`-separated path that stays inside the
/// bundle root, returning its segments.
pub(crate) fn entry_segments(name: &str) -> Result<Vec<&str>> {
    if name.is_empty() || name.starts_with('/') || name.contains('\\') {
        return Err(Error::InvalidEntryName(name.to_string()));
    }

    let segments: Vec<&str> = name.split('/').collect();
    let bad = segments
        .iter()
        .any(|s| s.is_empty() || *s == "." || *s == "..");
    if bad || has_drive_prefix(segments[0]) {
        return Err(Error::InvalidEntryName(name.to_string()));
    }

    Ok(segments)
}

/// `C:` style prefixes resolve outside the destination on Windows.
fn has_drive_prefix(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
