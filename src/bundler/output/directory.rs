//! Directory output: entries become files under the destination directory.

use super::{OutputWriter, WriterState, entry_segments};
use crate::bundler::{error::Result, utils::fs};
use std::path::{Path, PathBuf};

/// Writes each entry straight to `destination/<name>`.
///
/// There is no rollback: if a run fails midway, entries written so far stay
/// on disk.
#[derive(Debug)]
pub struct DirectoryWriter {
    destination: PathBuf,
    state: WriterState,
}

impl DirectoryWriter {
    /// Creates a writer targeting `destination`. Nothing is touched until `init`.
    pub fn new(destination: PathBuf) -> Self {
        Self {
            destination,
            state: WriterState::Pending,
        }
    }
}

impl OutputWriter for DirectoryWriter {
    async fn init(&mut self) -> Result<()> {
        self.state.ensure_pending()?;
        fs::create_dir_all(&self.destination).await?;
        self.state = WriterState::Open;
        Ok(())
    }

    async fn add_file(&mut self, content: &[u8], name: &str) -> Result<()> {
        self.state.ensure_open()?;
        let target = entry_segments(name)?
            .into_iter()
            .fold(self.destination.clone(), |path, segment| path.join(segment));

        fs::write_file(&target, content).await?;
        log::debug!("Wrote {}", target.display());
        Ok(())
    }

    async fn finalize(&mut self) -> Result<()> {
        self.state.ensure_open()?;
        self.state = WriterState::Finalized;
        Ok(())
    }

    fn destination(&self) -> &Path {
        &self.destination
    }
}
