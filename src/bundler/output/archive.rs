//! ZIP archive output.

use super::{OutputWriter, WriterState, entry_segments};
use crate::bundler::{
    error::{Context, ErrorExt, Result},
    utils::fs,
};
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

/// Streams entries into a single ZIP file at `destination`.
///
/// The archive is only a valid container after [`OutputWriter::finalize`].
/// Dropping a writer that was opened but never finalized deletes the
/// archive file, so a failed run leaves no partial bundle behind.
pub struct ArchiveWriter {
    destination: PathBuf,
    state: WriterState,
    zip: Option<ZipWriter<File>>,
}

impl ArchiveWriter {
    /// Creates a writer targeting the archive file `destination`.
    pub fn new(destination: PathBuf) -> Self {
        Self {
            destination,
            state: WriterState::Pending,
            zip: None,
        }
    }

    fn take_zip(&mut self) -> Result<ZipWriter<File>> {
        self.zip.take().context("archive stream is not open")
    }
}

impl Drop for ArchiveWriter {
    fn drop(&mut self) {
        if self.state != WriterState::Open {
            return;
        }
        // ZipWriter writes a central directory when dropped, which would turn
        // the partial stream into a valid archive.
        drop(self.zip.take());
        match std::fs::remove_file(&self.destination) {
            Ok(()) => log::warn!(
                "Removed incomplete archive {}",
                self.destination.display()
            ),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::error!(
                "Failed to remove incomplete archive {}: {}",
                self.destination.display(),
                e
            ),
        }
    }
}

impl std::fmt::Debug for ArchiveWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveWriter")
            .field("destination", &self.destination)
            .field("state", &self.state)
            .field("zip", &self.zip.as_ref().map(|_| "<ZipWriter>"))
            .finish()
    }
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}

impl OutputWriter for ArchiveWriter {
    async fn init(&mut self) -> Result<()> {
        self.state.ensure_pending()?;
        fs::create_parent_dirs(&self.destination).await?;

        let file = tokio::fs::File::create(&self.destination)
            .await
            .fs_context("creating archive", &self.destination)?;
        self.zip = Some(ZipWriter::new(file.into_std().await));
        self.state = WriterState::Open;
        Ok(())
    }

    async fn add_file(&mut self, content: &[u8], name: &str) -> Result<()> {
        self.state.ensure_open()?;
        let name = entry_segments(name)?.join("/");
        let mut zip = self.take_zip()?;
        let content = content.to_vec();

        let (zip, result) = tokio::task::spawn_blocking(move || {
            let result: Result<()> = zip
                .start_file(name.as_str(), entry_options())
                .map_err(Into::into)
                .and_then(|()| zip.write_all(&content).map_err(Into::into));
            (zip, result.map(|()| name))
        })
        .await?;

        self.zip = Some(zip);
        let name = result?;
        log::debug!("Appended {} to {}", name, self.destination.display());
        Ok(())
    }

    async fn finalize(&mut self) -> Result<()> {
        self.state.ensure_open()?;
        let zip = self.take_zip()?;
        let destination = self.destination.clone();

        tokio::task::spawn_blocking(move || -> Result<()> {
            let file = zip.finish()?;
            file.sync_all().fs_context("flushing archive", &destination)
        })
        .await??;

        // a failed finish leaves the writer open so that dropping it cleans up
        self.state = WriterState::Finalized;
        Ok(())
    }

    fn destination(&self) -> &Path {
        &self.destination
    }
}
