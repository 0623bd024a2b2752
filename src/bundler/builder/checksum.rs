//! Bundle checksum calculation.

use crate::bundler::{OutputKind, Result, error::ErrorExt};
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Calculates the SHA-256 of a finished bundle.
///
/// For an archive this is the hash of the file. For a directory it covers
/// only the bundle's own `entries`, each contributing its name followed by
/// its content, so unrelated files in the destination do not affect it.
pub async fn bundle_checksum(
    kind: OutputKind,
    destination: &Path,
    entries: &[String],
) -> Result<String> {
    let mut hasher = Sha256::new();

    match kind {
        OutputKind::Archive => hash_file(&mut hasher, destination).await?,
        OutputKind::Directory => {
            for entry in entries {
                hasher.update(entry.as_bytes());
                hash_file(&mut hasher, &destination.join(entry)).await?;
            }
        }
    }

    Ok(format!("{:x}", hasher.finalize()))
}

async fn hash_file(hasher: &mut Sha256, path: &Path) -> Result<()> {
    let mut file = tokio::fs::File::open(path)
        .await
        .fs_context("opening file for hashing", path)?;
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for hash calculation", path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(())
}
