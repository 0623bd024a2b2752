//! Source locale folder scanning and catalog classification.

use crate::bundler::{
    BundleLayout,
    error::{ErrorExt, Result},
};
use std::{
    io,
    path::{Path, PathBuf},
};

/// Role of a catalog file in the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    /// Converted to JSON.
    Primary,
    /// Copied into the bundle unconverted.
    Supplementary,
    /// Left out of the bundle: its converted name is reserved for the descriptor.
    Excluded,
}

/// A catalog discovered in the source folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFile {
    /// File name within the source folder
    pub name: String,
    /// Full path
    pub path: PathBuf,
    /// Classification
    pub kind: CatalogKind,
}

/// Snapshot of the regular files in a locale folder.
#[derive(Debug, Clone)]
pub struct LocaleSource {
    dir: PathBuf,
    files: Vec<String>,
}

impl LocaleSource {
    /// Lists the regular files directly inside `dir`, sorted by name.
    ///
    /// Sorting makes the conversion order, and so the archive entry order,
    /// independent of the host's directory enumeration order.
    pub async fn scan(dir: &Path) -> Result<Self> {
        let dir = dir.to_path_buf();

        tokio::task::spawn_blocking(move || -> Result<Self> {
            let mut files = Vec::new();
            for entry in walkdir::WalkDir::new(&dir)
                .min_depth(1)
                .max_depth(1)
                .follow_links(true)
                .sort_by_file_name()
            {
                let entry = entry
                    .map_err(io::Error::from)
                    .fs_context("listing locale folder", &dir)?;
                if !entry.file_type().is_file() {
                    continue;
                }
                match entry.file_name().to_str() {
                    Some(name) => files.push(name.to_string()),
                    None => log::debug!("Skipping non UTF-8 file name: {:?}", entry.file_name()),
                }
            }
            Ok(Self { dir, files })
        })
        .await?
    }

    /// The scanned folder.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Regular file names, sorted.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Returns true if the folder holds a regular file called `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.files.iter().any(|f| f == name)
    }

    /// Path of `name` inside the folder.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Every catalog in the folder, classified for multi-catalog bundling.
    pub fn catalogs(&self, layout: &BundleLayout) -> Vec<CatalogFile> {
        let descriptor_entry = layout.descriptor_entry_name();

        self.files
            .iter()
            .filter(|name| layout.is_catalog(name))
            .map(|name| {
                let kind = if *name == layout.supplementary_catalog {
                    CatalogKind::Supplementary
                } else if layout.converted_entry_name(name).as_ref() == Some(&descriptor_entry) {
                    CatalogKind::Excluded
                } else {
                    CatalogKind::Primary
                };
                CatalogFile {
                    name: name.clone(),
                    path: self.path_of(name),
                    kind,
                }
            })
            .collect()
    }
}
