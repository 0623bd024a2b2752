//! Core Settings struct and implementations.

use super::BundleLayout;
use std::path::{Path, PathBuf};

/// How primary catalogs are discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogMode {
    /// Every catalog in the source folder except the supplementary one.
    #[default]
    Multi,
    /// Exactly [`BundleLayout::single_catalog`], written as
    /// [`BundleLayout::single_output`].
    Single,
}

/// Settings for one bundling run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder).
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_locale::bundler::{CatalogMode, SettingsBuilder};
///
/// # fn example() -> kodegen_bundler_locale::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source_dir("i18n/fr")
///     .catalog_mode(CatalogMode::Single)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Folder holding catalogs, descriptor and README.
    source_dir: PathBuf,

    /// Discovery mode.
    mode: CatalogMode,

    /// Reserved names.
    layout: BundleLayout,
}

impl Settings {
    pub(super) fn new(source_dir: PathBuf, mode: CatalogMode, layout: BundleLayout) -> Self {
        Self {
            source_dir,
            mode,
            layout,
        }
    }

    /// Returns the source locale folder.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Returns the catalog discovery mode.
    pub fn catalog_mode(&self) -> CatalogMode {
        self.mode
    }

    /// Returns the reserved file names.
    pub fn layout(&self) -> &BundleLayout {
        &self.layout
    }

    /// Path of a file inside the source folder.
    pub fn source_file(&self, file_name: &str) -> PathBuf {
        self.source_dir.join(file_name)
    }
}
