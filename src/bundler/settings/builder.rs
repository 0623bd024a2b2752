//! Builder for constructing Settings.

use super::{BundleLayout, CatalogMode, Settings};
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_locale::bundler::SettingsBuilder;
///
/// # fn example() -> kodegen_bundler_locale::bundler::Result<()> {
/// let settings = SettingsBuilder::new().source_dir("i18n/fr").build()?;
/// assert_eq!(settings.layout().supplementary_catalog, "mail.po");
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    source_dir: Option<PathBuf>,
    mode: CatalogMode,
    layout: BundleLayout,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the source locale folder.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn source_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the catalog discovery mode.
    ///
    /// Default: [`CatalogMode::Multi`]
    pub fn catalog_mode(mut self, mode: CatalogMode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the reserved file names.
    ///
    /// Default: [`BundleLayout::default`]
    pub fn layout(mut self, layout: BundleLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `source_dir` was never set.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        use crate::bundler::error::Context;

        Ok(Settings::new(
            self.source_dir.context("source_dir is required")?,
            self.mode,
            self.layout,
        ))
    }
}
