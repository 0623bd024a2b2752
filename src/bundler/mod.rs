//! Locale bundling: assembly, output writers, settings and helpers.
//!
//! The usual flow is:
//!
//! 1. Build [`Settings`] with [`SettingsBuilder`]
//! 2. Pick an [`OutputKind`] and create its writer
//! 3. [`OutputWriter::init`] the writer
//! 4. Run [`LocaleBundler::bundle`], which finalizes the writer on success

pub mod builder;
pub mod error;
pub mod output;
pub mod settings;
pub mod utils;

pub use builder::{BundleReport, BundleWarning, LocaleBundler, bundle_checksum};
pub use error::{Error, Result};
pub use output::{ArchiveWriter, BundleOutput, DirectoryWriter, OutputKind, OutputWriter};
pub use settings::{BundleLayout, CatalogMode, Settings, SettingsBuilder};
