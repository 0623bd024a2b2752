//! Locale bundle assembly.
//!
//! This module provides the [`LocaleBundler`] orchestrator that turns one
//! locale folder into a bundle:
//!
//! 1. Scans the source folder and classifies its catalogs
//! 2. Converts each primary catalog to JSON
//! 3. Copies the supplementary catalog verbatim
//! 4. Enriches the locale descriptor with `id`, `readme` and `createdAt`
//! 5. Finalizes the [`OutputWriter`](crate::bundler::OutputWriter)
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_locale::bundler::{
//!     LocaleBundler, OutputKind, OutputWriter, SettingsBuilder,
//! };
//!
//! # async fn example() -> kodegen_bundler_locale::bundler::Result<()> {
//! let settings = SettingsBuilder::new().source_dir("i18n/fr").build()?;
//! let mut output = OutputKind::Archive.writer("dist/fr.zip".into());
//! output.init().await?;
//!
//! let report = LocaleBundler::new(settings).bundle(&mut output).await?;
//! for entry in &report.entries {
//!     println!("{entry}");
//! }
//! # Ok(())
//! # }
//! ```

mod checksum;
mod orchestrator;
mod report;

pub use checksum::bundle_checksum;
pub use orchestrator::LocaleBundler;
pub use report::{BundleReport, BundleWarning};
