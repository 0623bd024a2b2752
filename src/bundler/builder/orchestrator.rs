//! Main bundle orchestration.
//!
//! This module provides the [`LocaleBundler`] orchestrator that reads a
//! locale folder and drives an [`OutputWriter`] to emit the bundle.

use super::report::{BundleReport, BundleWarning};
use crate::{
    bail,
    bundler::{CatalogMode, OutputWriter, Result, Settings, error::Error, utils::fs},
    catalog::{CatalogConverter, JedConverter},
    metadata::{Clock, LocaleDescriptor, SystemClock},
    source::{CatalogFile, CatalogKind, LocaleSource},
};
use std::{path::Path, sync::Arc};
use tokio::task::JoinError;

/// Locale bundle orchestrator.
///
/// Every step completes before the next begins, and the first error aborts
/// the run without finalizing the output. Entries already written by a
/// [`DirectoryWriter`](crate::bundler::DirectoryWriter) are left in place;
/// an unfinalized [`ArchiveWriter`](crate::bundler::ArchiveWriter) deletes
/// its file when dropped.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_locale::bundler::{
///     DirectoryWriter, LocaleBundler, OutputWriter, SettingsBuilder,
/// };
///
/// # async fn example() -> kodegen_bundler_locale::bundler::Result<()> {
/// let settings = SettingsBuilder::new().source_dir("i18n/fr").build()?;
/// let mut output = DirectoryWriter::new("/tmp/fr-bundle".into());
/// output.init().await?;
///
/// let report = LocaleBundler::new(settings).bundle(&mut output).await?;
/// assert!(report.has_entry("locale/locale.json"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct LocaleBundler<C = JedConverter, K = SystemClock> {
    settings: Settings,
    converter: Arc<C>,
    clock: K,
}

impl LocaleBundler {
    /// Creates a bundler using the Jed converter and the wall clock.
    pub fn new(settings: Settings) -> Self {
        Self::with_parts(settings, JedConverter::default(), SystemClock)
    }
}

impl<C: CatalogConverter, K: Clock> LocaleBundler<C, K> {
    /// Creates a bundler with an explicit converter and clock.
    pub fn with_parts(settings: Settings, converter: C, clock: K) -> Self {
        Self {
            settings,
            converter: Arc::new(converter),
            clock,
        }
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Writes the bundle into `output` and finalizes it.
    ///
    /// `output` must already be initialized.
    pub async fn bundle<W: OutputWriter>(&self, output: &mut W) -> Result<BundleReport> {
        let source = LocaleSource::scan(self.settings.source_dir()).await?;
        let mut report = BundleReport::new(output.destination());

        log::info!(
            "Bundling {} into {}",
            source.dir().display(),
            output.destination().display()
        );
        log::debug!("Found {} files: {:?}", source.files().len(), source.files());

        match self.settings.catalog_mode() {
            CatalogMode::Multi => self.add_catalogs(&source, output, &mut report).await?,
            CatalogMode::Single => self.add_single_catalog(&source, output, &mut report).await?,
        }

        self.add_descriptor(output, &mut report).await?;

        output.finalize().await?;
        log::info!(
            "Wrote {} entries to {} ({} warnings)",
            report.entries.len(),
            report.destination.display(),
            report.warnings.len()
        );

        Ok(report)
    }

    async fn add_catalogs<W: OutputWriter>(
        &self,
        source: &LocaleSource,
        output: &mut W,
        report: &mut BundleReport,
    ) -> Result<()> {
        let layout = self.settings.layout();
        let catalogs = source.catalogs(layout);
        let primary: Vec<&CatalogFile> = catalogs
            .iter()
            .filter(|c| c.kind == CatalogKind::Primary)
            .collect();

        for skipped in catalogs.iter().filter(|c| c.kind == CatalogKind::Excluded) {
            report.warn(BundleWarning::CatalogSkipped {
                name: skipped.name.clone(),
                entry: layout.descriptor_entry_name(),
            });
        }

        if primary.is_empty() {
            report.warn(BundleWarning::NoPrimaryCatalogs {
                dir: source.dir().to_path_buf(),
            });
        } else if !primary.iter().any(|c| c.name == layout.expected_catalog) {
            report.warn(BundleWarning::ExpectedCatalogMissing {
                name: layout.expected_catalog.clone(),
                dir: source.dir().to_path_buf(),
            });
        }

        for catalog in primary {
            let Some(entry) = layout.converted_entry_name(&catalog.name) else {
                bail!("{} is not a catalog", catalog.name);
            };
            if layout.catalog_stem(&catalog.name) == Some("") {
                report.warn(BundleWarning::UnnamedCatalog {
                    name: catalog.name.clone(),
                    entry: entry.clone(),
                });
            }
            self.add_converted(&catalog.path, &entry, output, report)
                .await?;
        }

        match catalogs.iter().find(|c| c.kind == CatalogKind::Supplementary) {
            Some(supplementary) => {
                let text =
                    fs::read_to_string(&supplementary.path, "reading mail PO file").await?;
                let entry = layout.entry_name(&supplementary.name);
                add_entry(output, report, text.as_bytes(), entry).await?;
            }
            None => report.warn(BundleWarning::SupplementaryMissing {
                path: source.path_of(&layout.supplementary_catalog),
            }),
        }

        Ok(())
    }

    async fn add_single_catalog<W: OutputWriter>(
        &self,
        source: &LocaleSource,
        output: &mut W,
        report: &mut BundleReport,
    ) -> Result<()> {
        let layout = self.settings.layout();
        let path = self.settings.source_file(&layout.single_catalog);

        if !source.contains(&layout.single_catalog) {
            return Err(Error::MissingInput {
                what: "PO file",
                path,
            });
        }

        let entry = layout.entry_name(&layout.single_output);
        self.add_converted(&path, &entry, output, report).await
    }

    async fn add_converted<W: OutputWriter>(
        &self,
        catalog: &Path,
        entry: &str,
        output: &mut W,
        report: &mut BundleReport,
    ) -> Result<()> {
        log::debug!("Converting {}", catalog.display());
        let text = fs::read_to_string(catalog, "reading catalog").await?;

        let converter = Arc::clone(&self.converter);
        let path = catalog.to_path_buf();
        let table = tokio::task::spawn_blocking(move || converter.convert(&path, &text))
            .await
            .map_err(|e| conversion_failure(catalog, e))??;

        let json = serde_json::to_string(&table)?;
        add_entry(output, report, json.as_bytes(), entry.to_string()).await
    }

    async fn add_descriptor<W: OutputWriter>(
        &self,
        output: &mut W,
        report: &mut BundleReport,
    ) -> Result<()> {
        let layout = self.settings.layout();

        let mut descriptor =
            LocaleDescriptor::load(&self.settings.source_file(&layout.descriptor_file)).await?;
        let readme = fs::read_to_string(
            &self.settings.source_file(&layout.readme_file),
            "reading README",
        )
        .await?;

        descriptor.enrich(readme, self.clock.now())?;
        let json = descriptor.to_json()?;
        add_entry(output, report, json.as_bytes(), layout.descriptor_entry_name()).await
    }
}

/// A converter that panicked is reported like any other malformed catalog.
fn conversion_failure(catalog: &Path, error: JoinError) -> Error {
    if !error.is_panic() {
        return Error::Task(error);
    }
    let payload = error.into_panic();
    let reason = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown cause".to_string());
    Error::Catalog {
        path: catalog.to_path_buf(),
        reason: format!("parser panicked: {reason}"),
    }
}

async fn add_entry<W: OutputWriter>(
    output: &mut W,
    report: &mut BundleReport,
    content: &[u8],
    name: String,
) -> Result<()> {
    output.add_file(content, &name).await?;
    report.entries.push(name);
    Ok(())
}
