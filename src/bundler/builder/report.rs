//! Outcome of a bundling run.

use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Non-fatal conditions met while bundling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleWarning {
    /// The folder holds no primary catalogs.
    NoPrimaryCatalogs {
        /// Source folder
        dir: PathBuf,
    },
    /// A catalog that normally ships with every locale is absent.
    ExpectedCatalogMissing {
        /// Catalog file name
        name: String,
        /// Source folder
        dir: PathBuf,
    },
    /// The supplementary catalog is absent and was left out.
    SupplementaryMissing {
        /// Where it was expected
        path: PathBuf,
    },
    /// A catalog was left out because its entry name is taken.
    CatalogSkipped {
        /// Catalog file name
        name: String,
        /// Entry it would have overwritten
        entry: String,
    },
    /// A catalog named only by its extension, such as `.po`.
    UnnamedCatalog {
        /// Catalog file name
        name: String,
        /// Entry it was written to
        entry: String,
    },
}

impl fmt::Display for BundleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPrimaryCatalogs { dir } => {
                write!(f, "No PO files found in {}.", dir.display())
            }
            Self::ExpectedCatalogMissing { name, dir } => {
                write!(f, "{name} file not found in {}.", dir.display())
            }
            Self::SupplementaryMissing { path } => {
                write!(f, "Mail PO file not found at {}.", path.display())
            }
            Self::CatalogSkipped { name, entry } => {
                write!(f, "Skipping {name}: its output would overwrite {entry}.")
            }
            Self::UnnamedCatalog { name, entry } => {
                write!(f, "{name} has no base name; writing it as {entry}.")
            }
        }
    }
}

/// Entries written and warnings raised by one run.
#[derive(Debug, Clone)]
pub struct BundleReport {
    /// Directory or archive the bundle was written to
    pub destination: PathBuf,
    /// Entry names in write order
    pub entries: Vec<String>,
    /// Warnings in the order they were raised
    pub warnings: Vec<BundleWarning>,
}

impl BundleReport {
    pub(super) fn new(destination: &Path) -> Self {
        Self {
            destination: destination.to_path_buf(),
            entries: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub(super) fn warn(&mut self, warning: BundleWarning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    /// Returns true if an entry called `name` was written.
    pub fn has_entry(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e == name)
    }
}
