//! Catalog conversion: gettext PO files to JSON translation tables.
//!
//! The assembler only depends on [`CatalogConverter`]; [`JedConverter`] is the
//! production implementation.

mod header;
mod jed;

pub use header::{DEFAULT_PLURAL_FORMS, complete_header};
pub use jed::JedConverter;

use crate::bundler::Result;
use serde_json::Value;
use std::path::Path;

/// Turns one catalog into a JSON-serializable translation table.
///
/// Conversion may block, so the assembler runs it on the blocking pool.
pub trait CatalogConverter: Send + Sync + 'static {
    /// Parses `text`, the contents of the catalog file `catalog`, and returns
    /// its translation table.
    ///
    /// Malformed catalogs are an error; callers treat it as fatal.
    fn convert(&self, catalog: &Path, text: &str) -> Result<Value>;
}
