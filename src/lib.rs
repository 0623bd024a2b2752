//! Locale bundler library
//!
//! Packages a gettext locale folder into a distributable bundle:
//! - Converts each PO catalog to Jed JSON
//! - Copies the mail catalog verbatim
//! - Enriches the locale descriptor with an id, the README and a timestamp
//! - Writes everything to a directory or a ZIP archive
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod metadata;
pub mod source;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
