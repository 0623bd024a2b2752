//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap and the
//! [`RuntimeConfig`] derived from it.

use crate::bundler::{CatalogMode, OutputKind, utils::path::resolve_output_path};
use clap::Parser;
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Locale bundler for gettext catalogs
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_locale",
    version,
    about = "Packages a gettext locale folder into a JSON locale bundle",
    long_about = "Converts the PO catalogs of a locale folder to JSON, copies mail.po verbatim,
enriches locale.json with an id, the README and a creation timestamp, and writes
the result to a directory or a ZIP archive.

Usage:
  kodegen_bundler_locale i18n/fr
  kodegen_bundler_locale i18n/fr --out dist/fr --zip
  kodegen_bundler_locale i18n/fr --single -o /tmp/fr-bundle"
)]
pub struct Args {
    /// Source locale folder
    #[arg(value_name = "SRC")]
    pub src: PathBuf,

    /// Output directory, or archive file with --zip
    ///
    /// Relative paths are resolved against the current directory.
    #[arg(short = 'o', long, value_name = "PATH", env = "KODEGEN_LOCALE_OUT")]
    pub out: Option<PathBuf>,

    /// Write a ZIP archive instead of a directory
    #[arg(short = 'z', long, env = "KODEGEN_LOCALE_ZIP")]
    pub zip: bool,

    /// Bundle only locale.po, written as locale/translation.json
    #[arg(short = 's', long)]
    pub single: bool,

    /// JSON file overriding reserved file and entry names
    ///
    /// Keys are kebab-case field names, e.g. {"supplementary-catalog": "emails.po"}.
    #[arg(long, value_name = "FILE", env = "KODEGEN_LOCALE_LAYOUT")]
    pub layout: Option<PathBuf>,

    /// Log every entry written
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.src.as_os_str().is_empty() {
            return Err("Source folder cannot be empty".to_string());
        }

        if !self.src.is_dir() {
            return Err(format!(
                "Source folder does not exist or is not a directory: {}",
                self.src.display()
            ));
        }

        Ok(())
    }

    /// Log level selected by --verbose / --quiet.
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Source locale folder
    pub source_dir: PathBuf,
    /// Absolute output path
    pub output_path: PathBuf,
    /// Directory or archive
    pub output_kind: OutputKind,
    /// Multi or single catalog discovery
    pub catalog_mode: CatalogMode,
    /// Layout overrides, read when the bundle is built
    pub layout_file: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Derives the runtime configuration, resolving relative output paths
    /// against `base`.
    pub fn resolve(args: &Args, base: &Path) -> Self {
        let output_kind = if args.zip {
            OutputKind::Archive
        } else {
            OutputKind::Directory
        };
        let catalog_mode = if args.single {
            CatalogMode::Single
        } else {
            CatalogMode::Multi
        };

        Self {
            source_dir: args.src.clone(),
            output_path: resolve_output_path(args.out.as_deref(), base),
            output_kind,
            catalog_mode,
            layout_file: args.layout.clone(),
        }
    }
}
