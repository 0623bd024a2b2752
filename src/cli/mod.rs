//! Command line interface for the locale bundler.
//!
//! Parses arguments, configures logging, selects the output writer and runs
//! the bundler. Errors are returned to `main`, which reports them once.

mod args;

pub use args::{Args, RuntimeConfig};

use crate::{
    bundler::{
        BundleLayout, BundleReport, LocaleBundler, OutputWriter, SettingsBuilder, bundle_checksum,
    },
    error::{CliError, Result},
};
use log::LevelFilter;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    init_logging(args.log_level());
    run_with(&args).await
}

/// Runs the bundler for already-parsed arguments.
pub async fn run_with(args: &Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let cwd = std::env::current_dir()?;
    let config = RuntimeConfig::resolve(args, &cwd);
    execute(&config).await?;
    Ok(0)
}

/// Builds the bundle described by `config`.
pub async fn execute(config: &RuntimeConfig) -> Result<BundleReport> {
    let layout = match &config.layout_file {
        Some(path) => BundleLayout::load(path).await?,
        None => BundleLayout::default(),
    };
    let settings = SettingsBuilder::new()
        .source_dir(&config.source_dir)
        .catalog_mode(config.catalog_mode)
        .layout(layout)
        .build()?;

    log::debug!(
        "Writing {} to {}",
        config.output_kind,
        config.output_path.display()
    );
    let mut output = config.output_kind.writer(config.output_path.clone());
    output.init().await?;

    let report = LocaleBundler::new(settings).bundle(&mut output).await?;

    let checksum =
        bundle_checksum(config.output_kind, &report.destination, &report.entries).await?;
    log::info!("SHA-256: {}", checksum);

    Ok(report)
}

/// Initializes env_logger. `RUST_LOG` takes precedence over `level`.
fn init_logging(level: LevelFilter) {
    let env = env_logger::Env::default().default_filter_or(level.as_str());
    // a logger may already be installed when embedded
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
