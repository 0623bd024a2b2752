//! Kodegen Bundler Locale - packages gettext locale folders.
//!
//! Converts a locale folder into a directory tree or ZIP archive holding the
//! JSON translation tables and the enriched locale descriptor.

use kodegen_bundler_locale::cli;
use std::process;

#[tokio::main]
async fn main() {
    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
