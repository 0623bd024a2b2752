//! Configuration structures for bundling operations.

mod builder;
mod core;
mod layout;

pub use builder::SettingsBuilder;
pub use self::core::{CatalogMode, Settings};
pub use layout::BundleLayout;
