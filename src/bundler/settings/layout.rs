//! Reserved file and entry names for a locale bundle.

use crate::bundler::{Result, utils::fs};
use serde::Deserialize;
use std::path::Path;

/// Names the assembler looks for in the source folder and writes into the bundle.
///
/// Every field has a default matching the conventional locale folder:
///
/// ```text
/// fr/
/// ├── README.md      readme_file
/// ├── locale.json    descriptor_file
/// ├── mail.po        supplementary_catalog (copied verbatim)
/// ├── wizard.po      expected_catalog
/// └── *.po           primary catalogs
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BundleLayout {
    /// Catalog file extension, without the dot.
    pub catalog_extension: String,

    /// Catalog copied into the bundle unconverted.
    pub supplementary_catalog: String,

    /// Catalog whose absence is worth a warning.
    pub expected_catalog: String,

    /// Locale descriptor JSON in the source folder.
    pub descriptor_file: String,

    /// README in the source folder.
    pub readme_file: String,

    /// Directory every bundle entry lives under.
    pub entry_prefix: String,

    /// The only catalog read in single-catalog mode.
    pub single_catalog: String,

    /// Entry file name for the single-catalog translation table.
    pub single_output: String,

    /// Entry file name for the enriched descriptor.
    pub descriptor_entry: String,
}

impl Default for BundleLayout {
    fn default() -> Self {
        Self {
            catalog_extension: "po".into(),
            supplementary_catalog: "mail.po".into(),
            expected_catalog: "wizard.po".into(),
            descriptor_file: "locale.json".into(),
            readme_file: "README.md".into(),
            entry_prefix: "locale".into(),
            single_catalog: "locale.po".into(),
            single_output: "translation.json".into(),
            descriptor_entry: "locale.json".into(),
        }
    }
}

impl BundleLayout {
    /// Reads a layout from a JSON file with kebab-case keys.
    ///
    /// Keys the file leaves out keep their defaults.
    pub async fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path, "reading layout").await?;
        let layout = serde_json::from_str(&text)?;
        log::debug!("Loaded bundle layout from {}", path.display());
        Ok(layout)
    }

    /// Returns true if `file_name` carries the catalog extension.
    pub fn is_catalog(&self, file_name: &str) -> bool {
        self.catalog_stem(file_name).is_some()
    }

    /// `fr.po` -> `Some("fr")`, bare `.po` -> `Some("")`, non-catalogs -> `None`.
    pub fn catalog_stem<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name
            .strip_suffix(self.catalog_extension.as_str())
            .and_then(|rest| rest.strip_suffix('.'))
    }

    /// Bundle entry name for a file placed under the entry prefix.
    pub fn entry_name(&self, file_name: &str) -> String {
        format!("{}/{}", self.entry_prefix, file_name)
    }

    /// Bundle entry name for the converted form of a primary catalog.
    pub fn converted_entry_name(&self, catalog_file: &str) -> Option<String> {
        self.catalog_stem(catalog_file)
            .map(|stem| self.entry_name(&format!("{stem}.json")))
    }

    /// Bundle entry name of the enriched descriptor.
    pub fn descriptor_entry_name(&self) -> String {
        self.entry_name(&self.descriptor_entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converted_names_replace_extension() {
        let layout = BundleLayout::default();
        assert_eq!(
            layout.converted_entry_name("wizard.po").as_deref(),
            Some("locale/wizard.json")
        );
        assert_eq!(layout.converted_entry_name("notes.txt"), None);
        assert!(!layout.is_catalog("report.pot"));
        assert!(!layout.is_catalog("po"));
    }

    #[test]
    fn bare_extension_is_an_unnamed_catalog() {
        let layout = BundleLayout::default();
        assert_eq!(layout.catalog_stem(".po"), Some(""));
        assert_eq!(
            layout.converted_entry_name(".po").as_deref(),
            Some("locale/.json")
        );
    }

    #[tokio::test]
    async fn partial_layout_file_keeps_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("layout.json");
        std::fs::write(&path, r#"{"supplementary-catalog":"emails.po"}"#).unwrap();

        let layout = BundleLayout::load(&path).await.unwrap();
        assert_eq!(layout.supplementary_catalog, "emails.po");
        assert_eq!(layout.descriptor_entry_name(), "locale/locale.json");
    }

    #[tokio::test]
    async fn malformed_layout_file_is_an_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("layout.json");
        std::fs::write(&path, r#"{"entry-prefix": 3}"#).unwrap();

        assert!(matches!(
            BundleLayout::load(&path).await,
            Err(crate::bundler::Error::Json(_))
        ));
        assert!(BundleLayout::load(&temp.path().join("absent.json")).await.is_err());
    }
}
