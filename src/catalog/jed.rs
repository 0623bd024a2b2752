//! Jed locale-data output.
//!
//! Produces the shape consumed by Jed-compatible runtimes:
//!
//! ```json
//! {
//!   "domain": "messages",
//!   "locale_data": {
//!     "messages": {
//!       "": { "domain": "messages", "plural_forms": "nplurals=2; plural=(n > 1);", "lang": "fr" },
//!       "Hello": ["Bonjour"],
//!       "menu\u0004Open": ["Ouvrir"],
//!       "%d file": ["%d fichier", "%d fichiers"]
//!     }
//!   }
//! }
//! ```

use super::{CatalogConverter, header::complete_header};
use crate::bundler::{Error, Result, error::ErrorExt};
use polib::{catalog::Catalog, po_file};
use serde_json::{Map, Value, json};
use std::{borrow::Cow, io::Write, path::Path};

/// Separator between `msgctxt` and `msgid` in Jed keys.
const CONTEXT_GLUE: char = '\u{4}';

/// Converts PO catalogs into Jed locale data under a single text domain.
#[derive(Debug, Clone)]
pub struct JedConverter {
    domain: String,
}

impl Default for JedConverter {
    fn default() -> Self {
        Self::new("messages")
    }
}

impl JedConverter {
    /// Creates a converter emitting the given text domain.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }

    fn header(&self, catalog: &Catalog) -> Value {
        let rules = &catalog.metadata.plural_rules;
        json!({
            "domain": self.domain,
            "plural_forms": format!("nplurals={}; plural={};", rules.nplurals, rules.expr),
            "lang": catalog.metadata.language,
        })
    }

    fn to_locale_data(&self, catalog: &Catalog, path: &Path) -> Result<Value> {
        let mismatch = |msgid: &str| Error::Catalog {
            path: path.to_path_buf(),
            reason: format!("{msgid:?}: singular/plural mismatch"),
        };

        let mut messages = Map::new();
        messages.insert(String::new(), self.header(catalog));

        for message in catalog.messages() {
            // fuzzy translations are unreviewed
            if message.is_fuzzy() {
                continue;
            }
            if message.msgid().is_empty() && message.msgctxt().is_empty() {
                continue;
            }

            let key = if message.msgctxt().is_empty() {
                message.msgid().to_string()
            } else {
                format!("{}{}{}", message.msgctxt(), CONTEXT_GLUE, message.msgid())
            };

            let translations = if message.is_plural() {
                let forms = message
                    .msgstr_plural()
                    .map_err(|_| mismatch(message.msgid()))?;
                Value::from(forms.to_vec())
            } else {
                let msgstr = message.msgstr().map_err(|_| mismatch(message.msgid()))?;
                json!([msgstr])
            };

            messages.insert(key, translations);
        }

        let mut locale_data = Map::new();
        locale_data.insert(self.domain.clone(), Value::Object(messages));

        Ok(json!({
            "domain": self.domain,
            "locale_data": locale_data,
        }))
    }
}

impl CatalogConverter for JedConverter {
    fn convert(&self, catalog: &Path, text: &str) -> Result<Value> {
        let text = complete_header(text);
        if let Cow::Owned(_) = text {
            log::debug!("Completed header fields of {}", catalog.display());
        }

        // the parser only reads from disk
        let mut staged = tempfile::Builder::new()
            .prefix("catalog-")
            .suffix(".po")
            .tempfile()
            .fs_context("staging catalog", catalog)?;
        staged
            .write_all(text.as_bytes())
            .and_then(|()| staged.flush())
            .fs_context("staging catalog", catalog)?;

        let parsed = po_file::parse(staged.path()).map_err(|e| Error::Catalog {
            path: catalog.to_path_buf(),
            reason: e.to_string(),
        })?;
        self.to_locale_data(&parsed, catalog)
    }
}
