//! Locale descriptor loading and enrichment.
//!
//! The descriptor is the `locale.json` file of a locale folder. Its fields are
//! kept verbatim and in order; enrichment appends `id`, `readme` and
//! `createdAt`.

use crate::bundler::{
    error::{Error, Result},
    utils::fs,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};
use std::path::Path;

/// Descriptor field holding the organization identifier.
pub const ORGANIZATION_ID: &str = "organizationId";
/// Descriptor field holding the locale identifier.
pub const LOCALE_ID: &str = "localeId";
/// Descriptor field holding the locale version.
pub const VERSION: &str = "version";

/// Separator of the composite `id`.
const ID_DELIMITER: &str = ":";

/// Source of the `createdAt` stamp.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Parsed locale descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleDescriptor {
    fields: Map<String, Value>,
}

impl LocaleDescriptor {
    /// Parses descriptor JSON. The top level must be an object.
    pub fn parse(text: &str) -> Result<Self> {
        match serde_json::from_str(text)? {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(Error::InvalidDescriptor(format!(
                "expected a JSON object, found {}",
                kind_of(&other)
            ))),
        }
    }

    /// Reads and parses the descriptor at `path`.
    ///
    /// A missing file is [`Error::MissingInput`].
    pub async fn load(path: &Path) -> Result<Self> {
        if !fs::exists(path).await {
            return Err(Error::MissingInput {
                what: "Locale JSON file",
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path, "reading locale descriptor").await?;
        Self::parse(&text)
    }

    /// `organizationId:localeId:version`.
    pub fn composite_id(&self) -> Result<String> {
        let parts = [ORGANIZATION_ID, LOCALE_ID, VERSION]
            .into_iter()
            .map(|field| self.id_part(field))
            .collect::<Result<Vec<_>>>()?;
        Ok(parts.join(ID_DELIMITER))
    }

    fn id_part(&self, field: &str) -> Result<String> {
        match self.fields.get(field) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(v.to_string()),
            Some(other) => Err(Error::InvalidDescriptor(format!(
                "field {field:?} must be a string or number, found {}",
                kind_of(other)
            ))),
            None => Err(Error::InvalidDescriptor(format!(
                "missing required field {field:?}"
            ))),
        }
    }

    /// Adds `id`, `readme` and `createdAt`. Existing values are replaced in place.
    pub fn enrich(&mut self, readme: String, created_at: DateTime<Utc>) -> Result<()> {
        let id = self.composite_id()?;
        self.fields.insert("id".into(), Value::String(id));
        self.fields.insert("readme".into(), Value::String(readme));
        self.fields.insert(
            "createdAt".into(),
            Value::String(created_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        Ok(())
    }

    /// Compact JSON text.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.fields)?)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
