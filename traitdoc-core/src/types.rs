//! Domain types for trait documentation.
//!
//! Schema types ([`TypeSchema`], [`FieldSchema`], [`SchemaSet`]) are the
//! explicit description handed over by whatever front end discovered them.
//! Metadata types ([`TraitMetadata`], [`FieldMetadata`]) are what the page
//! composer renders.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Tag modifier that marks a field for flattening.
pub const FLATTEN_MODIFIER: &str = "squash";

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A trait identifier: lowercase, hyphenated token (`[a-z0-9-]+`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitId(pub String);

impl TraitId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TraitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TraitId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TraitId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Schema description
// ---------------------------------------------------------------------------

/// One declared type: its annotation lines and ordered fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSchema {
    pub name: String,
    #[serde(default)]
    pub comments: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldSchema>,
}

/// One declared field of a [`TypeSchema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Source-level field name; informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Configuration-key tag, `key[,modifier...]`. Untagged fields are not documented.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub comments: Vec<String>,
    /// Explicit flatten flag, equivalent to a `squash` tag modifier.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub flatten: bool,
}

impl FieldSchema {
    /// The exposed key: the tag up to the first comma.
    pub fn key(&self) -> Option<&str> {
        let tag = self.property.as_deref()?;
        tag.split(',').next()
    }

    /// Whether the field is tagged for documentation at all.
    pub fn is_tagged(&self) -> bool {
        self.property.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Whether the field's nested fields replace it in the documentation.
    pub fn is_flattened(&self) -> bool {
        if self.flatten {
            return true;
        }
        self.property
            .as_deref()
            .is_some_and(|p| p.split(',').skip(1).any(|m| m.trim() == FLATTEN_MODIFIER))
    }

    /// Declared type name with pointer markers stripped.
    pub fn bare_type_name(&self) -> &str {
        self.type_name.trim_start_matches('*')
    }
}

/// All known types, in discovery order, indexed by name.
#[derive(Debug, Clone, Default)]
pub struct SchemaSet {
    types: Vec<TypeSchema>,
    index: HashMap<String, usize>,
}

impl SchemaSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a type. If a type with the same name is already present it is
    /// left in place and the rejected type is handed back.
    pub fn insert(&mut self, schema: TypeSchema) -> Result<(), TypeSchema> {
        if self.index.contains_key(&schema.name) {
            return Err(schema);
        }
        self.index.insert(schema.name.clone(), self.types.len());
        self.types.push(schema);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&TypeSchema> {
        self.index.get(name).map(|&i| &self.types[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeSchema> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Extracted metadata
// ---------------------------------------------------------------------------

/// Documentation-ready view of one trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitMetadata {
    pub id: TraitId,
    /// Annotation lines with directives and TODOs removed.
    pub description: Vec<String>,
    /// Documented fields, flattening already applied.
    pub fields: Vec<FieldMetadata>,
}

/// Documentation-ready view of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMetadata {
    pub key: String,
    pub type_name: String,
    pub description: Vec<String>,
    pub flatten: bool,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
