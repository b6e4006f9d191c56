//! Metadata extraction: trait identity, description lines and the flattened
//! field list of a schema type.
//!
//! Flattening follows field types through the [`SchemaSet`]. The chain of
//! types currently being flattened is tracked so a type that (directly or
//! indirectly) flattens itself fails with [`MetadataError::FlattenCycle`]
//! instead of recursing forever.

use regex::Regex;

use crate::error::MetadataError;
use crate::types::{FieldMetadata, FieldSchema, SchemaSet, TraitId, TraitMetadata, TypeSchema};

/// Directive tag used when none is configured.
pub const DEFAULT_TRAIT_TAG: &str = "+trait-id";

/// Prefixes of annotation lines that never reach the documentation.
const FILTERED_PREFIXES: &[&str] = &["+", "TODO:"];

/// Extracts [`TraitMetadata`] from schema types carrying a trait directive.
#[derive(Debug, Clone)]
pub struct MetadataExtractor {
    tag: String,
    id_pattern: Regex,
}

impl MetadataExtractor {
    /// Build an extractor for directives of the form `<tag>=<id>`.
    pub fn new(tag: &str) -> Result<Self, MetadataError> {
        let pattern = format!("{}=([a-z0-9-]+)", regex::escape(tag));
        let id_pattern = Regex::new(&pattern).map_err(|source| MetadataError::InvalidTag {
            tag: tag.to_string(),
            source,
        })?;
        Ok(Self {
            tag: tag.to_string(),
            id_pattern,
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// A type is eligible iff one of its annotation lines mentions the tag.
    pub fn is_eligible(&self, schema: &TypeSchema) -> bool {
        schema.comments.iter().any(|c| c.contains(&self.tag))
    }

    /// Find the trait ID declared in `lines`.
    ///
    /// The first line mentioning the tag decides: it must carry a valid
    /// `=<id>` or extraction fails.
    pub fn extract_trait_id(
        &self,
        type_name: &str,
        lines: &[String],
    ) -> Result<TraitId, MetadataError> {
        let line = lines
            .iter()
            .find(|l| l.contains(&self.tag))
            .ok_or_else(|| MetadataError::MissingTraitId {
                type_name: type_name.to_string(),
            })?;
        self.id_pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| TraitId::from(m.as_str()))
            .ok_or_else(|| MetadataError::MalformedDirective {
                type_name: type_name.to_string(),
                line: line.clone(),
            })
    }

    /// Full extraction for one eligible type.
    pub fn extract(
        &self,
        schema: &TypeSchema,
        set: &SchemaSet,
    ) -> Result<TraitMetadata, MetadataError> {
        let id = self.extract_trait_id(&schema.name, &schema.comments)?;
        let fields = extract_fields(schema, set)?;
        Ok(TraitMetadata {
            id,
            description: filter_annotations(&schema.comments),
            fields,
        })
    }
}

/// Drop directive (`+...`) and `TODO:` lines; keep everything else verbatim,
/// blank lines included.
pub fn filter_annotations(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|l| {
            let trimmed = l.trim_start_matches(|c: char| c == ' ' || c == '\t');
            !FILTERED_PREFIXES.iter().any(|p| trimmed.starts_with(*p))
        })
        .cloned()
        .collect()
}

impl FieldMetadata {
    /// Metadata for a single declared field, or `None` when the field carries
    /// no configuration-key tag (or an empty key without flattening).
    pub fn from_field(field: &FieldSchema) -> Option<Self> {
        if !field.is_tagged() {
            return None;
        }
        let flatten = field.is_flattened();
        let key = field.key().unwrap_or_default();
        if key.is_empty() && !flatten {
            return None;
        }
        Some(FieldMetadata {
            key: key.to_string(),
            type_name: field.bare_type_name().to_string(),
            description: filter_annotations(&field.comments),
            flatten,
        })
    }
}

/// Declared fields of `schema` without flattening; flatten fields are kept as
/// single entries with `flatten` set.
pub fn declared_fields(schema: &TypeSchema) -> Vec<FieldMetadata> {
    schema.fields.iter().filter_map(FieldMetadata::from_field).collect()
}

/// Documented fields of `schema`, each flatten field replaced in place by its
/// own type's fields (depth-first, declared order).
pub fn extract_fields(
    schema: &TypeSchema,
    set: &SchemaSet,
) -> Result<Vec<FieldMetadata>, MetadataError> {
    let mut out = Vec::new();
    let mut chain = vec![schema.name.clone()];
    flatten_into(schema, set, &mut chain, &mut out)?;
    Ok(out)
}

fn flatten_into(
    schema: &TypeSchema,
    set: &SchemaSet,
    chain: &mut Vec<String>,
    out: &mut Vec<FieldMetadata>,
) -> Result<(), MetadataError> {
    for meta in declared_fields(schema) {
        if !meta.flatten {
            out.push(meta);
            continue;
        }

        let target = meta.type_name;
        if chain.contains(&target) {
            let mut cycle = chain.clone();
            cycle.push(target);
            return Err(MetadataError::FlattenCycle {
                chain: cycle.join(" -> "),
            });
        }
        let nested = set.get(&target).ok_or_else(|| MetadataError::UnknownType {
            type_name: schema.name.clone(),
            target: target.clone(),
        })?;

        chain.push(target);
        flatten_into(nested, set, chain, out)?;
        chain.pop();
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
