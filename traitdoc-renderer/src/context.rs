//! Template context: serializable rendering payloads built from
//! [`TraitMetadata`] and the trait registry, plus the name helpers used to
//! derive titles and display names.

use serde::{Deserialize, Serialize};

use traitdoc_core::{TraitMetadata, TraitRegistry};

use crate::error::RenderError;

/// Payload for the per-page templates (title, description, usage).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContext {
    pub id: String,
    /// Title-cased ID with hyphens as spaces, e.g. `Pod Disruption Budget`.
    pub title: String,
    /// Profile memberships, in catalog order.
    pub profiles: Vec<String>,
    pub platform: bool,
    pub field_count: usize,
}

impl PageContext {
    /// Build a [`PageContext`] for one trait, querying `registry` once per lookup.
    pub fn from_metadata(meta: &TraitMetadata, registry: &dyn TraitRegistry) -> Self {
        PageContext {
            id: meta.id.to_string(),
            title: title_case(&meta.id.as_str().replace('-', " ")),
            profiles: registry.profiles_for(&meta.id),
            platform: registry.is_platform_trait(&meta.id),
            field_count: meta.fields.len(),
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

/// Payload for one navigation or page-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryContext {
    pub file: String,
    pub name: String,
}

impl EntryContext {
    pub fn from_file(file: &str) -> Self {
        EntryContext {
            file: file.to_string(),
            name: display_name_from_file(file),
        }
    }

    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

/// Upper-case the first letter of every word.
///
/// A word starts after any separator: whitespace or ASCII punctuation.
/// Letters, digits and `_` do not split words, and the rest of each word is
/// left as written (`3scale` stays `3scale`, `jvm` becomes `Jvm`).
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut after_separator = true;
    for c in s.chars() {
        if after_separator {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        after_separator = is_separator(c);
    }
    out
}

fn is_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    !c.is_alphanumeric() && c.is_whitespace()
}

/// Display name for a generated page: extension stripped, the word `trait`
/// removed, hyphens to spaces, trimmed, title-cased.
pub fn display_name_from_file(file: &str) -> String {
    let stem = file.rsplit_once('.').map_or(file, |(stem, _)| stem);
    let name = stem.replace("trait", "").replace('-', " ");
    title_case(name.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use traitdoc_core::{TraitCatalog, TraitId};

    #[test]
    fn title_case_matches_word_boundaries() {
        assert_eq!(title_case("pod disruption budget"), "Pod Disruption Budget");
        assert_eq!(title_case("3scale"), "3scale");
        assert_eq!(title_case("jvm"), "Jvm");
        assert_eq!(title_case("keda.autoscaler"), "Keda.Autoscaler");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn display_name_strips_extension_and_trait_word() {
        assert_eq!(display_name_from_file("knative-service.adoc"), "Knative Service");
        assert_eq!(display_name_from_file("trait-a.adoc"), "A");
        assert_eq!(display_name_from_file("timer"), "Timer");
    }

    #[test]
    fn page_context_queries_registry() {
        let catalog = sample_catalog();
        let meta = TraitMetadata {
            id: TraitId::from("pod-disruption-budget"),
            description: vec![],
            fields: vec![],
        };
        let ctx = PageContext::from_metadata(&meta, &catalog);
        assert_eq!(ctx.title, "Pod Disruption Budget");
        assert_eq!(ctx.profiles, ["Kubernetes"]);
        assert!(ctx.platform);
        ctx.to_tera_context().expect("context conversion");
    }

    fn sample_catalog() -> TraitCatalog {
        TraitCatalog {
            profiles: vec![traitdoc_core::registry::Profile {
                name: "Kubernetes".into(),
                traits: vec![TraitId::from("pod-disruption-budget")],
            }],
            platform_traits: vec![TraitId::from("pod-disruption-budget")],
        }
    }
}
