//! Trait registry: profile membership and platform-trait lookups.
//!
//! The registry is built once per run (usually from a YAML catalog) and
//! handed to the page composer as a read-only dependency.
//!
//! # Catalog layout
//!
//! ```text
//! profiles:
//!   - name: Kubernetes
//!     traits: [container, timer]
//!   - name: Knative
//!     traits: [container, knative]
//! platform_traits: [container]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::types::TraitId;

/// Lookups the page composer needs about a trait.
pub trait TraitRegistry {
    /// Names of the profiles the trait belongs to, in catalog order.
    fn profiles_for(&self, id: &TraitId) -> Vec<String>;

    /// Whether disabling the trait may compromise platform functionality.
    fn is_platform_trait(&self, id: &TraitId) -> bool;
}

/// A named deployment context and the traits available in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub traits: Vec<TraitId>,
}

/// Catalog-backed [`TraitRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraitCatalog {
    #[serde(default)]
    pub profiles: Vec<Profile>,
    #[serde(default)]
    pub platform_traits: Vec<TraitId>,
}

impl TraitRegistry for TraitCatalog {
    fn profiles_for(&self, id: &TraitId) -> Vec<String> {
        self.profiles
            .iter()
            .filter(|p| p.traits.contains(id))
            .map(|p| p.name.clone())
            .collect()
    }

    fn is_platform_trait(&self, id: &TraitId) -> bool {
        self.platform_traits.contains(id)
    }
}

/// Load a catalog from `path`.
///
/// Returns `CatalogError::NotFound` if absent,
/// `CatalogError::Parse` (with path + line context) if malformed YAML.
pub fn load_at(path: &Path) -> Result<TraitCatalog, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&contents).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
