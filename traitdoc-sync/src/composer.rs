//! Per-trait page composition.

use traitdoc_core::{TraitMetadata, TraitRegistry};
use traitdoc_renderer::{markers, PageContext, Renderer};

use crate::document::Document;
use crate::error::SyncError;

/// Bring one trait page up to date in memory.
///
/// A title is prepended only when the page has none; the description and
/// configuration regions are replaced in that order, so a fresh page lists
/// them title first, description second.
pub fn compose_page(
    doc: &mut Document,
    meta: &TraitMetadata,
    registry: &dyn TraitRegistry,
    renderer: &Renderer,
) -> Result<(), SyncError> {
    let ctx = PageContext::from_metadata(meta, registry);

    if !doc.has_title() {
        tracing::debug!(trait_id = %meta.id, "adding title");
        doc.prepend(renderer.title(&ctx)?);
    }

    let description = renderer.description_region(meta, &ctx)?;
    tracing::debug!(trait_id = %meta.id, lines = description.len(), "description region");
    doc.replace_region(markers::DESCRIPTION, &description);

    let configuration = renderer.configuration_region(meta, &ctx)?;
    tracing::debug!(trait_id = %meta.id, fields = meta.fields.len(), "configuration region");
    doc.replace_region(markers::CONFIGURATION, &configuration);

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
