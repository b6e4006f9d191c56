//! Shared generation entrypoint used by `generate`, `diff`, `check` and `list`.

use std::collections::HashMap;

use traitdoc_core::{
    registry, DocConfig, MetadataExtractor, SchemaSet, TraitCatalog, TraitId, TraitMetadata,
};
use traitdoc_renderer::Renderer;

use crate::writer::{Generator, Mode, RunReport};
use crate::SyncError;

/// Inputs of one run, loaded once and passed down read-only.
#[derive(Debug)]
pub struct Inputs {
    pub schemas: SchemaSet,
    pub catalog: TraitCatalog,
    pub extractor: MetadataExtractor,
}

/// Metadata for one eligible type, with the type it came from.
#[derive(Debug, Clone)]
pub struct ExtractedTrait {
    pub source: String,
    pub metadata: TraitMetadata,
}

pub fn load_inputs(config: &DocConfig) -> Result<Inputs, SyncError> {
    let schemas = traitdoc_schema::load_schemas(&config.schemas)?;
    let catalog = registry::load_at(&config.catalog)?;
    let extractor = MetadataExtractor::new(&config.trait_tag)?;
    tracing::debug!(
        types = schemas.len(),
        profiles = catalog.profiles.len(),
        tag = extractor.tag(),
        "inputs loaded"
    );
    Ok(Inputs { schemas, catalog, extractor })
}

/// Extract every eligible type, in discovery order.
///
/// Extraction finishes for all types before anything is written, so a
/// metadata error or a trait ID declared by two types leaves the
/// documentation tree untouched.
pub fn extract_all(inputs: &Inputs) -> Result<Vec<ExtractedTrait>, SyncError> {
    let mut traits = Vec::new();
    let mut seen: HashMap<TraitId, String> = HashMap::new();
    for schema in inputs.schemas.iter() {
        if !inputs.extractor.is_eligible(schema) {
            continue;
        }
        let metadata = inputs.extractor.extract(schema, &inputs.schemas)?;
        tracing::debug!(
            trait_id = %metadata.id,
            source = %schema.name,
            fields = metadata.fields.len(),
            "extracted"
        );
        if let Some(first) = seen.insert(metadata.id.clone(), schema.name.clone()) {
            return Err(SyncError::DuplicateTrait {
                id: metadata.id,
                first,
                second: schema.name.clone(),
            });
        }
        traits.push(ExtractedTrait {
            source: schema.name.clone(),
            metadata,
        });
    }
    Ok(traits)
}

/// Run a full generation pass.
pub fn run(config: &DocConfig, mode: Mode) -> Result<RunReport, SyncError> {
    let inputs = load_inputs(config)?;
    let traits = extract_all(&inputs)?;
    let renderer = Renderer::new(config.template_dir.as_deref())?;

    let mut generator = Generator::new(config, &renderer, &inputs.catalog, mode);
    for t in &traits {
        generator.compose(&t.metadata)?;
    }
    let report = generator.finalize()?;
    tracing::info!(
        pages = report.pages.len(),
        changed = report.changed_count(),
        "generation finished"
    );
    Ok(report)
}
