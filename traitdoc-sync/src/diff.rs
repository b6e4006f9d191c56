//! Unified diffs of what `generate` would change, for `traitdoc diff` and
//! `traitdoc check`.

use std::path::PathBuf;

use similar::TextDiff;

use traitdoc_core::DocConfig;

use crate::writer::{Mode, RenderedDocument};
use crate::{pipeline, SyncError};

/// A single document diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Render what a generation pass would produce and compare it to the
/// current on-disk content. No files are written.
pub fn diff_all(config: &DocConfig) -> Result<Vec<FileDiff>, SyncError> {
    let report = pipeline::run(config, Mode::DryRun)?;
    Ok(report
        .documents
        .iter()
        .filter(|d| d.changed())
        .map(|d| file_diff(config, d))
        .collect())
}

/// Whether a generation pass would leave every document as it is.
pub fn is_up_to_date(config: &DocConfig) -> Result<bool, SyncError> {
    Ok(diff_all(config)?.is_empty())
}

fn file_diff(config: &DocConfig, doc: &RenderedDocument) -> FileDiff {
    let relative = doc.path.strip_prefix(&config.doc_dir).unwrap_or(doc.path.as_path());
    let old_header = format!("a/{}", relative.display());
    let new_header = format!("b/{}", relative.display());
    let unified = TextDiff::from_lines(&doc.before, &doc.after)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string();
    FileDiff {
        path: doc.path.clone(),
        unified_diff: unified,
    }
}
