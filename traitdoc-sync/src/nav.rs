//! Navigation and page-list aggregation over the generated pages.

use traitdoc_renderer::{markers, Renderer};

use crate::document::Document;
use crate::error::SyncError;

/// File names of the pages produced during one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageIndex {
    files: Vec<String>,
}

impl PageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, file: impl Into<String>) {
        self.files.push(file.into());
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Recorded files in lexicographic order, independent of discovery order.
    pub fn sorted(&self) -> Vec<String> {
        let mut files = self.files.clone();
        files.sort();
        files
    }
}

/// Replace the `trait-nav` region with one entry per page.
pub fn apply_nav(doc: &mut Document, index: &PageIndex, renderer: &Renderer) -> Result<(), SyncError> {
    let entries = renderer.nav_entries(&index.sorted())?;
    tracing::debug!(entries = entries.len(), "navigation region");
    doc.replace_region(markers::NAV, &entries);
    Ok(())
}

/// Replace the `trait-list` region with one entry per page.
pub fn apply_list(doc: &mut Document, index: &PageIndex, renderer: &Renderer) -> Result<(), SyncError> {
    let entries = renderer.list_entries(&index.sorted())?;
    tracing::debug!(entries = entries.len(), "page-list region");
    doc.replace_region(markers::LIST, &entries);
    Ok(())
}
