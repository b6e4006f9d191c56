//! Generation run: compose every page, then the navigation documents.
//!
//! Each document is read, mutated and written within one call. In
//! [`Mode::Write`] missing files are created before they are read and every
//! pass rewrites the full file through an atomic tmp-and-rename; in
//! [`Mode::DryRun`] nothing on disk is touched.

use std::path::{Path, PathBuf};

use traitdoc_core::{DocConfig, TraitMetadata, TraitRegistry};
use traitdoc_renderer::Renderer;

use crate::composer::compose_page;
use crate::document::{self, Document};
use crate::error::SyncError;
use crate::nav::{self, PageIndex};

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Write,
    DryRun,
}

/// Outcome of an individual document update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was rewritten. `changed` is false when the content was already current.
    Written { path: PathBuf, changed: bool },
    /// `--dry-run` mode: the file *would* have been rewritten.
    WouldWrite { path: PathBuf, changed: bool },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path, .. } | WriteResult::WouldWrite { path, .. } => path,
        }
    }

    pub fn changed(&self) -> bool {
        match self {
            WriteResult::Written { changed, .. } | WriteResult::WouldWrite { changed, .. } => {
                *changed
            }
        }
    }
}

/// A document before and after one update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub path: PathBuf,
    /// On-disk content before the update; empty for a missing file.
    pub before: String,
    pub after: String,
}

impl RenderedDocument {
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

/// Everything one run produced, in processing order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub writes: Vec<WriteResult>,
    pub documents: Vec<RenderedDocument>,
    /// Page file names, sorted as they appear in the navigation.
    pub pages: Vec<String>,
}

impl RunReport {
    pub fn changed_count(&self) -> usize {
        self.writes.iter().filter(|w| w.changed()).count()
    }
}

// ---------------------------------------------------------------------------
// Generator
// ---------------------------------------------------------------------------

/// Sequential page generator for one run.
///
/// Call [`Generator::compose`] once per trait, then [`Generator::finalize`]
/// to update the navigation (and page-list) documents.
pub struct Generator<'a> {
    config: &'a DocConfig,
    renderer: &'a Renderer,
    registry: &'a dyn TraitRegistry,
    mode: Mode,
    index: PageIndex,
    report: RunReport,
}

impl<'a> Generator<'a> {
    pub fn new(
        config: &'a DocConfig,
        renderer: &'a Renderer,
        registry: &'a dyn TraitRegistry,
        mode: Mode,
    ) -> Self {
        Generator {
            config,
            renderer,
            registry,
            mode,
            index: PageIndex::new(),
            report: RunReport::default(),
        }
    }

    /// Compose and persist the page for `meta`, recording it for navigation.
    pub fn compose(&mut self, meta: &TraitMetadata) -> Result<(), SyncError> {
        let path = self.config.page_path(&meta.id);
        let (registry, renderer) = (self.registry, self.renderer);
        let rendered = update_document(&path, self.mode, |doc| {
            compose_page(doc, meta, registry, renderer)
        })?;
        self.push(rendered);
        self.index.record(self.config.page_file_name(&meta.id));
        Ok(())
    }

    /// Update the navigation document and, when configured, the page list.
    pub fn finalize(mut self) -> Result<RunReport, SyncError> {
        let renderer = self.renderer;
        let index = std::mem::take(&mut self.index);

        let nav_file = self.config.nav_file();
        let rendered = update_document(&nav_file, self.mode, |doc| {
            nav::apply_nav(doc, &index, renderer)
        })?;
        self.push(rendered);

        if let Some(list_file) = self.config.list_file() {
            let rendered = update_document(&list_file, self.mode, |doc| {
                nav::apply_list(doc, &index, renderer)
            })?;
            self.push(rendered);
        }

        self.report.pages = index.sorted();
        Ok(self.report)
    }

    fn push(&mut self, rendered: RenderedDocument) {
        let changed = rendered.changed();
        let path = rendered.path.clone();
        self.report.writes.push(match self.mode {
            Mode::Write => WriteResult::Written { path, changed },
            Mode::DryRun => WriteResult::WouldWrite { path, changed },
        });
        self.report.documents.push(rendered);
    }
}

/// Load `path`, apply `mutate`, and persist unless in dry-run mode.
fn update_document<F>(path: &Path, mode: Mode, mutate: F) -> Result<RenderedDocument, SyncError>
where
    F: FnOnce(&mut Document) -> Result<(), SyncError>,
{
    let before = match mode {
        Mode::Write => document::read_or_create(path)?,
        Mode::DryRun => document::read_or_empty(path)?,
    };
    let mut doc = Document::parse(&before);
    mutate(&mut doc)?;
    let after = doc.render();

    match mode {
        Mode::Write => {
            document::persist(path, &after)?;
            tracing::info!("wrote: {}", path.display());
        }
        Mode::DryRun => {
            tracing::info!("[dry-run] would write: {}", path.display());
        }
    }

    Ok(RenderedDocument {
        path: path.to_path_buf(),
        before,
        after,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
