//! # traitdoc-sync
//!
//! Region splicing, page composition and the generation run.
//!
//! Call [`pipeline::run`] with [`Mode::Write`] to bring every trait page and
//! the navigation up to date, or with [`Mode::DryRun`] to compute the same
//! result without touching disk. [`diff::diff_all`] turns a dry run into
//! unified diffs.

pub mod composer;
pub mod diff;
pub mod document;
pub mod error;
pub mod nav;
pub mod pipeline;
pub mod splice;
pub mod writer;

pub use diff::{diff_all, is_up_to_date, FileDiff};
pub use document::Document;
pub use error::SyncError;
pub use nav::PageIndex;
pub use pipeline::{run, ExtractedTrait, Inputs};
pub use writer::{Generator, Mode, RenderedDocument, RunReport, WriteResult};
