//! # traitdoc-renderer
//!
//! Builds the content of every managed region of a trait page (title,
//! description, configuration table) and of the navigation and page-list
//! documents. Sentences come from Tera templates that can be overridden from
//! a user template directory; table structure is fixed.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use traitdoc_core::{TraitCatalog, TraitMetadata};
//! use traitdoc_renderer::{PageContext, Renderer};
//!
//! fn describe(meta: &TraitMetadata, catalog: &TraitCatalog) {
//!     if let Ok(renderer) = Renderer::new(None) {
//!         let ctx = PageContext::from_metadata(meta, catalog);
//!         if let Ok(lines) = renderer.configuration_region(meta, &ctx) {
//!             println!("{}", lines.join("\n"));
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod markers;

pub use context::{display_name_from_file, title_case, EntryContext, PageContext};
pub use engine::{Renderer, TemplateEngine};
pub use error::RenderError;
pub use markers::Region;
