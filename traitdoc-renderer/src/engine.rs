//! Tera rendering engine: [`TemplateEngine`] and the region [`Renderer`].
//!
//! # Templates
//!
//! | Name                    | Renders                                        |
//! |-------------------------|------------------------------------------------|
//! | `title.tera`            | page title line                                |
//! | `profiles.tera`         | profile membership sentence                    |
//! | `platform_warning.tera` | platform trait warning                         |
//! | `usage_single.tera`     | CLI example for traits with at most one field  |
//! | `usage_multi.tera`      | CLI example for traits with several fields     |
//! | `nav_entry.tera`        | one navigation entry                           |
//! | `list_entry.tera`       | one page-list entry                            |
//!
//! Any of them can be overridden by a file of the same name in the user
//! template directory. A template may render several lines.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use traitdoc_core::TraitMetadata;

use crate::context::{EntryContext, PageContext};
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates, baked in with include_str!
// ---------------------------------------------------------------------------

pub const TITLE: &str = "title.tera";
pub const PROFILES: &str = "profiles.tera";
pub const PLATFORM_WARNING: &str = "platform_warning.tera";
pub const USAGE_SINGLE: &str = "usage_single.tera";
pub const USAGE_MULTI: &str = "usage_multi.tera";
pub const NAV_ENTRY: &str = "nav_entry.tera";
pub const LIST_ENTRY: &str = "list_entry.tera";

const TPLS: &[(&str, &str)] = &[
    (TITLE, include_str!("templates/title.tera")),
    (PROFILES, include_str!("templates/profiles.tera")),
    (PLATFORM_WARNING, include_str!("templates/platform_warning.tera")),
    (USAGE_SINGLE, include_str!("templates/usage_single.tera")),
    (USAGE_MULTI, include_str!("templates/usage_multi.tera")),
    (NAV_ENTRY, include_str!("templates/nav_entry.tera")),
    (LIST_ENTRY, include_str!("templates/list_entry.tera")),
];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/").to_lowercase()
}

fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    let mut templates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((normalize_template_name(rel), contents));
    }
    Ok(templates)
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = TPLS
        .iter()
        .map(|(name, content)| (normalize_template_name(Path::new(name)), (*content).to_string()))
        .collect();
    if let Some(dir) = user_template_dir {
        templates.extend(load_user_templates(dir)?);
    }

    let mut tera = Tera::default();
    tera.add_raw_templates(templates)?;
    Ok(tera)
}

/// Split rendered output into lines, dropping the template's trailing newline.
fn into_lines(rendered: &str) -> Vec<String> {
    let rendered = rendered.replace("\r\n", "\n");
    let body = rendered.strip_suffix('\n').unwrap_or(&rendered);
    body.split('\n').map(str::to_owned).collect()
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine for rendering templates with optional user overrides.
///
/// `user_template_dir` may contain `.tera` files that override embedded defaults.
/// Template names are normalised to lowercase.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Construct a new [`TemplateEngine`], loading embedded templates plus any
    /// overrides found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render `name` and return its output as lines.
    pub fn render_lines(&self, name: &str, ctx: &tera::Context) -> Result<Vec<String>, RenderError> {
        let rendered = self.tera.render(name, ctx)?;
        Ok(into_lines(&rendered))
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Produces the content of every managed region.
///
/// Create once per run with [`Renderer::new`] and reuse.
pub struct Renderer {
    engine: TemplateEngine,
}

impl Renderer {
    /// Construct a new [`Renderer`] with embedded templates and optional overrides.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        Ok(Renderer { engine: TemplateEngine::new(user_template_dir)? })
    }

    /// Generated title line(s) for a page without one.
    pub fn title(&self, ctx: &PageContext) -> Result<Vec<String>, RenderError> {
        self.engine.render_lines(TITLE, &ctx.to_tera_context()?)
    }

    /// Lines between the description markers.
    pub fn description_region(
        &self,
        meta: &TraitMetadata,
        ctx: &PageContext,
    ) -> Result<Vec<String>, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        let mut lines = meta.description.clone();
        lines.push(String::new());
        lines.extend(self.engine.render_lines(PROFILES, &tera_ctx)?);
        if ctx.platform {
            lines.push(String::new());
            lines.extend(self.engine.render_lines(PLATFORM_WARNING, &tera_ctx)?);
        }
        lines.push(String::new());
        Ok(lines)
    }

    /// Lines between the configuration markers: usage example and table.
    pub fn configuration_region(
        &self,
        meta: &TraitMetadata,
        ctx: &PageContext,
    ) -> Result<Vec<String>, RenderError> {
        let usage = if ctx.field_count > 1 { USAGE_MULTI } else { USAGE_SINGLE };

        let mut lines: Vec<String> = vec![
            "== Configuration".into(),
            String::new(),
            "Trait properties can be specified when running any integration with the CLI:".into(),
            "```".into(),
        ];
        lines.extend(self.engine.render_lines(usage, &ctx.to_tera_context()?)?);
        lines.extend(
            [
                "```",
                "The following configuration options are available:",
                "",
                "[cols=\"2,1,5a\"]",
                "|===",
                "|Property | Type | Description",
                "",
            ]
            .map(String::from),
        );

        for field in &meta.fields {
            lines.push(format!("| {}.{}", meta.id, field.key));
            lines.push(format!("| {}", field.type_name));
            match field.description.split_first() {
                Some((first, rest)) => {
                    lines.push(format!("| {first}"));
                    lines.extend(rest.iter().cloned());
                }
                None => lines.push("|".into()),
            }
            lines.push(String::new());
        }

        lines.push("|===".into());
        lines.push(String::new());
        Ok(lines)
    }

    /// One navigation entry per file, in the order given.
    pub fn nav_entries(&self, files: &[String]) -> Result<Vec<String>, RenderError> {
        self.entries(NAV_ENTRY, files)
    }

    /// One page-list entry per file, in the order given.
    pub fn list_entries(&self, files: &[String]) -> Result<Vec<String>, RenderError> {
        self.entries(LIST_ENTRY, files)
    }

    fn entries(&self, template: &str, files: &[String]) -> Result<Vec<String>, RenderError> {
        let mut lines = Vec::with_capacity(files.len());
        for file in files {
            let ctx = EntryContext::from_file(file).to_tera_context()?;
            lines.extend(self.engine.render_lines(template, &ctx)?);
        }
        Ok(lines)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
