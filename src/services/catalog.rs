//! Catalog loading and merging services
//!
//! The catalog starts from a bundled JSON file compiled into the binary and
//! merges any configured sources over it. Sources are plain files, JSON for
//! full templates with block payloads, CSV for listing-style feeds. Broken
//! sources never fail the load; they surface as warnings and the rest of the
//! catalog stays usable.

use crate::model::{Block, BlockKind, Catalog, Template, TemplateKind};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Starter catalog compiled into the binary
const BUNDLED_CATALOG: &str = include_str!("../../assets/catalog.json");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    templates: Vec<Template>,
}

/// One row of a CSV catalog listing
///
/// CSV sources carry metadata plus a compact block list; per-block text is
/// JSON-only.
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: String,
    title: String,
    kind: TemplateKind,
    #[serde(default)]
    access_level: u8,
    #[serde(default)]
    author: String,
    #[serde(default)]
    url: String,
    /// Semicolon-separated block kinds, e.g. "hero;features;cta"
    #[serde(default)]
    blocks: String,
}

impl CsvRow {
    fn into_template(self) -> Template {
        let content: Vec<Block> = self
            .blocks
            .split(';')
            .filter_map(BlockKind::parse)
            .map(Block::new)
            .collect();

        Template {
            id: self.id,
            title: self.title,
            kind: self.kind,
            access_level: self.access_level,
            author: (!self.author.is_empty()).then_some(self.author),
            url: (!self.url.is_empty()).then_some(self.url),
            tags: Vec::new(),
            created_at: None,
            content,
        }
    }
}

/// Load the full catalog: bundled templates first, then each configured
/// source merged over them. Returns the catalog together with one warning
/// per source that could not be loaded.
pub fn load_catalog(sources: &[String]) -> (Catalog, Vec<String>) {
    let mut templates: Vec<Template> = Vec::new();
    let mut warnings = Vec::new();

    match parse_json_catalog(BUNDLED_CATALOG) {
        Ok(bundled) => merge(&mut templates, bundled),
        Err(e) => warnings.push(format!("Bundled catalog is invalid: {}", e)),
    }

    for source in sources {
        match load_source(Path::new(source)) {
            Ok(extra) => merge(&mut templates, extra),
            Err(e) => warnings.push(format!("{}: {}", source, e)),
        }
    }

    (
        Catalog {
            templates,
            saved: Vec::new(),
        },
        warnings,
    )
}

fn load_source(path: &Path) -> Result<Vec<Template>, String> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext.to_ascii_lowercase().as_str() {
        "json" => {
            let contents =
                fs::read_to_string(path).map_err(|e| format!("Failed to read catalog: {}", e))?;
            parse_json_catalog(&contents)
        }
        "csv" => parse_csv_catalog(path),
        other => Err(format!("Unsupported catalog format: .{}", other)),
    }
}

fn parse_json_catalog(contents: &str) -> Result<Vec<Template>, String> {
    let file: CatalogFile = serde_json::from_str(contents)
        .map_err(|e| format!("Failed to parse catalog JSON: {}", e))?;
    Ok(file.templates)
}

fn parse_csv_catalog(path: &Path) -> Result<Vec<Template>, String> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|e| format!("Failed to read catalog CSV: {}", e))?;

    let mut templates = Vec::new();
    for row in reader.deserialize() {
        let row: CsvRow = row.map_err(|e| format!("Bad catalog row: {}", e))?;
        templates.push(row.into_template());
    }
    Ok(templates)
}

/// Merge incoming entries over existing ones. A repeated id replaces the
/// earlier entry in place, so later sources win.
fn merge(templates: &mut Vec<Template>, incoming: Vec<Template>) {
    for template in incoming {
        if let Some(existing) = templates.iter_mut().find(|t| t.id == template.id) {
            *existing = template;
        } else {
            templates.push(template);
        }
    }
}
