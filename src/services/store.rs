//! Local template store
//!
//! Saved and imported templates live as one JSON file each under
//! `~/.pagecraft/templates/`. They surface in the library's My Templates
//! category.

use crate::config::Config;
use crate::model::{Page, Template, TemplateKind};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

fn store_dir() -> Option<PathBuf> {
    Config::config_dir().map(|dir| dir.join("templates"))
}

/// All templates in the store, newest first. Unreadable files are skipped.
pub fn list_templates() -> Vec<Template> {
    match store_dir() {
        Some(dir) => list_in(&dir),
        None => Vec::new(),
    }
}

/// Persist the page's blocks as a reusable template named `name`
pub fn save_template(name: &str, kind: TemplateKind, page: &Page) -> Result<Template, String> {
    let dir = store_dir().ok_or("Could not determine template directory")?;
    save_in(&dir, name, kind, page)
}

/// Copy a template file from anywhere on disk into the store
pub fn import_template(path: &Path) -> Result<Template, String> {
    let dir = store_dir().ok_or("Could not determine template directory")?;
    import_in(&dir, path)
}

fn list_in(dir: &Path) -> Vec<Template> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut templates: Vec<Template> = entries
        .flatten()
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("json"))
        })
        .filter_map(|entry| {
            let contents = fs::read_to_string(entry.path()).ok()?;
            serde_json::from_str::<Template>(&contents).ok()
        })
        .collect();

    templates.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.title.cmp(&b.title)));
    templates
}

fn save_in(dir: &Path, name: &str, kind: TemplateKind, page: &Page) -> Result<Template, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Template name cannot be empty".to_string());
    }
    if page.blocks.is_empty() {
        return Err("The page has no blocks to save".to_string());
    }

    let slug = slugify(name);
    if slug.is_empty() {
        return Err("Template name needs at least one letter or digit".to_string());
    }

    let template = Template {
        id: format!("saved-{}", slug),
        title: name.to_string(),
        kind,
        access_level: 0,
        author: None,
        url: None,
        tags: Vec::new(),
        created_at: Some(Local::now()),
        content: page.blocks.clone(),
    };

    write_template(dir, &slug, &template)?;
    Ok(template)
}

fn import_in(dir: &Path, path: &Path) -> Result<Template, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let mut template: Template = serde_json::from_str(&contents)
        .map_err(|e| format!("Not a valid template file: {}", e))?;

    let slug = slugify(&template.title);
    if slug.is_empty() {
        return Err("Template has no usable title".to_string());
    }

    // Imported copies get a store identity of their own
    template.id = format!("saved-{}", slug);
    template.created_at = Some(Local::now());

    write_template(dir, &slug, &template)?;
    Ok(template)
}

fn write_template(dir: &Path, slug: &str, template: &Template) -> Result<(), String> {
    fs::create_dir_all(dir).map_err(|e| format!("Failed to create template directory: {}", e))?;

    let contents = serde_json::to_string_pretty(template)
        .map_err(|e| format!("Failed to serialize template: {}", e))?;

    let path = dir.join(format!("{}.json", slug));
    fs::write(&path, contents).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

/// Filesystem-safe slug: lowercase alphanumerics with single dashes
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}
