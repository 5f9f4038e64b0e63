//! Page persistence
//!
//! The working page is a YAML document on disk. A missing file is a fresh
//! start, not an error.

use crate::model::Page;
use std::fs;
use std::path::Path;

/// Load the page at `path`, or a default page when the file does not exist
pub fn load_page<P: AsRef<Path>>(path: P) -> Result<Page, String> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Page::default());
    }

    let contents =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    serde_yaml::from_str(&contents)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

/// Write the page to `path`, creating parent directories as needed
pub fn save_page<P: AsRef<Path>>(path: P, page: &Page) -> Result<(), String> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
        }
    }

    let contents =
        serde_yaml::to_string(page).map_err(|e| format!("Failed to serialize page: {}", e))?;

    fs::write(path, contents).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}
