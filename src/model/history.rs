//! Data models for insert history persistence

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How many inserts are kept before old entries roll off
const HISTORY_CAP: usize = 100;

/// File name inside the app data directory
const HISTORY_FILE: &str = "history.json";

/// A single template insertion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertHistoryEntry {
    pub timestamp: DateTime<Local>,
    pub template_id: String,
    pub title: String,
    pub blocks_added: usize,
}

impl InsertHistoryEntry {
    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Wrapper for persisting insert history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertHistory {
    pub entries: Vec<InsertHistoryEntry>,
}

impl InsertHistory {
    /// Prepend an entry, keeping the list capped
    pub fn record(entries: &mut Vec<InsertHistoryEntry>, entry: InsertHistoryEntry) {
        entries.insert(0, entry);
        if entries.len() > HISTORY_CAP {
            entries.truncate(HISTORY_CAP);
        }
    }

    /// Read the history file under `dir`; empty when absent or unreadable
    pub fn load_in(dir: &Path) -> Vec<InsertHistoryEntry> {
        let history_path = dir.join(HISTORY_FILE);
        if !history_path.exists() {
            return Vec::new();
        }

        let contents = match fs::read_to_string(&history_path) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str::<InsertHistory>(&contents) {
            Ok(history) => history.entries,
            Err(_) => Vec::new(),
        }
    }

    /// Write the history file under `dir`, creating the directory if needed
    pub fn save_in(dir: &Path, entries: &[InsertHistoryEntry]) -> Result<(), String> {
        if !dir.exists() {
            fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create history directory: {}", e))?;
        }

        let history = InsertHistory {
            entries: entries.to_vec(),
        };

        let json = serde_json::to_string_pretty(&history)
            .map_err(|e| format!("Failed to serialize history: {}", e))?;

        fs::write(dir.join(HISTORY_FILE), json)
            .map_err(|e| format!("Failed to write history file: {}", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> InsertHistoryEntry {
        InsertHistoryEntry {
            timestamp: Local::now(),
            template_id: id.to_string(),
            title: id.to_string(),
            blocks_added: 1,
        }
    }

    #[test]
    fn test_record_prepends() {
        let mut entries = Vec::new();
        InsertHistory::record(&mut entries, entry("first"));
        InsertHistory::record(&mut entries, entry("second"));

        assert_eq!(entries[0].template_id, "second");
        assert_eq!(entries[1].template_id, "first");
    }

    #[test]
    fn test_record_caps_length() {
        let mut entries = Vec::new();
        for i in 0..(HISTORY_CAP + 10) {
            InsertHistory::record(&mut entries, entry(&format!("t{}", i)));
        }
        assert_eq!(entries.len(), HISTORY_CAP);
        // Newest entry survives, oldest rolled off
        assert_eq!(entries[0].template_id, format!("t{}", HISTORY_CAP + 9));
    }

    #[test]
    fn test_save_in_then_load_in_round_trip() {
        let dir = std::env::temp_dir().join("pagecraft_history_round_trip");
        fs::remove_dir_all(&dir).ok();

        InsertHistory::save_in(&dir, &[entry("kept")]).unwrap();
        let loaded = InsertHistory::load_in(&dir);
        fs::remove_dir_all(&dir).ok();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].template_id, "kept");
    }

    #[test]
    fn test_load_in_without_file_is_empty() {
        let dir = std::env::temp_dir().join("pagecraft_history_missing");
        fs::remove_dir_all(&dir).ok();
        assert!(InsertHistory::load_in(&dir).is_empty());
    }
}
