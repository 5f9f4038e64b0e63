use regex::Regex;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;

/// Matches PRO-XXXX-XXXX-XXXX / EXP-XXXX-XXXX-XXXX license keys
static LICENSE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)(pro|exp)-[a-z0-9]{4}-[a-z0-9]{4}-[a-z0-9]{4}$").unwrap()
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub page_path: String,
    /// Extra catalog files (JSON or CSV) merged over the bundled catalog
    #[serde(default)]
    pub catalog_sources: Vec<String>,
    #[serde(default)]
    pub license: Option<License>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_path: "page.yml".to_string(),
            catalog_sources: Vec::new(),
            license: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".pagecraft"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Access tier granted by the stored license, 0 when none
    pub fn license_tier(&self) -> u8 {
        self.license.as_ref().map(|l| l.tier).unwrap_or(0)
    }
}

/// A validated license key and the access tier it unlocks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct License {
    pub key: String,
    pub tier: u8,
}

impl License {
    /// Parse a raw key, returning the license it grants
    ///
    /// `PRO-` keys unlock tier 1, `EXP-` keys tier 2. Anything else is
    /// rejected.
    pub fn parse(raw: &str) -> Result<License, String> {
        let key = raw.trim().to_uppercase();
        if !LICENSE_KEY.is_match(&key) {
            return Err("Invalid key format, expected PRO-XXXX-XXXX-XXXX or EXP-XXXX-XXXX-XXXX".to_string());
        }

        let tier = if key.starts_with("EXP-") { 2 } else { 1 };
        Ok(License { key, tier })
    }

    pub fn tier_name(&self) -> &'static str {
        match self.tier {
            2 => "Expert",
            _ => "Pro",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pro_key() {
        let license = License::parse("pro-ab12-cd34-ef56").unwrap();
        assert_eq!(license.tier, 1);
        assert_eq!(license.key, "PRO-AB12-CD34-EF56");
        assert_eq!(license.tier_name(), "Pro");
    }

    #[test]
    fn test_parse_expert_key() {
        let license = License::parse("  EXP-0000-1111-2222 ").unwrap();
        assert_eq!(license.tier, 2);
        assert_eq!(license.tier_name(), "Expert");
    }

    #[test]
    fn test_parse_rejects_malformed_keys() {
        assert!(License::parse("").is_err());
        assert!(License::parse("PRO-ABCD").is_err());
        assert!(License::parse("FREE-AB12-CD34-EF56").is_err());
        assert!(License::parse("PRO-AB12-CD34-EF5").is_err());
    }

    #[test]
    fn test_license_tier_defaults_to_zero() {
        let config = Config::default();
        assert_eq!(config.license_tier(), 0);
    }
}
