// Optional per-bank settings, read from <base>/.padcomb.json.
// It sits next to the pattern folders, not inside one, so it never looks like a pattern.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CombError, Result};
use crate::shared::CONFIG_FILE;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankConfig {
    pub patterns: Vec<String>,   // allow-list, empty = every pattern
    pub out_dir: Option<String>, // output root, relative to the working dir
}

fn config_file_path(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

// Missing file -> defaults. A file that's there but broken is an error.
pub fn load_config(base: &Path) -> Result<BankConfig> {
    let path = config_file_path(base);
    let data = match std::fs::read_to_string(&path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BankConfig::default()),
        Err(e) => return Err(CombError::io("read config", &path, e)),
    };
    let config = serde_json::from_str(&data).map_err(|e| CombError::Config {
        path: path.clone(),
        reason: format!("invalid config: {e}"),
    })?;
    log::info!("loaded {}", path.display());
    Ok(config)
}

pub fn save_config(base: &Path, config: &BankConfig) -> Result<()> {
    let path = config_file_path(base);
    let json = serde_json::to_string_pretty(config).map_err(|e| CombError::Config {
        path: path.clone(),
        reason: format!("serialize config: {e}"),
    })?;
    std::fs::write(&path, json).map_err(|e| CombError::io("write config", &path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_default() {
        let dir = TempDir::new().unwrap();
        assert_eq!(load_config(dir.path()).unwrap(), BankConfig::default());
    }

    #[test]
    fn test_saved_config_loads_back() {
        let dir = TempDir::new().unwrap();
        let config = BankConfig { patterns: vec!["P1".into(), "P3".into()], out_dir: Some("renders".into()) };
        save_config(dir.path(), &config).unwrap();
        assert_eq!(load_config(dir.path()).unwrap(), config);
    }

    #[test]
    fn test_partial_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), r#"{ "patterns": ["P2"] }"#).unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.patterns, ["P2"]);
        assert_eq!(config.out_dir, None);
    }

    #[test]
    fn test_broken_config_is_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{ patterns: ").unwrap();
        assert!(matches!(load_config(dir.path()), Err(CombError::Config { .. })));
    }
}
