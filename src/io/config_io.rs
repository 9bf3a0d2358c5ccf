use std::fs;
use std::path::Path;

use crate::model::config::Config;

/// Read `config.toml` from the store directory.
///
/// Absent or malformed config falls back to defaults; configuration is never
/// a fatal concern, same as the task file itself.
pub fn read_config(store_dir: &Path) -> Config {
    let path = store_dir.join("config.toml");
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return Config::default(),
    };
    toml::from_str(&content).unwrap_or_default()
}
