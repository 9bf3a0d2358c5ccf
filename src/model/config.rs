use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml (kept beside the task file)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show key hints in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Color overrides, role name → "#RRGGBB"
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.ui.show_key_hints);
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn parses_ui_overrides() {
        let config: Config = toml::from_str(
            r##"
[ui]
show_key_hints = false

[ui.colors]
background = "#101418"
highlight = "#3FB6A8"
"##,
        )
        .unwrap();
        assert!(!config.ui.show_key_hints);
        assert_eq!(
            config.ui.colors.get("background").map(String::as_str),
            Some("#101418")
        );
        assert_eq!(config.ui.colors.len(), 2);
    }
}
