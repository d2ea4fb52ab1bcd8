use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from `<data-dir>/config.toml`. Every field has a default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show the key hint line in the TUI status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Ask before deleting folders, lists and tasks in the TUI
    #[serde(default = "default_true")]
    pub confirm_deletes: bool,
    /// Hex color overrides keyed by theme slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            confirm_deletes: true,
            colors: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.ui.show_key_hints);
        assert!(config.ui.confirm_deletes);
        assert!(config.ui.colors.is_empty());
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let config: Config = toml::from_str(
            r##"
[ui]
confirm_deletes = false

[ui.colors]
highlight = "#112233"
"##,
        )
        .unwrap();
        assert!(!config.ui.confirm_deletes);
        assert!(config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#112233");
        assert_eq!(config.log.level, "info");
    }
}
