use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "QUEST_DIR";

/// Error type for configuration and data-directory resolution
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("no data directory: pass -C <dir> or set QUEST_DIR")]
    NoDataDir,
}

/// Pick the data directory: explicit flag, then `QUEST_DIR`, then the
/// platform data directory.
pub fn resolve_data_dir(flag: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::data_dir()
        .map(|d| d.join("quest"))
        .ok_or(ConfigError::NoDataDir)
}

pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

/// Read `config.toml` from the data directory. A missing file means defaults.
pub fn read_config(data_dir: &Path) -> Result<Config, ConfigError> {
    let path = config_path(data_dir);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(ConfigError::ReadError { path, source: e }),
    };
    Ok(toml::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_is_default() {
        let tmp = TempDir::new().unwrap();
        let config = read_config(tmp.path()).unwrap();
        assert!(config.ui.confirm_deletes);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn reads_config_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            config_path(tmp.path()),
            "[ui]\nshow_key_hints = false\n\n[log]\nlevel = \"debug\"\n",
        )
        .unwrap();
        let config = read_config(tmp.path()).unwrap();
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn malformed_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(config_path(tmp.path()), "[ui\nshow_key_hints = ").unwrap();
        assert!(matches!(
            read_config(tmp.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn flag_wins_over_everything() {
        let dir = resolve_data_dir(Some(Path::new("/tmp/quest-flag"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/quest-flag"));
    }
}
