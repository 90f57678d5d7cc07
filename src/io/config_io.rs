use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Name of the optional config file looked up in the working directory
pub const CONFIG_FILE: &str = "taskline.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid log_level {level:?} in {path}: expected off, error, warn, info, debug or trace")]
    LogLevel { path: PathBuf, level: String },
}

/// Read `taskline.toml` from `dir`, falling back to defaults when absent.
///
/// A relative `tasks_file` or `log_file` is resolved against `dir`.
pub fn load_config(dir: &Path) -> Result<Config, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(ConfigError::Read { path, source: e }),
    };
    let mut config: Config =
        toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            source: e,
        })?;
    if config.log_level.parse::<log::LevelFilter>().is_err() {
        return Err(ConfigError::LogLevel {
            path,
            level: config.log_level,
        });
    }
    config.tasks_file = dir.join(&config.tasks_file);
    config.log_file = config.log_file.map(|p| dir.join(p));
    Ok(config)
}

/// Map a config `log_level` string onto a filter. `load_config` rejects
/// unknown names, so the Info fallback only covers hand-built configs.
pub fn parse_log_level(level: &str) -> log::LevelFilter {
    level.parse().unwrap_or(log::LevelFilter::Info)
}
