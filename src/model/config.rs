use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from taskline.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where the task list is persisted
    #[serde(default = "default_tasks_file")]
    pub tasks_file: PathBuf,
    /// Log destination. No logger is installed when absent.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// One of off, error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tasks_file: default_tasks_file(),
            log_file: None,
            log_level: default_log_level(),
            ui: UiConfig::default(),
        }
    }
}

fn default_tasks_file() -> PathBuf {
    PathBuf::from("tasks.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Color overrides, keyed by theme slot name, as `#RRGGBB`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
