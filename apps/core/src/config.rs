use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_RESULT_CAP: u16 = 15;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "io error: {error}"),
            Self::Parse(error) => write!(f, "parse error: {error}"),
            Self::Invalid(error) => write!(f, "invalid config: {error}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub max_results: u16,
    pub all_keyword: String,
    pub files_keyword: String,
    pub files_ext_keyword: String,
    pub dirs_keyword: String,
    pub base_dir: String,
    pub ignore_folders: String,
    pub ignore_files: String,
    pub terminal_emulator: String,
    #[serde(skip)]
    pub config_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_RESULT_CAP,
            all_keyword: "fa".to_string(),
            files_keyword: "ff".to_string(),
            files_ext_keyword: "ffe".to_string(),
            dirs_keyword: "fd".to_string(),
            base_dir: default_base_dir(),
            ignore_folders: String::new(),
            ignore_files: String::new(),
            terminal_emulator: String::new(),
            config_path: default_config_path(),
        }
    }
}

impl Config {
    /// The host-facing preference surface seeded from this config. Keys match
    /// the launcher's preference ids so the same parser handles both sources.
    pub fn preference_map(&self) -> HashMap<String, String> {
        HashMap::from([
            ("fa_kw".to_string(), self.all_keyword.clone()),
            ("ff_kw".to_string(), self.files_keyword.clone()),
            ("ffe_kw".to_string(), self.files_ext_keyword.clone()),
            ("fd_kw".to_string(), self.dirs_keyword.clone()),
            ("base_dir".to_string(), self.base_dir.clone()),
            ("ignore_folders".to_string(), self.ignore_folders.clone()),
            ("ignore_files".to_string(), self.ignore_files.clone()),
            (
                "terminal_emulator".to_string(),
                self.terminal_emulator.clone(),
            ),
        ])
    }
}

pub fn validate(cfg: &Config) -> Result<(), String> {
    if cfg.max_results < 1 || cfg.max_results > 100 {
        return Err("max_results out of range".into());
    }

    if cfg.base_dir.trim().is_empty() {
        return Err("base_dir is required".into());
    }

    if cfg.config_path.as_os_str().is_empty() {
        return Err("config_path is required".into());
    }

    Ok(())
}

pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);

    let mut config = if config_path.exists() {
        let raw = fs::read_to_string(&config_path)?;
        toml::from_str::<Config>(&raw).map_err(|error| ConfigError::Parse(error.to_string()))?
    } else {
        Config::default()
    };

    config.config_path = config_path;
    validate(&config).map_err(ConfigError::Invalid)?;
    Ok(config)
}

pub fn save(config: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = config.config_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let raw =
        toml::to_string_pretty(config).map_err(|error| ConfigError::Parse(error.to_string()))?;
    fs::write(&config.config_path, raw)?;
    Ok(())
}

pub fn stable_app_data_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join("pathseek");
        }
    }

    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return PathBuf::from(home).join(".config").join("pathseek");
        }
    }

    std::env::temp_dir().join("pathseek")
}

fn default_config_path() -> PathBuf {
    stable_app_data_dir().join("config.toml")
}

fn default_base_dir() -> String {
    match std::env::var("HOME") {
        Ok(home) if !home.is_empty() => home,
        _ => "/".to_string(),
    }
}
