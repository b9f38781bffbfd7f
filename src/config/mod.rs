use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_rollup_weeks")]
    pub rollup_weeks: usize,
    #[serde(default)]
    pub show_weekday: bool,
}

fn default_log_file() -> String {
    "training_log.csv".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_rollup_weeks() -> usize {
    8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::config_dir().to_string_lossy().to_string(),
            log_file: default_log_file(),
            separator_char: default_separator_char(),
            rollup_weeks: default_rollup_weeks(),
            show_weekday: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("trainlog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".trainlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("trainlog.conf")
    }

    /// Resolved base directory of the training data
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    /// Load configuration from file, or return defaults if not found.
    /// A config file that exists but cannot be read or parsed is an error.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write this configuration to the config file (creating its directory).
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    /// Initialize the configuration file, pointing at `custom_dir` when given.
    /// In test mode the config file is left untouched.
    pub fn init_all(custom_dir: Option<&str>, is_test: bool) -> AppResult<Self> {
        let mut config = if is_test {
            Config::default()
        } else {
            Self::load().unwrap_or_default()
        };

        if let Some(dir) = custom_dir {
            config.data_dir = dir.to_string();
        }

        if !is_test {
            config.save()?;
        }

        Ok(config)
    }
}
