//! Configuration File Loading
//!
//! Handles loading and saving configuration files from the standard
//! locations, with TOML as the primary format and JSON as a fallback.
//! Load failures degrade to the default configuration at the call site;
//! this module only reports them.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::Config;
use crate::error::{Error, Result};

/// Environment variable that points at an explicit config file
const CONFIG_ENV_VAR: &str = "EXPRBOX_CONFIG";

/// Configuration file loader
pub struct ConfigLoader {
    /// Search paths for configuration files, in priority order
    search_paths: Vec<PathBuf>,
    /// Current configuration file path (if loaded)
    current_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Whether to fall back to the default config if none exists
    pub create_default: bool,
    /// Whether to validate the configuration after loading
    pub validate: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            create_default: true,
            validate: true,
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            search_paths: Self::search_paths(),
            current_path: None,
        }
    }

    /// Load configuration with default options
    ///
    /// Remembers the path the configuration came from, so a later
    /// [`save`](Self::save) writes back to the same file.
    pub fn load(&mut self) -> Result<Config> {
        self.load_with_options(LoadOptions::default())
    }

    /// Load configuration with custom options
    pub fn load_with_options(&mut self, options: LoadOptions) -> Result<Config> {
        if let Some((path, config)) = self.find_and_load_config()? {
            info!("Loaded configuration from {}", path.display());
            self.current_path = Some(path);
            if options.validate {
                config.validate()?;
            }
            return Ok(config);
        }

        if options.create_default {
            debug!("No configuration file found, using defaults");
            let config = Config::default();
            if options.validate {
                config.validate()?;
            }
            Ok(config)
        } else {
            Err(Error::ConfigNotFound)
        }
    }

    /// Load configuration from an explicit path
    ///
    /// On success the path becomes the loader's current path.
    pub fn load_from_path(&mut self, path: &Path) -> Result<Config> {
        let config = Self::read_from(path)?;
        self.current_path = Some(path.to_path_buf());
        Ok(config)
    }

    fn read_from(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(path, &content)
    }

    /// The path the current configuration was loaded from, if any
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Save configuration to the current path or the default location
    pub fn save(&self, config: &Config) -> Result<PathBuf> {
        let path = self
            .current_path
            .clone()
            .unwrap_or_else(Self::default_config_path);
        self.save_to_path(config, &path)?;
        Ok(path)
    }

    /// Save configuration to a specific path, format chosen by extension
    pub fn save_to_path(&self, config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::to_string_pretty(config).map_err(|e| {
                Error::ConfigSerializationFailed {
                    format: "JSON".to_string(),
                    reason: e.to_string(),
                }
            })?,
            _ => toml::to_string_pretty(config).map_err(|e| Error::ConfigSerializationFailed {
                format: "TOML".to_string(),
                reason: e.to_string(),
            })?,
        };

        fs::write(path, content).map_err(|e| Error::ConfigSaveFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// The path a fresh configuration is saved to
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("exprbox")
            .join("config.toml")
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Ok(explicit) = env::var(CONFIG_ENV_VAR) {
            paths.push(PathBuf::from(explicit));
        }
        paths.push(PathBuf::from("exprbox.toml"));
        if let Some(config_dir) = dirs::config_dir() {
            let base = config_dir.join("exprbox");
            paths.push(base.join("config.toml"));
            paths.push(base.join("config.json"));
        }
        paths
    }

    fn find_and_load_config(&self) -> Result<Option<(PathBuf, Config)>> {
        for path in &self.search_paths {
            if !path.is_file() {
                continue;
            }
            match Self::read_from(path) {
                Ok(config) => return Ok(Some((path.clone(), config))),
                Err(e) => {
                    warn!("Skipping unreadable config {}: {}", path.display(), e);
                }
            }
        }
        Ok(None)
    }

    fn parse(path: &Path, content: &str) -> Result<Config> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                serde_json::from_str(content).map_err(|e| Error::ConfigLoadFailed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })
            }
            _ => toml::from_str(content).map_err(|e| Error::ConfigLoadFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }
}
