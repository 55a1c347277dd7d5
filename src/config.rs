use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LeadError, Result};
use crate::parser::markers::{Markers, DEFAULT_BULLETS, DEFAULT_HEADER_MARKER, DEFAULT_SECTION_LABEL};

/// Default directory name for leadnotes data.
const DATA_DIR: &str = ".leadnotes";
/// Default database filename.
const DB_FILE: &str = "store.db";
/// Config filename.
const CONFIG_FILE: &str = "config.toml";

/// Configuration resolved from the working directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the `.leadnotes/` directory.
    pub data_dir: PathBuf,
    /// Path to the `SQLite` store.
    pub db_path: PathBuf,
    /// Path to the config file.
    pub config_path: PathBuf,
    /// User settings loaded from config.toml.
    pub settings: UserSettings,
}

/// User-configurable settings from .leadnotes/config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Parser marker words.
    pub parser: ParserSettings,
    /// Output configuration.
    pub output: OutputSettings,
}

/// Locale-specific marker words for the notes parser.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    /// Keyword that opens a company block.
    pub header_marker: String,
    /// Label word whose lines are skipped.
    pub section_label: String,
    /// Characters that start a bullet line.
    pub bullets: Vec<char>,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            header_marker: DEFAULT_HEADER_MARKER.into(),
            section_label: DEFAULT_SECTION_LABEL.into(),
            bullets: DEFAULT_BULLETS.to_vec(),
        }
    }
}

/// Output-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Output format: "minified" (default) or "pretty".
    pub format: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: "minified".into(),
        }
    }
}

impl Config {
    /// Create config for a given working directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let data_dir = root.join(DATA_DIR);
        let db_path = data_dir.join(DB_FILE);
        let config_path = data_dir.join(CONFIG_FILE);

        let settings = Self::load_settings(&config_path).unwrap_or_default();

        Self {
            data_dir,
            db_path,
            config_path,
            settings,
        }
    }

    /// Create config from the current working directory.
    pub fn from_cwd() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| LeadError::Config(format!("cannot get cwd: {e}")))?;
        Ok(Self::new(cwd))
    }

    /// Load settings from config.toml if it exists.
    fn load_settings(config_path: &Path) -> Option<UserSettings> {
        if !config_path.exists() {
            return None;
        }
        let content = std::fs::read_to_string(config_path).ok()?;
        match toml::from_str(&content) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!(path = %config_path.display(), error = %e, "invalid config, using defaults");
                None
            }
        }
    }

    /// Save current settings to config.toml.
    pub fn save_settings(&self) -> Result<()> {
        self.ensure_data_dir()?;
        let content = toml::to_string_pretty(&self.settings)
            .map_err(|e| LeadError::Config(format!("failed to serialize settings: {e}")))?;
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }

    /// Ensure the `.leadnotes/` directory exists.
    pub fn ensure_data_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }

    /// Write config.toml with the current settings unless one already exists.
    ///
    /// Returns whether a new file was written.
    pub fn init_settings(&self) -> Result<bool> {
        if self.config_path.exists() {
            return Ok(false);
        }
        self.save_settings()?;
        tracing::info!(path = %self.config_path.display(), "wrote default config");
        Ok(true)
    }

    /// Parser markers built from the settings.
    #[must_use]
    pub fn markers(&self) -> Markers {
        let parser = &self.settings.parser;
        Markers::new(parser.header_marker.clone(), parser.section_label.clone())
            .with_bullets(parser.bullets.iter().copied())
    }

    /// Whether output should be pretty-printed.
    #[must_use]
    pub fn pretty_output(&self) -> bool {
        self.settings.output.format == "pretty"
    }
}
