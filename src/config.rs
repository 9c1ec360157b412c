//! Config module - Manages exporter configuration (config.toml).
//!
//! Configuration file contains:
//! - Apple Books container directory
//! - Explicit database paths (optional, override discovery)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory name of the Apple Books library databases.
pub const LIBRARY_SUBDIR: &str = "BKLibrary";

/// Directory name of the Apple Books annotation databases.
pub const ANNOTATION_SUBDIR: &str = "AEAnnotation";

/// Main exporter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Config version (for future migrations)
    #[serde(default = "default_version")]
    pub version: u32,

    /// Apple Books documents directory containing `BKLibrary/` and `AEAnnotation/`
    #[serde(default = "default_library_dir")]
    pub library_dir: PathBuf,

    /// Explicit path to a `BKLibrary*.sqlite` file
    #[serde(default)]
    pub library_db: Option<PathBuf>,

    /// Explicit path to an `AEAnnotation*.sqlite` file
    #[serde(default)]
    pub annotation_db: Option<PathBuf>,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            library_dir: default_library_dir(),
            library_db: None,
            annotation_db: None,
        }
    }
}

/// Get default Apple Books documents directory.
pub fn default_library_dir() -> PathBuf {
    dirs::home_dir()
        .map(|d| {
            d.join("Library")
                .join("Containers")
                .join("com.apple.iBooksX")
                .join("Data")
                .join("Documents")
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get default config directory (~/.config/ibooks-notes-exporter/).
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ibooks-notes-exporter"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get default config file path.
pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.toml")
}

impl Config {
    /// Create new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Cannot parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load config from default path, falling back to defaults when absent.
    pub fn load_default() -> Result<Self> {
        let path = default_config_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).with_context(|| "Cannot serialize config to TOML")?;

        std::fs::write(path, content)
            .with_context(|| format!("Cannot write config file: {}", path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    /// Directory scanned for `BKLibrary*.sqlite`.
    pub fn library_db_dir(&self) -> PathBuf {
        self.library_dir.join(LIBRARY_SUBDIR)
    }

    /// Directory scanned for `AEAnnotation*.sqlite`.
    pub fn annotation_db_dir(&self) -> PathBuf {
        self.library_dir.join(ANNOTATION_SUBDIR)
    }
}
