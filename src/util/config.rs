//! Configuration file support for pkgscope.
//!
//! The user configuration lives at `<config dir>/config.toml` (for example
//! `~/.config/pkgscope/config.toml` on Linux). The `PKGSCOPE_CONFIG`
//! environment variable points at a different file.
//!
//! Every key is optional:
//!
//! ```toml
//! [display]
//! fallback-width = 80
//! gutter = 8
//! color = "auto"
//! ```

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

use crate::util::shell::ColorChoice;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "PKGSCOPE_CONFIG";

/// Terminal width assumed when it cannot be detected.
pub const DEFAULT_FALLBACK_WIDTH: usize = 80;

/// Columns reserved between the name column and the right edge.
pub const DEFAULT_GUTTER: usize = 8;

static PROJECT_DIRS: LazyLock<Option<ProjectDirs>> =
    LazyLock::new(|| ProjectDirs::from("dev", "pkgscope", "pkgscope"));

/// Error while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// pkgscope configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output layout settings
    pub display: DisplayConfig,
}

/// Output layout settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DisplayConfig {
    /// Width used when the terminal size is unknown
    pub fallback_width: usize,

    /// Columns reserved next to the script name column
    pub gutter: usize,

    /// Color preference; the `--color` flag takes precedence
    pub color: Option<ColorChoice>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            fallback_width: DEFAULT_FALLBACK_WIDTH,
            gutter: DEFAULT_GUTTER,
            color: None,
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration, falling back to defaults if the file doesn't exist.
    ///
    /// A file that exists but can't be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

/// Location of the user configuration file.
///
/// `PKGSCOPE_CONFIG` wins over the platform config directory.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    PROJECT_DIRS
        .as_ref()
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
