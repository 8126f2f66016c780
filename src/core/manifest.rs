//! `package.json` parsing.
//!
//! Only the fields the report uses are modeled. Unknown fields are ignored,
//! and the `scripts` object keeps the key order of the file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// File name that marks a project root.
pub const MANIFEST_FILE: &str = "package.json";

/// Error while loading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("script `{name}` in {} is not a string", path.display())]
    ScriptNotString { path: PathBuf, name: String },
}

/// A named command from the `scripts` object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub name: String,
    pub command: String,
}

impl Script {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Script {
            name: name.into(),
            command: command.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    version: Option<Value>,
    #[serde(default)]
    scripts: Option<Map<String, Value>>,
}

/// Parsed `package.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    name: Option<String>,
    version: Option<String>,
    scripts: Vec<Script>,
}

impl Manifest {
    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    /// Parse manifest text. `path` is only used for error messages.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ManifestError> {
        let raw: RawManifest =
            serde_json::from_str(contents).map_err(|source| ManifestError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut scripts = Vec::new();
        for (name, value) in raw.scripts.unwrap_or_default() {
            match value {
                Value::String(command) => scripts.push(Script { name, command }),
                _ => {
                    return Err(ManifestError::ScriptNotString {
                        path: path.to_path_buf(),
                        name,
                    })
                }
            }
        }

        let name = string_field(raw.name);
        let version = string_field(raw.version);

        tracing::debug!(
            name = name.as_deref().unwrap_or("<unnamed>"),
            scripts = scripts.len(),
            "parsed {}",
            path.display()
        );

        Ok(Manifest {
            name,
            version,
            scripts,
        })
    }

    /// The `name` field, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The `version` field, if any.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Scripts in file order. Empty when `scripts` is absent or `{}`.
    pub fn scripts(&self) -> &[Script] {
        &self.scripts
    }
}

/// Informational fields are kept only when they are strings.
fn string_field(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}
