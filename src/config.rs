//! Input/output path configuration.
//!
//! Paths come from, in order of precedence: command line, `dba-sql.toml`,
//! built-in defaults. Relative paths in a config file are taken from the
//! file's own directory; command-line paths from the current directory.
//!
//! ```toml
//! input = "logica_dba.json"
//! output = "logica_dba.sql"
//! ```

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "logica_dba.json";
pub const DEFAULT_OUTPUT: &str = "logica_dba.sql";
pub const CONFIG_FILE: &str = "dba-sql.toml";

/// Resolved paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Contents of a config file. Missing keys fall back to defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl Config {
    /// Parse TOML config text on top of the defaults.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: FileConfig =
            toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        let defaults = Self::default();
        Ok(Self {
            input: file.input.unwrap_or(defaults.input),
            output: file.output.unwrap_or(defaults.output),
        })
    }

    /// Load config from `path`, which must exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml(&content)?;
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => Ok(Self {
                input: dir.join(config.input),
                output: dir.join(config.output),
            }),
            _ => Ok(config),
        }
    }

    /// Load `dba-sql.toml` from `dir` if present, else the defaults.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        if let Some(input) = input {
            self.input = input;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self
    }
}
