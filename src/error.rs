//! Error types for dba-sql.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the conversion pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The input document could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input document is not a JSON array of standard records.
    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The SQL script could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Attach a path to a JSON error.
    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for dba-sql operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_names_path() {
        let err = Error::Read {
            path: PathBuf::from("logica_dba.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "cannot read logica_dba.json: not found");
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::Config("unknown key".into());
        assert_eq!(err.to_string(), "Configuration error: unknown key");
    }
}
