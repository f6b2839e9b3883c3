//! # dba-sql
//!
//! Converts a JSON document of learning standards into a MySQL script that
//! recreates them in two tables, `estandares` and `evidencias`.
//!
//! ## Quick Example
//!
//! ```
//! let sql = dba_sql::convert(r#"[{"ejemplo":"O'Brien's rule"}]"#).unwrap();
//! assert!(sql.ends_with("INSERT INTO estandares (ejemplo) VALUES ('O''Brien''s rule');"));
//! ```
//!
//! ## Emission rules
//!
//! | Record has                          | Emitted                                      |
//! |-------------------------------------|----------------------------------------------|
//! | `area`, `nivel`, `enunciado`        | standard insert, id capture, evidence inserts |
//! | only a non-empty `ejemplo`          | `ejemplo`-only insert                        |
//! | neither                             | nothing                                      |

pub mod config;
pub mod error;
pub mod record;
pub mod transpiler;
pub mod writer;

pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::*;
    pub use crate::record::{Record, RecordKind, load};
    pub use crate::transpiler::{Generated, Statement, Summary, ToSql, escape, generate};
    pub use crate::writer::{emit, render, write};
}

use error::{Error, Result};
use transpiler::Summary;

/// Convert a JSON document straight to the SQL script text.
pub fn convert(json: &str) -> Result<String> {
    let records = record::Record::parse_all(json).map_err(|e| Error::parse("<input>", e))?;
    Ok(writer::render(&transpiler::generate(&records).statements))
}

/// Run the whole pipeline for `config`: load, generate, write.
pub fn run(config: &config::Config) -> Result<Summary> {
    let (script, summary) = build(&config.input)?;
    writer::write(&config.output, &script)?;
    Ok(summary)
}

/// Load and generate without writing; returns the script text.
pub fn build(input: &std::path::Path) -> Result<(String, Summary)> {
    let records = record::load(input)?;
    let generated = transpiler::generate(&records);
    Ok((writer::render(&generated.statements), generated.summary))
}
