//! Script assembly and output.

use crate::error::{Error, Result};
use crate::transpiler::SCHEMA;
use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

/// Join the schema block and the statements with newlines.
///
/// No newline follows the last statement.
pub fn render<S: AsRef<str>>(statements: &[S]) -> String {
    let mut script = String::from(SCHEMA);
    for stmt in statements {
        script.push('\n');
        script.push_str(stmt.as_ref());
    }
    script
}

/// Write the script to `path`, replacing any previous content.
pub fn write(path: &Path, script: &str) -> Result<()> {
    fs::write(path, script).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = script.len(), "wrote script");
    Ok(())
}

/// Stream the script to `out` exactly as [`write`] would store it.
pub fn emit(out: &mut impl io::Write, script: &str) -> io::Result<()> {
    out.write_all(script.as_bytes())?;
    out.flush()
}
