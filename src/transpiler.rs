//! SQL transpiler for standard records.
//!
//! Converts loaded records into MySQL statements. A standard row is
//! followed by a `SET @estandar_id = LAST_INSERT_ID();` so the evidence
//! rows after it can reference the id the database assigns.

use crate::record::{Record, RecordKind};
use tracing::debug;

/// Schema block emitted ahead of every insert.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS estandares (
    id INT AUTO_INCREMENT PRIMARY KEY,
    area VARCHAR(100),
    nivel VARCHAR(10),
    enunciado TEXT,
    ejemplo TEXT
);

CREATE TABLE IF NOT EXISTS evidencias (
    id INT AUTO_INCREMENT PRIMARY KEY,
    estandar_id INT,
    evidencia TEXT,
    FOREIGN KEY (estandar_id) REFERENCES estandares(id)
);
";

/// Session variable holding the last standard id.
pub const STANDARD_ID_VAR: &str = "@estandar_id";

/// Trait for converting statement nodes to SQL.
pub trait ToSql {
    /// Convert this node to a SQL string.
    fn to_sql(&self) -> String;
}

/// One generated statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'a> {
    InsertStandard {
        area: &'a str,
        level: &'a str,
        statement: &'a str,
        example: &'a str,
    },
    InsertExample(&'a str),
    CaptureId,
    InsertEvidence(&'a str),
}

impl ToSql for Statement<'_> {
    fn to_sql(&self) -> String {
        match self {
            Statement::InsertStandard {
                area,
                level,
                statement,
                example,
            } => format!(
                "INSERT INTO estandares (area, nivel, enunciado, ejemplo) VALUES ({}, {}, {}, {});",
                literal(area),
                literal(level),
                literal(statement),
                literal(example)
            ),
            Statement::InsertExample(example) => {
                format!("INSERT INTO estandares (ejemplo) VALUES ({});", literal(example))
            }
            Statement::CaptureId => format!("SET {} = LAST_INSERT_ID();", STANDARD_ID_VAR),
            Statement::InsertEvidence(evidence) => format!(
                "INSERT INTO evidencias (estandar_id, evidencia) VALUES ({}, {});",
                STANDARD_ID_VAR,
                literal(evidence)
            ),
        }
    }
}

/// Double every single quote so the text can sit inside a SQL literal.
pub fn escape(text: &str) -> String {
    text.replace('\'', "''")
}

fn literal(text: &str) -> String {
    format!("'{}'", escape(text))
}

impl Record {
    /// Statements for this record, in emission order.
    pub fn statements(&self) -> Vec<Statement<'_>> {
        match self.classify() {
            RecordKind::Standard => {
                let mut out = Vec::with_capacity(self.evidences.len() + 2);
                out.push(Statement::InsertStandard {
                    area: self.area.as_deref().unwrap_or_default(),
                    level: self.level.as_deref().unwrap_or_default(),
                    statement: self.statement.as_deref().unwrap_or_default(),
                    example: self.example.as_deref().unwrap_or_default(),
                });
                out.push(Statement::CaptureId);
                out.extend(self.evidences.iter().map(|e| Statement::InsertEvidence(e.as_str())));
                out
            }
            RecordKind::ExampleOnly => {
                vec![Statement::InsertExample(
                    self.example.as_deref().unwrap_or_default(),
                )]
            }
            RecordKind::Skipped => Vec::new(),
        }
    }
}

/// Per-run counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub standards: usize,
    pub examples: usize,
    pub evidences: usize,
    pub skipped: usize,
}

/// Output of [`generate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generated {
    pub statements: Vec<String>,
    pub summary: Summary,
}

/// Translate records into SQL, preserving input order.
pub fn generate(records: &[Record]) -> Generated {
    let mut out = Generated::default();

    for (index, record) in records.iter().enumerate() {
        match record.classify() {
            RecordKind::Standard => {
                out.summary.standards += 1;
                out.summary.evidences += record.evidences.len();
            }
            RecordKind::ExampleOnly => out.summary.examples += 1,
            RecordKind::Skipped => {
                out.summary.skipped += 1;
                debug!(index, "skipping record without area/nivel/enunciado or ejemplo");
                continue;
            }
        }
        out.statements
            .extend(record.statements().iter().map(ToSql::to_sql));
    }

    out
}
