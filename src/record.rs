//! Input model and loader.
//!
//! The input is a JSON array of objects. Every field is optional and the
//! keys are the Spanish names used by the source document:
//!
//! | JSON key                     | Field       |
//! |------------------------------|-------------|
//! | `area`                       | `area`      |
//! | `nivel`                      | `level`     |
//! | `enunciado`                  | `statement` |
//! | `ejemplo`                    | `example`   |
//! | `evidencias_de_aprendizaje`  | `evidences` |

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;
use tracing::info;

/// One entry of the input document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default, rename = "nivel")]
    pub level: Option<String>,
    #[serde(default, rename = "enunciado")]
    pub statement: Option<String>,
    #[serde(default, rename = "ejemplo")]
    pub example: Option<String>,
    #[serde(
        default,
        rename = "evidencias_de_aprendizaje",
        deserialize_with = "null_as_empty"
    )]
    pub evidences: Vec<String>,
}

/// What the generator will do with a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Full standard row plus its evidences.
    Standard,
    /// Row carrying only the example column.
    ExampleOnly,
    /// Nothing is emitted.
    Skipped,
}

impl Record {
    /// Parse a whole document.
    pub fn parse_all(json: &str) -> serde_json::Result<Vec<Record>> {
        serde_json::from_str(json)
    }

    /// Decide which statements this record produces.
    ///
    /// A standard needs non-empty `area`, `level` and `statement`. Failing
    /// that, a non-empty `example` alone still yields a row.
    pub fn classify(&self) -> RecordKind {
        if filled(&self.area) && filled(&self.level) && filled(&self.statement) {
            RecordKind::Standard
        } else if filled(&self.example) {
            RecordKind::ExampleOnly
        } else {
            RecordKind::Skipped
        }
    }
}

fn filled(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.is_empty())
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read and parse the input document at `path`.
pub fn load(path: &Path) -> Result<Vec<Record>> {
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let records = Record::parse_all(&content).map_err(|e| Error::parse(path, e))?;
    info!(path = %path.display(), records = records.len(), "loaded input");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spanish_keys() {
        let records = Record::parse_all(
            r#"[{"area":"Math","nivel":"1","enunciado":"Adds","ejemplo":"2+2","evidencias_de_aprendizaje":["worksheet A"]}]"#,
        )
        .unwrap();
        assert_eq!(
            records,
            vec![Record {
                area: Some("Math".into()),
                level: Some("1".into()),
                statement: Some("Adds".into()),
                example: Some("2+2".into()),
                evidences: vec!["worksheet A".into()],
            }]
        );
    }

    #[test]
    fn test_missing_and_null_fields() {
        let records =
            Record::parse_all(r#"[{}, {"area":null,"evidencias_de_aprendizaje":null,"extra":1}]"#)
                .unwrap();
        assert_eq!(records, vec![Record::default(), Record::default()]);

        let records = Record::parse_all(
            r#"[{"area":"A","nivel":"1","enunciado":"S","evidencias_de_aprendizaje":null}]"#,
        )
        .unwrap();
        assert!(records[0].evidences.is_empty());
        assert_eq!(records[0].classify(), RecordKind::Standard);
        assert_eq!(
            crate::transpiler::generate(&records).statements,
            vec![
                "INSERT INTO estandares (area, nivel, enunciado, ejemplo) VALUES ('A', '1', 'S', '');",
                "SET @estandar_id = LAST_INSERT_ID();",
            ]
        );
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        assert!(Record::parse_all(r#"[{"nivel":1}]"#).is_err());
        assert!(Record::parse_all(r#"{"area":"X"}"#).is_err());
        assert!(Record::parse_all("not json").is_err());
    }

    #[test]
    fn test_classify() {
        let full = Record {
            area: Some("A".into()),
            level: Some("1".into()),
            statement: Some("S".into()),
            ..Default::default()
        };
        assert_eq!(full.classify(), RecordKind::Standard);

        let example = Record {
            area: Some("A".into()),
            level: Some("1".into()),
            example: Some("E".into()),
            ..Default::default()
        };
        assert_eq!(example.classify(), RecordKind::ExampleOnly);

        let empty_statement = Record {
            statement: Some(String::new()),
            ..full.clone()
        };
        assert_eq!(empty_statement.classify(), RecordKind::Skipped);

        let area_only = Record {
            area: Some("X".into()),
            ..Default::default()
        };
        assert_eq!(area_only.classify(), RecordKind::Skipped);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
