//! Batch classification of an AI system inventory exported as CSV.
//!
//! Each row passes through the same input normalization as an HTTP request, so a
//! malformed row is reported on its own without failing the rest of the file.

use crate::classification::input::{SYSTEM_NAME_FIELD, SYSTEM_PURPOSE_FIELD};
use crate::classification::{assess_payload, AttributeKey, ClassificationResult, ValidationError};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum InventoryError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingColumn(&'static str),
}

impl std::fmt::Display for InventoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InventoryError::Io(err) => write!(f, "failed to read inventory: {}", err),
            InventoryError::Csv(err) => write!(f, "invalid inventory CSV data: {}", err),
            InventoryError::MissingColumn(column) => {
                write!(f, "inventory CSV is missing the '{}' column", column)
            }
        }
    }
}

impl std::error::Error for InventoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InventoryError::Io(err) => Some(err),
            InventoryError::Csv(err) => Some(err),
            InventoryError::MissingColumn(_) => None,
        }
    }
}

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for InventoryError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Classification outcome for one inventory row.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryEntry {
    /// 1-based line number in the source file.
    pub line: u64,
    pub system_name: String,
    pub outcome: Result<ClassificationResult, ValidationError>,
}

pub struct InventoryImporter;

impl InventoryImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<InventoryEntry>, InventoryError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<InventoryEntry>, InventoryError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for required in [SYSTEM_NAME_FIELD, SYSTEM_PURPOSE_FIELD] {
            if !headers.iter().any(|header| header == required) {
                return Err(InventoryError::MissingColumn(required));
            }
        }

        let mut entries = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map(|pos| pos.line()).unwrap_or_default();
            let payload = row_payload(&headers, &record);
            let system_name = payload
                .get(SYSTEM_NAME_FIELD)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();

            entries.push(InventoryEntry {
                line,
                system_name,
                outcome: assess_payload(&Value::Object(payload)),
            });
        }

        Ok(entries)
    }
}

fn row_payload(headers: &csv::StringRecord, record: &csv::StringRecord) -> Map<String, Value> {
    let mut payload = Map::new();

    for (header, cell) in headers.iter().zip(record.iter()) {
        if cell.is_empty() {
            continue;
        }

        let value = if AttributeKey::from_wire_name(header).is_some() {
            parse_answer(cell)
                .map(Value::Bool)
                .unwrap_or_else(|| Value::String(cell.to_string()))
        } else {
            Value::String(cell.to_string())
        };
        payload.insert(header.to_string(), value);
    }

    payload
}

fn parse_answer(cell: &str) -> Option<bool> {
    match cell.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_yes_no_variants() {
        for yes in ["true", "Yes", "Y", "1", "TRUE"] {
            assert_eq!(parse_answer(yes), Some(true), "{yes}");
        }
        for no in ["false", "No", "n", "0"] {
            assert_eq!(parse_answer(no), Some(false), "{no}");
        }
        assert_eq!(parse_answer("maybe"), None);
    }

    #[test]
    fn empty_cells_are_left_out_of_the_payload() {
        let headers = csv::StringRecord::from(vec!["systemName", "usedInJustice", "owner"]);
        let record = csv::StringRecord::from(vec!["Court Helper", "", "legal-team"]);

        let payload = row_payload(&headers, &record);

        assert_eq!(payload.get("systemName"), Some(&Value::from("Court Helper")));
        assert!(payload.get("usedInJustice").is_none());
        assert_eq!(payload.get("owner"), Some(&Value::from("legal-team")));
    }
}
