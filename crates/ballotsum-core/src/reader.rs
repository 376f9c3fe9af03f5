use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use arrow::csv::ReaderBuilder;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::error::ArrowError;

use crate::errors::PipelineError;
use crate::table::BallotTable;
use crate::types::Batches;

const BATCH_SIZE: usize = 128 * 1024;

/// Load a delimited extract into an all-text table.
///
/// Every column is read as nullable Utf8: most fields are only displayed or
/// grouped, so no type inference is wanted. The raw bytes are lossy-decoded
/// first — the extract carries accented names the portal does not always
/// encode cleanly, and since names are counted rather than displayed, a
/// replacement character in them is harmless.
pub fn read_table(path: &Path) -> Result<BallotTable, PipelineError> {
    if !path.is_file() {
        return Err(PipelineError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = fs::read(path)?;
    let content = String::from_utf8_lossy(&raw);

    let schema = Arc::new(header_schema(&content, path)?);

    let cursor = Cursor::new(content.as_bytes());
    let reader = ReaderBuilder::new(schema.clone())
        .with_header(true)
        .with_batch_size(BATCH_SIZE)
        .with_quote(b'"')
        .with_delimiter(b',')
        .build(cursor)
        .map_err(|source| PipelineError::MalformedTable {
            path: path.to_path_buf(),
            source,
        })?;

    let batches = reader
        .collect::<Result<Batches, _>>()
        .map_err(|source| PipelineError::MalformedTable {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(BallotTable::new(schema, batches))
}

/// Generate a Utf8 schema from the extract's header row
fn header_schema(content: &str, path: &Path) -> Result<Schema, PipelineError> {
    let header = content
        .lines()
        .next()
        .filter(|line| !line.trim().is_empty())
        .ok_or_else(|| PipelineError::MalformedTable {
            path: path.to_path_buf(),
            source: ArrowError::CsvError("file has no header row".to_string()),
        })?;

    let fields: Vec<Field> = header
        .trim_start_matches('\u{feff}')
        .split(',')
        .map(|name| Field::new(clean_header(name), DataType::Utf8, true))
        .collect();

    Ok(Schema::new(fields))
}

/// Trim whitespace + strip outer quotes if present
fn clean_header(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}
