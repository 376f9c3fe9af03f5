use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{StringArray, UInt64Array};
use arrow::csv::WriterBuilder;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use crate::aggregate::CountyAggregate;
use crate::errors::PipelineError;

/// Persist the full aggregate as a two-column CSV: county name, accepted
/// count. The count column's header carries the configured label (the
/// extract date is baked into it so different days' files don't get mixed
/// up). Rows come out county-name-ascending, values quoted only when the
/// delimiter forces it.
pub fn write_summary(
    path: &Path,
    aggregate: &CountyAggregate,
    count_header: &str,
) -> Result<(), PipelineError> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("County", DataType::Utf8, false),
        Field::new(count_header, DataType::UInt64, false),
    ]));

    let counties = StringArray::from_iter_values(aggregate.iter().map(|(county, _)| county));
    let counts = UInt64Array::from_iter_values(aggregate.iter().map(|(_, count)| count));
    let batch = RecordBatch::try_new(schema, vec![Arc::new(counties), Arc::new(counts)])?;

    let file = File::create(path).map_err(|source| PipelineError::OutputWriteError {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = WriterBuilder::new().with_header(true).build(file);
    writer
        .write(&batch)
        .map_err(|source| PipelineError::OutputWriteError {
            path: path.to_path_buf(),
            source: io::Error::other(source),
        })?;

    Ok(())
}
