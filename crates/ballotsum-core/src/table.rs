use std::collections::BTreeMap;

use arrow::array::{Scalar, StringArray};
use arrow::compute::{filter_record_batch, kernels::cmp};
use arrow::datatypes::SchemaRef;

use crate::errors::PipelineError;
use crate::types::Batches;

/// One loaded extract: an all-Utf8 schema plus the record batches read from
/// it. Immutable once loaded; filtering yields a new table over the same
/// schema, never an in-place mutation.
#[derive(Debug)]
pub struct BallotTable {
    schema: SchemaRef,
    batches: Batches,
}

impl BallotTable {
    pub(crate) fn new(schema: SchemaRef, batches: Batches) -> Self {
        Self { schema, batches }
    }

    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(|b| b.num_rows()).sum()
    }

    fn column_index(&self, name: &str) -> Result<usize, PipelineError> {
        self.schema
            .column_with_name(name)
            .map(|(idx, _)| idx)
            .ok_or_else(|| PipelineError::ColumnNotFound(name.to_string()))
    }

    /// Frequency breakdown of one column. BTreeMap keys give the
    /// category-name-ascending order the report wants. Null cells (from
    /// fully empty rows) count under the empty string.
    pub fn value_counts(&self, column: &str) -> Result<BTreeMap<String, u64>, PipelineError> {
        let idx = self.column_index(column)?;
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for batch in &self.batches {
            let values = batch
                .column(idx)
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| PipelineError::TypeCastError(column.to_string()))?;
            for value in values.iter() {
                *counts.entry(value.unwrap_or("").to_string()).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }

    /// Sub-table of rows where `column` equals `value` byte-for-byte.
    /// Row order among survivors is preserved from the source table.
    pub fn filter_eq(&self, column: &str, value: &str) -> Result<BallotTable, PipelineError> {
        let idx = self.column_index(column)?;
        let scalar = Scalar::new(StringArray::from(vec![value]));
        let mut filtered = Batches::with_capacity(self.batches.len());
        for batch in &self.batches {
            let mask = cmp::eq(batch.column(idx), &scalar)?;
            let kept = filter_record_batch(batch, &mask)?;
            if kept.num_rows() > 0 {
                filtered.push(kept);
            }
        }
        Ok(BallotTable::new(self.schema.clone(), filtered))
    }
}
