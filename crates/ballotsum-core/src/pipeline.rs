use std::collections::BTreeMap;
use std::path::PathBuf;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::aggregate::CountyAggregate;
use crate::errors::PipelineError;
use crate::types::{ACCEPTED_STATUS, COUNTY_COLUMN, STATUS_COLUMN, STYLE_COLUMN};
use crate::{reader, writer};

/// Number of aggregate entries drawn for the console sample. Fewer distinct
/// counties than this aborts the run; see `CountyAggregate::sample`.
pub const SAMPLE_SIZE: usize = 10;

/// The three knobs of a run, passed in explicitly — no module-level state
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Source extract, e.g. `input/36269/STATEWIDE.csv`
    pub in_path: PathBuf,
    /// Summary destination, e.g. `output/20221026_accepted_summary.csv`
    pub out_path: PathBuf,
    /// Header for the output's count column, e.g. `20221026_accepted`
    pub out_header: String,
}

/// Everything a run observed, for the console report and for tests
#[derive(Debug)]
pub struct RunSummary {
    /// (column name, declared type) per extract column
    pub columns: Vec<(String, String)>,
    /// Rows in the extract: accepted, requested, contested, everything
    pub total_rows: usize,
    pub style_counts: BTreeMap<String, u64>,
    pub status_counts: BTreeMap<String, u64>,
    /// Rows surviving the `Ballot Status == "A"` filter
    pub accepted_rows: usize,
    /// Distinct counties in the aggregate
    pub county_count: usize,
    /// Random sample of (county, accepted count), in draw order
    pub sample: Vec<(String, u64)>,
    /// Rendered report sections, in emission order
    pub schema_report: String,
    pub style_report: String,
    pub status_report: String,
    pub sample_report: String,
}

/// Run the whole pipeline: load, describe, filter, aggregate, sample,
/// persist. Entropy-seeded sampling; tests use [`run_with_rng`].
pub fn run(config: &PipelineConfig) -> Result<RunSummary, PipelineError> {
    run_with_rng(config, &mut StdRng::from_entropy())
}

/// Same as [`run`], with the sample RNG supplied by the caller.
///
/// Steps execute strictly in order and the first failure aborts the run, so
/// an extract with fewer than [`SAMPLE_SIZE`] counties errors before the
/// summary file is touched.
pub fn run_with_rng<R: Rng>(
    config: &PipelineConfig,
    rng: &mut R,
) -> Result<RunSummary, PipelineError> {
    let table = reader::read_table(&config.in_path)?;

    let columns = table
        .schema()
        .fields()
        .iter()
        .map(|field| (field.name().clone(), field.data_type().to_string()))
        .collect();
    let total_rows = table.num_rows();
    let style_counts = table.value_counts(STYLE_COLUMN)?;
    let status_counts = table.value_counts(STATUS_COLUMN)?;

    let accepted = table.filter_eq(STATUS_COLUMN, ACCEPTED_STATUS)?;
    let accepted_rows = accepted.num_rows();

    let aggregate = CountyAggregate::from_table(&accepted, COUNTY_COLUMN)?;
    let sample = aggregate.sample(SAMPLE_SIZE, rng)?;

    writer::write_summary(&config.out_path, &aggregate, &config.out_header)?;

    Ok(RunSummary {
        schema_report: crate::report::schema_table(&table),
        style_report: crate::report::breakdown_table(STYLE_COLUMN, &style_counts),
        status_report: crate::report::breakdown_table(STATUS_COLUMN, &status_counts),
        sample_report: crate::report::sample_table(&sample),
        columns,
        total_rows,
        style_counts,
        status_counts,
        accepted_rows,
        county_count: aggregate.len(),
        sample,
    })
}
