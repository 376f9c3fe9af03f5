pub mod aggregate;
pub mod errors;
pub mod pipeline;
pub mod reader;
pub mod report;
pub mod table;
pub mod types;
pub mod writer;

pub use aggregate::CountyAggregate;
pub use errors::PipelineError;
pub use pipeline::{PipelineConfig, RunSummary, SAMPLE_SIZE, run, run_with_rng};
pub use table::BallotTable;
