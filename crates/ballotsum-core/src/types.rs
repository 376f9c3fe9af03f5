pub type Batch = arrow::record_batch::RecordBatch;
pub type Batches = Vec<Batch>;

/// Column names as they appear in the Secretary of State extract.
/// Additional columns are carried through untouched and ignored.
pub const STYLE_COLUMN: &str = "Ballot Style";
pub const STATUS_COLUMN: &str = "Ballot Status";
pub const COUNTY_COLUMN: &str = "County";

/// Status code for an accepted ballot. The other codes in the extract are
/// `C` (cancelled), `R` (rejected) and `S` (spoiled); only `A` aggregates.
pub const ACCEPTED_STATUS: &str = "A";
