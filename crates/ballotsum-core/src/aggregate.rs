use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::errors::PipelineError;
use crate::table::BallotTable;

/// Accepted-ballot counts keyed by county name, exactly as spelled in the
/// extract — no normalization, so case or spelling variants are distinct
/// counties. Sparse: a county with no accepted rows is simply absent.
/// BTreeMap ordering gives the name-ascending order the output file wants.
pub struct CountyAggregate {
    counts: BTreeMap<String, u64>,
}

impl CountyAggregate {
    /// Group `table` by `key` and count the rows sharing each value
    pub fn from_table(table: &BallotTable, key: &str) -> Result<Self, PipelineError> {
        Ok(Self {
            counts: table.value_counts(key)?,
        })
    }

    /// Number of distinct counties in the aggregate
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all per-county counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries in county-name-ascending order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(county, count)| (county.as_str(), *count))
    }

    /// Pick `amount` entries uniformly at random without replacement.
    ///
    /// Fewer distinct counties than `amount` is a hard error, matching the
    /// established run behavior for thin extracts.
    pub fn sample<R: Rng>(
        &self,
        amount: usize,
        rng: &mut R,
    ) -> Result<Vec<(String, u64)>, PipelineError> {
        if self.counts.len() < amount {
            return Err(PipelineError::InsufficientSampleSize {
                available: self.counts.len(),
                requested: amount,
            });
        }
        let entries: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(county, count)| (county.clone(), *count))
            .collect();
        Ok(entries.choose_multiple(rng, amount).cloned().collect())
    }
}

impl FromIterator<(String, u64)> for CountyAggregate {
    fn from_iter<T: IntoIterator<Item = (String, u64)>>(iter: T) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn aggregate_of(entries: &[(&str, u64)]) -> CountyAggregate {
        entries
            .iter()
            .map(|(county, count)| (county.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_total_and_order() {
        let agg = aggregate_of(&[("Fulton", 3), ("Cobb", 2)]);
        assert_eq!(agg.total(), 5);
        assert_eq!(agg.len(), 2);
        let names: Vec<&str> = agg.iter().map(|(county, _)| county).collect();
        assert_eq!(names, ["Cobb", "Fulton"]);
    }

    #[test]
    fn test_sample_without_replacement() {
        let entries: Vec<(String, u64)> =
            (0..26).map(|i| (format!("County{i:02}"), i)).collect();
        let agg: CountyAggregate = entries.into_iter().collect();
        let mut rng = StdRng::seed_from_u64(42);
        let sample = agg.sample(10, &mut rng).unwrap();
        assert_eq!(sample.len(), 10);
        let mut names: Vec<&String> = sample.iter().map(|(county, _)| county).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn test_sample_insufficient_counties() {
        let agg = aggregate_of(&[("Fulton", 3), ("Cobb", 2)]);
        let mut rng = StdRng::seed_from_u64(42);
        let err = agg.sample(10, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::InsufficientSampleSize {
                available: 2,
                requested: 10,
            }
        ));
    }

    #[test]
    fn test_empty_aggregate_cannot_be_sampled() {
        let agg = aggregate_of(&[]);
        assert!(agg.is_empty());
        let mut rng = StdRng::seed_from_u64(7);
        assert!(agg.sample(10, &mut rng).is_err());
    }
}
