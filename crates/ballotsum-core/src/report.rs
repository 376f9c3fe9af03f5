use std::collections::BTreeMap;

use prettytable::{Cell, Row, Table};

use crate::table::BallotTable;

/// Render the schema summary: one row per column with its declared type.
/// Every column loads as Utf8, so the type column mostly confirms that no
/// inference sneaked in.
pub fn schema_table(table: &BallotTable) -> String {
    let mut out = Table::new();
    out.add_row(Row::new(vec![Cell::new("Column"), Cell::new("Type")]));
    for field in table.schema().fields() {
        out.add_row(Row::new(vec![
            Cell::new(field.name()),
            Cell::new(&field.data_type().to_string()),
        ]));
    }
    out.to_string()
}

/// Render a frequency breakdown. BTreeMap iteration supplies the
/// category-name-ascending order.
pub fn breakdown_table(label: &str, counts: &BTreeMap<String, u64>) -> String {
    let mut out = Table::new();
    out.add_row(Row::new(vec![Cell::new(label), Cell::new("Count")]));
    for (category, count) in counts {
        out.add_row(Row::new(vec![
            Cell::new(category),
            Cell::new(&count.to_string()),
        ]));
    }
    out.to_string()
}

/// Render the random county sample in the order it was drawn
pub fn sample_table(sample: &[(String, u64)]) -> String {
    let mut out = Table::new();
    out.add_row(Row::new(vec![Cell::new("County"), Cell::new("Accepted")]));
    for (county, count) in sample {
        out.add_row(Row::new(vec![
            Cell::new(county),
            Cell::new(&count.to_string()),
        ]));
    }
    out.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_table_lists_categories_in_order() {
        let mut counts = BTreeMap::new();
        counts.insert("Mailed".to_string(), 7u64);
        counts.insert("Electronic".to_string(), 1u64);
        let rendered = breakdown_table("Ballot Style", &counts);
        let electronic = rendered.find("Electronic").unwrap();
        let mailed = rendered.find("Mailed").unwrap();
        assert!(electronic < mailed);
        assert!(rendered.contains('7'));
    }
}
