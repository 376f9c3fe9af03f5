use std::path::Path;

use ballotsum_core::RunSummary;

/// Console report channel. Sections come out in pipeline order: schema,
/// total rows, style breakdown, status breakdown, accepted count, sample.
pub struct StdOutFormatter {
    intro: String,
    intro_len: usize,
}

impl StdOutFormatter {
    pub fn new(version: String) -> Self {
        let s = format!("ballotsum v{} - Accepted Ballot Summary", version);
        let n = s.len();
        Self {
            intro: s,
            intro_len: n,
        }
    }

    pub fn print_intro(&self) {
        let rule = "=".repeat(self.intro_len);
        println!("{}", self.intro);
        println!("{}", rule);
    }

    pub fn print_loading(&self, path: &Path) {
        println!("Loading extract: {}", path.display());
    }

    pub fn print_summary(&self, summary: &RunSummary) {
        println!("\nExtract schema ({} columns):", summary.columns.len());
        print!("{}", summary.schema_report);

        println!(
            "\nTotal rows in the file (accepted, requested, contested, everything): {}",
            summary.total_rows
        );

        println!("\nBreakdown of ballot style (electronic, in-person and mail):");
        print!("{}", summary.style_report);

        println!("\nBreakdown of ballot status (accepted, rejected, spoiled etc):");
        print!("{}", summary.status_report);

        println!(
            "\nTotal accepted ballots so far, of all kinds: {}",
            summary.accepted_rows
        );

        println!("\nRandom 10-county sample of the summary being written:");
        print!("{}", summary.sample_report);
    }

    pub fn print_written(&self, path: &Path, counties: usize) {
        let rule = "=".repeat(self.intro_len);
        println!("\n{}", rule);
        println!("Wrote {} counties to {}", counties, path.display());
    }
}
