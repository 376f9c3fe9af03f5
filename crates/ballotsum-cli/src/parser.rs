use std::path::PathBuf;

use ballotsum_core::PipelineConfig;
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::errors::ConfigError;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub extract: Extract,
    #[serde(default)]
    pub output: Output,
}

#[derive(Debug, Deserialize)]
pub struct Extract {
    /// Extract location, e.g. `input/36269/STATEWIDE.csv`
    pub path: String,
    /// Date the extract was downloaded, `YYYY-MM-DD`. The portal publishes
    /// a fresh file every day, so this defaults to today.
    pub date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Output {
    pub path: Option<String>,
    pub header: Option<String>,
}

/// Turn the TOML configuration into a run configuration. The extract date
/// is baked into both the default output filename and the count-column
/// header so different days' summaries don't get mixed up.
pub fn resolve(config: &Config) -> Result<PipelineConfig, ConfigError> {
    if config.extract.path.trim().is_empty() {
        return Err(ConfigError::EmptyExtractPath);
    }

    let date = match &config.extract.date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| ConfigError::BadDate { date: raw.clone() })?,
        None => Local::now().date_naive(),
    };
    let stamp = date.format("%Y%m%d");

    let out_path = config
        .output
        .path
        .clone()
        .unwrap_or_else(|| format!("output/{stamp}_accepted_summary.csv"));
    let out_header = config
        .output
        .header
        .clone()
        .unwrap_or_else(|| format!("{stamp}_accepted"));

    Ok(PipelineConfig {
        in_path: PathBuf::from(&config.extract.path),
        out_path: PathBuf::from(out_path),
        out_header,
    })
}
