use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("extract path must not be empty")]
    EmptyExtractPath,
    #[error("invalid extract date '{date}': expected YYYY-MM-DD")]
    BadDate { date: String },
}
