//! prefill - Turns a tutoring intake form into a prefilled scheduling-widget URL
//!
//! The pipeline runs answers -> summary -> prefill -> URL, each step pure.

pub mod answers;
pub mod cli;
pub mod config;
pub mod pipeline;

use thiserror::Error;

/// Main error type for prefill
#[derive(Error, Debug)]
pub enum PrefillError {
    #[error("Malformed base URL '{url}': {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid subject pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Clip limit {limit} is outside 1..={max}")]
    ClipLimit { limit: usize, max: usize },

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, PrefillError>;

/// Application name
pub const APP_NAME: &str = "prefill";
