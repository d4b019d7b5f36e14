use thiserror::Error;

pub type Result<T> = std::result::Result<T, BugkingError>;

#[derive(Error, Debug)]
pub enum BugkingError {
    #[error("Invalid date '{input}': expected YYYY-MM-DD ({reason})")]
    InvalidDate { input: String, reason: String },
    #[error("Start date {0} is in the future")]
    FutureDate(chrono::NaiveDate),
    #[error("svn log failed for {range} (exit status {status}): {stderr}")]
    CommandFailed {
        range: String,
        status: String,
        stderr: String,
    },
    #[error("Failed to run svn: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("Malformed log block #{index}: {reason}")]
    MalformedBlock { index: usize, reason: String },
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
