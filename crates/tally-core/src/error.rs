//! Error types for Tally

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// No usable amount in the input; also covers an amount of exactly zero
    #[error("Could not parse expense. Try: \"$25 for lunch\" or \"coffee $5\"")]
    NoAmountFound,

    #[error("Nothing to add: input is empty")]
    EmptyInput,

    #[error("Another expense is still being processed")]
    Busy,

    #[error("Voice input not supported: {0}")]
    VoiceUnavailable(String),

    #[error("Voice recognition failed: {0}")]
    VoiceCapture(String),

    #[error("Duplicate transaction id: {0}")]
    DuplicateId(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl Error {
    /// Whether this error is a rejection of user input rather than a fault
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::NoAmountFound
                | Error::EmptyInput
                | Error::Busy
                | Error::VoiceUnavailable(_)
                | Error::VoiceCapture(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
