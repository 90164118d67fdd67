use thiserror::Error;

/// Errors raised by the platform-free site state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("unknown page section `{0}`")]
    UnknownSection(String),
    #[error("unrecognised value `{value}` for preference `{key}`")]
    InvalidPreference { key: &'static str, value: String },
    #[error("preference storage failed: {0}")]
    Storage(String),
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    #[error("invalid config value `{value}` for `{key}`")]
    InvalidConfig { key: String, value: String },
}

pub type SiteResult<T> = Result<T, SiteError>;
