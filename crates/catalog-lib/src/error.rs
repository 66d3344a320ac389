use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{record} is missing required field `{field}`")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },
    #[error("{record} field `{field}` is invalid: {reason}")]
    InvalidField {
        record: &'static str,
        field: &'static str,
        reason: String,
    },
    #[error("invalid custom title pattern: {0}")]
    InvalidPattern(String),
    #[error("invalid preference `{name}`: {reason}")]
    InvalidPreference { name: String, reason: String },
    #[error("malformed payload: {0}")]
    Json(String),
}
