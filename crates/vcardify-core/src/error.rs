use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("missing required column: {0}")]
    MissingRequiredField(String),
}
