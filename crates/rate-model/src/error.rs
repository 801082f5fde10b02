use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown field '{0}' (expected one of destination, prefix, rate, setup, currency, description)")]
    UnknownField(String),
    #[error("invalid assignment '{0}' (expected FIELD=VALUE)")]
    InvalidAssignment(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
