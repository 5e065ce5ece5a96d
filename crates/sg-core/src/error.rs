use thiserror::Error;

pub type SgResult<T> = Result<T, SgError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SgError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Value for {what} must be positive: {value}")]
    NotPositive { what: &'static str, value: f64 },
}
