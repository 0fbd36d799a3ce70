use thiserror::Error;

/// Failures talking to the billing backend.
#[derive(Debug, Error)]
pub enum BillingError {
    #[error("billing request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("billing backend returned status {0}")]
    Status(u16),
}

pub type BillingResult<T> = Result<T, BillingError>;
