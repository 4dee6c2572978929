use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("A record for this pincode pair already exists")]
    Conflict,
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}
