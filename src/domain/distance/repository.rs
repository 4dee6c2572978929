use super::entity::{NewPincodeDistance, PincodeDistance};
use super::errors::DomainError;
use async_trait::async_trait;

/// Store of previously computed pincode pairs. Keys are order-sensitive:
/// (A, B) and (B, A) are distinct and never reconciled.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DistanceRepository: Send + Sync {
    async fn find_by_pair(
        &self,
        from: &str,
        to: &str,
    ) -> Result<Option<PincodeDistance>, DomainError>;

    /// Inserts a new row. Fails with [`DomainError::Conflict`] when another
    /// writer already stored this pair — callers are expected to re-read.
    async fn insert(&self, record: NewPincodeDistance) -> Result<PincodeDistance, DomainError>;
}
