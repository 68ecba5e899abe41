use async_trait::async_trait;

use crate::domain::claim::{Claim, CreateClaimRequest};
use crate::domain::summary::ClaimSummary;
use crate::ports::claim_repository::RepoError;

#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    #[error("claim not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Repository(#[from] RepoError),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Operations the HTTP adapter delegates to. Implementations own storage,
/// summarization and file generation; the adapter only maps outcomes to
/// status codes.
#[async_trait]
pub trait ClaimsService: Send + Sync + 'static {
    async fn get_claim(&self, claim_id: &str) -> Result<Claim, ServiceError>;
    async fn summarize_claim(&self, claim_id: &str) -> Result<ClaimSummary, ServiceError>;
    async fn generate_claim_files(&self, claim_id: &str) -> Result<(), ServiceError>;
    async fn create_claim(&self, request: CreateClaimRequest) -> Result<Claim, ServiceError>;
}
