use async_trait::async_trait;

use crate::domain::claim::Claim;

#[derive(thiserror::Error, Debug)]
pub enum RepoError {
    #[error("db error: {0}")]
    DbError(String),
}

#[async_trait]
pub trait ClaimRepository: Send + Sync + 'static {
    async fn create(&self, claim: Claim) -> Result<Claim, RepoError>;
    async fn get(&self, claim_id: &str) -> Result<Option<Claim>, RepoError>;
}
