use async_trait::async_trait;
use chrono::Utc;
use claims_types::domain::claim::{Claim, CreateClaimRequest};
use claims_types::domain::summary::ClaimSummary;
use claims_types::ports::claim_repository::ClaimRepository;
use claims_types::ports::claims_service::{ClaimsService, ServiceError};
use std::path::PathBuf;

use crate::outbound::claim_files::ClaimFileWriter;

/// Repository-backed `ClaimsService` that also writes claim documents to disk.
pub struct DefaultClaimsService<R: ClaimRepository> {
    repo: R,
    files: ClaimFileWriter,
}

impl<R: ClaimRepository> DefaultClaimsService<R> {
    pub fn new(repo: R, files_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo,
            files: ClaimFileWriter::new(files_dir),
        }
    }
}

#[async_trait]
impl<R: ClaimRepository> ClaimsService for DefaultClaimsService<R> {
    async fn get_claim(&self, claim_id: &str) -> Result<Claim, ServiceError> {
        self.repo
            .get(claim_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(claim_id.to_string()))
    }

    async fn summarize_claim(&self, claim_id: &str) -> Result<ClaimSummary, ServiceError> {
        let claim = self.get_claim(claim_id).await?;
        Ok(ClaimSummary::from_claim(&claim, Utc::now().date_naive()))
    }

    async fn generate_claim_files(&self, claim_id: &str) -> Result<(), ServiceError> {
        let claim = self.get_claim(claim_id).await?;
        let summary = ClaimSummary::from_claim(&claim, Utc::now().date_naive());
        let written = self.files.write(&claim, &summary).await?;
        tracing::info!(
            claim_id,
            root = %self.files.root().display(),
            files = ?written,
            "claim files generated"
        );
        Ok(())
    }

    async fn create_claim(&self, request: CreateClaimRequest) -> Result<Claim, ServiceError> {
        let claim = self.repo.create(Claim::new(request)).await?;
        tracing::info!(claim_id = %claim.claim_id, "claim created");
        Ok(claim)
    }
}
