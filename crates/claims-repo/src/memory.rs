use async_trait::async_trait;
use claims_types::domain::claim::Claim;
use claims_types::ports::claim_repository::{ClaimRepository, RepoError};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct InMemoryRepo {
    pub map: Arc<DashMap<String, Claim>>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self {
            map: Arc::new(DashMap::new()),
        }
    }
}

impl Default for InMemoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClaimRepository for InMemoryRepo {
    async fn create(&self, claim: Claim) -> Result<Claim, RepoError> {
        match self.map.entry(claim.claim_id.clone()) {
            Entry::Occupied(_) => Err(RepoError::DbError(format!(
                "claim {} already exists",
                claim.claim_id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(claim.clone());
                Ok(claim)
            }
        }
    }

    async fn get(&self, claim_id: &str) -> Result<Option<Claim>, RepoError> {
        Ok(self.map.get(claim_id).map(|r| r.clone()))
    }
}
