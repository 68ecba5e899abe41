#[cfg(not(any(feature = "memory", feature = "sqlite")))]
compile_error!("Enable a repo feature: `memory` or `sqlite`.");

use claims_types::domain::claim::Claim;
use claims_types::ports::claim_repository::{ClaimRepository, RepoError};

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "sqlite")]
pub const DEFAULT_SQLITE_URL: &str = "sqlite://claims.db";

/// Repository selected at startup from the compiled features and the
/// configured database URL.
pub enum Repo {
    #[cfg(feature = "memory")]
    Memory(memory::InMemoryRepo),
    #[cfg(feature = "sqlite")]
    Sqlite(sqlite::SqliteRepo),
}

pub async fn build_repo(url: Option<&str>) -> anyhow::Result<Repo> {
    Repo::build_repo(url).await
}

impl Repo {
    /// A URL selects sqlite when it is compiled in. Without a URL the
    /// in-memory store is preferred, falling back to the default sqlite file.
    pub async fn build_repo(database_url: Option<&str>) -> anyhow::Result<Self> {
        #[cfg(feature = "sqlite")]
        {
            if let Some(url) = database_url {
                tracing::info!(url, "using sqlite claims repository");
                return Ok(Repo::Sqlite(sqlite::SqliteRepo::new(url).await?));
            }
        }

        #[cfg(feature = "memory")]
        {
            #[cfg(not(feature = "sqlite"))]
            if database_url.is_some() {
                tracing::warn!("DATABASE_URL set but sqlite support is not compiled in");
            }
            tracing::info!("using in-memory claims repository");
            return Ok(Repo::Memory(memory::InMemoryRepo::new()));
        }

        #[cfg(not(feature = "memory"))]
        {
            tracing::info!(url = DEFAULT_SQLITE_URL, "using sqlite claims repository");
            Ok(Repo::Sqlite(sqlite::SqliteRepo::new(DEFAULT_SQLITE_URL).await?))
        }
    }
}

#[async_trait::async_trait]
impl ClaimRepository for Repo {
    async fn create(&self, claim: Claim) -> Result<Claim, RepoError> {
        match self {
            #[cfg(feature = "memory")]
            Repo::Memory(repo) => repo.create(claim).await,
            #[cfg(feature = "sqlite")]
            Repo::Sqlite(repo) => repo.create(claim).await,
        }
    }

    async fn get(&self, claim_id: &str) -> Result<Option<Claim>, RepoError> {
        match self {
            #[cfg(feature = "memory")]
            Repo::Memory(repo) => repo.get(claim_id).await,
            #[cfg(feature = "sqlite")]
            Repo::Sqlite(repo) => repo.get(claim_id).await,
        }
    }
}
