use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use claims_types::domain::claim::Claim;
use claims_types::ports::claim_repository::{ClaimRepository, RepoError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;

const SELECT_CLAIM: &str = "SELECT claim_id, policy_number, claimant_name, claimant_email, claim_type, incident_date, description, claimed_amount_cents, status, created_at, updated_at FROM claims WHERE claim_id = ?";

pub struct SqliteRepo {
    pool: SqlitePool,
}

#[derive(FromRow)]
struct DbClaim {
    claim_id: String,
    policy_number: String,
    claimant_name: String,
    claimant_email: String,
    claim_type: String,
    incident_date: String,
    description: String,
    claimed_amount_cents: i64,
    status: String,
    created_at: String,
    updated_at: String,
}

fn db_err(e: impl ToString) -> RepoError {
    RepoError::DbError(e.to_string())
}

impl DbClaim {
    fn into_claim(self) -> Result<Claim, RepoError> {
        let incident_date = NaiveDate::parse_from_str(&self.incident_date, "%Y-%m-%d").map_err(db_err)?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(db_err)?
            .with_timezone(&Utc);
        let updated_at = DateTime::parse_from_rfc3339(&self.updated_at)
            .map_err(db_err)?
            .with_timezone(&Utc);
        Ok(Claim {
            claim_id: self.claim_id,
            policy_number: self.policy_number,
            claimant_name: self.claimant_name,
            claimant_email: self.claimant_email,
            claim_type: self.claim_type.parse().map_err(db_err)?,
            incident_date,
            description: self.description,
            claimed_amount_cents: self.claimed_amount_cents,
            status: self.status.parse().map_err(db_err)?,
            created_at,
            updated_at,
        })
    }
}

impl SqliteRepo {
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // On-disk databases need their directory; `:memory:` does not.
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        // An in-memory database lives only as long as its connection, so the
        // pool holds exactly one and never recycles it.
        let mut pool_options = SqlitePoolOptions::new();
        if is_in_memory(database_url) {
            pool_options = pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }
        let pool = pool_options.connect_with(options).await?;

        let ddl = include_str!("../migrations/0001_create_claims.sql");
        sqlx::query(ddl).execute(&pool).await?;
        tracing::debug!(database_url, "sqlite claims store ready");

        Ok(Self { pool })
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[async_trait]
impl ClaimRepository for SqliteRepo {
    async fn create(&self, claim: Claim) -> Result<Claim, RepoError> {
        sqlx::query(
            "INSERT INTO claims (claim_id, policy_number, claimant_name, claimant_email, claim_type, incident_date, description, claimed_amount_cents, status, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&claim.claim_id)
        .bind(&claim.policy_number)
        .bind(&claim.claimant_name)
        .bind(&claim.claimant_email)
        .bind(claim.claim_type.as_str())
        .bind(claim.incident_date.format("%Y-%m-%d").to_string())
        .bind(&claim.description)
        .bind(claim.claimed_amount_cents)
        .bind(claim.status.as_str())
        .bind(claim.created_at.to_rfc3339())
        .bind(claim.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(claim)
    }

    async fn get(&self, claim_id: &str) -> Result<Option<Claim>, RepoError> {
        let row: Option<DbClaim> = sqlx::query_as(SELECT_CLAIM)
            .bind(claim_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;
        row.map(DbClaim::into_claim).transpose()
    }
}
