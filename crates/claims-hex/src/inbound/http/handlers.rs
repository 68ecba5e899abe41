use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;

use claims_types::domain::claim::{Claim, CreateClaimRequest};
use claims_types::domain::summary::ClaimSummary;
use claims_types::ports::claims_service::ClaimsService;

use super::extract::ValidatedJson;
use super::server::GENERATE_ACCEPTED_MESSAGE;
use crate::errors::AppError;

// Fetch failures are 404 and all other service failures are 500. The cause
// is logged, never returned.

pub(super) async fn health() -> &'static str {
    "OK"
}

pub(super) async fn get_claim<S>(
    State(service): State<Arc<S>>,
    Path(claim_id): Path<String>,
) -> Result<Json<Claim>, AppError>
where
    S: ClaimsService,
{
    match service.get_claim(&claim_id).await {
        Ok(claim) => Ok(Json(claim)),
        Err(e) => {
            tracing::warn!(%claim_id, error = %e, "get claim failed");
            Err(AppError::NotFound)
        }
    }
}

pub(super) async fn summarize_claim<S>(
    State(service): State<Arc<S>>,
    Path(claim_id): Path<String>,
) -> Result<Json<ClaimSummary>, AppError>
where
    S: ClaimsService,
{
    match service.summarize_claim(&claim_id).await {
        Ok(summary) => Ok(Json(summary)),
        Err(e) => {
            tracing::warn!(%claim_id, error = %e, "summarize claim failed");
            Err(AppError::Internal)
        }
    }
}

pub(super) async fn generate_claim_files<S>(
    State(service): State<Arc<S>>,
    Path(claim_id): Path<String>,
) -> Result<&'static str, AppError>
where
    S: ClaimsService,
{
    match service.generate_claim_files(&claim_id).await {
        Ok(()) => Ok(GENERATE_ACCEPTED_MESSAGE),
        Err(e) => {
            tracing::warn!(%claim_id, error = %e, "generate claim files failed");
            Err(AppError::Internal)
        }
    }
}

pub(super) async fn create_claim<S>(
    State(service): State<Arc<S>>,
    ValidatedJson(request): ValidatedJson<CreateClaimRequest>,
) -> Result<Json<Claim>, AppError>
where
    S: ClaimsService,
{
    match service.create_claim(request).await {
        Ok(claim) => Ok(Json(claim)),
        Err(e) => {
            tracing::warn!(error = %e, "create claim failed");
            Err(AppError::Internal)
        }
    }
}
