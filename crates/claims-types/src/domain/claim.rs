use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    Submitted,
    UnderReview,
    Approved,
    Denied,
    Closed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimType {
    Auto,
    Property,
    Health,
    Life,
    Liability,
    Other,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Submitted => "SUBMITTED",
            ClaimStatus::UnderReview => "UNDER_REVIEW",
            ClaimStatus::Approved => "APPROVED",
            ClaimStatus::Denied => "DENIED",
            ClaimStatus::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUBMITTED" => Ok(ClaimStatus::Submitted),
            "UNDER_REVIEW" => Ok(ClaimStatus::UnderReview),
            "APPROVED" => Ok(ClaimStatus::Approved),
            "DENIED" => Ok(ClaimStatus::Denied),
            "CLOSED" => Ok(ClaimStatus::Closed),
            other => anyhow::bail!("unknown claim status: {other}"),
        }
    }
}

impl ClaimType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Auto => "AUTO",
            ClaimType::Property => "PROPERTY",
            ClaimType::Health => "HEALTH",
            ClaimType::Life => "LIFE",
            ClaimType::Liability => "LIABILITY",
            ClaimType::Other => "OTHER",
        }
    }

    /// Human-facing label used in summaries ("Auto", "Property", ...).
    pub fn label(&self) -> &'static str {
        match self {
            ClaimType::Auto => "Auto",
            ClaimType::Property => "Property",
            ClaimType::Health => "Health",
            ClaimType::Life => "Life",
            ClaimType::Liability => "Liability",
            ClaimType::Other => "Other",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AUTO" => Ok(ClaimType::Auto),
            "PROPERTY" => Ok(ClaimType::Property),
            "HEALTH" => Ok(ClaimType::Health),
            "LIFE" => Ok(ClaimType::Life),
            "LIABILITY" => Ok(ClaimType::Liability),
            "OTHER" => Ok(ClaimType::Other),
            other => anyhow::bail!("unknown claim type: {other}"),
        }
    }
}

/// Body of `POST /api/v1/claims`. Every field is required; the rules below
/// are enforced by the HTTP extractor before the service sees the request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClaimRequest {
    #[validate(
        length(min = 1, max = 64, message = "policyNumber must be 1-64 characters"),
        custom(function = "not_blank")
    )]
    pub policy_number: String,
    #[validate(
        length(min = 1, max = 200, message = "claimantName must be 1-200 characters"),
        custom(function = "not_blank")
    )]
    pub claimant_name: String,
    #[validate(email(message = "claimantEmail must be a valid email address"))]
    pub claimant_email: String,
    pub claim_type: ClaimType,
    pub incident_date: NaiveDate,
    #[validate(
        length(min = 1, max = 4000, message = "description must be 1-4000 characters"),
        custom(function = "not_blank")
    )]
    pub description: String,
    #[validate(range(min = 1, message = "claimedAmountCents must be positive"))]
    pub claimed_amount_cents: i64,
}

// Claims store trimmed text, so whitespace-only input counts as missing.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub claim_id: String,
    pub policy_number: String,
    pub claimant_name: String,
    pub claimant_email: String,
    pub claim_type: ClaimType,
    pub incident_date: NaiveDate,
    pub description: String,
    pub claimed_amount_cents: i64,
    pub status: ClaimStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Claim {
    /// Opens a new claim from an already validated request.
    pub fn new(request: CreateClaimRequest) -> Self {
        let now = Utc::now();
        Self {
            claim_id: Uuid::new_v4().to_string(),
            policy_number: request.policy_number.trim().to_string(),
            claimant_name: request.claimant_name.trim().to_string(),
            claimant_email: request.claimant_email.trim().to_string(),
            claim_type: request.claim_type,
            incident_date: request.incident_date,
            description: request.description.trim().to_string(),
            claimed_amount_cents: request.claimed_amount_cents,
            status: ClaimStatus::Submitted,
            created_at: now,
            updated_at: now,
        }
    }
}
