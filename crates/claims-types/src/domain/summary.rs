use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::claim::{Claim, ClaimStatus, ClaimType};

const HIGH_VALUE_CENTS: i64 = 1_000_000;
const MEDIUM_VALUE_CENTS: i64 = 100_000;
const LATE_REPORT_DAYS: i64 = 30;
const EXCERPT_CHARS: usize = 160;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SummaryPriority {
    Low,
    Medium,
    High,
}

impl SummaryPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryPriority::Low => "LOW",
            SummaryPriority::Medium => "MEDIUM",
            SummaryPriority::High => "HIGH",
        }
    }
}

impl fmt::Display for SummaryPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClaimSummary {
    pub claim_id: String,
    pub policy_number: String,
    pub claimant_name: String,
    pub claim_type: ClaimType,
    pub status: ClaimStatus,
    pub claimed_amount_cents: i64,
    pub incident_date: NaiveDate,
    pub days_since_incident: i64,
    pub late_reported: bool,
    pub priority: SummaryPriority,
    pub headline: String,
    pub description_excerpt: String,
    pub generated_at: DateTime<Utc>,
}

impl ClaimSummary {
    /// Summarizes `claim` as seen on `today`.
    pub fn from_claim(claim: &Claim, today: NaiveDate) -> Self {
        let days_since_incident = (today - claim.incident_date).num_days().max(0);
        let reported_after = (claim.created_at.date_naive() - claim.incident_date).num_days();
        let late_reported = reported_after > LATE_REPORT_DAYS;

        let priority = if claim.claimed_amount_cents >= HIGH_VALUE_CENTS
            || claim.claim_type == ClaimType::Life
        {
            SummaryPriority::High
        } else if claim.claimed_amount_cents >= MEDIUM_VALUE_CENTS || late_reported {
            SummaryPriority::Medium
        } else {
            SummaryPriority::Low
        };

        let headline = format!(
            "{} claim {} for {} on policy {}: {} claimed, status {}",
            claim.claim_type.label(),
            claim.claim_id,
            claim.claimant_name,
            claim.policy_number,
            format_cents(claim.claimed_amount_cents),
            claim.status,
        );

        Self {
            claim_id: claim.claim_id.clone(),
            policy_number: claim.policy_number.clone(),
            claimant_name: claim.claimant_name.clone(),
            claim_type: claim.claim_type,
            status: claim.status,
            claimed_amount_cents: claim.claimed_amount_cents,
            incident_date: claim.incident_date,
            days_since_incident,
            late_reported,
            priority,
            headline,
            description_excerpt: excerpt(&claim.description, EXCERPT_CHARS),
            generated_at: Utc::now(),
        }
    }

    /// Plain-text report written next to the JSON claim files.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.headline);
        out.push_str("\n\n");
        out.push_str(&format!("Claim ID:            {}\n", self.claim_id));
        out.push_str(&format!("Policy:              {}\n", self.policy_number));
        out.push_str(&format!("Claimant:            {}\n", self.claimant_name));
        out.push_str(&format!("Type:                {}\n", self.claim_type));
        out.push_str(&format!("Status:              {}\n", self.status));
        out.push_str(&format!(
            "Claimed amount:      {}\n",
            format_cents(self.claimed_amount_cents)
        ));
        out.push_str(&format!("Incident date:       {}\n", self.incident_date));
        out.push_str(&format!("Days since incident: {}\n", self.days_since_incident));
        out.push_str(&format!(
            "Late reported:       {}\n",
            if self.late_reported { "yes" } else { "no" }
        ));
        out.push_str(&format!("Priority:            {}\n", self.priority));
        out.push_str(&format!(
            "Generated at:        {}\n",
            self.generated_at.to_rfc3339()
        ));
        out.push_str("\nDescription:\n");
        out.push_str(&self.description_excerpt);
        out.push('\n');
        out
    }
}

/// Renders an amount in cents as `1234.56`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::claim::CreateClaimRequest;
    use chrono::Duration;

    fn claim(claim_type: ClaimType, cents: i64, incident: NaiveDate) -> Claim {
        Claim::new(CreateClaimRequest {
            policy_number: "POL-7".into(),
            claimant_name: "Bob Roe".into(),
            claimant_email: "bob@example.com".into(),
            claim_type,
            incident_date: incident,
            description: "Water damage in the kitchen.".into(),
            claimed_amount_cents: cents,
        })
    }

    #[test]
    fn small_recent_claim_is_low_priority() {
        let today = Utc::now().date_naive();
        let c = claim(ClaimType::Property, 50_000, today - Duration::days(3));
        let summary = ClaimSummary::from_claim(&c, today);
        assert_eq!(summary.priority, SummaryPriority::Low);
        assert_eq!(summary.days_since_incident, 3);
        assert!(!summary.late_reported);
        assert_eq!(
            summary.headline,
            format!(
                "Property claim {} for Bob Roe on policy POL-7: 500.00 claimed, status SUBMITTED",
                c.claim_id
            )
        );
    }

    #[test]
    fn priority_rules() {
        let today = Utc::now().date_naive();
        let recent = today - Duration::days(1);

        let life = claim(ClaimType::Life, 100, recent);
        assert_eq!(
            ClaimSummary::from_claim(&life, today).priority,
            SummaryPriority::High
        );

        let big = claim(ClaimType::Auto, HIGH_VALUE_CENTS, recent);
        assert_eq!(
            ClaimSummary::from_claim(&big, today).priority,
            SummaryPriority::High
        );

        let medium = claim(ClaimType::Auto, MEDIUM_VALUE_CENTS, recent);
        assert_eq!(
            ClaimSummary::from_claim(&medium, today).priority,
            SummaryPriority::Medium
        );

        let late = claim(ClaimType::Health, 100, today - Duration::days(45));
        let summary = ClaimSummary::from_claim(&late, today);
        assert!(summary.late_reported);
        assert_eq!(summary.priority, SummaryPriority::Medium);
    }

    #[test]
    fn future_incident_dates_clamp_to_zero_days() {
        let today = Utc::now().date_naive();
        let c = claim(ClaimType::Other, 100, today + Duration::days(5));
        assert_eq!(ClaimSummary::from_claim(&c, today).days_since_incident, 0);
    }

    #[test]
    fn long_descriptions_are_truncated_on_char_boundary() {
        let text = "é".repeat(200);
        let cut = excerpt(&text, EXCERPT_CHARS);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), EXCERPT_CHARS + 3);
        assert_eq!(excerpt("short", EXCERPT_CHARS), "short");
    }

    #[test]
    fn cents_formatting() {
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(5), "0.05");
        assert_eq!(format_cents(123_456), "1234.56");
        assert_eq!(format_cents(-250), "-2.50");
    }

    #[test]
    fn text_report_contains_headline_and_fields() {
        let today = Utc::now().date_naive();
        let c = claim(ClaimType::Auto, 12_345, today);
        let text = ClaimSummary::from_claim(&c, today).render_text();
        assert!(text.starts_with("Auto claim "));
        assert!(text.contains("Policy:              POL-7"));
        assert!(text.contains("Type:                AUTO"));
        assert!(text.contains("Priority:            LOW"));
        assert!(text.contains("Water damage in the kitchen."));
    }
}
