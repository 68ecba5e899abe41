use std::time::Duration;

use anyhow::Context;
use claims_types::domain::claim::Claim;
use claims_types::domain::summary::ClaimSummary;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Url;

pub use claims_types::domain::claim::CreateClaimRequest;

const CLAIMS_PATH: &str = "api/v1/claims/";

#[derive(Clone)]
pub struct ClaimsClientBuilder {
    base: Url,
    headers: HeaderMap,
    timeout: Option<Duration>,
    client: Option<reqwest::Client>,
}

#[derive(Clone)]
pub struct ClaimsClient {
    base: Url,
    client: reqwest::Client,
}

impl ClaimsClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::builder(base_url)?.build()
    }

    pub fn builder(base_url: &str) -> anyhow::Result<ClaimsClientBuilder> {
        let base = Url::parse(base_url).context("invalid base url")?;
        Ok(ClaimsClientBuilder {
            base,
            headers: HeaderMap::new(),
            timeout: None,
            client: None,
        })
    }

    fn collection_url(&self) -> anyhow::Result<Url> {
        self.base.join(CLAIMS_PATH).context("failed to join url")
    }

    /// `api/v1/claims/<claim_id>[/<action>]`, with the id encoded as one segment.
    fn claim_url(&self, claim_id: &str, action: Option<&str>) -> anyhow::Result<Url> {
        let mut url = self.collection_url()?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| anyhow::anyhow!("base url cannot carry a path"))?;
            segments.pop_if_empty().push(claim_id);
            if let Some(action) = action {
                segments.push(action);
            }
        }
        Ok(url)
    }

    pub async fn health(&self) -> anyhow::Result<String> {
        let res = self
            .client
            .get(self.collection_url()?)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.text().await?)
    }

    pub async fn get_claim(&self, claim_id: &str) -> anyhow::Result<Claim> {
        tracing::debug!(claim_id, "fetching claim");
        let res = self
            .client
            .get(self.claim_url(claim_id, None)?)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    pub async fn summarize_claim(&self, claim_id: &str) -> anyhow::Result<ClaimSummary> {
        tracing::debug!(claim_id, "summarizing claim");
        let res = self
            .client
            .post(self.claim_url(claim_id, Some("summarize"))?)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    /// Returns the server's acknowledgement text.
    pub async fn generate_claim_files(&self, claim_id: &str) -> anyhow::Result<String> {
        tracing::debug!(claim_id, "requesting claim file generation");
        let res = self
            .client
            .post(self.claim_url(claim_id, Some("generate"))?)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.text().await?)
    }

    pub async fn create_claim(&self, req: &CreateClaimRequest) -> anyhow::Result<Claim> {
        let res = self
            .client
            .post(self.collection_url()?)
            .json(req)
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }
}

impl ClaimsClientBuilder {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_header(
        mut self,
        key: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> anyhow::Result<Self> {
        let header_name =
            HeaderName::from_bytes(key.as_ref().as_bytes()).context("invalid header name")?;
        let header_value = HeaderValue::from_str(value.as_ref()).context("invalid header value")?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    pub fn with_reqwest_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> anyhow::Result<ClaimsClient> {
        if let Some(client) = self.client {
            return Ok(ClaimsClient {
                base: self.base,
                client,
            });
        }

        let mut builder = reqwest::Client::builder();
        if !self.headers.is_empty() {
            builder = builder.default_headers(self.headers);
        }
        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build()?;
        Ok(ClaimsClient {
            base: self.base,
            client,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use claims_types::domain::claim::ClaimType;
    use httpmock::prelude::*;

    fn sample_request() -> CreateClaimRequest {
        CreateClaimRequest {
            policy_number: "POL-C".into(),
            claimant_name: "User".into(),
            claimant_email: "user@example.com".into(),
            claim_type: ClaimType::Auto,
            incident_date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            description: "Parking lot scrape".into(),
            claimed_amount_cents: 30_000,
        }
    }

    #[tokio::test]
    async fn create_and_get_claim() {
        let server = MockServer::start();
        let claim = Claim::new(sample_request());

        let create_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/claims/")
                .json_body_obj(&sample_request());
            then.status(200).json_body_obj(&claim);
        });

        let get_mock = server.mock(|when, then| {
            when.method(GET)
                .path(format!("/api/v1/claims/{}", claim.claim_id));
            then.status(200).json_body_obj(&claim);
        });

        let client = ClaimsClient::new(&server.base_url()).unwrap();
        let created = client.create_claim(&sample_request()).await.unwrap();
        assert_eq!(created.claim_id, claim.claim_id);

        let fetched = client.get_claim(&claim.claim_id).await.unwrap();
        assert_eq!(fetched, claim);

        create_mock.assert();
        get_mock.assert();
    }

    #[tokio::test]
    async fn health_summarize_and_generate() {
        let server = MockServer::start();
        let claim = Claim::new(sample_request());
        let summary = ClaimSummary::from_claim(&claim, NaiveDate::from_ymd_opt(2026, 10, 5).unwrap());

        let health_mock = server.mock(|when, then| {
            when.method(GET).path("/api/v1/claims/");
            then.status(200).body("OK");
        });

        let summarize_mock = server.mock(|when, then| {
            when.method(POST)
                .path(format!("/api/v1/claims/{}/summarize", claim.claim_id));
            then.status(200).json_body_obj(&summary);
        });

        let generate_mock = server.mock(|when, then| {
            when.method(POST)
                .path(format!("/api/v1/claims/{}/generate", claim.claim_id));
            then.status(200)
                .body("Files generation initiated successfully");
        });

        let client = ClaimsClient::new(&server.base_url()).unwrap();
        assert_eq!(client.health().await.unwrap(), "OK");

        let got = client.summarize_claim(&claim.claim_id).await.unwrap();
        assert_eq!(got.days_since_incident, 4);

        let ack = client.generate_claim_files(&claim.claim_id).await.unwrap();
        assert_eq!(ack, "Files generation initiated successfully");

        health_mock.assert();
        summarize_mock.assert();
        generate_mock.assert();
    }

    #[tokio::test]
    async fn error_statuses_surface_as_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/claims/missing");
            then.status(404);
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/v1/claims/missing/summarize");
            then.status(500);
        });

        let client = ClaimsClient::new(&server.base_url()).unwrap();
        let err = client.get_claim("missing").await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<reqwest::Error>().and_then(|e| e.status()),
            Some(reqwest::StatusCode::NOT_FOUND)
        );
        assert!(client.summarize_claim("missing").await.is_err());
    }

    #[test]
    fn claim_ids_are_single_encoded_segments() {
        let client = ClaimsClient::new("http://localhost:8080/").unwrap();
        let url = client.claim_url("a/b c", Some("generate")).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/v1/claims/a%2Fb%20c/generate"
        );
    }
}
