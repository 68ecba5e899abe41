///  To run :
///  cargo r --example client_example
use chrono::NaiveDate;
use claims_client::{ClaimsClient, CreateClaimRequest};
use claims_hex::application::claims_service::DefaultClaimsService;
use claims_hex::inbound::http::{HttpServer, HttpServerConfig};
use claims_repo::build_repo;
use claims_types::domain::claim::ClaimType;
use tempfile::tempdir;

fn find_free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let port = find_free_port();
    let addr = format!("http://127.0.0.1:{port}/");

    // Temp sqlite file and output directory, removed on exit.
    let tmp = tempdir()?;
    let db_url = format!("sqlite://{}", tmp.path().join("claims.db").display());
    let files_dir = tmp.path().join("claim-files");

    let repo = build_repo(Some(&db_url)).await?;
    let service = DefaultClaimsService::new(repo, &files_dir);
    let server = HttpServer::new(
        service,
        HttpServerConfig {
            port: port.to_string(),
        },
    )
    .await?;

    let handle = tokio::spawn(async move {
        server.run().await.expect("server run");
    });
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let client = ClaimsClient::new(&addr)?;
    println!("Health: {}", client.health().await?);

    let created = client
        .create_claim(&CreateClaimRequest {
            policy_number: "POL-EXAMPLE".into(),
            claimant_name: "Example".into(),
            claimant_email: "example@example.com".into(),
            claim_type: ClaimType::Property,
            incident_date: NaiveDate::from_ymd_opt(2026, 8, 15).unwrap(),
            description: "Storm damage to the garage door".into(),
            claimed_amount_cents: 275_000,
        })
        .await?;
    println!("Created claim id={} status={}", created.claim_id, created.status);

    let fetched = client.get_claim(&created.claim_id).await?;
    assert_eq!(fetched.claimant_email, "example@example.com");

    let summary = client.summarize_claim(&created.claim_id).await?;
    println!("Summary: {} (priority {})", summary.headline, summary.priority);

    let ack = client.generate_claim_files(&created.claim_id).await?;
    println!("{ack}");
    for entry in std::fs::read_dir(files_dir.join(&created.claim_id))? {
        println!("  wrote {}", entry?.path().display());
    }

    match client.get_claim("no-such-claim").await {
        Ok(_) => println!("unexpectedly found a claim"),
        Err(err) => println!(
            "Missing claim lookup returned {:?}",
            err.downcast_ref::<reqwest::Error>().and_then(|e| e.status())
        ),
    }

    handle.abort();
    Ok(())
}
