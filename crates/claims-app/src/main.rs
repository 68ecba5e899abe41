use claims_hex::application::claims_service::DefaultClaimsService;
use claims_hex::config::Config;
use claims_hex::inbound::http::{HttpServer, HttpServerConfig};
use claims_repo::{build_repo, Repo};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for SERVER_PORT / DATABASE_URL / CLAIM_FILES_DIR when present.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        port = %config.server_port,
        files_dir = %config.claim_files_dir.display(),
        "claims service configured"
    );

    let repo: Repo = build_repo(config.database_url.as_deref()).await?;
    let service = DefaultClaimsService::new(repo, config.claim_files_dir.clone());

    let server_cfg = HttpServerConfig {
        port: config.server_port.clone(),
    };

    let http = HttpServer::new(service, server_cfg).await?;
    http.run().await
}
