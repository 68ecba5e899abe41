use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server_port: String,
    pub database_url: Option<String>,
    pub claim_files_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let server_port = env::var("SERVER_PORT").unwrap_or_else(|_| "8080".into());
        server_port
            .parse::<u16>()
            .map_err(|e| anyhow::anyhow!("invalid SERVER_PORT {server_port:?}: {e}"))?;
        let database_url = env::var("DATABASE_URL").ok().filter(|v| !v.is_empty());
        let claim_files_dir = env::var("CLAIM_FILES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("claim-files"));
        Ok(Self {
            server_port,
            database_url,
            claim_files_dir,
        })
    }
}
