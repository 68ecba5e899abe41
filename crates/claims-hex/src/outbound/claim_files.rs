use anyhow::Context;
use claims_types::domain::claim::Claim;
use claims_types::domain::summary::ClaimSummary;
use std::path::{Component, Path, PathBuf};

pub const CLAIM_FILE: &str = "claim.json";
pub const SUMMARY_JSON_FILE: &str = "summary.json";
pub const SUMMARY_TEXT_FILE: &str = "summary.txt";

/// Writes the per-claim document set under `<root>/<claim_id>/`.
#[derive(Debug, Clone)]
pub struct ClaimFileWriter {
    root: PathBuf,
}

impl ClaimFileWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn claim_dir(&self, claim_id: &str) -> anyhow::Result<PathBuf> {
        // The id becomes a directory name; it must stay a single normal component.
        let mut components = Path::new(claim_id).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.root.join(claim_id)),
            _ => anyhow::bail!("claim id {claim_id:?} is not usable as a directory name"),
        }
    }

    /// Writes `claim.json`, `summary.json` and `summary.txt`, replacing any
    /// previous set. Returns the written paths.
    pub async fn write(
        &self,
        claim: &Claim,
        summary: &ClaimSummary,
    ) -> anyhow::Result<Vec<PathBuf>> {
        let dir = self.claim_dir(&claim.claim_id)?;
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("creating {}", dir.display()))?;

        let files = [
            (CLAIM_FILE, serde_json::to_vec_pretty(claim)?),
            (SUMMARY_JSON_FILE, serde_json::to_vec_pretty(summary)?),
            (SUMMARY_TEXT_FILE, summary.render_text().into_bytes()),
        ];

        let mut written = Vec::with_capacity(files.len());
        for (name, bytes) in files {
            let path = dir.join(name);
            tokio::fs::write(&path, bytes)
                .await
                .with_context(|| format!("writing {}", path.display()))?;
            written.push(path);
        }
        Ok(written)
    }
}
