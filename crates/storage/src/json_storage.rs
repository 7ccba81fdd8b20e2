//! JSON file storage implementation.
//!
//! Stores each user's runs as a JSON array in `runs/<user>.json` and keeps a
//! small per-user meta marker (version + updated_at + record count) in
//! `meta/<user>.meta.json`.

use std::path::{Path, PathBuf};
use runlog_core::{RunRecord, Username};
use super::{check_records, Result, Storage};
use tokio::fs;
use tracing::{debug, warn};

/// File-based JSON storage backend.
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Create storage rooted at `root`, creating the `runs/` and `meta/`
    /// subdirectories if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        fs::create_dir_all(root.join("runs")).await?;
        fs::create_dir_all(root.join("meta")).await?;

        Ok(Self { root })
    }

    /// Storage root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn runs_path(&self, user: &Username) -> PathBuf {
        self.root.join("runs").join(format!("{}.json", user))
    }

    fn meta_path(&self, user: &Username) -> PathBuf {
        self.root.join("meta").join(format!("{}.meta.json", user))
    }

    /// Read and increment the per-user version, return the new version.
    async fn bump_version(&self, user: &Username, runs: usize) -> Result<u64> {
        let path = self.meta_path(user);
        let mut version = 0u64;
        if let Ok(s) = fs::read_to_string(&path).await {
            if let Ok(json) = serde_json::from_str::<serde_json::Value>(&s) {
                if let Some(v) = json.get("version").and_then(|v| v.as_u64()) {
                    version = v;
                }
            }
        }
        version += 1;
        let meta = serde_json::json!({
            "version": version,
            "updated_at": chrono::Utc::now(),
            "runs": runs,
        });
        fs::write(&path, serde_json::to_string_pretty(&meta)?.as_bytes()).await?;
        Ok(version)
    }
}

#[async_trait::async_trait]
impl Storage for JsonStorage {
    async fn load(&self, user: &Username) -> Result<Vec<RunRecord>> {
        let records: Vec<RunRecord> = read_json(&self.runs_path(user)).await?.unwrap_or_default();
        check_records(user, &records)?;
        debug!(%user, runs = records.len(), "loaded runs");
        Ok(records)
    }

    async fn save(&mut self, user: &Username, records: &[RunRecord]) -> Result<()> {
        check_records(user, records)?;
        let json = serde_json::to_string_pretty(records)?;
        write_atomic(&self.runs_path(user), json.as_bytes()).await?;

        // The run file is already in place; a stale marker is not worth failing the save.
        match self.bump_version(user, records.len()).await {
            Ok(version) => debug!(%user, version, runs = records.len(), "saved runs"),
            Err(e) => warn!(%user, error = %e, "failed to update meta marker"),
        }
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<Username>> {
        let mut users = Vec::new();
        let mut rd = fs::read_dir(self.root.join("runs")).await?;
        while let Some(entry) = rd.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match Username::new(stem) {
                Ok(user) => users.push(user),
                Err(e) => warn!(file = %path.display(), error = %e, "skipping run file"),
            }
        }
        users.sort();
        Ok(users)
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Write to a sibling temp file, then rename over the target.
async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    let written = match fs::write(&tmp, bytes).await {
        Ok(()) => fs::rename(&tmp, path).await,
        Err(e) => Err(e),
    };
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    Ok(())
}
