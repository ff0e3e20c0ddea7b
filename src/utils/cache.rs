//! Local cache of structures downloaded from the RCSB PDB.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;

use crate::config::Config;
use crate::utils::progress::spinner;

const RCSB_DOWNLOAD_URL: &str = "https://files.rcsb.org/download";

/// Cached entries older than this are downloaded again
const MAX_CACHE_AGE: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Normalise and check a four-character PDB id such as `1crn`.
pub fn normalize_pdb_id(pdb_id: &str) -> Result<String> {
    let id = pdb_id.trim().to_ascii_uppercase();
    let valid = id.len() == 4
        && id.chars().all(|c| c.is_ascii_alphanumeric())
        && id.starts_with(|c: char| c.is_ascii_digit());
    if !valid {
        bail!("Invalid PDB id '{}': expected 4 characters starting with a digit", pdb_id);
    }
    Ok(id)
}

pub fn download_url(pdb_id: &str) -> String {
    format!("{}/{}.pdb", RCSB_DOWNLOAD_URL, pdb_id)
}

pub struct StructureCache {
    cache_dir: PathBuf,
    base_url: String,
    timeout: Duration,
}

impl StructureCache {
    pub fn new(config: &Config) -> Result<Self> {
        let proj_dirs = crate::config::project_dirs()
            .context("Failed to determine project directories")?;
        Self::with_dir(proj_dirs.cache_dir().join("structures"), config)
    }

    pub fn with_dir(cache_dir: impl Into<PathBuf>, config: &Config) -> Result<Self> {
        let cache_dir = cache_dir.into();
        fs::create_dir_all(&cache_dir)
            .with_context(|| format!("Failed to create cache dir {}", cache_dir.display()))?;
        Ok(StructureCache {
            cache_dir,
            base_url: RCSB_DOWNLOAD_URL.to_string(),
            timeout: Duration::from_secs(config.download_timeout),
        })
    }

    /// Download from a mirror instead of RCSB.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn cache_path(&self, pdb_id: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.pdb", pdb_id.to_ascii_lowercase()))
    }

    fn is_cache_valid(&self, path: &Path) -> bool {
        let Ok(metadata) = fs::metadata(path) else {
            return false;
        };
        match metadata.modified().ok().and_then(|m| m.elapsed().ok()) {
            Some(age) => age < MAX_CACHE_AGE,
            None => false,
        }
    }

    /// Path to a local copy of `pdb_id`, downloading it if needed.
    pub fn get_structure(&self, pdb_id: &str) -> Result<PathBuf> {
        let pdb_id = normalize_pdb_id(pdb_id)?;
        let cache_path = self.cache_path(&pdb_id);

        if self.is_cache_valid(&cache_path) {
            debug!("Using cached {}", cache_path.display());
            return Ok(cache_path);
        }

        let progress = spinner(format!("Downloading {}...", pdb_id))?;
        let stored = self
            .download(&pdb_id)
            .and_then(|text| self.store(&cache_path, &text));
        if let Err(e) = stored {
            progress.abandon();
            return Err(e);
        }

        progress.finish_with_message(format!("{} downloaded and cached", pdb_id));
        info!("Cached {} at {}", pdb_id, cache_path.display());

        Ok(cache_path)
    }

    fn download(&self, pdb_id: &str) -> Result<String> {
        let url = format!("{}/{}.pdb", self.base_url, pdb_id);
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;
        let response = client
            .get(&url)
            .send()
            .with_context(|| format!("Failed to reach {}", url))?;
        if !response.status().is_success() {
            bail!("Download of {} failed with HTTP {}", pdb_id, response.status());
        }
        response
            .text()
            .with_context(|| format!("Failed to read {}", url))
    }

    /// Write into the cache via a temp file so a partial download never looks cached.
    fn store(&self, cache_path: &Path, text: &str) -> Result<()> {
        let mut tmp = NamedTempFile::new_in(&self.cache_dir)
            .with_context(|| format!("Failed to create temp file in {}", self.cache_dir.display()))?;
        tmp.write_all(text.as_bytes())?;
        tmp.persist(cache_path)
            .with_context(|| format!("Failed to write {}", cache_path.display()))?;
        Ok(())
    }
}
