use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::peptide::{DEFAULT_NUM_PEPTIDES, DEFAULT_PEPTIDE_LENGTH, MAX_NUM_PEPTIDES, MAX_PEPTIDE_LENGTH};
use crate::structure::DEFAULT_CHAIN;
use crate::suggest::{Provider, DEFAULT_MODEL};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_download_timeout")]
    pub download_timeout: u64,
    #[serde(default = "default_chain")]
    pub default_chain: String,
    #[serde(default = "default_num_peptides")]
    pub num_peptides: usize,
    #[serde(default = "default_peptide_length")]
    pub peptide_length: usize,
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_model_name")]
    pub model_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

fn default_download_timeout() -> u64 {
    300
}

fn default_chain() -> String {
    DEFAULT_CHAIN.to_string()
}

fn default_num_peptides() -> usize {
    DEFAULT_NUM_PEPTIDES
}

fn default_peptide_length() -> usize {
    DEFAULT_PEPTIDE_LENGTH
}

fn default_provider() -> String {
    Provider::OpenAi.name().to_string()
}

fn default_model_name() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            download_timeout: default_download_timeout(),
            default_chain: default_chain(),
            num_peptides: default_num_peptides(),
            peptide_length: default_peptide_length(),
            provider: default_provider(),
            model_name: default_model_name(),
            endpoint: None,
        }
    }
}

pub(crate) fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "peptidetools", "peptide-tools")
}

/// Location of `config.toml`, if the platform has a config directory.
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

impl Config {
    pub fn load() -> Self {
        if let Some(config_path) = config_path() {
            if config_path.exists() {
                match fs::read_to_string(&config_path) {
                    Ok(content) => match Self::from_toml(&content) {
                        Ok(config) => return config,
                        Err(e) => warn!("Ignoring invalid {}: {}", config_path.display(), e),
                    },
                    Err(e) => warn!("Could not read {}: {}", config_path.display(), e),
                }
            }
        }
        Config::default()
    }

    /// Parse a config file. Peptide counts and lengths outside the CLI bounds
    /// are replaced by their defaults.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(content)?;
        Ok(config.bounded())
    }

    fn bounded(mut self) -> Self {
        if !(1..=MAX_NUM_PEPTIDES).contains(&self.num_peptides) {
            warn!(
                "num_peptides = {} is outside 1..={}, using {}",
                self.num_peptides, MAX_NUM_PEPTIDES, DEFAULT_NUM_PEPTIDES
            );
            self.num_peptides = DEFAULT_NUM_PEPTIDES;
        }
        if !(1..=MAX_PEPTIDE_LENGTH).contains(&self.peptide_length) {
            warn!(
                "peptide_length = {} is outside 1..={}, using {}",
                self.peptide_length, MAX_PEPTIDE_LENGTH, DEFAULT_PEPTIDE_LENGTH
            );
            self.peptide_length = DEFAULT_PEPTIDE_LENGTH;
        }
        self
    }

    pub fn save(&self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path = config_path().ok_or("Failed to determine project directories")?;
        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        Ok(config_path)
    }
}
