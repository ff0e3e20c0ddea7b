pub mod config;
pub mod fetch;
pub mod report;
pub mod sample;
pub mod sequence;
pub mod suggest;

use anyhow::{bail, Context, Result};

use crate::api::ProviderSettings;
use crate::cli::{ProviderArgs, SamplingArgs, StructureArgs};
use crate::config::Config;
use crate::structure::{load_upload, parse_structure, ParsedStructure, Upload};

/// Read the structure file and pick the chain, falling back to the configured default.
pub(crate) fn load_structure(args: &StructureArgs, config: &Config) -> Result<(Upload, String)> {
    let upload = load_upload(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let chain = args
        .chain
        .clone()
        .unwrap_or_else(|| config.default_chain.clone());
    Ok((upload, chain))
}

pub(crate) fn parse_chain(args: &StructureArgs, config: &Config) -> Result<(Upload, ParsedStructure)> {
    let (upload, chain) = load_structure(args, config)?;
    let structure = parse_structure(&upload.content, &chain)?;
    Ok((upload, structure))
}

pub(crate) fn num_peptides(sampling: &SamplingArgs, config: &Config) -> usize {
    sampling.num_peptides.unwrap_or(config.num_peptides)
}

pub(crate) fn peptide_length(sampling: &SamplingArgs, config: &Config) -> usize {
    sampling.peptide_length.unwrap_or(config.peptide_length)
}

/// Merge provider flags over the config. `Ok(None)` when no API key was given.
pub(crate) fn provider_settings(args: &ProviderArgs, config: &Config) -> Result<Option<ProviderSettings>> {
    let Some(api_key) = args.api_key.as_deref() else {
        return Ok(None);
    };
    if api_key.trim().is_empty() {
        bail!("--api-key must not be empty");
    }

    let provider = args.provider.clone().unwrap_or_else(|| config.provider.clone());
    let mut settings = ProviderSettings::new(provider, api_key);
    settings.model_name = args
        .model_name
        .clone()
        .unwrap_or_else(|| config.model_name.clone());
    settings.endpoint = args.endpoint.clone().or_else(|| config.endpoint.clone());
    Ok(Some(settings))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_args(api_key: Option<&str>) -> ProviderArgs {
        ProviderArgs {
            provider: None,
            api_key: api_key.map(str::to_string),
            model_name: Some("claude".to_string()),
            endpoint: None,
        }
    }

    #[test]
    fn test_provider_settings_fall_back_to_config() {
        let config = Config {
            provider: "Mistral".to_string(),
            endpoint: Some("https://example.org".to_string()),
            ..Default::default()
        };
        let settings = provider_settings(&provider_args(Some("sk-test")), &config)
            .unwrap()
            .unwrap();
        assert_eq!(settings.provider, "Mistral");
        assert_eq!(settings.model_name, "claude");
        assert_eq!(settings.endpoint.as_deref(), Some("https://example.org"));
    }

    #[test]
    fn test_provider_settings_without_key() {
        let config = Config::default();
        assert!(provider_settings(&provider_args(None), &config).unwrap().is_none());
        assert!(provider_settings(&provider_args(Some(" ")), &config).is_err());
    }
}
