use anyhow::{Context, Result};

use crate::cli::{ProviderArgs, StructureArgs};
use crate::config::Config;
use crate::suggest::{suggest_peptides, ProviderRequest};

pub fn run(
    structure_args: StructureArgs,
    provider_args: ProviderArgs,
    num_peptides: Option<usize>,
    config: &Config,
) -> Result<()> {
    let settings = super::provider_settings(&provider_args, config)?
        .context("An API key is required to request suggestions (--api-key)")?;
    let (_, structure) = super::parse_chain(&structure_args, config)?;

    let request = ProviderRequest {
        sequence: &structure.sequence,
        residues: &structure.residues,
        provider: &settings.provider,
        api_key: &settings.api_key,
        model_name: &settings.model_name,
        endpoint: settings.endpoint.as_deref().filter(|e| !e.trim().is_empty()),
        num_peptides: num_peptides.unwrap_or(config.num_peptides),
    };

    for suggestion in suggest_peptides(&request) {
        println!("Peptide: {}", suggestion.sequence);
        if let Some(properties) = &suggestion.properties {
            for (label, value) in properties.entries() {
                println!("  {:<15} {}", label, value);
            }
        }
        println!("  {}", suggestion.explanation);
        println!();
    }

    Ok(())
}
