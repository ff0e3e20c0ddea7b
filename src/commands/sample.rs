use anyhow::Result;
use log::warn;

use crate::cli::{SamplingArgs, StructureArgs};
use crate::config::Config;
use crate::peptide::{gravy, net_charge, PeptideSampler};

pub fn run(structure_args: StructureArgs, sampling: SamplingArgs, config: &Config) -> Result<()> {
    let (_, structure) = super::parse_chain(&structure_args, config)?;
    let count = super::num_peptides(&sampling, config);
    let length = super::peptide_length(&sampling, config);

    let mut sampler = match sampling.seed {
        Some(seed) => PeptideSampler::seeded(seed),
        None => PeptideSampler::new(),
    }
    .with_filter(sampling.filter());
    let peptides = sampler.sample(&structure.sequence, count, length);

    if peptides.is_empty() {
        warn!(
            "No {}-residue peptides could be drawn from chain {} ({} residues)",
            length,
            structure.chain_id,
            structure.len()
        );
        return Ok(());
    }
    if peptides.len() < count {
        warn!("Only {} of {} requested peptides are available", peptides.len(), count);
    }

    for peptide in &peptides {
        println!(
            "{}\tcharge {:+}\tGRAVY {:.2}",
            peptide,
            net_charge(peptide),
            gravy(peptide)
        );
    }

    Ok(())
}
