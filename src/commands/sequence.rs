use anyhow::Result;
use log::info;
use std::path::PathBuf;

use crate::cli::StructureArgs;
use crate::config::Config;
use crate::export::fasta::write_fasta;

pub fn run(structure_args: StructureArgs, fasta: Option<PathBuf>, config: &Config) -> Result<()> {
    let (upload, structure) = super::parse_chain(&structure_args, config)?;

    println!(
        ">{} chain {} ({} residues, {} with CA)",
        upload.file_name,
        structure.chain_id,
        structure.len(),
        structure.resolved_ca_count()
    );
    println!("{}", structure.sequence);
    println!();
    println!("{}", structure.residue_summary());

    if let Some(path) = fasta {
        write_fasta(&path, &upload.file_name, &structure)?;
        info!("Wrote FASTA to {}", path.display());
    }

    Ok(())
}
