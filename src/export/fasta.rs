use anyhow::{Context, Result};
use bio::io::fasta;
use std::io::Write;
use std::path::Path;

use crate::structure::ParsedStructure;

/// FASTA record id for a chain, e.g. `1crn_A`.
pub fn record_id(file_name: &str, chain_id: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());
    format!("{}_{}", stem, chain_id)
}

pub fn write_fasta_to<W: Write>(writer: W, file_name: &str, structure: &ParsedStructure) -> Result<()> {
    let mut writer = fasta::Writer::new(writer);
    let description = format!("chain {} | {} residues", structure.chain_id, structure.len());
    writer.write(
        &record_id(file_name, &structure.chain_id),
        Some(&description),
        structure.sequence.as_bytes(),
    )?;
    writer.flush()?;
    Ok(())
}

pub fn write_fasta(path: impl AsRef<Path>, file_name: &str, structure: &ParsedStructure) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_fasta_to(file, file_name, structure)
}
