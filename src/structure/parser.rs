//! Residue and sequence extraction from PDB text.
//!
//! Parsing itself is handed to `pdbtbx`; this module only selects the chain,
//! drops everything that is not one of the twenty standard amino acids and
//! builds the sequence and residue list from what is left.

use std::io::BufReader;

use log::debug;
use pdbtbx::{Format, ReadOptions, StrictnessLevel, PDB};

use super::amino_acid::AminoAcid;
use super::types::{ParsedStructure, Residue};
use super::StructureError;

pub const DEFAULT_CHAIN: &str = "A";

const ALPHA_CARBON: &str = "CA";

/// Parse `text` and extract the sequence and residues of `chain_id` in the first model.
pub fn parse_structure(text: &str, chain_id: &str) -> Result<ParsedStructure, StructureError> {
    let pdb = read_pdb(text)?;
    extract_chain(&pdb, chain_id)
}

fn read_pdb(text: &str) -> Result<PDB, StructureError> {
    let reader = BufReader::new(text.as_bytes());
    // Files in the wild rarely pass the stricter levels
    let (pdb, warnings) = ReadOptions::default()
        .set_level(StrictnessLevel::Loose)
        .set_format(Format::Pdb)
        .read_raw(reader)
        .map_err(|errors| {
            StructureError::Parse(
                errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;

    for warning in &warnings {
        debug!("pdb diagnostic: {}", warning);
    }

    Ok(pdb)
}

fn extract_chain(pdb: &PDB, chain_id: &str) -> Result<ParsedStructure, StructureError> {
    let model = pdb
        .model(0)
        .ok_or_else(|| StructureError::Parse("structure contains no models".to_string()))?;

    let chain = model
        .chains()
        .find(|c| c.id() == chain_id)
        .ok_or_else(|| StructureError::ChainNotFound {
            chain: chain_id.to_string(),
        })?;

    let mut sequence = String::new();
    let mut residues = Vec::new();

    for residue in chain.residues() {
        // Conformers of one residue may disagree on the name (point-mutation
        // altlocs); the first conformer decides both the name and the CA.
        let Some(conformer) = residue.conformers().next() else {
            continue;
        };
        let Some(amino_acid) = AminoAcid::from_three_letter(conformer.name()) else {
            continue;
        };

        let ca_coord = conformer
            .atoms()
            .find(|atom| atom.name().trim() == ALPHA_CARBON)
            .map(|atom| {
                let (x, y, z) = atom.pos();
                [x, y, z]
            });

        residues.push(Residue {
            name: amino_acid.capitalized(),
            id: i64::try_from(residue.serial_number()).ok(),
            ca_coord,
        });
        sequence.push(amino_acid.one_letter());
    }

    debug!(
        "chain {}: kept {} of {} residues",
        chain_id,
        residues.len(),
        chain.residue_count()
    );

    Ok(ParsedStructure {
        chain_id: chain_id.to_string(),
        sequence,
        residues,
    })
}
