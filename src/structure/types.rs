use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// One standard amino-acid residue of the selected chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Residue {
    /// Three-letter code, capitalized (`"Ala"`)
    pub name: String,
    /// Residue sequence number from the file
    pub id: Option<i64>,
    /// Position of the alpha-carbon, if the residue has one
    pub ca_coord: Option<[f64; 3]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedStructure {
    pub chain_id: String,
    pub sequence: String,
    pub residues: Vec<Residue>,
}

impl ParsedStructure {
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Number of residues that carry an alpha-carbon coordinate.
    pub fn resolved_ca_count(&self) -> usize {
        self.residues.iter().filter(|r| r.ca_coord.is_some()).count()
    }

    /// Plain-text residue listing, one line per residue.
    pub fn residue_summary(&self) -> String {
        let mut out = String::new();
        for residue in &self.residues {
            let id = residue
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());
            let coord = match residue.ca_coord {
                Some([x, y, z]) => format!("CA ({:.3}, {:.3}, {:.3})", x, y, z),
                None => "CA missing".to_string(),
            };
            // writing to a String cannot fail
            let _ = writeln!(out, "{:>6}  {}  {}", id, residue.name, coord);
        }
        out
    }
}
