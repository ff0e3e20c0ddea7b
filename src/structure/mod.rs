pub mod amino_acid;
pub mod parser;
pub mod types;
pub mod validate;

pub use amino_acid::{three_to_one, AminoAcid};
pub use parser::{parse_structure, DEFAULT_CHAIN};
pub use types::{ParsedStructure, Residue};
pub use validate::{is_structure_file, load_upload, read_structure_file, Upload};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StructureError {
    #[error("Please upload a valid .pdb file (got {file_name})")]
    InvalidUpload { file_name: String },

    #[error("Chain {chain} not found in structure")]
    ChainNotFound { chain: String },

    #[error("Error parsing PDB: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
