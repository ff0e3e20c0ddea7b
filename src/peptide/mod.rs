pub mod properties;
pub mod sampler;

pub use properties::{gravy, net_charge, ChargeClass, Hydrophobicity, PeptideFilter};
pub use sampler::{generate_random_peptides, PeptideSampler};

pub const DEFAULT_NUM_PEPTIDES: usize = 5;
pub const DEFAULT_PEPTIDE_LENGTH: usize = 8;
pub const MAX_NUM_PEPTIDES: usize = 15;
pub const MAX_PEPTIDE_LENGTH: usize = 50;
