use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::peptide::{ChargeClass, Hydrophobicity, PeptideFilter, MAX_NUM_PEPTIDES, MAX_PEPTIDE_LENGTH};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the primary sequence and residue summary of a chain
    Sequence {
        #[command(flatten)]
        structure: StructureArgs,

        /// Also write the sequence as FASTA
        #[arg(long = "fasta")]
        fasta: Option<PathBuf>,
    },

    /// Draw random distinct peptides from a chain
    Sample {
        #[command(flatten)]
        structure: StructureArgs,

        #[command(flatten)]
        sampling: SamplingArgs,
    },

    /// Ask a provider for peptide suggestions
    Suggest {
        #[command(flatten)]
        structure: StructureArgs,

        #[command(flatten)]
        provider: ProviderArgs,

        /// Number of peptides to suggest (1-15)
        #[arg(short = 'n', long = "count", value_parser = parse_num_peptides)]
        num_peptides: Option<usize>,
    },

    /// Run the full pipeline and write an HTML report
    Report {
        #[command(flatten)]
        structure: StructureArgs,

        #[command(flatten)]
        sampling: SamplingArgs,

        #[command(flatten)]
        provider: ProviderArgs,

        /// Output file for the HTML report
        #[arg(short = 'o', long = "output", default_value = "peptide_report.html")]
        output_file: PathBuf,

        /// Also write the analysis as JSON
        #[arg(long = "json")]
        json_file: Option<PathBuf>,
    },

    /// Download a structure from the RCSB PDB
    Fetch {
        /// Four-character PDB id, e.g. 1CRN
        pdb_id: String,

        /// Copy the structure here instead of only caching it
        #[arg(short = 'o', long = "output")]
        output_file: Option<PathBuf>,
    },

    /// Show the effective configuration
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        init: bool,
    },
}

#[derive(ClapArgs, Clone, Debug)]
pub struct StructureArgs {
    /// Structure file (.pdb)
    pub file: PathBuf,

    /// Target chain identifier [default: A]
    #[arg(short = 'c', long = "chain")]
    pub chain: Option<String>,
}

#[derive(ClapArgs, Clone, Debug)]
pub struct SamplingArgs {
    /// Number of peptides to generate (1-15)
    #[arg(short = 'n', long = "count", value_parser = parse_num_peptides)]
    pub num_peptides: Option<usize>,

    /// Peptide length (1-50)
    #[arg(short = 'l', long = "length", value_parser = parse_peptide_length)]
    pub peptide_length: Option<usize>,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep only peptides with this net charge
    #[arg(long, value_enum)]
    pub charge: Option<ChargeClass>,

    /// Keep only peptides with this hydrophobicity
    #[arg(long, value_enum)]
    pub hydrophobicity: Option<Hydrophobicity>,
}

impl SamplingArgs {
    pub fn filter(&self) -> PeptideFilter {
        PeptideFilter {
            charge: self.charge,
            hydrophobicity: self.hydrophobicity,
        }
    }
}

#[derive(ClapArgs, Clone, Debug)]
pub struct ProviderArgs {
    /// Provider name: OpenAI, Anthropic, Groq or Mistral
    #[arg(short = 'p', long = "provider")]
    pub provider: Option<String>,

    /// Provider API key
    #[arg(long = "api-key")]
    pub api_key: Option<String>,

    /// Model name [default: gpt-4]
    #[arg(short = 'm', long = "model")]
    pub model_name: Option<String>,

    /// Provider API endpoint
    #[arg(long)]
    pub endpoint: Option<String>,
}

fn parse_bounded(s: &str, max: usize) -> Result<usize, String> {
    let value: usize = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if !(1..=max).contains(&value) {
        return Err(format!("must be between 1 and {}", max));
    }
    Ok(value)
}

fn parse_num_peptides(s: &str) -> Result<usize, String> {
    parse_bounded(s, MAX_NUM_PEPTIDES)
}

fn parse_peptide_length(s: &str) -> Result<usize, String> {
    parse_bounded(s, MAX_PEPTIDE_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_bounds() {
        assert_eq!(parse_num_peptides("15"), Ok(15));
        assert!(parse_num_peptides("0").is_err());
        assert!(parse_num_peptides("16").is_err());
        assert!(parse_peptide_length("abc").is_err());
    }

    #[test]
    fn test_report_args() {
        let args = Args::try_parse_from([
            "peptide-tools",
            "report",
            "1crn.pdb",
            "-c",
            "B",
            "-n",
            "3",
            "--charge",
            "positive",
            "-p",
            "Groq",
            "--api-key",
            "sk-test",
        ])
        .unwrap();

        match args.command {
            Commands::Report {
                structure,
                sampling,
                provider,
                output_file,
                json_file,
            } => {
                assert_eq!(structure.chain.as_deref(), Some("B"));
                assert_eq!(sampling.num_peptides, Some(3));
                assert_eq!(sampling.filter().charge, Some(ChargeClass::Positive));
                assert_eq!(provider.provider.as_deref(), Some("Groq"));
                assert_eq!(output_file, PathBuf::from("peptide_report.html"));
                assert!(json_file.is_none());
            }
            _ => panic!("expected report"),
        }
    }
}
