use clap::Parser;
use env_logger::Env;

use peptide_tools::cli::{self, Commands};
use peptide_tools::commands;
use peptide_tools::config::Config;

fn main() {
    let args = cli::Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    let config = Config::load();

    let result = match args.command {
        Commands::Sequence { structure, fasta } => commands::sequence::run(structure, fasta, &config),
        Commands::Sample {
            structure,
            sampling,
        } => commands::sample::run(structure, sampling, &config),
        Commands::Suggest {
            structure,
            provider,
            num_peptides,
        } => commands::suggest::run(structure, provider, num_peptides, &config),
        Commands::Report {
            structure,
            sampling,
            provider,
            output_file,
            json_file,
        } => commands::report::run(structure, sampling, provider, output_file, json_file, &config),
        Commands::Fetch {
            pdb_id,
            output_file,
        } => commands::fetch::run(pdb_id, output_file, &config),
        Commands::Config { init } => commands::config::run(init, &config),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
