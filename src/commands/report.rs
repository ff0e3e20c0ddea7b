use anyhow::Result;
use log::info;
use std::path::PathBuf;

use crate::api::{AnalysisInput, PeptideAnalyzer};
use crate::cli::{ProviderArgs, SamplingArgs, StructureArgs};
use crate::config::Config;
use crate::export::{AnalysisExport, ExportMetadata};
use crate::report::write_html_report;
use crate::utils::progress::{spinner, spinner_callback};

pub fn run(
    structure_args: StructureArgs,
    sampling: SamplingArgs,
    provider_args: ProviderArgs,
    output_file: PathBuf,
    json_file: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let (upload, chain_id) = super::load_structure(&structure_args, config)?;
    let provider = super::provider_settings(&provider_args, config)?;

    let mut input = AnalysisInput::new(upload);
    input.chain_id = chain_id;
    input.num_peptides = super::num_peptides(&sampling, config);
    input.peptide_length = super::peptide_length(&sampling, config);
    input.seed = sampling.seed;
    input.filter = sampling.filter();
    input.provider = provider;

    let progress = spinner("Analyzing structure...")?;
    let analyzer = PeptideAnalyzer::new().with_progress(spinner_callback(progress.clone()));
    let output = match analyzer.analyze(&input) {
        Ok(output) => output,
        Err(e) => {
            progress.abandon();
            return Err(e.into());
        }
    };
    progress.finish_and_clear();

    write_html_report(&input.upload, &output, &output_file)?;
    info!("Report written to {}", output_file.display());

    if let Some(json_file) = json_file {
        let metadata = ExportMetadata {
            peptide_length: input.peptide_length,
            seed: input.seed,
            provider: input.provider.as_ref().map(|p| p.provider.clone()),
            model_name: input.provider.as_ref().map(|p| p.model_name.clone()),
        };
        AnalysisExport::new(input.upload.file_name.clone(), output, metadata).write_json(&json_file)?;
        info!("Analysis written to {}", json_file.display());
    }

    Ok(())
}
