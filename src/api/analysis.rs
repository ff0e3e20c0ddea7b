use log::info;
use serde::Serialize;

use crate::api::{ApiError, ApiResult, ProgressCallback, ProgressEvent};
use crate::peptide::{PeptideFilter, PeptideSampler, DEFAULT_NUM_PEPTIDES, DEFAULT_PEPTIDE_LENGTH};
use crate::structure::{parse_structure, ParsedStructure, Upload, DEFAULT_CHAIN};
use crate::suggest::{suggest_peptides, ProviderRequest, Suggestion, DEFAULT_MODEL};

const TASK_PARSE: &str = "Parsing structure";
const TASK_SAMPLE: &str = "Sampling peptides";
const TASK_SUGGEST: &str = "Requesting suggestions";

/// Which provider to ask for suggestions, and with what credentials.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub provider: String,
    pub api_key: String,
    pub model_name: String,
    pub endpoint: Option<String>,
}

impl ProviderSettings {
    pub fn new(provider: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            api_key: api_key.into(),
            model_name: DEFAULT_MODEL.to_string(),
            endpoint: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub upload: Upload,
    pub chain_id: String,
    pub num_peptides: usize,
    pub peptide_length: usize,
    /// Fixed seed for reproducible sampling
    pub seed: Option<u64>,
    pub filter: PeptideFilter,
    pub provider: Option<ProviderSettings>,
}

impl AnalysisInput {
    pub fn new(upload: Upload) -> Self {
        Self {
            upload,
            chain_id: DEFAULT_CHAIN.to_string(),
            num_peptides: DEFAULT_NUM_PEPTIDES,
            peptide_length: DEFAULT_PEPTIDE_LENGTH,
            seed: None,
            filter: PeptideFilter::default(),
            provider: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutput {
    pub structure: ParsedStructure,
    pub random_peptides: Vec<String>,
    pub suggestions: Vec<Suggestion>,
}

/// Runs parse, sampling and suggestion for one uploaded structure.
#[derive(Default)]
pub struct PeptideAnalyzer {
    progress_callback: Option<ProgressCallback>,
}

impl PeptideAnalyzer {
    pub fn new() -> Self {
        Self { progress_callback: None }
    }

    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub fn analyze(&self, input: &AnalysisInput) -> ApiResult<AnalysisOutput> {
        if let Some(settings) = &input.provider {
            if settings.api_key.trim().is_empty() {
                return Err(ApiError::InvalidInput(format!(
                    "an API key is required for {} suggestions",
                    settings.provider
                )));
            }
        }

        self.emit_progress(ProgressEvent::Started {
            task: TASK_PARSE.to_string(),
        });
        let structure = match parse_structure(&input.upload.content, &input.chain_id) {
            Ok(structure) => structure,
            Err(e) => {
                let err = ApiError::from(e);
                self.emit_progress(ProgressEvent::Error {
                    task: TASK_PARSE.to_string(),
                    error: err.to_string(),
                });
                return Err(err);
            }
        };
        self.emit_progress(ProgressEvent::Message {
            task: TASK_PARSE.to_string(),
            message: format!(
                "chain {}: {} residues",
                structure.chain_id,
                structure.len()
            ),
        });
        self.emit_progress(ProgressEvent::Completed {
            task: TASK_PARSE.to_string(),
        });

        self.emit_progress(ProgressEvent::Started {
            task: TASK_SAMPLE.to_string(),
        });
        let mut sampler = match input.seed {
            Some(seed) => PeptideSampler::seeded(seed),
            None => PeptideSampler::new(),
        }
        .with_filter(input.filter);
        let random_peptides =
            sampler.sample(&structure.sequence, input.num_peptides, input.peptide_length);
        self.emit_progress(ProgressEvent::Completed {
            task: TASK_SAMPLE.to_string(),
        });

        let suggestions = match &input.provider {
            Some(settings) => {
                self.emit_progress(ProgressEvent::Started {
                    task: TASK_SUGGEST.to_string(),
                });
                let request = ProviderRequest {
                    sequence: &structure.sequence,
                    residues: &structure.residues,
                    provider: &settings.provider,
                    api_key: &settings.api_key,
                    model_name: &settings.model_name,
                    endpoint: settings
                        .endpoint
                        .as_deref()
                        .filter(|e| !e.trim().is_empty()),
                    num_peptides: input.num_peptides,
                };
                let suggestions = suggest_peptides(&request);
                self.emit_progress(ProgressEvent::Completed {
                    task: TASK_SUGGEST.to_string(),
                });
                suggestions
            }
            None => Vec::new(),
        };

        info!(
            "{}: chain {} with {} residues, {} random peptides, {} suggestions",
            input.upload.file_name,
            structure.chain_id,
            structure.len(),
            random_peptides.len(),
            suggestions.len()
        );

        Ok(AnalysisOutput {
            structure,
            random_peptides,
            suggestions,
        })
    }

    fn emit_progress(&self, event: ProgressEvent) {
        if let Some(callback) = &self.progress_callback {
            callback(event);
        }
    }
}
