pub mod analysis;

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use crate::structure::StructureError;

/// Progress callback for front-ends
pub type ProgressCallback = Arc<dyn Fn(ProgressEvent) + Send + Sync>;

/// Progress events that can be sent to a GUI or the CLI
#[derive(Clone, Debug)]
pub enum ProgressEvent {
    Started { task: String },
    Message { task: String, message: String },
    Completed { task: String },
    Error { task: String, error: String },
}

/// Result types that can be serialized to JSON
pub type ApiResult<T> = Result<T, ApiError>;

/// API-level errors, one per failure a front-end has to present
#[derive(Debug, Error, Serialize)]
pub enum ApiError {
    #[error("Please upload a valid .pdb file (got {0})")]
    InvalidUpload(String),

    #[error("Chain {0} not found in structure")]
    ChainNotFound(String),

    #[error("Error parsing PDB: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<StructureError> for ApiError {
    fn from(err: StructureError) -> Self {
        match err {
            StructureError::InvalidUpload { file_name } => ApiError::InvalidUpload(file_name),
            StructureError::ChainNotFound { chain } => ApiError::ChainNotFound(chain),
            StructureError::Parse(message) => ApiError::Parse(message),
            StructureError::Io(e) => ApiError::Io(e.to_string()),
        }
    }
}

pub use analysis::{AnalysisInput, AnalysisOutput, PeptideAnalyzer, ProviderSettings};
