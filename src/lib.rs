pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod export;
pub mod peptide;
pub mod report;
pub mod structure;
pub mod suggest;
pub mod utils;

// Re-export main API
pub use api::*;
