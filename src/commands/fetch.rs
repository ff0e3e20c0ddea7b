use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::utils::cache::StructureCache;

pub fn run(pdb_id: String, output_file: Option<PathBuf>, config: &Config) -> Result<()> {
    let cache = StructureCache::new(config)?;
    let cached = cache.get_structure(&pdb_id)?;

    match output_file {
        Some(output_file) => {
            fs::copy(&cached, &output_file).with_context(|| {
                format!("Failed to copy {} to {}", cached.display(), output_file.display())
            })?;
            println!("{}", output_file.display());
        }
        None => println!("{}", cached.display()),
    }

    Ok(())
}
