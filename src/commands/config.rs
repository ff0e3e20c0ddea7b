use anyhow::{anyhow, Result};

use crate::config::{config_path, Config};

pub fn run(init: bool, config: &Config) -> Result<()> {
    if init {
        let path = config.save().map_err(|e| anyhow!("Failed to save config: {}", e))?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    match config_path() {
        Some(path) => println!("# {}", path.display()),
        None => println!("# no config directory on this platform"),
    }
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
