#[allow(clippy::module_inception)]
mod config;

pub(crate) use config::project_dirs;
pub use config::{config_path, Config};
