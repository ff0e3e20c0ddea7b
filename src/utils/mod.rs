pub mod cache;
pub(crate) mod progress;
