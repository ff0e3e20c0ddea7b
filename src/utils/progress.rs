use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

use crate::api::{ProgressCallback, ProgressEvent};

const SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";

/// A ticking spinner showing `message`.
pub(crate) fn spinner(message: impl Into<String>) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template(SPINNER_TEMPLATE)?);
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

/// Mirror pipeline progress events onto `pb`.
pub(crate) fn spinner_callback(pb: ProgressBar) -> ProgressCallback {
    Arc::new(move |event: ProgressEvent| match event {
        ProgressEvent::Started { task } => pb.set_message(format!("{}...", task)),
        ProgressEvent::Message { task, message } => pb.set_message(format!("{}: {}", task, message)),
        ProgressEvent::Completed { task } => pb.set_message(format!("{} done", task)),
        ProgressEvent::Error { task, error } => pb.set_message(format!("{} failed: {}", task, error)),
    })
}
