use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner on stderr for an ongoing compile.
///
/// The spinner ticks every 80ms until finished.
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Clear a spinner once its work succeeded; the caller reports the result.
pub fn finish_spinner(pb: &ProgressBar) {
    pb.finish_and_clear();
}

/// Finish a spinner with an error message.
pub fn finish_spinner_error(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(format!("failed: {message}"));
}
