use chrono::{DateTime, Local, Utc};
use log::info;

use super::{DisplayTarget, TreasuryDisplay};

const BAR_WIDTH: usize = 40;

/// Writes every display update to the log.
#[derive(Debug, Default)]
pub struct ConsoleDisplay;

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self
    }
}

/// Text progress bar, e.g. `[##########..............................]`.
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let filled = (ratio * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

impl TreasuryDisplay for ConsoleDisplay {
    fn has_target(&self, _target: DisplayTarget) -> bool {
        true
    }

    fn set_value(&mut self, text: &str) {
        info!("[Treasury] Value: {}", text);
    }

    fn set_percent(&mut self, text: &str) {
        info!("[Treasury] Progress: {}", text);
    }

    fn set_progress(&mut self, ratio: f64) {
        info!("[Treasury] {}", progress_bar(ratio, BAR_WIDTH));
    }

    fn set_status(&mut self, text: &str) {
        info!("[Treasury] Status: {}", text);
    }

    fn set_error(&mut self, is_error: bool) {
        info!("[Treasury] Indicator: {}", if is_error { "red" } else { "green" });
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        info!("[Treasury] Updated: {}", at.with_timezone(&Local).format("%H:%M:%S"));
    }

    fn set_fallback_note(&mut self, note: &str) {
        info!("[Treasury] {}", note);
    }
}
