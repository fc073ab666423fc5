use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{DisplayTarget, TreasuryDisplay};

/// Display state held in memory. Targets can be removed to model a page that
/// lacks some elements; writes to a removed target are dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryDisplay {
    pub value: Option<String>,
    pub percent: Option<String>,
    pub progress: Option<f64>,
    pub status: Option<String>,
    pub is_error: Option<bool>,
    pub updated_at: Option<DateTime<Utc>>,
    pub fallback_note: Option<String>,
    pub loading: bool,
    #[serde(skip)]
    missing: BTreeSet<DisplayTarget>,
}

impl Default for MemoryDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self {
            value: None,
            percent: None,
            progress: None,
            status: None,
            is_error: None,
            updated_at: None,
            fallback_note: None,
            loading: true,
            missing: BTreeSet::new(),
        }
    }

    pub fn without(mut self, target: DisplayTarget) -> Self {
        self.missing.insert(target);
        self
    }

    /// Progress bar width as a CSS-style percentage, e.g. `25%`.
    pub fn progress_width(&self) -> Option<String> {
        self.progress
            .map(|ratio| format!("{}%", (ratio * 100.0 * 1e4).round() / 1e4))
    }
}

impl TreasuryDisplay for MemoryDisplay {
    fn has_target(&self, target: DisplayTarget) -> bool {
        !self.missing.contains(&target)
    }

    fn set_value(&mut self, text: &str) {
        if self.has_target(DisplayTarget::Value) {
            self.value = Some(text.to_string());
        }
    }

    fn set_percent(&mut self, text: &str) {
        if self.has_target(DisplayTarget::Percent) {
            self.percent = Some(text.to_string());
        }
    }

    fn set_progress(&mut self, ratio: f64) {
        if self.has_target(DisplayTarget::Progress) {
            self.progress = Some(ratio);
        }
    }

    fn set_status(&mut self, text: &str) {
        if self.has_target(DisplayTarget::Status) {
            self.status = Some(text.to_string());
        }
    }

    fn set_error(&mut self, is_error: bool) {
        if self.has_target(DisplayTarget::Indicator) {
            self.is_error = Some(is_error);
        }
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        if self.has_target(DisplayTarget::UpdatedAt) {
            self.updated_at = Some(at);
        }
    }

    fn set_fallback_note(&mut self, note: &str) {
        if self.has_target(DisplayTarget::FallbackNote) {
            self.fallback_note = Some(note.to_string());
        }
    }

    fn clear_fallback_note(&mut self) {
        self.fallback_note = None;
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}
