//! Boundary toward whatever paints the treasury widget.
//!
//! The pipeline only talks to [`TreasuryDisplay`]; concrete renderers decide
//! which targets they actually have.

use chrono::Utc;
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};

use crate::valuation::Valuation;
use crate::validation::parse_float_prefix;

pub mod console;
pub mod memory;

pub use console::ConsoleDisplay;
pub use memory::MemoryDisplay;

pub const FALLBACK_NOTE: &str = "*Using cached data (RPC limit)";
pub const STALE_MARKER: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayTarget {
    Value,
    Percent,
    Progress,
    Status,
    Indicator,
    UpdatedAt,
    FallbackNote,
}

impl DisplayTarget {
    /// Targets an update cannot proceed without.
    pub const REQUIRED: [DisplayTarget; 4] = [
        DisplayTarget::Value,
        DisplayTarget::Percent,
        DisplayTarget::Progress,
        DisplayTarget::Status,
    ];
}

#[cfg_attr(test, mockall::automock)]
pub trait TreasuryDisplay {
    fn has_target(&self, target: DisplayTarget) -> bool;

    fn set_value(&mut self, text: &str);

    fn set_percent(&mut self, text: &str);

    /// `ratio` is the filled fraction of the progress bar, in `[0, 1]`.
    fn set_progress(&mut self, ratio: f64);

    fn set_status(&mut self, text: &str);

    fn set_error(&mut self, is_error: bool);

    fn set_updated_at(&mut self, at: chrono::DateTime<Utc>);

    fn set_fallback_note(&mut self, _note: &str) {}

    fn clear_fallback_note(&mut self) {}

    fn set_loading(&mut self, _loading: bool) {}
}

/// Reads the numeric part of a percentage label such as `25.0%` or `22.5%*`.
/// Only a trailing `%` (after an optional stale marker) is stripped. Clamped to
/// `[0, 100]`; unreadable labels give 0.
pub fn progress_percent_from_label(percent: &str) -> f64 {
    let number = percent.strip_suffix(STALE_MARKER).unwrap_or(percent);
    let number = number.strip_suffix('%').unwrap_or(number);
    match parse_float_prefix(number) {
        Some(value) => value.clamp(0.0, 100.0),
        None => {
            warn!("[Treasury] Invalid progress bar percentage: {:?}", percent);
            0.0
        }
    }
}

/// Writes one refresh result to `display`.
///
/// Returns `false` without touching anything when a required target is missing,
/// and `false` after updating the remaining fields when `value` or `percent` is
/// empty. An unreadable `percent` resets the progress bar to 0 and does not fail
/// the update.
pub fn update_display<D>(display: &mut D, value: &str, percent: &str, status: &str, is_error: bool) -> bool
where
    D: TreasuryDisplay + ?Sized,
{
    let missing: Vec<DisplayTarget> = DisplayTarget::REQUIRED
        .iter()
        .copied()
        .filter(|target| !display.has_target(*target))
        .collect();
    if !missing.is_empty() {
        error!("[Treasury] Required display targets not found: {:?}", missing);
        return false;
    }

    let mut complete = true;

    if value.is_empty() {
        warn!("[Treasury] Invalid value provided: {:?}", value);
        complete = false;
    } else {
        display.set_value(value);
    }

    if percent.is_empty() {
        warn!("[Treasury] Invalid percentage provided: {:?}", percent);
        complete = false;
    } else {
        display.set_percent(percent);
    }

    display.set_progress(progress_percent_from_label(percent) / 100.0);

    if !status.is_empty() {
        display.set_status(status);
    }

    if display.has_target(DisplayTarget::Indicator) {
        display.set_error(is_error);
    }

    if display.has_target(DisplayTarget::UpdatedAt) {
        display.set_updated_at(Utc::now());
    }

    if display.has_target(DisplayTarget::FallbackNote) {
        if is_error && value.contains(STALE_MARKER) {
            display.set_fallback_note(FALLBACK_NOTE);
        } else {
            display.clear_fallback_note();
        }
    }

    display.set_loading(false);

    debug!("[Treasury] Components updated: {}, {}, {}", value, percent, status);
    complete
}

/// Paints a fresh valuation.
pub fn render<D>(display: &mut D, valuation: &Valuation, status: &str) -> bool
where
    D: TreasuryDisplay + ?Sized,
{
    update_display(
        display,
        &valuation.formatted_value(),
        &valuation.formatted_percent(),
        status,
        false,
    )
}

/// Paints a valuation that could not be refreshed, marking both labels as stale.
pub fn render_stale<D>(display: &mut D, valuation: &Valuation, status: &str) -> bool
where
    D: TreasuryDisplay + ?Sized,
{
    update_display(
        display,
        &format!("{}{}", valuation.formatted_value(), STALE_MARKER),
        &format!("{}{}", valuation.formatted_percent(), STALE_MARKER),
        status,
        true,
    )
}
