pub mod common;

use crate::display::{render, render_stale, MemoryDisplay};
use crate::models::NATIVE_SOL_MINT;
use common::{create_test_valuator, mixed_treasury, price_table, USDC_MINT};

#[test]
fn test_mixed_treasury_end_to_end() {
    let valuator = create_test_valuator();
    let (holdings, prices) = mixed_treasury();

    let valuation = valuator.value(&holdings, &prices);
    assert_eq!(valuation.total_usd, 500000.0);
    assert_eq!(valuation.formatted_value(), "$500,000");
    assert_eq!(valuation.formatted_percent(), "25.0%");

    let mut display = MemoryDisplay::new();
    assert!(render(&mut display, &valuation, "Live Progress"));
    assert_eq!(display.value.as_deref(), Some("$500,000"));
    assert_eq!(display.progress_width().as_deref(), Some("25%"));
}

#[test]
fn test_stale_render_marks_labels() {
    let valuator = create_test_valuator();
    let holdings = vec![crate::models::TokenHolding::new(NATIVE_SOL_MINT, 4500.0)];
    let prices = price_table(&[(NATIVE_SOL_MINT, "100"), (USDC_MINT, "1")]);

    let valuation = valuator.value(&holdings, &prices);
    let mut display = MemoryDisplay::new();
    assert!(render_stale(&mut display, &valuation, "Connection Limited"));
    assert_eq!(display.value.as_deref(), Some("$450,000*"));
    assert_eq!(display.percent.as_deref(), Some("22.5%*"));
    assert_eq!(display.is_error, Some(true));
    assert!(display.fallback_note.is_some());
}
