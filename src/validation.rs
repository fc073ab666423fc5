use crate::error::{Error, Result};

/// A mint key is usable when it is present and non-empty.
pub fn is_valid_mint(mint: Option<&str>) -> bool {
    matches!(mint, Some(m) if !m.is_empty())
}

/// An amount contributes to aggregation only when it is finite and strictly positive.
pub fn is_positive_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

pub fn validate_goal(goal: f64) -> Result<f64> {
    if !goal.is_finite() {
        return Err(Error::ConfigError(format!("Fundraising goal must be finite, got {}", goal)));
    }
    if goal <= 0.0 {
        return Err(Error::ConfigError(format!("Fundraising goal must be positive, got {}", goal)));
    }
    Ok(goal)
}

pub fn validate_mint(mint: &str) -> Result<()> {
    if mint.trim().is_empty() {
        return Err(Error::ValidationError("Mint cannot be empty".to_string()));
    }
    if mint.chars().any(char::is_whitespace) {
        return Err(Error::ValidationError(format!("Mint '{}' contains whitespace", mint)));
    }
    Ok(())
}

/// Parses a whole string as a number, ignoring surrounding whitespace.
/// Returns `None` for empty input, trailing garbage or non-finite results.
pub fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses the longest leading decimal literal of `input`, the way a price feed
/// string such as `"150.00"` or `"1.5e2USD"` is read. Leading whitespace is skipped.
/// Returns `None` when no digits are found or the value is not finite.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent is only consumed when at least one exponent digit follows.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
