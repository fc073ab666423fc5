use crate::valuation::FundraisingGoal;

/// Formats a USD amount as en-US currency with no fraction digits, e.g. `$1,234,568`.
///
/// Rounds half away from zero. Only the returned string is rounded.
pub fn format_usd_value(total: f64) -> String {
    if total.is_nan() {
        return "$NaN".to_string();
    }
    if total.is_infinite() {
        return if total > 0.0 { "$∞".to_string() } else { "-$∞".to_string() };
    }

    let rounded = total.round();
    if rounded == 0.0 {
        return "$0".to_string();
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(&format!("{:.0}", rounded.abs())))
}

/// Progress toward `goal` with one decimal place, e.g. `25.0%`. Capped at `100.0%`.
pub fn format_percentage(total: f64, goal: FundraisingGoal) -> String {
    format_percent(goal.progress_percent(total))
}

pub(crate) fn format_percent(percent: f64) -> String {
    format!("{}%", to_fixed(percent, 1))
}

/// Fixed-point rendering that rounds ties upward on the exact decimal value of
/// `value`, so `0.25` becomes `0.3` and `1.005` (stored as 1.00499..) becomes `1.00`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let negative = value < 0.0;
    // Enough extra digits to show the exact binary value past the rounding position.
    let exact = format!("{:.*}", digits + 30, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .map(|b| b - b'0')
        .collect();
    let round_up = frac_part.as_bytes().get(digits).map_or(false, |d| *d >= b'5');

    if round_up {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, 1);
                break;
            }
            i -= 1;
            if kept[i] == 9 {
                kept[i] = 0;
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    let split = kept.len() - digits;
    let render = |ds: &[u8]| ds.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    let mut out = String::with_capacity(kept.len() + 2);
    if negative {
        out.push('-');
    }
    out.push_str(&render(&kept[..split]));
    if digits > 0 {
        out.push('.');
        out.push_str(&render(&kept[split..]));
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
