use crate::models::PeriodCounts;

/// Format a floating-point number with thousands separators and a fixed number
/// of decimal places.
///
/// # Examples
///
/// ```
/// use ticket_core::formatting::format_number;
///
/// assert_eq!(format_number(1234.5,  1), "1,234.5");
/// assert_eq!(format_number(1234567.0, 0), "1,234,567");
/// assert_eq!(format_number(0.0, 2), "0.00");
/// assert_eq!(format_number(-9876.5, 1), "-9,876.5");
/// ```
pub fn format_number(value: f64, decimals: u32) -> String {
    let negative = value < 0.0;
    let abs_value = value.abs();

    // Nudge by a scaled epsilon so exact binary midpoints round up.
    let factor = 10_f64.powi(decimals as i32);
    let epsilon = f64::EPSILON * abs_value * factor;
    let rounded = ((abs_value * factor) + epsilon).round() / factor;

    let integer_part = rounded.trunc() as u64;
    let frac_part = rounded - rounded.trunc();

    let grouped = group_thousands(&integer_part.to_string());

    let result = if decimals == 0 {
        grouped
    } else {
        // `frac_str` looks like "0.50"; keep only ".50".
        let frac_str = format!("{:.prec$}", frac_part, prec = decimals as usize);
        format!("{}{}", grouped, &frac_str[1..])
    };

    if negative {
        format!("-{}", result)
    } else {
        result
    }
}

/// Render a `[0, 1]` fraction as a percentage string.
///
/// # Examples
///
/// ```
/// use ticket_core::formatting::format_percentage;
///
/// assert_eq!(format_percentage(0.5, 1), "50.0%");
/// assert_eq!(format_percentage(1.0 / 3.0, 2), "33.33%");
/// assert_eq!(format_percentage(0.0, 0), "0%");
/// ```
pub fn format_percentage(fraction: f64, decimals: u32) -> String {
    format!("{}%", format_number(fraction * 100.0, decimals))
}

/// One `"key: count"` line per period, in period order.
pub fn format_period_counts(counts: &PeriodCounts) -> String {
    counts
        .iter()
        .map(|(period, count)| format!("{}: {}", period, format_number(*count as f64, 0)))
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────
