//! Number formatting for reports.

/// Grouping separator used when none is configured.
pub const DEFAULT_THOUSANDS_SEPARATOR: char = ',';

/// Format a monetary amount with comma thousands separators and no cents.
///
/// Rounds half away from zero. Non-finite values print as zero.
pub fn format_currency(value: f64, symbol: &str) -> String {
    format_amount(value, symbol, DEFAULT_THOUSANDS_SEPARATOR)
}

/// [`format_currency`] with a caller-chosen grouping separator, e.g. `.` for
/// `€1.250.000` or a space for `1 250 000`.
pub fn format_amount(value: f64, symbol: &str, separator: char) -> String {
    let rounded = if value.is_finite() { value.round() } else { 0.0 };
    let grouped = group_thousands(&format!("{:.0}", rounded.abs()), separator);
    if rounded < 0.0 {
        format!("-{symbol}{grouped}")
    } else {
        format!("{symbol}{grouped}")
    }
}

pub fn format_percent(value: u8) -> String {
    format!("{value}%")
}

/// Format a blend weight such as `0.2` as `20%`.
pub fn format_weight(weight: f64) -> String {
    format!("{:.0}%", weight * 100.0)
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len_utf8());
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(3_054_000.0, "$"), "$3,054,000");
        assert_eq!(format_currency(999.0, "$"), "$999");
        assert_eq!(format_currency(1000.0, "$"), "$1,000");
        assert_eq!(format_currency(0.0, "$"), "$0");
    }

    #[test]
    fn drops_cents() {
        assert_eq!(format_currency(1234.5, "$"), "$1,235");
        assert_eq!(format_currency(1234.49, "€"), "€1,234");
    }

    #[test]
    fn negative_amounts_lead_with_minus() {
        assert_eq!(format_currency(-1_250.0, "$"), "-$1,250");
        assert_eq!(format_currency(-0.4, "$"), "$0");
    }

    #[test]
    fn non_finite_prints_zero() {
        assert_eq!(format_currency(f64::NAN, "$"), "$0");
        assert_eq!(format_currency(f64::INFINITY, ""), "0");
    }

    #[test]
    fn separator_is_configurable() {
        assert_eq!(format_amount(1_250_000.0, "€", '.'), "€1.250.000");
        assert_eq!(format_amount(-98_765.0, "", ' '), "-98 765");
        assert_eq!(format_amount(999.0, "$", '.'), "$999");
        assert_eq!(format_amount(1_000.0, "", '\u{202f}'), "1\u{202f}000");
    }

    #[test]
    fn weights_and_percentages() {
        assert_eq!(format_weight(0.2), "20%");
        assert_eq!(format_weight(0.3), "30%");
        assert_eq!(format_percent(65), "65%");
    }
}
