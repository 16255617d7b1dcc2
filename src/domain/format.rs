// Display formatting for currency and percentages

const CURRENCY_SYMBOL: &str = "₱";

/// Format a value as Philippine pesos with no fraction digits, e.g. `₱420,000`.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{}{}{}", sign, CURRENCY_SYMBOL, group_thousands(&digits))
}

/// Format a fraction as a percentage with one decimal, e.g. `0.1234` -> `12.3%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(420_000.0), "₱420,000");
        assert_eq!(format_currency(167_000.0), "₱167,000");
        assert_eq!(format_currency(999.0), "₱999");
        assert_eq!(format_currency(1_234_567.4), "₱1,234,567");
        assert_eq!(format_currency(0.0), "₱0");
    }

    #[test]
    fn test_format_currency_rounds_and_signs() {
        assert_eq!(format_currency(1499.5), "₱1,500");
        assert_eq!(format_currency(-2500.0), "-₱2,500");
        assert_eq!(format_currency(-0.2), "₱0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.1234), "12.3%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(-0.05), "-5.0%");
        assert_eq!(format_percent(1.0), "100.0%");
    }
}
