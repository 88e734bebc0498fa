//! Display helpers for normalized flight records.

/// Renders a minute count as `2d 3h 5m`, always printing at least minutes.
pub fn format_duration_minutes(minutes: i64) -> String {
    let mut remaining = minutes;
    let days = remaining / (24 * 60);
    remaining %= 24 * 60;
    let hours = remaining / 60;
    let mins = remaining % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if mins > 0 || parts.is_empty() {
        parts.push(format!("{}m", mins));
    }
    parts.join(" ")
}

/// Renders an amount with dot-separated thousands and a currency prefix,
/// e.g. `IDR 1.250.000`.
pub fn format_money(amount: i64, currency: &str) -> String {
    let digits = amount.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{} {}{}", currency, sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration_minutes(0), "0m");
        assert_eq!(format_duration_minutes(45), "45m");
        assert_eq!(format_duration_minutes(60), "1h");
        assert_eq!(format_duration_minutes(100), "1h 40m");
        assert_eq!(format_duration_minutes(24 * 60 + 185), "1d 3h 5m");
    }

    #[test]
    fn money_formatting() {
        assert_eq!(format_money(950, "IDR"), "IDR 950");
        assert_eq!(format_money(1_250_000, "IDR"), "IDR 1.250.000");
        assert_eq!(format_money(12_500, "USD"), "USD 12.500");
    }
}
