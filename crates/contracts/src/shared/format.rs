/// Utilities for currency and date formatting
///
/// The sales report and its PDF output share these so the on-screen values
/// and the printed values never drift apart.

/// Format a backend amount string as Brazilian currency.
/// Example: "12" -> "R$ 12,00"; empty input -> "R$ 0,00"
pub fn format_currency(amount: &str) -> String {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return "R$ 0,00".to_string();
    }
    format!("R$ {},00", trimmed)
}

/// Format a computed total as Brazilian currency.
/// Example: 30.0 -> "R$ 30,00", 30.5 -> "R$ 30.5,00"
pub fn format_currency_num(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("R$ {},00", amount as i64)
    } else {
        format!("R$ {},00", amount)
    }
}

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26.123Z" -> "15/03/2024"
pub fn format_date_br(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("12"), "R$ 12,00");
        assert_eq!(format_currency("150"), "R$ 150,00");
        assert_eq!(format_currency(""), "R$ 0,00");
        assert_eq!(format_currency("  "), "R$ 0,00");
    }

    #[test]
    fn test_format_currency_num() {
        assert_eq!(format_currency_num(30.0), "R$ 30,00");
        assert_eq!(format_currency_num(0.0), "R$ 0,00");
        assert_eq!(format_currency_num(30.5), "R$ 30.5,00");
    }

    #[test]
    fn test_format_date_br() {
        assert_eq!(format_date_br("2024-03-15"), "15/03/2024");
        assert_eq!(format_date_br("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_date_br("2024-12-31T23:59:59Z"), "31/12/2024");
    }

    #[test]
    fn test_invalid_date_passthrough() {
        assert_eq!(format_date_br("invalid"), "invalid");
        assert_eq!(format_date_br(""), "");
    }
}
