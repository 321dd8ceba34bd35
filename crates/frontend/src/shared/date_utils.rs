//! Date helpers for the filter inputs.

use chrono::Local;

/// Current local date as the `YYYY-MM-DD` string that `<input type="date">`
/// expects as its value.
pub fn today_ymd() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_ymd_shape() {
        let today = today_ymd();
        assert_eq!(today.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }
}
