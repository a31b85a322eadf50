//! Display formatting for timestamps and amounts shown in list cells

use chrono::{DateTime, Utc};

/// "2024-03-15 14:02"
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_datetime_opt(value: Option<&DateTime<Utc>>) -> String {
    value.map(format_datetime).unwrap_or_else(|| "-".to_string())
}

/// Two decimals with thousands separators: 1234.5 -> "1,234.50"
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((&fixed, "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let value = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&value), "2024-03-15 14:02");
        assert_eq!(format_datetime_opt(Some(&value)), "2024-03-15 14:02");
        assert_eq!(format_datetime_opt(None), "-");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(49.5), "49.50");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(1_000_000.0), "1,000,000.00");
        assert_eq!(format_amount(-987.654), "-987.65");
    }
}
