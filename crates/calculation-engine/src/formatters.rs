//! Display formatting for parameter values.
//!
//! Every formatter returns the final display string. Currency helpers keep
//! the dollar sign out so callers can prepend "$" where the layout wants it.

use chrono::NaiveDate;

/// Thousands-separate an integer: 8500 → "8,500".
pub fn format_thousands(n: i64) -> String {
    // unsigned_abs: i64::MIN has no i64 absolute value.
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    let first_group = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - first_group) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Cents → dollars with two decimals and thousands separators, no symbol:
/// 99999 → "999.99".
pub fn format_cents(cents: i64) -> String {
    let negative = cents < 0;
    let abs = cents.unsigned_abs();
    let dollars = format_thousands((abs / 100) as i64);
    let remainder = abs % 100;
    format!(
        "{}{}.{:02}",
        if negative { "-" } else { "" },
        dollars,
        remainder
    )
}

/// Prepend the dollar sign: "999.99" → "$999.99".
pub fn to_dollar_string(amount: impl AsRef<str>) -> String {
    format!("${}", amount.as_ref())
}

/// Decimal dollars → "$1,050.25".
pub fn format_dollars(amount: f64) -> String {
    to_dollar_string(format_cents((amount * 100.0).round() as i64))
}

/// Millicents → dollars at two decimals: 272700 → "2.73".
/// Used for the EIA fuel price detail.
pub fn format_dollar_from_millicents(millicents: i64) -> String {
    format_cents(((millicents as f64) / 1000.0).round() as i64)
}

/// Pounds with unit suffix: 8500 → "8,500 lbs".
pub fn format_weight(lbs: i64) -> String {
    format!("{} lbs", format_thousands(lbs))
}

/// Pounds → hundredweight, rounded to the nearest whole cwt: 8500 → "85 cwt".
pub fn format_weight_cwt_from_lbs(lbs: i64) -> String {
    format!("{} cwt", (lbs as f64 / 100.0).round() as i64)
}

/// "09 Mar 2020" style display dates.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Peak-season label from the raw IsPeak value.
pub fn format_peak_label(is_peak: bool) -> &'static str {
    if is_peak {
        "peak"
    } else {
        "non-peak"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(210), "210");
        assert_eq!(format_thousands(8500), "8,500");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(-8000), "-8,000");
    }

    #[test]
    fn test_format_thousands_extremes() {
        assert_eq!(format_thousands(i64::MAX), "9,223,372,036,854,775,807");
        assert_eq!(format_thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(99999), "999.99");
        assert_eq!(format_cents(100), "1.00");
        assert_eq!(format_cents(5), "0.05");
        assert_eq!(format_cents(647325), "6,473.25");
    }

    #[test]
    fn test_format_dollars() {
        assert_eq!(format_dollars(1050.25), "$1,050.25");
        assert_eq!(format_dollars(0.0), "$0.00");
    }

    #[test]
    fn test_format_dollar_from_millicents() {
        // 272700 millicents = $2.727 → displayed at two decimals
        assert_eq!(format_dollar_from_millicents(272700), "2.73");
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(8500), "8,500 lbs");
        assert_eq!(format_weight(8000), "8,000 lbs");
    }

    #[test]
    fn test_format_weight_cwt_rounds_to_nearest() {
        assert_eq!(format_weight_cwt_from_lbs(8500), "85 cwt");
        assert_eq!(format_weight_cwt_from_lbs(8449), "84 cwt");
        assert_eq!(format_weight_cwt_from_lbs(8450), "85 cwt");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2020, 3, 9).unwrap();
        assert_eq!(format_date(date), "09 Mar 2020");
    }

    #[test]
    fn test_format_peak_label() {
        assert_eq!(format_peak_label(true), "peak");
        assert_eq!(format_peak_label(false), "non-peak");
    }
}
