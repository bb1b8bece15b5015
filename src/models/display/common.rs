//! Common display utilities and helpers

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// `-` for missing values
pub fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Two decimals, with the currency code when known
pub fn money(amount: f64, currency: Option<&str>) -> String {
    match currency {
        Some(code) => format!("{:.2} {}", amount, code),
        None => format!("{:.2}", amount),
    }
}

/// Shorten a backend timestamp to `YYYY-MM-DD HH:MM`.
///
/// Accepts RFC 3339 and naive ISO datetimes; anything else is returned as-is.
pub fn short_datetime(timestamp: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(timestamp, "%Y-%m-%d") {
        return date.to_string();
    }
    timestamp.to_string()
}

/// [`short_datetime`] over an optional value
pub fn opt_datetime(timestamp: Option<&str>) -> String {
    timestamp.map_or_else(|| "-".to_string(), short_datetime)
}
