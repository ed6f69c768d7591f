//! CLI presentation layer.
//!
//! Owns every formatting decision (currency strings, signs, large-number
//! abbreviation); the service functions underneath only ever return raw
//! numeric data.

pub mod indices;
pub mod movers;
pub mod quote;
pub mod search;

use crate::services::YahooClient;

/// Build the provider client or exit with a user-facing message.
pub(crate) fn provider_or_exit() -> YahooClient {
    match YahooClient::new() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ Could not initialize the market data client: {}", e);
            std::process::exit(1);
        }
    }
}

/// Abbreviate large quantities for display: 1.23T / 4.56B / 7.89M,
/// comma-grouped below a million.
pub(crate) fn format_large_number(num: f64) -> String {
    if num >= 1e12 {
        format!("{:.2}T", num / 1e12)
    } else if num >= 1e9 {
        format!("{:.2}B", num / 1e9)
    } else if num >= 1e6 {
        format!("{:.2}M", num / 1e6)
    } else {
        group_thousands(num.round() as i64)
    }
}

fn group_thousands(num: i64) -> String {
    let digits = num.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if num < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Render an optional metric, falling back to "N/A".
pub(crate) fn metric_or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_large_number() {
        assert_eq!(format_large_number(3.0e12), "3.00T");
        assert_eq!(format_large_number(1.5e9), "1.50B");
        assert_eq!(format_large_number(2.25e6), "2.25M");
        assert_eq!(format_large_number(51234.0), "51,234");
        assert_eq!(format_large_number(999.0), "999");
    }

    #[test]
    fn test_metric_or_na() {
        assert_eq!(metric_or_na(None), "N/A");
        assert_eq!(metric_or_na(Some("29.50".to_string())), "29.50");
    }
}
