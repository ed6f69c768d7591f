//! Fixed lists used by the data functions.
//!
//! Extracted as named constants so the resolver sweep, the index snapshot
//! and the movers watchlist can be tested and extended independently of the
//! code that walks them.

/// Exchange suffixes probed during the resolver's variation sweep, in probe
/// order. The empty suffix tries the variant as-is.
pub const EXCHANGE_SUFFIXES: &[&str] = &["", ".DE", ".L", ".PA", ".MI", ".MC"];

/// Well-known (symbol, company name) pairs for the resolver's fallback name
/// match. Matched case-insensitively against the query as a substring of the
/// company name.
pub const FALLBACK_COMPANIES: &[(&str, &str)] = &[
    ("AAPL", "Apple"),
    ("MSFT", "Microsoft"),
    ("GOOGL", "Google"),
    ("AMZN", "Amazon"),
    ("NVDA", "NVIDIA"),
    ("META", "Meta"),
    ("TSLA", "Tesla"),
    ("NFLX", "Netflix"),
];

/// World market indices shown on the dashboard: (provider symbol, label).
pub const WORLD_INDICES: &[(&str, &str)] = &[
    ("^GSPC", "S&P 500"),
    ("^DJI", "Dow Jones"),
    ("^IXIC", "NASDAQ"),
    ("^FTSE", "FTSE 100"),
    ("^N225", "Nikkei 225"),
    ("^HSI", "Hang Seng"),
    ("^GDAXI", "DAX"),
    ("^FCHI", "CAC 40"),
];

/// Watchlist scanned for daily top gainers and losers.
pub const MOVERS_WATCHLIST: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "NVDA", "META", "TSLA", "JPM", "V", "WMT", "PG",
    "MA", "UNH", "HD", "BAC", "XOM", "PFE", "DIS", "NFLX", "COIN", "AMD", "INTC",
    "CSCO", "VZ", "T", "PEP", "KO", "ADBE", "CRM", "ORCL",
];

/// Maximum entries returned per movers side (gainers, losers).
pub const MOVERS_CAP: usize = 10;

/// Textual variants of a query tried during the variation sweep, in probe
/// order: original, upper-cased, space-to-hyphen, space-removed, lower-cased,
/// title-cased. The list is intentionally not deduplicated; the sweep's
/// seen-set deduplicates results instead.
pub fn query_variations(query: &str) -> Vec<String> {
    vec![
        query.to_string(),
        query.to_uppercase(),
        query.replace(' ', "-"),
        query.replace(' ', ""),
        query.to_lowercase(),
        title_case(query),
    ]
}

fn title_case(query: &str) -> String {
    query
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
