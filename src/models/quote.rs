use serde::{Deserialize, Serialize};

/// Descriptive and fundamental fields for a symbol.
///
/// Every field is optional: the provider omits whatever it does not know and
/// the core never fabricates values. Rendering of missing fields belongs to
/// the presentation layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    pub long_name: Option<String>,
    pub market_cap: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub volume: Option<u64>,
    pub dividend_yield: Option<f64>,
}

/// A well-formed lookup record: the provider resolved the symbol and knows
/// the company's display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerProfile {
    pub symbol: String,
    pub long_name: String,
    pub metadata: Metadata,
}

/// Direction tag derived from the sign of a change percentage.
///
/// `Up` only for strictly positive change; zero counts as `Down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn from_change_percent(change_percent: f64) -> Self {
        if change_percent > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

/// Snapshot of one world market index: latest close against the previous
/// session. Computed once per request, never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexQuote {
    pub symbol: String,
    pub label: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub direction: Direction,
}

/// One watchlist entry ranked by its 2-session change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoverQuote {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub direction: Direction,
}

/// Ranked daily movers, each side capped by the ranker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Movers {
    pub gainers: Vec<MoverQuote>,
    pub losers: Vec<MoverQuote>,
}
