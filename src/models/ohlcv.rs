use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV (Open, High, Low, Close, Volume) bar.
///
/// Represents a single trading session for daily windows, or a single
/// minute bar for intraday windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePoint {
    /// Timestamp of the bar
    #[serde(with = "chrono::serde::ts_seconds")]
    pub time: DateTime<Utc>,

    /// Opening price
    pub open: f64,

    /// Highest price
    pub high: f64,

    /// Lowest price
    pub low: f64,

    /// Closing price
    pub close: f64,

    /// Traded volume
    pub volume: u64,
}

impl PricePoint {
    pub fn new(time: DateTime<Utc>, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Ordered-by-time price history for one symbol over one requested window.
///
/// Regenerated on every fetch, never patched in place.
pub type PriceSeries = Vec<PricePoint>;
