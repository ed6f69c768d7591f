use crate::error::Result;
use crate::models::{PriceSeries, TickerProfile};
use async_trait::async_trait;

/// The market data provider boundary.
///
/// The sole I/O seam of the crate: everything the resolver, fetcher,
/// snapshot and ranker know about the outside world goes through these two
/// calls. Implemented by [`YahooClient`](crate::services::YahooClient) in
/// production and by scripted mocks in tests.
///
/// [`lookup`](MarketData::lookup) must only return `Ok` for a well-formed
/// record (resolved symbol and display name both present); anything less is
/// an `IncompleteRecord` error.
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Resolve a ticker string to its profile (symbol, long name, metadata).
    async fn lookup(&self, symbol: &str) -> Result<TickerProfile>;

    /// Fetch OHLCV history for `symbol` at the given provider range and
    /// interval parameters (e.g. `"1y"` / `"1d"`).
    async fn history(&self, symbol: &str, range: &str, interval: &str) -> Result<PriceSeries>;
}
