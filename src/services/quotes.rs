//! Price history and metadata for one symbol.

use crate::models::{Metadata, PriceSeries, Window};
use crate::services::provider::MarketData;
use tracing::warn;

/// Fetch OHLCV history plus descriptive metadata for `symbol` over `window`.
///
/// Sampling granularity follows the window: intraday windows request minute
/// bars, everything else one bar per session. Any provider failure on either
/// call degrades to `None`; user-facing error messaging belongs to the
/// caller.
pub async fn fetch(
    provider: &dyn MarketData,
    symbol: &str,
    window: Window,
) -> Option<(PriceSeries, Metadata)> {
    let series = match provider
        .history(symbol, window.range_param(), window.interval_param())
        .await
    {
        Ok(series) => series,
        Err(err) => {
            warn!("history fetch failed for {} ({}): {}", symbol, window, err);
            return None;
        }
    };

    let metadata = match provider.lookup(symbol).await {
        Ok(profile) => profile.metadata,
        Err(err) => {
            warn!("metadata lookup failed for {}: {}", symbol, err);
            return None;
        }
    };

    Some((series, metadata))
}
