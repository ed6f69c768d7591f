//! World index snapshot.

use crate::models::{Direction, IndexQuote};
use crate::services::provider::MarketData;
use crate::services::two_session_change;
use tracing::warn;

/// Provider range/interval for a 2-session delta. The computation uses the
/// last two bars of whatever comes back, so a generous range is harmless.
const DELTA_RANGE: &str = "5d";
const DELTA_INTERVAL: &str = "1d";

/// Snapshot the configured market indices: latest close against the previous
/// session, one sequential provider call per index.
///
/// Indices whose fetch fails or returns fewer than two sessions are omitted;
/// a partial result is success, not an error.
pub async fn snapshot(provider: &dyn MarketData, indices: &[(&str, &str)]) -> Vec<IndexQuote> {
    let mut quotes = Vec::with_capacity(indices.len());

    for &(symbol, label) in indices {
        let series = match provider.history(symbol, DELTA_RANGE, DELTA_INTERVAL).await {
            Ok(series) => series,
            Err(err) => {
                warn!("index fetch failed for {} ({}): {}", label, symbol, err);
                continue;
            }
        };

        let Some((price, change, change_percent)) = two_session_change(&series) else {
            warn!("fewer than two sessions for {} ({}), dropping", label, symbol);
            continue;
        };

        quotes.push(IndexQuote {
            symbol: symbol.to_string(),
            label: label.to_string(),
            price,
            change,
            change_percent,
            direction: Direction::from_change_percent(change_percent),
        });
    }

    quotes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock::MockProvider;

    #[tokio::test]
    async fn test_snapshot_two_session_delta() {
        let provider = MockProvider::new().with_closes("^GSPC", &[100.0, 110.0]);

        let quotes = snapshot(&provider, &[("^GSPC", "S&P 500")]).await;

        assert_eq!(quotes.len(), 1);
        let quote = &quotes[0];
        assert_eq!(quote.label, "S&P 500");
        assert_eq!(quote.price, 110.0);
        assert_eq!(quote.change, 10.0);
        assert!((quote.change_percent - 10.0).abs() < 1e-9);
        assert_eq!(quote.direction, Direction::Up);
    }

    #[tokio::test]
    async fn test_snapshot_uses_two_most_recent_sessions() {
        // older bars must not influence the delta
        let provider = MockProvider::new().with_closes("^FTSE", &[90.0, 95.0, 200.0, 100.0]);

        let quotes = snapshot(&provider, &[("^FTSE", "FTSE 100")]).await;

        assert_eq!(quotes[0].change, -100.0);
        assert_eq!(quotes[0].direction, Direction::Down);
    }

    #[tokio::test]
    async fn test_snapshot_partial_success() {
        // one index errors, one has too little history, one succeeds
        let provider = MockProvider::new()
            .with_unavailable("^N225")
            .with_closes("^HSI", &[17000.0])
            .with_closes("^DJI", &[39000.0, 39390.0]);

        let quotes = snapshot(
            &provider,
            &[
                ("^N225", "Nikkei 225"),
                ("^HSI", "Hang Seng"),
                ("^DJI", "Dow Jones"),
            ],
        )
        .await;

        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].symbol, "^DJI");
    }
}
