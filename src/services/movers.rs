//! Daily top gainers and losers over a fixed watchlist.

use crate::constants::MOVERS_CAP;
use crate::models::{Direction, Movers, MoverQuote};
use crate::services::provider::MarketData;
use crate::services::two_session_change;
use std::cmp::Ordering;
use tracing::warn;

const DELTA_RANGE: &str = "5d";
const DELTA_INTERVAL: &str = "1d";

/// Rank the watchlist into top gainers and losers by 2-session change.
///
/// Each symbol costs two sequential provider calls (history, then lookup);
/// symbols with insufficient history or no usable display name are skipped.
/// Gainers are sorted descending by change percent, losers ascending (most
/// negative first); a change of exactly zero counts as a loser. Both sides
/// are capped at [`MOVERS_CAP`].
pub async fn rank(provider: &dyn MarketData, watchlist: &[&str]) -> Movers {
    let mut gainers: Vec<MoverQuote> = Vec::new();
    let mut losers: Vec<MoverQuote> = Vec::new();

    for &symbol in watchlist {
        let series = match provider.history(symbol, DELTA_RANGE, DELTA_INTERVAL).await {
            Ok(series) => series,
            Err(err) => {
                warn!("movers fetch failed for {}: {}", symbol, err);
                continue;
            }
        };

        let Some((price, change, change_percent)) = two_session_change(&series) else {
            warn!("fewer than two sessions for {}, dropping", symbol);
            continue;
        };

        let profile = match provider.lookup(symbol).await {
            Ok(profile) => profile,
            Err(err) => {
                warn!("movers lookup failed for {}: {}", symbol, err);
                continue;
            }
        };

        let quote = MoverQuote {
            symbol: symbol.to_string(),
            name: profile.long_name,
            price,
            change,
            change_percent,
            direction: Direction::from_change_percent(change_percent),
        };

        if change_percent > 0.0 {
            gainers.push(quote);
        } else {
            losers.push(quote);
        }
    }

    gainers.sort_by(|a, b| {
        b.change_percent
            .partial_cmp(&a.change_percent)
            .unwrap_or(Ordering::Equal)
    });
    losers.sort_by(|a, b| {
        a.change_percent
            .partial_cmp(&b.change_percent)
            .unwrap_or(Ordering::Equal)
    });

    gainers.truncate(MOVERS_CAP);
    losers.truncate(MOVERS_CAP);

    Movers { gainers, losers }
}
