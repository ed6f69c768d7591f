pub mod indices;
pub mod movers;
pub mod provider;
pub mod quotes;
pub mod resolver;
pub mod yahoo;

#[cfg(test)]
pub(crate) mod mock;

pub use indices::snapshot;
pub use movers::rank;
pub use provider::MarketData;
pub use quotes::fetch;
pub use resolver::{probe, resolve, Probe};
pub use yahoo::YahooClient;

use crate::models::PricePoint;

/// Latest price, absolute change and percent change from the two most recent
/// sessions of a series. `None` when fewer than two sessions are available;
/// the caller drops the record rather than fabricating one.
pub(crate) fn two_session_change(series: &[PricePoint]) -> Option<(f64, f64, f64)> {
    if series.len() < 2 {
        return None;
    }
    let latest = series[series.len() - 1].close;
    let previous = series[series.len() - 2].close;
    let change = latest - previous;
    let change_percent = (change / previous) * 100.0;
    Some((latest, change, change_percent))
}
