//! Scripted provider for service tests.

use crate::error::{ProviderError, Result};
use crate::models::{Metadata, PricePoint, PriceSeries, TickerProfile};
use crate::services::provider::MarketData;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// In-memory [`MarketData`] implementation with call recording, so tests can
/// assert both on results and on how many probes an operation made.
#[derive(Default)]
pub struct MockProvider {
    profiles: HashMap<String, TickerProfile>,
    series: HashMap<String, PriceSeries>,
    unavailable: HashSet<String>,
    incomplete: HashSet<String>,
    lookups: Mutex<Vec<String>>,
    histories: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a well-formed lookup record under the exact probe string.
    pub fn with_profile(mut self, probe: &str, symbol: &str, long_name: &str) -> Self {
        self.profiles.insert(
            probe.to_string(),
            TickerProfile {
                symbol: symbol.to_string(),
                long_name: long_name.to_string(),
                metadata: Metadata {
                    long_name: Some(long_name.to_string()),
                    ..Metadata::default()
                },
            },
        );
        self
    }

    /// Script a daily close series (one bar per value, one day apart).
    pub fn with_closes(mut self, symbol: &str, closes: &[f64]) -> Self {
        let series = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint::new(day(i), close, close, close, close, 1_000))
            .collect();
        self.series.insert(symbol.to_string(), series);
        self
    }

    /// Script a transport failure for this probe string.
    pub fn with_unavailable(mut self, probe: &str) -> Self {
        self.unavailable.insert(probe.to_string());
        self
    }

    /// Script a record missing required fields for this probe string.
    pub fn with_incomplete(mut self, probe: &str) -> Self {
        self.incomplete.insert(probe.to_string());
        self
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.lock().unwrap().len()
    }

    pub fn lookup_calls(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn history_count(&self) -> usize {
        self.histories.lock().unwrap().len()
    }
}

fn day(offset: usize) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + offset as i64 * 86_400, 0).unwrap()
}

#[async_trait]
impl MarketData for MockProvider {
    async fn lookup(&self, symbol: &str) -> Result<TickerProfile> {
        self.lookups.lock().unwrap().push(symbol.to_string());

        if self.unavailable.contains(symbol) {
            return Err(ProviderError::Unavailable(format!("scripted outage: {}", symbol)));
        }
        if self.incomplete.contains(symbol) {
            return Err(ProviderError::IncompleteRecord(format!("scripted: {}", symbol)));
        }
        self.profiles
            .get(symbol)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(symbol.to_string()))
    }

    async fn history(&self, symbol: &str, _range: &str, _interval: &str) -> Result<PriceSeries> {
        self.histories.lock().unwrap().push(symbol.to_string());

        if self.unavailable.contains(symbol) {
            return Err(ProviderError::Unavailable(format!("scripted outage: {}", symbol)));
        }
        self.series
            .get(symbol)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(symbol.to_string()))
    }
}
