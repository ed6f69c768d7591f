//! Yahoo Finance client.
//!
//! Two endpoints cover the whole provider contract: the v8 chart endpoint
//! for OHLCV history and the v10 quoteSummary endpoint for the descriptive
//! record (long name plus fundamentals).

use crate::error::{ProviderError, Result};
use crate::models::{Metadata, PricePoint, PriceSeries, TickerProfile};
use crate::services::provider::MarketData;
use crate::utils::{get_provider_base_url, get_request_timeout};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Clone)]
pub struct YahooClient {
    client: Client,
    base_url: String,
}

impl YahooClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(get_provider_base_url())
    }

    /// Build a client against a specific base URL (used by tests and the
    /// STOCKBOARD_BASE_URL override).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(get_request_timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ProviderError::Unavailable(format!("client build error: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl MarketData for YahooClient {
    async fn lookup(&self, symbol: &str) -> Result<TickerProfile> {
        let url = format!(
            "{}/v10/finance/quoteSummary/{}?modules=price,summaryDetail",
            self.base_url, symbol
        );
        tracing::debug!("quoteSummary request: symbol={}, url={}", symbol, url);

        let response: QuoteSummaryEnvelope = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        profile_from_summary(response, symbol)
    }

    async fn history(&self, symbol: &str, range: &str, interval: &str) -> Result<PriceSeries> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval={}",
            self.base_url, symbol, range, interval
        );
        tracing::debug!(
            "chart request: symbol={}, range={}, interval={}, url={}",
            symbol,
            range,
            interval,
            url
        );

        let response: ChartEnvelope = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        series_from_chart(response, symbol)
    }
}

/// Extract a well-formed profile or explain why the record is unusable.
fn profile_from_summary(envelope: QuoteSummaryEnvelope, requested: &str) -> Result<TickerProfile> {
    let node = envelope
        .quote_summary
        .result
        .and_then(|mut results| {
            if results.is_empty() {
                None
            } else {
                Some(results.remove(0))
            }
        })
        .ok_or_else(|| ProviderError::NotFound(requested.to_string()))?;

    let price = node
        .price
        .ok_or_else(|| ProviderError::IncompleteRecord(format!("{}: no price module", requested)))?;

    let symbol = price
        .symbol
        .ok_or_else(|| ProviderError::IncompleteRecord(format!("{}: no resolved symbol", requested)))?;
    let long_name = price
        .long_name
        .ok_or_else(|| ProviderError::IncompleteRecord(format!("{}: no long name", requested)))?;

    let detail = node.summary_detail.unwrap_or_default();
    let metadata = Metadata {
        long_name: Some(long_name.clone()),
        market_cap: detail.market_cap.and_then(|v| v.raw).or(price.market_cap.and_then(|v| v.raw)),
        trailing_pe: detail.trailing_pe.and_then(|v| v.raw),
        fifty_two_week_high: detail.fifty_two_week_high.and_then(|v| v.raw),
        fifty_two_week_low: detail.fifty_two_week_low.and_then(|v| v.raw),
        volume: detail.volume.and_then(|v| v.raw).map(|v| v as u64),
        dividend_yield: detail.dividend_yield.and_then(|v| v.raw),
    };

    Ok(TickerProfile {
        symbol,
        long_name,
        metadata,
    })
}

/// Zip the chart arrays into an ordered price series. Bars with null prices
/// (halted sessions, padding) are skipped.
fn series_from_chart(envelope: ChartEnvelope, requested: &str) -> Result<PriceSeries> {
    let node = envelope
        .chart
        .result
        .and_then(|mut results| {
            if results.is_empty() {
                None
            } else {
                Some(results.remove(0))
            }
        })
        .ok_or_else(|| ProviderError::NotFound(requested.to_string()))?;

    let timestamps = node.timestamp.unwrap_or_default();
    let quote = node
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::IncompleteRecord(format!("{}: no quote arrays", requested)))?;

    let mut series = PriceSeries::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        let time = match DateTime::<Utc>::from_timestamp(ts, 0) {
            Some(t) => t,
            None => {
                return Err(ProviderError::IncompleteRecord(format!(
                    "{}: bad timestamp {} at index {}",
                    requested, ts, i
                )))
            }
        };

        let bar = (
            quote.open.get(i).copied().flatten(),
            quote.high.get(i).copied().flatten(),
            quote.low.get(i).copied().flatten(),
            quote.close.get(i).copied().flatten(),
        );
        if let (Some(open), Some(high), Some(low), Some(close)) = bar {
            let volume = quote.volume.get(i).copied().flatten().unwrap_or(0);
            series.push(PricePoint::new(time, open, high, low, close, volume));
        }
    }

    if series.is_empty() {
        return Err(ProviderError::NotFound(requested.to_string()));
    }

    series.sort_by(|a, b| a.time.cmp(&b.time));
    Ok(series)
}

// quoteSummary schema

#[derive(Debug, Deserialize)]
struct QuoteSummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummaryBody,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryBody {
    result: Option<Vec<QuoteSummaryNode>>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryNode {
    price: Option<PriceModule>,
    #[serde(rename = "summaryDetail")]
    summary_detail: Option<SummaryDetailModule>,
}

#[derive(Debug, Deserialize)]
struct PriceModule {
    symbol: Option<String>,
    #[serde(rename = "longName")]
    long_name: Option<String>,
    #[serde(rename = "marketCap")]
    market_cap: Option<RawValue>,
}

#[derive(Debug, Default, Deserialize)]
struct SummaryDetailModule {
    #[serde(rename = "marketCap")]
    market_cap: Option<RawValue>,
    #[serde(rename = "trailingPE")]
    trailing_pe: Option<RawValue>,
    #[serde(rename = "fiftyTwoWeekHigh")]
    fifty_two_week_high: Option<RawValue>,
    #[serde(rename = "fiftyTwoWeekLow")]
    fifty_two_week_low: Option<RawValue>,
    volume: Option<RawValue>,
    #[serde(rename = "dividendYield")]
    dividend_yield: Option<RawValue>,
}

/// Yahoo wraps numeric fields as {"raw": 1.23, "fmt": "1.23"}.
#[derive(Debug, Deserialize)]
struct RawValue {
    raw: Option<f64>,
}

// chart schema

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartNode>>,
}

#[derive(Debug, Deserialize)]
struct ChartNode {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteArrays>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteArrays {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_summary_full_record() {
        let json = r#"{
            "quoteSummary": {
                "result": [{
                    "price": {
                        "symbol": "AAPL",
                        "longName": "Apple Inc.",
                        "marketCap": {"raw": 3.0e12, "fmt": "3T"}
                    },
                    "summaryDetail": {
                        "trailingPE": {"raw": 29.5},
                        "fiftyTwoWeekHigh": {"raw": 237.23},
                        "fiftyTwoWeekLow": {"raw": 164.08},
                        "volume": {"raw": 51234567},
                        "dividendYield": {"raw": 0.0044}
                    }
                }]
            }
        }"#;
        let envelope: QuoteSummaryEnvelope = serde_json::from_str(json).unwrap();
        let profile = profile_from_summary(envelope, "AAPL").unwrap();

        assert_eq!(profile.symbol, "AAPL");
        assert_eq!(profile.long_name, "Apple Inc.");
        assert_eq!(profile.metadata.market_cap, Some(3.0e12));
        assert_eq!(profile.metadata.trailing_pe, Some(29.5));
        assert_eq!(profile.metadata.volume, Some(51234567));
    }

    #[test]
    fn test_profile_missing_long_name_is_incomplete() {
        let json = r#"{
            "quoteSummary": {
                "result": [{
                    "price": {"symbol": "ZZZZ"}
                }]
            }
        }"#;
        let envelope: QuoteSummaryEnvelope = serde_json::from_str(json).unwrap();
        match profile_from_summary(envelope, "ZZZZ") {
            Err(ProviderError::IncompleteRecord(_)) => {}
            other => panic!("expected IncompleteRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_profile_null_result_is_not_found() {
        let json = r#"{"quoteSummary": {"result": null}}"#;
        let envelope: QuoteSummaryEnvelope = serde_json::from_str(json).unwrap();
        match profile_from_summary(envelope, "NOPE") {
            Err(ProviderError::NotFound(_)) => {}
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_series_from_chart_skips_null_bars() {
        let json = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1700000000, 1700086400, 1700172800],
                    "indicators": {
                        "quote": [{
                            "open":   [100.0, null, 102.0],
                            "high":   [101.0, null, 103.0],
                            "low":    [99.0,  null, 101.0],
                            "close":  [100.5, null, 102.5],
                            "volume": [1000,  null, 2000]
                        }]
                    }
                }]
            }
        }"#;
        let envelope: ChartEnvelope = serde_json::from_str(json).unwrap();
        let series = series_from_chart(envelope, "AAPL").unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].close, 100.5);
        assert_eq!(series[1].close, 102.5);
        assert!(series[0].time < series[1].time);
    }

    #[test]
    fn test_series_from_chart_empty_is_not_found() {
        let json = r#"{"chart": {"result": null}}"#;
        let envelope: ChartEnvelope = serde_json::from_str(json).unwrap();
        match series_from_chart(envelope, "ZZZZ") {
            Err(ProviderError::NotFound(_)) => {}
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
