//! Stock symbol resolution.
//!
//! Resolves free-text queries (ticker guesses or company-name fragments) to
//! unique ticker candidates in three strictly sequential tiers:
//!
//! 1. direct lookup of the raw query, which on success returns immediately
//!    with that single candidate;
//! 2. a sweep of textual variants of the query crossed with a fixed list of
//!    exchange suffixes;
//! 3. if the sweep found nothing, a substring match against a small table of
//!    well-known companies, re-queried by symbol.
//!
//! `resolve` never fails: every provider error is absorbed at the probe that
//! hit it and the worst outcome is an empty candidate set.

use crate::constants::{query_variations, EXCHANGE_SUFFIXES, FALLBACK_COMPANIES};
use crate::error::ProviderError;
use crate::models::{Candidate, CandidateSet};
use crate::services::provider::MarketData;
use std::collections::HashSet;
use tracing::debug;

/// Outcome of one probe against the provider.
///
/// Explicit so callers (and tests) can tell a provider outage apart from a
/// plain no-match; neither aborts the sweep.
#[derive(Debug)]
pub enum Probe {
    /// Well-formed record: resolved symbol plus display name.
    Hit(Candidate),
    /// The provider has no usable record for this probe string
    /// (not found, or a record missing required fields).
    Miss,
    /// Transport failure; the probe string was never evaluated.
    Unavailable,
}

/// Probe the provider with one ticker string.
pub async fn probe(provider: &dyn MarketData, ticker: &str) -> Probe {
    match provider.lookup(ticker).await {
        Ok(profile) => {
            debug!("probe hit: {} -> {} ({})", ticker, profile.symbol, profile.long_name);
            Probe::Hit(Candidate::new(profile.symbol, profile.long_name))
        }
        Err(ProviderError::Unavailable(reason)) => {
            debug!("probe unavailable: {} ({})", ticker, reason);
            Probe::Unavailable
        }
        Err(err) => {
            debug!("probe miss: {} ({})", ticker, err);
            Probe::Miss
        }
    }
}

/// Resolve a free-text query to a set of ticker candidates.
///
/// A direct hit on the raw query short-circuits the remaining tiers and
/// returns that candidate alone, even when other exchanges would list the
/// same company under further symbols.
pub async fn resolve(provider: &dyn MarketData, query: &str) -> CandidateSet {
    // Tier 1: the query as a literal ticker
    if let Probe::Hit(candidate) = probe(provider, query).await {
        debug!("direct match: {} -> {}", query, candidate.symbol);
        return vec![candidate];
    }

    // Tier 2: variation sweep; the seen-set persists across the whole sweep
    let mut results = CandidateSet::new();
    let mut seen: HashSet<String> = HashSet::new();

    for variation in query_variations(query) {
        for suffix in EXCHANGE_SUFFIXES {
            let ticker = format!("{}{}", variation, suffix);
            if let Probe::Hit(candidate) = probe(provider, &ticker).await {
                if seen.insert(candidate.symbol.clone()) {
                    results.push(candidate);
                } else {
                    debug!("duplicate symbol suppressed: {}", candidate.symbol);
                }
            }
        }
    }

    // Tier 3: fallback name match, only when the sweep came up empty
    if results.is_empty() {
        let query_lower = query.to_lowercase();
        for (symbol, name) in FALLBACK_COMPANIES {
            if name.to_lowercase().contains(&query_lower) {
                if let Probe::Hit(candidate) = probe(provider, symbol).await {
                    if seen.insert((*symbol).to_string()) {
                        debug!("fallback match: {} ({})", symbol, name);
                        results.push(Candidate::new(*symbol, candidate.display_name));
                    }
                }
            }
        }
    }

    results
}
