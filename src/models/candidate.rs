use serde::{Deserialize, Serialize};

/// One ticker match produced by symbol resolution.
///
/// Produced only by the resolver, never mutated; a result set contains at
/// most one `Candidate` per symbol, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Resolved ticker symbol, as reported by the provider
    pub symbol: String,

    /// Provider-supplied long company name
    pub display_name: String,
}

impl Candidate {
    pub fn new(symbol: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            display_name: display_name.into(),
        }
    }
}
