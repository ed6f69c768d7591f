mod candidate;
mod ohlcv;
mod quote;
mod window;

pub use candidate::Candidate;
pub use ohlcv::{PricePoint, PriceSeries};
pub use quote::{Direction, IndexQuote, Metadata, Movers, MoverQuote, TickerProfile};
pub use window::Window;

/// Ordered, deduplicated-by-symbol resolver output (discovery order)
pub type CandidateSet = Vec<Candidate>;
