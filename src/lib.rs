//! Market data access for the stockboard dashboard.
//!
//! A thin data layer over a remote market data provider: symbol resolution,
//! price history with metadata, world index snapshots and daily top movers.
//! The library returns raw structured data; all value formatting lives in
//! the CLI commands (or whatever other presentation layer calls in).

pub mod cli;
pub mod commands;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
