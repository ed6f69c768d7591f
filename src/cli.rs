use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "stockboard")]
#[command(about = "Stock market data CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search for stocks by symbol or company name
    Search {
        /// Ticker guess or company name fragment
        query: String,
    },
    /// Show price history and key metrics for a symbol
    Quote {
        /// Ticker symbol (e.g. AAPL)
        symbol: String,
        /// History window: 1d, 5d, 1mo, 6mo, ytd, 1y, 5y or max
        #[arg(short, long, default_value = "1y")]
        window: String,
    },
    /// Show world market indices
    Indices,
    /// Show daily top gainers and losers
    Movers,
}

pub async fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { query } => {
            commands::search::run(&query).await;
        }
        Commands::Quote { symbol, window } => {
            commands::quote::run(&symbol, &window).await;
        }
        Commands::Indices => {
            commands::indices::run().await;
        }
        Commands::Movers => {
            commands::movers::run().await;
        }
    }
}
