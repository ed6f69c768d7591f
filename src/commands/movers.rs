use crate::commands::provider_or_exit;
use crate::constants::MOVERS_WATCHLIST;
use crate::models::MoverQuote;
use crate::services;

pub async fn run() {
    let provider = provider_or_exit();

    println!("📊 Market Movers (scanning {} symbols)...\n", MOVERS_WATCHLIST.len());
    let movers = services::rank(&provider, MOVERS_WATCHLIST).await;

    if movers.gainers.is_empty() && movers.losers.is_empty() {
        println!("No mover data available right now.");
        return;
    }

    println!("📈 Top Gainers");
    print_side(&movers.gainers);

    println!("\n📉 Top Losers");
    print_side(&movers.losers);
}

fn print_side(side: &[MoverQuote]) {
    if side.is_empty() {
        println!("   (none)");
        return;
    }

    println!("   {:<8} {:<28} {:>10} {:>9} {:>9}", "Symbol", "Name", "Price", "Change", "Change %");
    for quote in side {
        println!(
            "   {:<8} {:<28} {:>10} {:>+9.2} {:>+8.2}%",
            quote.symbol,
            truncate(&quote.name, 28),
            format!("${:.2}", quote.price),
            quote.change,
            quote.change_percent
        );
    }
}

fn truncate(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let head: String = name.chars().take(max - 1).collect();
        format!("{}…", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_names() {
        assert_eq!(truncate("Apple Inc.", 28), "Apple Inc.");
        let long = "International Business Machines Corporation";
        let out = truncate(long, 28);
        assert_eq!(out.chars().count(), 28);
        assert!(out.ends_with('…'));
    }
}
