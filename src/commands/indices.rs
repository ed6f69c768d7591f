use crate::commands::provider_or_exit;
use crate::constants::WORLD_INDICES;
use crate::models::Direction;
use crate::services;

pub async fn run() {
    let provider = provider_or_exit();

    println!("🌍 World Indices\n");
    let quotes = services::snapshot(&provider, WORLD_INDICES).await;

    if quotes.is_empty() {
        println!("No index data available right now.");
        return;
    }

    println!("   {:<12} {:>12} {:>10} {:>9}", "Index", "Price", "Change", "Change %");
    for quote in &quotes {
        let arrow = match quote.direction {
            Direction::Up => "▲",
            Direction::Down => "▼",
        };
        println!(
            "   {:<12} {:>12.2} {:>+10.2} {:>+8.2}% {}",
            quote.label, quote.price, quote.change, quote.change_percent, arrow
        );
    }

    if quotes.len() < WORLD_INDICES.len() {
        println!(
            "\n⚠️  {} of {} indices unavailable.",
            WORLD_INDICES.len() - quotes.len(),
            WORLD_INDICES.len()
        );
    }
}
