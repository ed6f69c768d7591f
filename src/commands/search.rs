use crate::commands::provider_or_exit;
use crate::services;

pub async fn run(query: &str) {
    let provider = provider_or_exit();

    println!("🔍 Searching for \"{}\"...\n", query);
    let results = services::resolve(&provider, query).await;

    if results.is_empty() {
        println!("No matching stocks found. Try a different symbol or company name.");
        return;
    }

    for candidate in &results {
        println!("   {:<10} {}", candidate.symbol, candidate.display_name);
    }
    println!("\n{} match(es).", results.len());
}
