use crate::commands::{format_large_number, metric_or_na, provider_or_exit};
use crate::models::Window;
use crate::services;

pub async fn run(symbol: &str, window: &str) {
    let window: Window = match window.parse() {
        Ok(w) => w,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let provider = provider_or_exit();

    println!("📈 Fetching {} ({})...\n", symbol, window);
    let Some((series, metadata)) = services::fetch(&provider, symbol, window).await else {
        println!("No data for '{}'. Check the stock symbol and try again.", symbol);
        return;
    };

    let name = metadata.long_name.as_deref().unwrap_or(symbol);
    println!("{} ({})\n", name, symbol);

    if let Some(latest) = series.last() {
        println!("   Current Price:   ${:.2}", latest.close);
        if series.len() >= 2 {
            let previous = series[series.len() - 2].close;
            let change = latest.close - previous;
            let change_pct = (change / previous) * 100.0;
            println!("   Change:          {:+.2} ({:+.2}%)", change, change_pct);
        }
    }

    println!("\n   Key Metrics");
    println!(
        "   Market Cap:      {}",
        metric_or_na(metadata.market_cap.map(format_large_number))
    );
    println!(
        "   P/E Ratio:       {}",
        metric_or_na(metadata.trailing_pe.map(|v| format!("{:.2}", v)))
    );
    println!(
        "   52 Week High:    {}",
        metric_or_na(metadata.fifty_two_week_high.map(|v| format!("${:.2}", v)))
    );
    println!(
        "   52 Week Low:     {}",
        metric_or_na(metadata.fifty_two_week_low.map(|v| format!("${:.2}", v)))
    );
    println!(
        "   Volume:          {}",
        metric_or_na(metadata.volume.map(|v| format_large_number(v as f64)))
    );
    println!(
        "   Dividend Yield:  {}",
        metric_or_na(metadata.dividend_yield.map(|v| format!("{:.2}%", v * 100.0)))
    );

    // Recent tail of the series, newest last
    let date_format = if window.is_intraday() { "%Y-%m-%d %H:%M" } else { "%Y-%m-%d" };
    let tail = series.len().saturating_sub(10);
    println!("\n   {:<17} {:>9} {:>9} {:>9} {:>9} {:>12}", "Date", "Open", "High", "Low", "Close", "Volume");
    for point in &series[tail..] {
        println!(
            "   {:<17} {:>9.2} {:>9.2} {:>9.2} {:>9.2} {:>12}",
            point.time.format(date_format),
            point.open,
            point.high,
            point.low,
            point.close,
            format_large_number(point.volume as f64),
        );
    }
    println!("\n   {} bar(s) over {}.", series.len(), window);
}
