//! Demo 1: Spot Price Board
//!
//! Showcases: signed dispatch, typed price endpoints, per-call deadlines
//!
//! Run: cargo run --bin spot_price -- BTC-USD ETH-EUR

use colored::*;
use coinbase_rest::types::{PriceKind, SpotPrice};
use coinbase_rest::{CoinbaseClient, Credentials, Data, Method, RequestOptions, NO_PARAMS};
use std::time::Duration;

const DEFAULT_PAIRS: [&str; 3] = ["BTC-USD", "ETH-USD", "SOL-USD"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(65).cyan());
    println!("{}", "  SPOT PRICE BOARD".cyan().bold());
    println!("{}", "  Coinbase REST Demo - Spot, Buy and Sell Quotes".cyan());
    println!("{}", "═".repeat(65).cyan());
    println!();

    // Price endpoints accept any key; fall back to an anonymous one
    let client = match CoinbaseClient::from_env() {
        Ok(client) => client,
        Err(_) => CoinbaseClient::new(Credentials::new("anonymous", ""))?,
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    let pairs: Vec<String> = if args.is_empty() {
        DEFAULT_PAIRS.iter().map(|p| p.to_string()).collect()
    } else {
        args
    };

    println!(
        "  {:>10}  {:>14}  {:>14}  {:>14}",
        "PAIR".white().bold(),
        "SPOT".white().bold(),
        "BUY".white().bold(),
        "SELL".white().bold()
    );
    println!("  {}", "─".repeat(58));

    let prices = client.prices();
    for pair in &pairs {
        let Some((base, quote)) = pair.split_once('-') else {
            println!("  {:>10}  {}", pair.red(), "expected BASE-QUOTE".red());
            continue;
        };

        let spot = prices.quote(PriceKind::Spot, base, quote).await;
        let buy = prices.quote(PriceKind::Buy, base, quote).await;
        let sell = prices.quote(PriceKind::Sell, base, quote).await;

        match (spot, buy, sell) {
            (Ok(spot), Ok(buy), Ok(sell)) => println!(
                "  {:>10}  {:>14}  {:>14}  {:>14}",
                pair.yellow(),
                spot.amount.to_string().white(),
                buy.amount.to_string().green(),
                sell.amount.to_string().red()
            ),
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                println!("  {:>10}  {} {}", pair.yellow(), "✗".red(), e);
            }
        }
    }

    // Same call again under a tight deadline
    println!();
    let options = RequestOptions::new().with_deadline(Duration::from_millis(1));
    let result = client
        .request_with::<_, Data<SpotPrice>>(
            Method::Get,
            "v2/prices/BTC-USD/spot",
            NO_PARAMS,
            &options,
        )
        .await;
    match result {
        Ok(price) => println!("{} Beat a 1ms deadline: {}", "✓".green(), price.data.amount),
        Err(e) if e.is_timeout() => println!("{} 1ms deadline elapsed as expected", "✓".green()),
        Err(e) => println!("{} {}", "✗".red(), e),
    }

    println!();
    println!("{}", "═".repeat(65).cyan());

    Ok(())
}
