//! Demo 2: Account Balances
//!
//! Showcases: credentials from the environment, paginated account listing,
//! funded-account filtering, transaction history
//!
//! Run: COINBASE_API_KEY=... COINBASE_API_SECRET=... cargo run --bin account_balances

use colored::*;
use coinbase_rest::{CoinbaseClient, ErrorKind, ListParams};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(65).cyan());
    println!("{}", "  ACCOUNT BALANCES".cyan().bold());
    println!("{}", "  Coinbase REST Demo - Signed Account Queries".cyan());
    println!("{}", "═".repeat(65).cyan());
    println!();

    let client = match CoinbaseClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            println!("  Set COINBASE_API_KEY and COINBASE_API_SECRET to run this demo.");
            return Ok(());
        }
    };
    println!("{} Using key {:?}", "✓".green(), client.credentials());

    let mut accounts = match client
        .accounts()
        .list(&ListParams::new().with_limit(100))
        .await
    {
        Ok(accounts) => accounts,
        Err(e) if e.kind() == ErrorKind::Api => {
            println!("{} Rejected by the API: {}", "✗".red(), e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let total = accounts.len();
    accounts.retain_funded();
    println!(
        "{} {} accounts, {} funded{}\n",
        "✓".green(),
        total,
        accounts.len(),
        if accounts.pagination.has_next() {
            " (more pages available)"
        } else {
            ""
        }
    );

    println!(
        "  {:>8}  {:>20}  {:>16}  {:>8}",
        "CURRENCY".white().bold(),
        "NAME".white().bold(),
        "BALANCE".white().bold(),
        "TXNS".white().bold()
    );
    println!("  {}", "─".repeat(60));

    let mut sent = Decimal::ZERO;
    for account in &accounts {
        let history = client.list_transactions(&account.id).await;
        let txns = match &history {
            Ok(history) => {
                sent += history
                    .iter()
                    .filter(|tx| tx.kind == "send" && tx.is_completed())
                    .map(|tx| tx.native_amount.amount.abs())
                    .sum::<Decimal>();
                history.len().to_string().white()
            }
            Err(_) => "?".red(),
        };

        println!(
            "  {:>8}  {:>20}  {:>16}  {:>8}",
            account.currency.code.yellow(),
            account.name,
            account.balance.amount.to_string().green(),
            txns
        );
    }

    println!();
    println!("{}", "═".repeat(65).cyan());
    println!("  {} {}", "Sent (first page, native):".white().bold(), sent);
    println!("{}", "═".repeat(65).cyan());

    Ok(())
}
