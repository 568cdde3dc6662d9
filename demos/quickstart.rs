//! Quick start: authenticate, then walk the data of every item listed in a
//! local `items.yaml` file of `name: item-id` lines.
//!
//! Run with:
//! ```bash
//! PLUGGY_CLIENT_ID=... PLUGGY_CLIENT_SECRET=... cargo run --example quickstart -- items.yaml
//! ```

use pluggy_rs::api::{AccountQuery, AccountsQuery, InvestmentsQuery, TransactionsQuery};
use pluggy_rs::models::ItemRef;
use pluggy_rs::{ClientConfig, Credentials, PluggyClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let items_path = std::env::args().nth(1).unwrap_or_else(|| "items.yaml".to_string());
    let items = ItemRef::read_file(&items_path)?;
    if items.is_empty() {
        println!("No `name: id` lines found in {items_path}");
        return Ok(());
    }

    println!("Authenticating...");
    let client =
        PluggyClient::authenticate_with_config(Credentials::from_env()?, ClientConfig::default())
            .await?;
    println!("Authenticated successfully!\n");

    for item in &items {
        println!("=== {} ({}) ===", item.name, item.id);

        let accounts = client
            .accounts()
            .list_all(&AccountsQuery::new(item.id.clone()), 50)
            .await?;
        println!("{} accounts", accounts.len());

        for account in &accounts {
            println!(
                "  {} {:?} {:?} balance={:?}",
                account.id, account.account_type, account.name, account.balance
            );

            let transactions = client
                .transactions()
                .list_all(&TransactionsQuery::new(account.account_id()), 100)
                .await?;
            println!("    {} transactions", transactions.len());
            for tx in transactions.iter().take(5) {
                println!("      {} {} {:?}", tx.date.date_naive(), tx.amount, tx.description);
            }

            if account.is_credit() {
                let bills = client
                    .bills()
                    .list_all(&AccountQuery::new(account.account_id()), 50)
                    .await?;
                for bill in &bills {
                    println!("    bill {} due {:?} total {:?}", bill.id, bill.due_date, bill.total_amount);
                }
            }
        }

        let investments = client
            .investments()
            .list_all(&InvestmentsQuery::new(item.id.clone()), 50)
            .await?;
        println!("{} investments", investments.len());
        for investment in &investments {
            println!(
                "  {:?} {:?} balance={}",
                investment.name, investment.investment_type, investment.balance
            );
        }
        println!();
    }

    Ok(())
}
