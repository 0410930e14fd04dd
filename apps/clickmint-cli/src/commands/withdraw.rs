use chrono::Utc;
use clickmint_ledger::Ledger;
use rust_decimal::Decimal;
use std::str::FromStr as _;

use crate::error::CliResult;

pub async fn execute(
    ledger: &Ledger,
    account: String,
    amount: String,
    method: String,
    destination: String,
) -> CliResult<()> {
    let amount = Decimal::from_str(&amount)?;

    let entry = ledger
        .request_withdrawal(&account, amount, &method, &destination, Utc::now())
        .await?;

    println!("✅ Withdrawal request filed as #{}", entry.id);
    println!("{} via {} to {}", amount, method, destination);
    println!("Status: pending operator review");

    Ok(())
}
