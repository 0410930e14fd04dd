use chrono::Utc;
use clickmint_ledger::{AccountEdit, AccountExt as _, Ledger};
use rust_decimal::Decimal;
use std::str::FromStr as _;

use crate::error::{CliError, CliResult};

pub async fn execute(
    ledger: &Ledger,
    account: String,
    name: Option<String>,
    balance: Option<String>,
) -> CliResult<()> {
    if name.is_none() && balance.is_none() {
        return Err(CliError::InvalidArgument(
            "pass --name and/or --balance".to_string(),
        ));
    }

    let balance = balance.map(|raw| Decimal::from_str(&raw)).transpose()?;

    let model = ledger
        .edit_account(&account, AccountEdit { name, balance }, Utc::now())
        .await?;

    println!("✅ Account {} updated", model.id);
    println!("Name: {}", model.name);
    println!("Balance: {}", model.balance());

    Ok(())
}
