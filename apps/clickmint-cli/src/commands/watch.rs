use chrono::Utc;
use clickmint_ledger::{AccountExt as _, Ledger};

use crate::error::CliResult;

pub async fn execute(ledger: &Ledger, account: String, unit: String) -> CliResult<()> {
    let reward = ledger
        .record_unit_completion(&account, &unit, Utc::now())
        .await?;

    let model = ledger.account(&account).await?;
    println!("✅ Unit {} recorded, reward {}", unit, reward);
    println!("Balance: {}", model.balance());
    println!(
        "Units consumed today: {}/{}",
        model.watched_unit_ids().len(),
        ledger.catalog().units.len()
    );
    if let Some(ends_at) = model.cooldown_ends_at() {
        println!("⏰ All units consumed, cooldown until {}", ends_at);
    }

    Ok(())
}
