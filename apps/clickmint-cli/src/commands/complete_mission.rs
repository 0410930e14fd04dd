use chrono::Utc;
use clickmint_ledger::{AccountExt as _, Ledger};

use crate::error::CliResult;

pub async fn execute(ledger: &Ledger, account: String, mission: String) -> CliResult<()> {
    let reward = ledger
        .complete_mission(&account, &mission, Utc::now())
        .await?;

    let model = ledger.account(&account).await?;
    println!("🎉 Mission {} completed, reward {}", mission, reward);
    println!("Balance: {}", model.balance());
    println!("Mission earnings: {}", model.mission_earnings());

    Ok(())
}
