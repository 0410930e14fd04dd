use clickmint_ledger::Ledger;

use crate::error::CliResult;

pub async fn execute(ledger: &Ledger, account: String) -> CliResult<()> {
    let blocked = ledger.toggle_block(&account).await?;

    if blocked {
        println!("⛔ Account {} is now blocked", account);
    } else {
        println!("✅ Account {} is now unblocked", account);
    }

    Ok(())
}
