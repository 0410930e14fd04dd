use clickmint_ledger::{Ledger, TransactionExt as _};

use crate::error::CliResult;

pub async fn execute(ledger: &Ledger, account: String) -> CliResult<()> {
    let entries = ledger.transactions_for_account(&account).await?;

    if entries.is_empty() {
        println!("No ledger entries for {}", account);
        return Ok(());
    }

    println!("Ledger for {}:", account);
    for entry in entries {
        println!(
            "  #{:<5} {} {:<16} {:>10} {:<10} {}",
            entry.id,
            entry.date().format("%Y-%m-%d %H:%M"),
            entry.kind(),
            entry.amount(),
            entry.status(),
            entry.description
        );
    }

    Ok(())
}
