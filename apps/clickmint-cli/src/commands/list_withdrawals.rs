use clickmint_ledger::{Ledger, TransactionExt as _};

use crate::error::CliResult;

pub async fn execute(ledger: &Ledger) -> CliResult<()> {
    let pending = ledger.pending_withdrawals().await?;

    if pending.is_empty() {
        println!("No pending withdrawals");
        return Ok(());
    }

    println!("{} pending withdrawal(s):", pending.len());
    for entry in pending {
        println!(
            "  #{:<5} {} {:<24} {:>10} {}",
            entry.id,
            entry.date().format("%Y-%m-%d %H:%M"),
            entry.account_name,
            entry.amount().abs(),
            entry.description
        );
    }

    Ok(())
}
