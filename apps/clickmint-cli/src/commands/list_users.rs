use clickmint_ledger::{AccountExt as _, Ledger};

use crate::error::CliResult;

pub async fn execute(ledger: &Ledger) -> CliResult<()> {
    let accounts = ledger.accounts().await?;

    println!("{} registered account(s):", accounts.len());
    for account in accounts {
        let flag = if account.is_blocked { " ⛔" } else { "" };
        println!(
            "  {:<24} {:<24} balance {:>10} streak {:>3}{}",
            account.id,
            account.name,
            account.balance(),
            account.login_streak,
            flag
        );
    }

    Ok(())
}
