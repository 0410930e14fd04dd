use chrono::Utc;
use clickmint_ledger::{Ledger, TransactionExt as _};

use crate::error::{CliError, CliResult};

pub async fn execute(
    ledger: &Ledger,
    transaction: i32,
    approve: bool,
    reject: bool,
) -> CliResult<()> {
    if approve == reject {
        return Err(CliError::InvalidArgument(
            "pass exactly one of --approve or --reject".to_string(),
        ));
    }

    let entry = ledger
        .resolve_withdrawal(transaction, approve, Utc::now())
        .await?;

    if approve {
        println!("✅ Withdrawal #{} approved", entry.id);
        println!("{} paid out to {}", entry.amount().abs(), entry.account_name);
    } else {
        println!("❌ Withdrawal #{} rejected", entry.id);
        println!("{} refunded to {}", entry.amount().abs(), entry.account_name);
    }

    Ok(())
}
