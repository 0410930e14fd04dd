use chrono::Utc;
use clickmint_ledger::{AccountExt as _, Ledger, RegisterRequest};

use crate::error::CliResult;

pub async fn execute(
    ledger: &Ledger,
    id: String,
    email: String,
    name: String,
    referrer: Option<String>,
) -> CliResult<()> {
    let account = ledger
        .register_account(
            RegisterRequest {
                id,
                email,
                name,
                referrer_code: referrer,
            },
            Utc::now(),
        )
        .await?;

    println!("✅ Registered {} ({})", account.name, account.id);
    println!("Starting balance: {}", account.balance());
    println!("Missions assigned: {}", ledger.catalog().missions.len());

    Ok(())
}
