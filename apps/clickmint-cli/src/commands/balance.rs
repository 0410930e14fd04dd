use clickmint_ledger::{AccountExt as _, Ledger};

use crate::error::CliResult;

pub async fn execute(ledger: &Ledger, account: String) -> CliResult<()> {
    let model = ledger.account(&account).await?;

    println!("Account: {} ({})", model.name, model.id);
    println!("Email: {}", model.email);
    println!("Balance: {}", model.balance());
    println!("Login streak: {} days", model.login_streak);
    println!("Units completed: {}", model.total_units_completed);
    println!("Mission earnings: {}", model.mission_earnings());
    println!(
        "Referrals: {} ({} earned)",
        model.referral_count,
        model.referral_earnings()
    );
    if model.is_blocked {
        println!("⛔ Account is blocked");
    }
    if let Some(ends_at) = model.cooldown_ends_at() {
        println!("⏰ Ad cooldown until {}", ends_at);
    }

    Ok(())
}
