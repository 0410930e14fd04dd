use chrono::Utc;
use clickmint_ledger::Ledger;

use crate::error::CliResult;

pub async fn execute(ledger: &Ledger, account: String) -> CliResult<()> {
    let (session, report) = ledger.open_session(&account, Utc::now()).await?;

    println!("Session opened for {}", session.account_id);
    match report.streak_bonus {
        Some((bonus, streak)) => {
            println!("🎁 Daily bonus paid: {} (streak day {})", bonus, streak)
        }
        None => println!("Already checked in today, no bonus"),
    }
    if report.missions_reset {
        println!("🔄 Daily missions reset");
    }
    if report.cooldown_cleared {
        println!("⏰ Ad cooldown expired, units available again");
    }

    Ok(())
}
