use clickmint_ledger::Ledger;

use crate::error::CliResult;

pub async fn execute(
    ledger: &Ledger,
    account: String,
    mission: String,
    delta: i32,
) -> CliResult<()> {
    let progress = ledger
        .add_mission_progress(&account, &mission, delta)
        .await?;

    println!("Mission {} progress is now {}", mission, progress);

    Ok(())
}
