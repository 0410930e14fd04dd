use clickmint_ledger::{Ledger, MissionProgressExt as _};

use crate::error::CliResult;

pub async fn execute(ledger: &Ledger, account: String) -> CliResult<()> {
    let missions = ledger.missions_for_account(&account).await?;

    println!("Missions for {}:", account);
    for mission in missions {
        let status = if mission.completed {
            "✅ claimed"
        } else if mission.is_completable() {
            "🎁 claimable"
        } else {
            "⏳ in progress"
        };
        println!(
            "  {:<16} {:<30} {}/{} reward {} [{}]",
            mission.mission_id,
            mission.title,
            mission.progress,
            mission.goal,
            mission.reward(),
            status
        );
    }

    Ok(())
}
