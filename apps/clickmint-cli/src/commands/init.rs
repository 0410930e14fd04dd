use clickmint_ledger::Ledger;
use std::path::Path;

use crate::error::CliResult;

pub async fn execute(ledger: &Ledger, db: &Path) -> CliResult<()> {
    // Opening the database already created the file and ran migrations;
    // this just confirms the result.
    println!("✅ Ledger database ready at {}", db.display());
    println!(
        "Catalog: {} units, {} missions",
        ledger.catalog().units.len(),
        ledger.catalog().missions.len()
    );

    Ok(())
}
