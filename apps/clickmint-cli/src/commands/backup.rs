use clickmint_ledger::Ledger;
use std::path::PathBuf;

use crate::error::CliResult;

pub async fn execute(ledger: &Ledger, output: PathBuf) -> CliResult<()> {
    clickmint_db::backup_ledger_db(ledger.connection(), &output).await?;

    println!("✅ Backup written to {}", output.display());
    println!("The file is read-only; open it with a readonly connection");

    Ok(())
}
