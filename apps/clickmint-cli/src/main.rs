use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use clickmint_ledger::Ledger;
use error::CliResult;

#[derive(Parser)]
#[command(name = "clickmint")]
#[command(about = "ClickMint ledger CLI - accounts, missions and withdrawals")]
#[command(version)]
struct Cli {
    /// Ledger database file (created on first use)
    #[arg(long, default_value = "clickmint.db", global = true)]
    db: PathBuf,

    /// Catalog YAML file (builtin catalog when omitted)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the ledger database file and apply migrations
    Init,

    /// Register a new account
    Register {
        /// Opaque subject id from the auth provider
        id: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        name: String,

        /// Referrer's account id
        #[arg(short, long)]
        referrer: Option<String>,
    },

    /// Run the session-entry daily cycle for an account
    Session {
        account: String,
    },

    /// Record a consumed reward unit (video watched / site visited)
    Watch {
        account: String,

        /// Unit id from the catalog
        unit: String,
    },

    /// List an account's missions
    Missions {
        account: String,
    },

    /// Claim a completable mission's reward
    CompleteMission {
        account: String,
        mission: String,
    },

    /// Advance a mission's progress manually
    AddProgress {
        account: String,
        mission: String,

        #[arg(short, long, default_value = "1")]
        delta: i32,
    },

    /// Show an account summary
    Balance {
        account: String,
    },

    /// Show an account's ledger history, newest first
    History {
        account: String,
    },

    /// File a withdrawal request
    Withdraw {
        account: String,

        /// Amount in currency units
        amount: String,

        #[arg(short, long, default_value = "bKash")]
        method: String,

        /// Destination account number
        #[arg(short, long)]
        destination: String,
    },

    /// List every registered account
    ListUsers,

    /// List withdrawal requests awaiting a decision
    ListWithdrawals,

    /// Approve or reject a pending withdrawal
    ResolveWithdrawal {
        /// Ledger transaction id of the request
        transaction: i32,

        #[arg(long, conflicts_with = "reject")]
        approve: bool,

        #[arg(long)]
        reject: bool,
    },

    /// Flip an account's blocked flag
    ToggleBlock {
        account: String,
    },

    /// Overwrite an account's name and/or balance
    EditUser {
        account: String,

        #[arg(short, long)]
        name: Option<String>,

        /// Target balance; the difference is booked as an admin adjustment
        #[arg(short, long)]
        balance: Option<String>,
    },

    /// Backup the ledger database to a read-only archive file
    Backup {
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let catalog = config::load_catalog(cli.catalog.as_deref())?;
    let conn = clickmint_db::open_ledger_db(&cli.db).await?;
    let ledger = Ledger::new(conn, catalog);

    match cli.command {
        Commands::Init => commands::init::execute(&ledger, &cli.db).await,

        Commands::Register {
            id,
            email,
            name,
            referrer,
        } => commands::register::execute(&ledger, id, email, name, referrer).await,

        Commands::Session { account } => commands::session::execute(&ledger, account).await,

        Commands::Watch { account, unit } => {
            commands::watch::execute(&ledger, account, unit).await
        }

        Commands::Missions { account } => commands::missions::execute(&ledger, account).await,

        Commands::CompleteMission { account, mission } => {
            commands::complete_mission::execute(&ledger, account, mission).await
        }

        Commands::AddProgress {
            account,
            mission,
            delta,
        } => commands::add_progress::execute(&ledger, account, mission, delta).await,

        Commands::Balance { account } => commands::balance::execute(&ledger, account).await,

        Commands::History { account } => commands::history::execute(&ledger, account).await,

        Commands::Withdraw {
            account,
            amount,
            method,
            destination,
        } => commands::withdraw::execute(&ledger, account, amount, method, destination).await,

        Commands::ListUsers => commands::list_users::execute(&ledger).await,

        Commands::ListWithdrawals => commands::list_withdrawals::execute(&ledger).await,

        Commands::ResolveWithdrawal {
            transaction,
            approve,
            reject,
        } => commands::resolve_withdrawal::execute(&ledger, transaction, approve, reject).await,

        Commands::ToggleBlock { account } => {
            commands::toggle_block::execute(&ledger, account).await
        }

        Commands::EditUser {
            account,
            name,
            balance,
        } => commands::edit_user::execute(&ledger, account, name, balance).await,

        Commands::Backup { output } => commands::backup::execute(&ledger, output).await,
    }
}
