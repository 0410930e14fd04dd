use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Db(#[from] clickmint_db::Error),

    #[error("Ledger error: {0}")]
    Ledger(#[from] clickmint_ledger::LedgerError),

    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] rust_decimal::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
