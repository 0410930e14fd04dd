use rust_decimal::Decimal;

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Account is blocked: {0}")]
    AccountBlocked(String),

    #[error("Account already exists: {0}")]
    AccountAlreadyExists(String),

    #[error("Mission not found: {0}")]
    MissionNotFound(String),

    #[error("Mission already completed: {0}")]
    MissionAlreadyCompleted(String),

    #[error("Mission goal not reached: {mission_id} ({progress}/{goal})")]
    MissionGoalNotReached {
        mission_id: String,
        progress: i32,
        goal: i32,
    },

    #[error("Unknown reward unit: {0}")]
    UnitNotFound(String),

    #[error("Unit already consumed today: {0}")]
    UnitAlreadyConsumed(String),

    #[error("Transaction not found: {0}")]
    TransactionNotFound(i32),

    #[error("Withdrawal already resolved: transaction {id} is {status}")]
    WithdrawalAlreadyResolved { id: i32, status: String },

    #[error("Not a withdrawal: transaction {0}")]
    NotAWithdrawal(i32),

    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    SeaOrm(#[from] sea_orm::DbErr),
}

// sea-orm wraps closure errors in TransactionError; unwrap our own variant so
// callers only ever see LedgerError.
impl From<sea_orm::TransactionError<LedgerError>> for LedgerError {
    fn from(err: sea_orm::TransactionError<LedgerError>) -> Self {
        match err {
            sea_orm::TransactionError::Connection(e) => LedgerError::SeaOrm(e),
            sea_orm::TransactionError::Transaction(e) => e,
        }
    }
}
