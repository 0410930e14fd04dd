/*!
# ClickMint Ledger Engine

The account ledger and mission-progress engine behind the ClickMint reward
application. Users consume sponsored units (videos/sites) to earn
micro-payments, complete missions, refer friends and request withdrawals;
operators block accounts, correct balances and resolve pending withdrawals.

## Design

Every balance mutation goes through [`Ledger::apply_delta`], which pairs the
new balance with exactly one `completed` ledger entry inside a database
transaction. Mission, daily-cycle, referral and withdrawal flows build on
that single mutator, so an account's balance always equals the rounded sum
of its completed ledger amounts.

Operations return typed errors ([`LedgerError::AccountNotFound`],
[`LedgerError::MissionAlreadyCompleted`], ...) rather than silently doing
nothing, so callers can distinguish "already done" from "wrong id".

## Quick start

```rust,no_run
use clickmint_ledger::{Catalog, Ledger, RegisterRequest};

# async fn example() -> Result<(), Box<dyn std::error::Error>> {
let conn = clickmint_db::new_writeable_ledger_db().await?;
let ledger = Ledger::new(conn, Catalog::builtin());

ledger
    .register_account(
        RegisterRequest {
            id: "uid-1".into(),
            email: "user@example.com".into(),
            name: "Test User".into(),
            referrer_code: None,
        },
        chrono::Utc::now(),
    )
    .await?;

let report = ledger.run_daily_cycle("uid-1", chrono::Utc::now()).await?;
println!("streak bonus: {:?}", report.streak_bonus);
# Ok(())
# }
```
*/

mod admin;
mod balance;
mod catalog;
mod daily;
mod errors;
mod ext;
mod ledger;
mod missions;
mod referral;
mod session;
mod types;
mod withdraw;

pub use admin::AccountEdit;
pub use catalog::{Catalog, MissionTemplate, RewardUnit, UnitKind};
pub use daily::DailyCycleReport;
pub use errors::{LedgerError, LedgerResult};
pub use ext::{AccountExt, MissionProgressExt, TransactionExt};
pub use ledger::Ledger;
pub use referral::RegisterRequest;
pub use session::Session;
pub use types::{
    streak_bonus, MissionCategory, MissionKind, TransactionKind, TransactionStatus,
    MIN_WITHDRAWAL, REFERRAL_BONUS, SIGNUP_BONUS,
};
