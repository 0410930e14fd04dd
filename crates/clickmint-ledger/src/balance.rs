//! Balance service: the only place account balances change.
//!
//! Every mutation pairs the new balance with exactly one `completed` ledger
//! entry, inside a single database transaction. Concurrent deltas against
//! the same account therefore compose instead of overwriting each other.

use chrono::{DateTime, Utc};
use clickmint_entities::{accounts, transactions};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait as _, ActiveValue::Set, ConnectionTrait, TransactionTrait as _};
use tracing::debug;

use crate::ext::AccountExt as _;
use crate::ledger::fetch_account;
use crate::types::{round2, TransactionKind, TransactionStatus};
use crate::{Ledger, LedgerError, LedgerResult};

impl Ledger {
    /// Apply a signed amount to an account's balance and append the matching
    /// ledger entry. Returns the new balance.
    pub async fn apply_delta(
        &self,
        account_id: &str,
        amount: Decimal,
        kind: TransactionKind,
        description: &str,
        now: DateTime<Utc>,
    ) -> LedgerResult<Decimal> {
        let account_id = account_id.to_string();
        let description = description.to_string();

        self.db
            .transaction::<_, Decimal, LedgerError>(move |txn| {
                Box::pin(async move {
                    apply_delta_in(txn, &account_id, amount, kind, &description, now).await
                })
            })
            .await
            .map_err(LedgerError::from)
    }
}

/// Transaction-scoped body of `apply_delta`, shared with the composite flows
/// (mission completion, referral, refunds) so they stay atomic end to end.
pub(crate) async fn apply_delta_in<C: ConnectionTrait>(
    conn: &C,
    account_id: &str,
    amount: Decimal,
    kind: TransactionKind,
    description: &str,
    now: DateTime<Utc>,
) -> LedgerResult<Decimal> {
    let account = fetch_account(conn, account_id).await?;
    let new_balance = round2(account.balance() + amount);
    let account_name = account.name.clone();

    let mut active: accounts::ActiveModel = account.into();
    active.balance = Set(new_balance.to_string());
    active.update(conn).await?;

    append_entry_in(
        conn,
        account_id,
        &account_name,
        kind,
        amount,
        TransactionStatus::Completed,
        description,
        now,
    )
    .await?;

    debug!(
        account_id,
        %amount,
        kind = %kind,
        %new_balance,
        "applied balance delta"
    );

    Ok(new_balance)
}

/// Append one ledger entry. The ledger is append-only; nothing else in the
/// engine updates rows once they are `completed` or `failed`.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn append_entry_in<C: ConnectionTrait>(
    conn: &C,
    account_id: &str,
    account_name: &str,
    kind: TransactionKind,
    amount: Decimal,
    status: TransactionStatus,
    description: &str,
    now: DateTime<Utc>,
) -> LedgerResult<transactions::Model> {
    let entry = transactions::ActiveModel {
        account_id: Set(account_id.to_string()),
        account_name: Set(account_name.to_string()),
        kind: Set(kind.to_string()),
        amount: Set(amount.to_string()),
        date: Set(now.to_rfc3339()),
        status: Set(status.to_string()),
        description: Set(description.to_string()),
        ..Default::default()
    };

    Ok(entry.insert(conn).await?)
}
