//! Admin operations: block toggling and account corrections.
//!
//! A balance overwrite goes through the ledger as an `admin-adjustment`
//! entry for the delta, so the balance-equals-ledger-sum invariant holds
//! for corrected accounts too.

use chrono::{DateTime, Utc};
use clickmint_entities::accounts;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait as _, ActiveValue::Set, TransactionTrait as _};
use tracing::info;

use crate::balance::apply_delta_in;
use crate::ext::AccountExt as _;
use crate::ledger::fetch_account;
use crate::types::{round2, TransactionKind};
use crate::{Ledger, LedgerError, LedgerResult};

/// Fields an operator may overwrite on an account.
#[derive(Debug, Clone, Default)]
pub struct AccountEdit {
    pub name: Option<String>,
    pub balance: Option<Decimal>,
}

impl Ledger {
    /// Flip an account's blocked flag. Existing sessions are not terminated;
    /// a blocked account is refused at the next session entry.
    pub async fn toggle_block(&self, account_id: &str) -> LedgerResult<bool> {
        let account_id = account_id.to_string();

        self.db
            .transaction::<_, bool, LedgerError>(move |txn| {
                Box::pin(async move {
                    let account = fetch_account(txn, &account_id).await?;
                    let blocked = !account.is_blocked;

                    let mut active: accounts::ActiveModel = account.into();
                    active.is_blocked = Set(blocked);
                    active.update(txn).await?;

                    info!(account_id, blocked, "block flag toggled");

                    Ok(blocked)
                })
            })
            .await
            .map_err(LedgerError::from)
    }

    /// Apply an operator edit. A name change is a plain overwrite; a balance
    /// change is converted into a delta and routed through the balance
    /// service so it leaves an `admin-adjustment` ledger entry.
    pub async fn edit_account(
        &self,
        account_id: &str,
        edit: AccountEdit,
        now: DateTime<Utc>,
    ) -> LedgerResult<accounts::Model> {
        let account_id = account_id.to_string();

        self.db
            .transaction::<_, accounts::Model, LedgerError>(move |txn| {
                Box::pin(async move {
                    let account = fetch_account(txn, &account_id).await?;

                    if let Some(name) = edit.name {
                        let name = name.trim().to_string();
                        if name.len() < 3 {
                            return Err(LedgerError::Validation(
                                "Name must be at least 3 characters".to_string(),
                            ));
                        }
                        let mut active: accounts::ActiveModel = account.clone().into();
                        active.name = Set(name);
                        active.update(txn).await?;
                    }

                    if let Some(target) = edit.balance {
                        let target = round2(target);
                        let delta = target - account.balance();
                        if !delta.is_zero() {
                            apply_delta_in(
                                txn,
                                &account_id,
                                delta,
                                TransactionKind::AdminAdjustment,
                                "Manual balance correction",
                                now,
                            )
                            .await?;
                        }
                    }

                    let account = fetch_account(txn, &account_id).await?;

                    info!(account_id, "account edited");

                    Ok(account)
                })
            })
            .await
            .map_err(LedgerError::from)
    }
}
