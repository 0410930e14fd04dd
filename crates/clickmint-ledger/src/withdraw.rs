//! Withdrawal request and resolution flow.
//!
//! Requests never debit the balance; the operator decision does the work.
//! Approval marks the request `completed` and leaves the balance untouched
//! (payout happens off-ledger); rejection refunds the requested amount,
//! exactly once - resolution re-checks the `pending` status so a second
//! resolve cannot double-refund.

use chrono::{DateTime, Utc};
use clickmint_entities::transactions;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait as _, ActiveValue::Set, EntityTrait as _, TransactionTrait as _};
use tracing::info;

use crate::balance::{append_entry_in, apply_delta_in};
use crate::ext::{AccountExt as _, TransactionExt as _};
use crate::ledger::fetch_account;
use crate::types::{TransactionKind, TransactionStatus, MIN_WITHDRAWAL};
use crate::{Ledger, LedgerError, LedgerResult};

impl Ledger {
    /// File a withdrawal request as a `pending` ledger entry.
    ///
    /// Validation failures abort with no side effects: the amount must be
    /// positive, at least the minimum, and covered by the current balance;
    /// the destination account number needs at least 11 characters.
    pub async fn request_withdrawal(
        &self,
        account_id: &str,
        amount: Decimal,
        method: &str,
        destination: &str,
        now: DateTime<Utc>,
    ) -> LedgerResult<transactions::Model> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::Validation(
                "Withdrawal amount must be positive".to_string(),
            ));
        }
        if amount < MIN_WITHDRAWAL {
            return Err(LedgerError::Validation(format!(
                "Minimum withdrawal amount is {}",
                MIN_WITHDRAWAL
            )));
        }
        if destination.len() < 11 {
            return Err(LedgerError::Validation(
                "Destination account number is too short".to_string(),
            ));
        }

        let account_id = account_id.to_string();
        let method = method.to_string();
        let destination = destination.to_string();

        self.db
            .transaction::<_, transactions::Model, LedgerError>(move |txn| {
                Box::pin(async move {
                    let account = fetch_account(txn, &account_id).await?;

                    if amount > account.balance() {
                        return Err(LedgerError::InsufficientBalance {
                            requested: amount,
                            available: account.balance(),
                        });
                    }

                    let entry = append_entry_in(
                        txn,
                        &account_id,
                        &account.name,
                        TransactionKind::Withdraw,
                        amount,
                        TransactionStatus::Pending,
                        &format!("Withdraw to {}: {}", method, destination),
                        now,
                    )
                    .await?;

                    info!(account_id, %amount, method, "withdrawal requested");

                    Ok(entry)
                })
            })
            .await
            .map_err(LedgerError::from)
    }

    /// Resolve a pending withdrawal: approve (status `completed`, balance
    /// unchanged) or reject (status `failed`, amount refunded once).
    pub async fn resolve_withdrawal(
        &self,
        transaction_id: i32,
        approved: bool,
        now: DateTime<Utc>,
    ) -> LedgerResult<transactions::Model> {
        self.db
            .transaction::<_, transactions::Model, LedgerError>(move |txn| {
                Box::pin(async move {
                    let entry = transactions::Entity::find_by_id(transaction_id)
                        .one(txn)
                        .await?
                        .ok_or(LedgerError::TransactionNotFound(transaction_id))?;

                    if entry.kind() != TransactionKind::Withdraw {
                        return Err(LedgerError::NotAWithdrawal(transaction_id));
                    }
                    if entry.status() != TransactionStatus::Pending {
                        return Err(LedgerError::WithdrawalAlreadyResolved {
                            id: transaction_id,
                            status: entry.status.clone(),
                        });
                    }

                    if !approved {
                        apply_delta_in(
                            txn,
                            &entry.account_id,
                            entry.amount(),
                            TransactionKind::Bonus,
                            "Withdrawal Refund",
                            now,
                        )
                        .await?;
                    }

                    let account_id = entry.account_id.clone();
                    let mut active: transactions::ActiveModel = entry.into();
                    active.status = Set(if approved {
                        TransactionStatus::Completed.to_string()
                    } else {
                        TransactionStatus::Failed.to_string()
                    });
                    let entry = active.update(txn).await?;

                    info!(account_id, transaction_id, approved, "withdrawal resolved");

                    Ok(entry)
                })
            })
            .await
            .map_err(LedgerError::from)
    }
}
