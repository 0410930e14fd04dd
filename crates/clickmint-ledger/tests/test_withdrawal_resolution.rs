mod common;

use clickmint_ledger::{
    AccountExt as _, LedgerError, TransactionExt as _, TransactionKind, TransactionStatus,
};
use common::{new_ledger, register, ts};
use rust_decimal::prelude::*;

async fn funded_account(ledger: &clickmint_ledger::Ledger, id: &str) -> String {
    let id = register(ledger, id, None).await;
    ledger
        .apply_delta(
            &id,
            dec!(250.00),
            TransactionKind::Earn,
            "seed",
            ts(2025, 8, 18, 9),
        )
        .await
        .unwrap();
    id
}

#[tokio::test]
async fn test_request_validation_aborts_without_side_effects() {
    let ledger = new_ledger().await;
    let id = funded_account(&ledger, "u1").await;
    let now = ts(2025, 8, 18, 10);

    // Below minimum
    let result = ledger
        .request_withdrawal(&id, dec!(50), "bKash", "01712345678", now)
        .await;
    assert!(matches!(result, Err(LedgerError::Validation(_))));

    // Non-positive
    let result = ledger
        .request_withdrawal(&id, dec!(-10), "bKash", "01712345678", now)
        .await;
    assert!(matches!(result, Err(LedgerError::Validation(_))));

    // Destination too short
    let result = ledger
        .request_withdrawal(&id, dec!(100), "bKash", "0171234", now)
        .await;
    assert!(matches!(result, Err(LedgerError::Validation(_))));

    // More than the balance
    let result = ledger
        .request_withdrawal(&id, dec!(1000), "bKash", "01712345678", now)
        .await;
    assert!(matches!(result, Err(LedgerError::InsufficientBalance { .. })));

    // Only the seed entry exists; balance untouched
    assert_eq!(ledger.account(&id).await.unwrap().balance(), dec!(250.00));
    assert_eq!(
        ledger.transactions_for_account(&id).await.unwrap().len(),
        1
    );
}

#[tokio::test]
async fn test_request_is_pending_and_does_not_debit() {
    let ledger = new_ledger().await;
    let id = funded_account(&ledger, "u1").await;

    let entry = ledger
        .request_withdrawal(&id, dec!(150.00), "bKash", "01712345678", ts(2025, 8, 18, 10))
        .await
        .unwrap();

    assert_eq!(entry.status(), TransactionStatus::Pending);
    assert_eq!(entry.kind(), TransactionKind::Withdraw);
    assert_eq!(entry.amount(), dec!(150.00));

    // No hold: balance unchanged at request time
    assert_eq!(ledger.account(&id).await.unwrap().balance(), dec!(250.00));

    let pending = ledger.pending_withdrawals().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, entry.id);
}

#[tokio::test]
async fn test_approval_completes_without_touching_balance() {
    let ledger = new_ledger().await;
    let id = funded_account(&ledger, "u1").await;

    let entry = ledger
        .request_withdrawal(&id, dec!(150.00), "bKash", "01712345678", ts(2025, 8, 18, 10))
        .await
        .unwrap();

    let resolved = ledger
        .resolve_withdrawal(entry.id, true, ts(2025, 8, 18, 12))
        .await
        .unwrap();
    assert_eq!(resolved.status(), TransactionStatus::Completed);

    assert_eq!(ledger.account(&id).await.unwrap().balance(), dec!(250.00));
    assert!(ledger.pending_withdrawals().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rejection_refunds_exactly_once() {
    let ledger = new_ledger().await;
    let id = funded_account(&ledger, "u1").await;

    let entry = ledger
        .request_withdrawal(&id, dec!(150.00), "bKash", "01712345678", ts(2025, 8, 18, 10))
        .await
        .unwrap();

    let resolved = ledger
        .resolve_withdrawal(entry.id, false, ts(2025, 8, 18, 12))
        .await
        .unwrap();
    assert_eq!(resolved.status(), TransactionStatus::Failed);

    // Refund landed as a completed bonus entry
    let account = ledger.account(&id).await.unwrap();
    assert_eq!(account.balance(), dec!(400.00));

    let refund = ledger
        .transactions_for_account(&id)
        .await
        .unwrap()
        .into_iter()
        .find(|e| e.description == "Withdrawal Refund")
        .expect("refund entry");
    assert_eq!(refund.kind(), TransactionKind::Bonus);
    assert_eq!(refund.amount(), dec!(150.00));

    // Second resolve is rejected and must not double-refund
    let result = ledger
        .resolve_withdrawal(entry.id, false, ts(2025, 8, 18, 13))
        .await;
    assert!(matches!(
        result,
        Err(LedgerError::WithdrawalAlreadyResolved { .. })
    ));
    assert_eq!(ledger.account(&id).await.unwrap().balance(), dec!(400.00));
}

#[tokio::test]
async fn test_resolving_non_withdrawal_is_rejected() {
    let ledger = new_ledger().await;
    let id = funded_account(&ledger, "u1").await;

    // The seed entry is an earn, not a withdrawal
    let seed = ledger.transactions_for_account(&id).await.unwrap();
    let result = ledger
        .resolve_withdrawal(seed[0].id, true, ts(2025, 8, 18, 12))
        .await;
    assert!(matches!(result, Err(LedgerError::NotAWithdrawal(_))));

    let result = ledger.resolve_withdrawal(9999, true, ts(2025, 8, 18, 12)).await;
    assert!(matches!(result, Err(LedgerError::TransactionNotFound(_))));
}
