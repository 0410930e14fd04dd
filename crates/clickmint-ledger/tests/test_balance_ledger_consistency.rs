mod common;

use clickmint_ledger::{
    AccountExt as _, LedgerError, TransactionExt as _, TransactionKind, TransactionStatus,
};
use common::{new_ledger, register, ts};
use rust_decimal::prelude::*;

#[tokio::test]
async fn test_serial_deltas_match_ledger_sum() {
    let ledger = new_ledger().await;
    let id = register(&ledger, "u1", None).await;

    let deltas = [dec!(1.25), dec!(2.50), dec!(-0.75), dec!(10.01), dec!(0.33)];
    for (i, amount) in deltas.iter().enumerate() {
        ledger
            .apply_delta(
                &id,
                *amount,
                TransactionKind::Earn,
                &format!("delta {}", i),
                ts(2025, 8, 18, 10 + i as u32),
            )
            .await
            .unwrap();
    }

    let expected: Decimal = deltas.iter().copied().sum::<Decimal>().round_dp(2);

    let account = ledger.account(&id).await.unwrap();
    assert_eq!(account.balance(), expected);

    let entries = ledger.transactions_for_account(&id).await.unwrap();
    assert_eq!(entries.len(), deltas.len());
    assert!(entries
        .iter()
        .all(|e| e.status() == TransactionStatus::Completed));

    let ledger_sum: Decimal = entries.iter().map(|e| e.amount()).sum();
    assert_eq!(ledger_sum.round_dp(2), expected);
}

#[tokio::test]
async fn test_delta_rounds_to_two_places() {
    let ledger = new_ledger().await;
    let id = register(&ledger, "u1", None).await;

    ledger
        .apply_delta(
            &id,
            dec!(1.239),
            TransactionKind::Bonus,
            "odd fraction",
            ts(2025, 8, 18, 10),
        )
        .await
        .unwrap();

    let account = ledger.account(&id).await.unwrap();
    assert_eq!(account.balance(), dec!(1.24));

    // Midpoints round to even
    ledger
        .apply_delta(
            &id,
            dec!(0.005),
            TransactionKind::Bonus,
            "midpoint fraction",
            ts(2025, 8, 18, 11),
        )
        .await
        .unwrap();

    let account = ledger.account(&id).await.unwrap();
    assert_eq!(account.balance(), dec!(1.24));
}

#[tokio::test]
async fn test_delta_on_missing_account_is_not_found() {
    let ledger = new_ledger().await;

    let result = ledger
        .apply_delta(
            "ghost",
            dec!(1.00),
            TransactionKind::Earn,
            "nope",
            ts(2025, 8, 18, 10),
        )
        .await;

    assert!(matches!(result, Err(LedgerError::AccountNotFound(_))));

    // And nothing was written
    assert!(ledger.all_transactions().await.unwrap().is_empty());
}
