mod common;

use clickmint_ledger::{AccountExt as _, LedgerError, TransactionExt as _, TransactionKind};
use common::{new_ledger, register, ts};
use rust_decimal::prelude::*;

#[tokio::test]
async fn test_watch_mission_below_goal_is_rejected_unchanged() {
    let ledger = new_ledger().await;
    let id = register(&ledger, "u1", None).await;

    ledger.add_mission_progress(&id, "m1", 3).await.unwrap();

    let result = ledger.complete_mission(&id, "m1", ts(2025, 8, 18, 10)).await;
    assert!(matches!(
        result,
        Err(LedgerError::MissionGoalNotReached {
            progress: 3,
            goal: 5,
            ..
        })
    ));

    // Mission state and balance untouched
    let account = ledger.account(&id).await.unwrap();
    assert_eq!(account.balance(), dec!(0));
    assert_eq!(account.mission_earnings(), dec!(0));

    let missions = ledger.missions_for_account(&id).await.unwrap();
    let m1 = missions.iter().find(|m| m.mission_id == "m1").unwrap();
    assert_eq!(m1.progress, 3);
    assert!(!m1.completed);
}

#[tokio::test]
async fn test_social_mission_ignores_progress_gate() {
    let ledger = new_ledger().await;
    let id = register(&ledger, "u1", None).await;

    // s1 is social with reward 15.00; progress is still 0
    let reward = ledger
        .complete_mission(&id, "s1", ts(2025, 8, 18, 10))
        .await
        .unwrap();
    assert_eq!(reward, dec!(15));

    let account = ledger.account(&id).await.unwrap();
    assert_eq!(account.balance(), dec!(15));
    assert_eq!(account.mission_earnings(), dec!(15));

    // Paid exactly once, as a bonus entry
    let entries = ledger.transactions_for_account(&id).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind(), TransactionKind::Bonus);
    assert_eq!(entries[0].amount(), dec!(15));

    // Second claim is rejected and pays nothing
    let result = ledger.complete_mission(&id, "s1", ts(2025, 8, 18, 11)).await;
    assert!(matches!(
        result,
        Err(LedgerError::MissionAlreadyCompleted(_))
    ));

    let account = ledger.account(&id).await.unwrap();
    assert_eq!(account.balance(), dec!(15));
    assert_eq!(
        ledger.transactions_for_account(&id).await.unwrap().len(),
        1
    );
}

#[tokio::test]
async fn test_watch_mission_at_goal_pays_and_freezes() {
    let ledger = new_ledger().await;
    let id = register(&ledger, "u1", None).await;

    ledger.add_mission_progress(&id, "m2", 1).await.unwrap();
    assert!(ledger.has_completable_missions(&id).await.unwrap());

    let reward = ledger
        .complete_mission(&id, "m2", ts(2025, 8, 18, 10))
        .await
        .unwrap();
    assert_eq!(reward, dec!(10));
    assert!(!ledger.has_completable_missions(&id).await.unwrap());

    let account = ledger.account(&id).await.unwrap();
    assert_eq!(account.balance(), dec!(10));
    assert_eq!(account.mission_earnings(), dec!(10));
}
