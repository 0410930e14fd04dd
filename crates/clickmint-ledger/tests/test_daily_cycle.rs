mod common;

use clickmint_ledger::{AccountExt as _, LedgerError, TransactionExt as _, TransactionKind};
use common::{new_ledger, register, ts};
use rust_decimal::prelude::*;

// Accounts registered through the fixture have last_login and
// last_mission_reset at 2025-08-18 09:00 UTC with streak 1.

#[tokio::test]
async fn test_same_day_cycle_is_a_no_op() {
    let ledger = new_ledger().await;
    let id = register(&ledger, "u1", None).await;

    let report = ledger.run_daily_cycle(&id, ts(2025, 8, 18, 20)).await.unwrap();
    assert!(report.streak_bonus.is_none());
    assert!(!report.missions_reset);
    assert!(!report.cooldown_cleared);

    let account = ledger.account(&id).await.unwrap();
    assert_eq!(account.balance(), dec!(0));
    assert_eq!(account.login_streak, 1);
}

#[tokio::test]
async fn test_next_day_increments_streak_and_pays_bonus() {
    let ledger = new_ledger().await;
    let id = register(&ledger, "u1", None).await;

    // Last login was yesterday relative to this timestamp
    let report = ledger.run_daily_cycle(&id, ts(2025, 8, 19, 8)).await.unwrap();

    // 2.5 + 0.5 * 2
    assert_eq!(report.streak_bonus, Some((dec!(3.5), 2)));

    let account = ledger.account(&id).await.unwrap();
    assert_eq!(account.login_streak, 2);
    assert_eq!(account.balance(), dec!(3.5));

    let entries = ledger.transactions_for_account(&id).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind(), TransactionKind::DailyBonus);
    assert_eq!(entries[0].amount(), dec!(3.5));
}

#[tokio::test]
async fn test_gap_resets_streak_to_one() {
    let ledger = new_ledger().await;
    let id = register(&ledger, "u1", None).await;

    // Two days skipped; streak restarts at 1, bonus 2.5 + 0.5
    let report = ledger.run_daily_cycle(&id, ts(2025, 8, 21, 8)).await.unwrap();
    assert_eq!(report.streak_bonus, Some((dec!(3.0), 1)));

    let account = ledger.account(&id).await.unwrap();
    assert_eq!(account.login_streak, 1);
}

#[tokio::test]
async fn test_cycle_is_idempotent_within_a_day() {
    let ledger = new_ledger().await;
    let id = register(&ledger, "u1", None).await;

    ledger.run_daily_cycle(&id, ts(2025, 8, 19, 8)).await.unwrap();
    let after_first = ledger.account(&id).await.unwrap();

    let report = ledger.run_daily_cycle(&id, ts(2025, 8, 19, 18)).await.unwrap();
    assert!(report.streak_bonus.is_none());
    assert!(!report.missions_reset);

    let after_second = ledger.account(&id).await.unwrap();
    assert_eq!(after_second.balance(), after_first.balance());
    assert_eq!(after_second.login_streak, after_first.login_streak);
    assert_eq!(
        ledger.transactions_for_account(&id).await.unwrap().len(),
        1
    );
}

#[tokio::test]
async fn test_open_session_yields_identity_and_report() {
    let ledger = new_ledger().await;
    let id = register(&ledger, "u1", None).await;

    let (session, report) = ledger.open_session(&id, ts(2025, 8, 19, 8)).await.unwrap();
    assert_eq!(session.account_id, id);
    assert!(report.streak_bonus.is_some());

    let result = ledger.open_session("ghost", ts(2025, 8, 19, 8)).await;
    assert!(matches!(result, Err(LedgerError::AccountNotFound(_))));
}

#[tokio::test]
async fn test_blocked_account_is_refused_at_session_entry() {
    let ledger = new_ledger().await;
    let id = register(&ledger, "u1", None).await;

    ledger.toggle_block(&id).await.unwrap();

    let result = ledger.run_daily_cycle(&id, ts(2025, 8, 19, 8)).await;
    assert!(matches!(result, Err(LedgerError::AccountBlocked(_))));

    // No bonus was paid
    assert_eq!(ledger.account(&id).await.unwrap().balance(), dec!(0));

    // Unblocking restores the cycle
    ledger.toggle_block(&id).await.unwrap();
    let report = ledger.run_daily_cycle(&id, ts(2025, 8, 19, 8)).await.unwrap();
    assert!(report.streak_bonus.is_some());
}

#[tokio::test]
async fn test_daily_missions_reset_social_untouched() {
    let ledger = new_ledger().await;
    let id = register(&ledger, "u1", None).await;

    // Finish a daily mission and a social mission on day one
    ledger.add_mission_progress(&id, "m2", 1).await.unwrap();
    ledger
        .complete_mission(&id, "m2", ts(2025, 8, 18, 12))
        .await
        .unwrap();
    ledger
        .complete_mission(&id, "s1", ts(2025, 8, 18, 12))
        .await
        .unwrap();

    let report = ledger.run_daily_cycle(&id, ts(2025, 8, 19, 8)).await.unwrap();
    assert!(report.missions_reset);

    let missions = ledger.missions_for_account(&id).await.unwrap();
    let m2 = missions.iter().find(|m| m.mission_id == "m2").unwrap();
    let s1 = missions.iter().find(|m| m.mission_id == "s1").unwrap();

    // Daily category back to zero, claimable again
    assert_eq!(m2.progress, 0);
    assert!(!m2.completed);

    // Social category never resets
    assert!(s1.completed);
}

#[tokio::test]
async fn test_elapsed_cooldown_reopens_unit_list() {
    let ledger = new_ledger().await;
    let id = register(&ledger, "u1", None).await;
    let day_one = ts(2025, 8, 18, 10);

    let unit_ids: Vec<String> = ledger
        .catalog()
        .units
        .iter()
        .map(|u| u.id.clone())
        .collect();
    for unit_id in &unit_ids {
        ledger.record_unit_completion(&id, unit_id, day_one).await.unwrap();
    }
    assert!(ledger.account(&id).await.unwrap().cooldown_ends_at().is_some());

    // Before expiry: cooldown stands
    let report = ledger
        .run_daily_cycle(&id, day_one + chrono::Duration::hours(1))
        .await
        .unwrap();
    assert!(!report.cooldown_cleared);

    // After expiry: watched set and marker cleared
    let report = ledger.run_daily_cycle(&id, ts(2025, 8, 19, 8)).await.unwrap();
    assert!(report.cooldown_cleared);

    let account = ledger.account(&id).await.unwrap();
    assert!(account.watched_unit_ids().is_empty());
    assert!(account.cooldown_ends_at().is_none());

    // Units can be consumed again
    ledger
        .record_unit_completion(&id, "ad1", ts(2025, 8, 19, 9))
        .await
        .unwrap();
}
