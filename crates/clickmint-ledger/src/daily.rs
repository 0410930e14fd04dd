//! Daily cycle service: session-entry checks driven by calendar-day
//! comparison, not elapsed time. Re-running within the same day is a no-op
//! because each guard short-circuits.

use chrono::{DateTime, NaiveDate, Utc};
use clickmint_entities::{accounts, mission_progress};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait as _, ActiveValue::Set, ColumnTrait as _, EntityTrait as _, QueryFilter as _,
    TransactionTrait as _,
};
use tracing::info;

use crate::balance::apply_delta_in;
use crate::ext::{AccountExt as _, MissionProgressExt as _};
use crate::ledger::fetch_account;
use crate::types::{streak_bonus, MissionCategory, TransactionKind};
use crate::{Ledger, LedgerError, LedgerResult};

/// What the daily cycle actually did for this session entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailyCycleReport {
    /// Bonus paid and the new streak, when the calendar day changed.
    pub streak_bonus: Option<(Decimal, i32)>,
    /// Whether daily-category missions were reset.
    pub missions_reset: bool,
    /// Whether an elapsed unit cooldown was cleared.
    pub cooldown_cleared: bool,
}

impl Ledger {
    /// Run the session-entry checks: login-streak bonus, daily mission
    /// reset, and cooldown expiry. Each check is independently guarded by
    /// day comparison, so the whole operation is idempotent within a
    /// calendar day.
    pub async fn run_daily_cycle(
        &self,
        account_id: &str,
        now: DateTime<Utc>,
    ) -> LedgerResult<DailyCycleReport> {
        let account_id = account_id.to_string();

        self.db
            .transaction::<_, DailyCycleReport, LedgerError>(move |txn| {
                Box::pin(async move {
                    let mut report = DailyCycleReport::default();
                    let account = fetch_account(txn, &account_id).await?;
                    if account.is_blocked {
                        return Err(LedgerError::AccountBlocked(account_id));
                    }
                    let today = now.date_naive();

                    // Streak bonus
                    if account.last_login().date_naive() != today {
                        let new_streak = if is_yesterday(today, account.last_login().date_naive())
                        {
                            account.login_streak + 1
                        } else {
                            1
                        };
                        let bonus = streak_bonus(new_streak);

                        apply_delta_in(
                            txn,
                            &account_id,
                            bonus,
                            TransactionKind::DailyBonus,
                            &format!("Daily Bonus - Day {}", new_streak),
                            now,
                        )
                        .await?;

                        let account = fetch_account(txn, &account_id).await?;
                        let mut active: accounts::ActiveModel = account.into();
                        active.login_streak = Set(new_streak);
                        active.last_login = Set(now.to_rfc3339());
                        active.update(txn).await?;

                        info!(account_id, new_streak, %bonus, "login streak bonus granted");
                        report.streak_bonus = Some((bonus, new_streak));
                    }

                    // Daily mission reset; social missions untouched
                    let account = fetch_account(txn, &account_id).await?;
                    if account.last_mission_reset().date_naive() != today {
                        let missions = mission_progress::Entity::find()
                            .filter(mission_progress::Column::AccountId.eq(account_id.as_str()))
                            .all(txn)
                            .await?;

                        for mission in missions {
                            if mission.category() == MissionCategory::Daily {
                                let mut active: mission_progress::ActiveModel = mission.into();
                                active.progress = Set(0);
                                active.completed = Set(false);
                                active.update(txn).await?;
                            }
                        }

                        let mut active: accounts::ActiveModel = account.into();
                        active.last_mission_reset = Set(now.to_rfc3339());
                        active.update(txn).await?;

                        report.missions_reset = true;
                    }

                    // Cooldown expiry reopens the day's unit list
                    let account = fetch_account(txn, &account_id).await?;
                    if let Some(ends_at) = account.cooldown_ends_at() {
                        if ends_at <= now {
                            let mut active: accounts::ActiveModel = account.into();
                            active.watched_unit_ids_today = Set("[]".to_string());
                            active.cooldown_ends_at = Set(None);
                            active.update(txn).await?;

                            report.cooldown_cleared = true;
                        }
                    }

                    Ok(report)
                })
            })
            .await
            .map_err(LedgerError::from)
    }
}

fn is_yesterday(today: NaiveDate, other: NaiveDate) -> bool {
    today.pred_opt() == Some(other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yesterday() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 18).unwrap();
        assert!(is_yesterday(
            today,
            NaiveDate::from_ymd_opt(2025, 8, 17).unwrap()
        ));
        assert!(!is_yesterday(
            today,
            NaiveDate::from_ymd_opt(2025, 8, 16).unwrap()
        ));
        assert!(!is_yesterday(today, today));

        // Month boundary
        let first = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        assert!(is_yesterday(
            first,
            NaiveDate::from_ymd_opt(2025, 8, 31).unwrap()
        ));
    }
}
