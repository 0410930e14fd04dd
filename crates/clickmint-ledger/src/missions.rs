//! Mission engine: progress tracking, completion payouts, and the
//! unit-consumption fan-out.
//!
//! Mission state machine: pending (progress < goal) -> completable
//! (progress >= goal, or social kind) -> completed (terminal until a daily
//! reset). Social missions are never reset.

use chrono::{DateTime, Utc};
use clickmint_entities::{accounts, mission_progress};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait as _, ActiveValue::Set, ColumnTrait as _, ConnectionTrait, EntityTrait as _,
    QueryFilter as _, QueryOrder as _, TransactionTrait as _,
};
use tracing::{debug, info};

use crate::balance::apply_delta_in;
use crate::ext::{AccountExt as _, MissionProgressExt as _};
use crate::ledger::{fetch_account, fetch_mission};
use crate::types::{round2, MissionKind, TransactionKind};
use crate::{Ledger, LedgerError, LedgerResult};

impl Ledger {
    /// Advance a mission's progress, clamped to its goal.
    pub async fn add_mission_progress(
        &self,
        account_id: &str,
        mission_id: &str,
        delta: i32,
    ) -> LedgerResult<i32> {
        let account_id = account_id.to_string();
        let mission_id = mission_id.to_string();

        self.db
            .transaction::<_, i32, LedgerError>(move |txn| {
                Box::pin(async move {
                    fetch_account(txn, &account_id).await?;
                    let mission = fetch_mission(txn, &account_id, &mission_id).await?;
                    add_progress_in(txn, mission, delta).await
                })
            })
            .await
            .map_err(LedgerError::from)
    }

    /// Claim a mission's reward.
    ///
    /// Requires the mission to be completable: goal reached, or social kind
    /// (a single click satisfies the goal). Pays the reward through the
    /// balance service, freezes the mission as completed, and bumps the
    /// account's cumulative mission earnings.
    pub async fn complete_mission(
        &self,
        account_id: &str,
        mission_id: &str,
        now: DateTime<Utc>,
    ) -> LedgerResult<Decimal> {
        let account_id = account_id.to_string();
        let mission_id = mission_id.to_string();

        self.db
            .transaction::<_, Decimal, LedgerError>(move |txn| {
                Box::pin(async move {
                    let mission = fetch_mission(txn, &account_id, &mission_id).await?;

                    if mission.completed {
                        return Err(LedgerError::MissionAlreadyCompleted(mission_id));
                    }
                    if !mission.is_completable() {
                        return Err(LedgerError::MissionGoalNotReached {
                            mission_id,
                            progress: mission.progress,
                            goal: mission.goal,
                        });
                    }

                    let reward = mission.reward();
                    let title = mission.title.clone();
                    let goal = mission.goal;

                    apply_delta_in(
                        txn,
                        &account_id,
                        reward,
                        TransactionKind::Bonus,
                        &format!("Mission: {}", title),
                        now,
                    )
                    .await?;

                    let mut active: mission_progress::ActiveModel = mission.into();
                    active.completed = Set(true);
                    active.progress = Set(goal);
                    active.update(txn).await?;

                    let account = fetch_account(txn, &account_id).await?;
                    let earnings = round2(account.mission_earnings() + reward);
                    let mut active: accounts::ActiveModel = account.into();
                    active.mission_earnings = Set(earnings.to_string());
                    active.update(txn).await?;

                    info!(account_id, title, %reward, "mission completed");

                    Ok(reward)
                })
            })
            .await
            .map_err(LedgerError::from)
    }

    /// Record a consumed reward unit (video watched / site visited).
    ///
    /// Pays the unit's reward, increments the account's lifetime counter,
    /// marks the unit as consumed for the day, and broadcasts +1 progress to
    /// every incomplete watch mission - deliberately generous: one action can
    /// advance several watch missions at once. Once every catalog unit has
    /// been consumed the cooldown window starts.
    pub async fn record_unit_completion(
        &self,
        account_id: &str,
        unit_id: &str,
        now: DateTime<Utc>,
    ) -> LedgerResult<Decimal> {
        let unit = self
            .catalog
            .unit(unit_id)
            .ok_or_else(|| LedgerError::UnitNotFound(unit_id.to_string()))?
            .clone();
        let total_units = self.catalog.units.len();
        let cooldown = self.catalog.cooldown();
        let account_id = account_id.to_string();

        self.db
            .transaction::<_, Decimal, LedgerError>(move |txn| {
                Box::pin(async move {
                    let account = fetch_account(txn, &account_id).await?;

                    let mut watched = account.watched_unit_ids();
                    if watched.iter().any(|id| id == &unit.id) {
                        return Err(LedgerError::UnitAlreadyConsumed(unit.id));
                    }

                    apply_delta_in(
                        txn,
                        &account_id,
                        unit.reward,
                        TransactionKind::Earn,
                        &format!("Ad: {}", unit.title),
                        now,
                    )
                    .await?;

                    watched.push(unit.id.clone());
                    let all_consumed = watched.len() >= total_units;

                    let account = fetch_account(txn, &account_id).await?;
                    let completed = account.total_units_completed + 1;
                    let mut active: accounts::ActiveModel = account.into();
                    active.total_units_completed = Set(completed);
                    active.watched_unit_ids_today = Set(serde_json::to_string(&watched)
                        .map_err(|e| LedgerError::Validation(e.to_string()))?);
                    if all_consumed {
                        active.cooldown_ends_at = Set(Some((now + cooldown).to_rfc3339()));
                    }
                    active.update(txn).await?;

                    // Broadcast, not a targeted update: every incomplete watch
                    // mission advances by one.
                    let missions = mission_progress::Entity::find()
                        .filter(mission_progress::Column::AccountId.eq(account_id.as_str()))
                        .order_by_asc(mission_progress::Column::Position)
                        .all(txn)
                        .await?;

                    for mission in missions {
                        if mission.kind() == MissionKind::Watch && !mission.completed {
                            add_progress_in(txn, mission, 1).await?;
                        }
                    }

                    debug!(
                        account_id,
                        unit_id = unit.id,
                        all_consumed,
                        "unit completion recorded"
                    );

                    Ok(unit.reward)
                })
            })
            .await
            .map_err(LedgerError::from)
    }
}

async fn add_progress_in<C: ConnectionTrait>(
    conn: &C,
    mission: mission_progress::Model,
    delta: i32,
) -> LedgerResult<i32> {
    if mission.completed {
        return Err(LedgerError::MissionAlreadyCompleted(mission.mission_id));
    }

    let goal = mission.goal;
    let new_progress = mission.progress.saturating_add(delta).clamp(0, goal);

    let mut active: mission_progress::ActiveModel = mission.into();
    active.progress = Set(new_progress);
    active.update(conn).await?;

    Ok(new_progress)
}
