//! Typed accessors over the TEXT columns of the persisted entities.
//!
//! The database stores amounts, timestamps and enums as strings; these
//! traits parse them back out. The engine is the only writer, so a parse
//! failure here is a bug, not an input error.

use chrono::{DateTime, Utc};
use clickmint_entities::{accounts, mission_progress, transactions};
use rust_decimal::Decimal;

use crate::types::{MissionCategory, MissionKind, TransactionKind, TransactionStatus};

fn parse_decimal(raw: &str, what: &str) -> Decimal {
    let result = raw.parse::<Decimal>();
    debug_assert!(result.is_ok(), "Invalid {} amount {}", what, raw);
    result.unwrap_or_default()
}

fn parse_timestamp(raw: &str, what: &str) -> DateTime<Utc> {
    let result = DateTime::parse_from_rfc3339(raw);
    debug_assert!(result.is_ok(), "Invalid {} timestamp {}", what, raw);
    result
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| DateTime::<Utc>::MIN_UTC)
}

pub trait AccountExt {
    fn balance(&self) -> Decimal;
    fn mission_earnings(&self) -> Decimal;
    fn referral_earnings(&self) -> Decimal;
    fn last_login(&self) -> DateTime<Utc>;
    fn last_mission_reset(&self) -> DateTime<Utc>;
    fn cooldown_ends_at(&self) -> Option<DateTime<Utc>>;
    fn watched_unit_ids(&self) -> Vec<String>;
}

impl AccountExt for accounts::Model {
    fn balance(&self) -> Decimal {
        parse_decimal(&self.balance, "balance")
    }

    fn mission_earnings(&self) -> Decimal {
        parse_decimal(&self.mission_earnings, "mission earnings")
    }

    fn referral_earnings(&self) -> Decimal {
        parse_decimal(&self.referral_earnings, "referral earnings")
    }

    fn last_login(&self) -> DateTime<Utc> {
        parse_timestamp(&self.last_login, "last login")
    }

    fn last_mission_reset(&self) -> DateTime<Utc> {
        parse_timestamp(&self.last_mission_reset, "last mission reset")
    }

    fn cooldown_ends_at(&self) -> Option<DateTime<Utc>> {
        self.cooldown_ends_at
            .as_deref()
            .filter(|raw| !raw.is_empty())
            .map(|raw| parse_timestamp(raw, "cooldown end"))
    }

    fn watched_unit_ids(&self) -> Vec<String> {
        let result = serde_json::from_str(&self.watched_unit_ids_today);
        debug_assert!(
            result.is_ok(),
            "Invalid watched unit ids {}",
            self.watched_unit_ids_today
        );
        result.unwrap_or_default()
    }
}

pub trait TransactionExt {
    fn kind(&self) -> TransactionKind;
    fn status(&self) -> TransactionStatus;
    fn amount(&self) -> Decimal;
    fn date(&self) -> DateTime<Utc>;
}

impl TransactionExt for transactions::Model {
    fn kind(&self) -> TransactionKind {
        let kind = self.kind.parse::<TransactionKind>();
        debug_assert!(kind.is_ok(), "Invalid transaction kind {}", self.kind);
        kind.unwrap_or(TransactionKind::Bonus)
    }

    fn status(&self) -> TransactionStatus {
        let status = self.status.parse::<TransactionStatus>();
        debug_assert!(status.is_ok(), "Invalid transaction status {}", self.status);
        status.unwrap_or(TransactionStatus::Failed)
    }

    fn amount(&self) -> Decimal {
        parse_decimal(&self.amount, "transaction")
    }

    fn date(&self) -> DateTime<Utc> {
        parse_timestamp(&self.date, "transaction")
    }
}

pub trait MissionProgressExt {
    fn kind(&self) -> MissionKind;
    fn category(&self) -> MissionCategory;
    fn reward(&self) -> Decimal;
    /// Completable means the reward can be claimed right now: goal reached,
    /// or a social mission (single click satisfies the goal).
    fn is_completable(&self) -> bool;
}

impl MissionProgressExt for mission_progress::Model {
    fn kind(&self) -> MissionKind {
        let kind = self.kind.parse::<MissionKind>();
        debug_assert!(kind.is_ok(), "Invalid mission kind {}", self.kind);
        kind.unwrap_or(MissionKind::Watch)
    }

    fn category(&self) -> MissionCategory {
        let category = self.category.parse::<MissionCategory>();
        debug_assert!(category.is_ok(), "Invalid mission category {}", self.category);
        category.unwrap_or(MissionCategory::Daily)
    }

    fn reward(&self) -> Decimal {
        parse_decimal(&self.reward, "mission reward")
    }

    fn is_completable(&self) -> bool {
        !self.completed && (self.progress >= self.goal || self.kind() == MissionKind::Social)
    }
}
