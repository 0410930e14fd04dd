use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::LedgerError;

/// Seed balance for an account registered with a referrer code.
pub const SIGNUP_BONUS: Decimal = rust_decimal::dec!(5.00);

/// One-time bonus credited to the referrer when a referred account registers.
pub const REFERRAL_BONUS: Decimal = rust_decimal::dec!(5.00);

/// Smallest amount a withdrawal request may ask for.
pub const MIN_WITHDRAWAL: Decimal = rust_decimal::dec!(100.00);

/// Daily login bonus for a given streak: 2.5 + 0.5 per streak day.
pub fn streak_bonus(streak: i32) -> Decimal {
    rust_decimal::dec!(2.5) + rust_decimal::dec!(0.5) * Decimal::from(streak)
}

/// Round a currency amount to 2 decimal places.
pub(crate) fn round2(amount: Decimal) -> Decimal {
    amount.round_dp(2)
}

// ================================================================================================
// Persisted enums
//
// Stored as plain strings; the entity extension traits parse them back out.
// ================================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionKind {
    Earn,
    Withdraw,
    Bonus,
    Referral,
    DailyBonus,
    AdminAdjustment,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use TransactionKind::*;
        let s = match self {
            Earn => "earn",
            Withdraw => "withdraw",
            Bonus => "bonus",
            Referral => "referral",
            DailyBonus => "daily-bonus",
            AdminAdjustment => "admin-adjustment",
        };

        write!(f, "{}", s)
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use TransactionKind::*;
        match s {
            "earn" => Ok(Earn),
            "withdraw" => Ok(Withdraw),
            "bonus" => Ok(Bonus),
            "referral" => Ok(Referral),
            "daily-bonus" => Ok(DailyBonus),
            "admin-adjustment" => Ok(AdminAdjustment),
            other => Err(LedgerError::Validation(format!(
                "Invalid transaction kind: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use TransactionStatus::*;
        let s = match self {
            Completed => "completed",
            Pending => "pending",
            Failed => "failed",
        };

        write!(f, "{}", s)
    }
}

impl std::str::FromStr for TransactionStatus {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use TransactionStatus::*;
        match s {
            "completed" => Ok(Completed),
            "pending" => Ok(Pending),
            "failed" => Ok(Failed),
            other => Err(LedgerError::Validation(format!(
                "Invalid transaction status: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionKind {
    /// Advanced by consuming reward units; pays out once progress reaches goal.
    Watch,
    /// One-shot action (follow/subscribe); completable regardless of progress.
    Social,
}

impl std::fmt::Display for MissionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use MissionKind::*;
        let s = match self {
            Watch => "watch",
            Social => "social",
        };

        write!(f, "{}", s)
    }
}

impl std::str::FromStr for MissionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "watch" => Ok(MissionKind::Watch),
            "social" => Ok(MissionKind::Social),
            other => Err(LedgerError::Validation(format!(
                "Invalid mission kind: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionCategory {
    /// Reset to zero by the daily cycle service each calendar day.
    Daily,
    /// Never reset.
    Social,
}

impl std::fmt::Display for MissionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use MissionCategory::*;
        let s = match self {
            Daily => "daily",
            Social => "social",
        };

        write!(f, "{}", s)
    }
}

impl std::str::FromStr for MissionCategory {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(MissionCategory::Daily),
            "social" => Ok(MissionCategory::Social),
            other => Err(LedgerError::Validation(format!(
                "Invalid mission category: {}",
                other
            ))),
        }
    }
}
