//! Registration and the one-shot referral flow.
//!
//! A new account registered with a non-empty referrer code is seeded with
//! the signup bonus whether or not the code resolves: the seed rewards the
//! referral intent, not the referrer's existence. Ledger entries on both
//! sides are only written when the referrer actually exists.

use chrono::{DateTime, Utc};
use clickmint_entities::{accounts, mission_progress, referred_users};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait as _, ActiveValue::Set, ColumnTrait as _, EntityTrait as _, QueryFilter as _,
    TransactionTrait as _,
};
use tracing::{info, warn};

use crate::balance::append_entry_in;
use crate::catalog::MissionTemplate;
use crate::ext::AccountExt as _;
use crate::types::{round2, TransactionKind, TransactionStatus, REFERRAL_BONUS, SIGNUP_BONUS};
use crate::{Ledger, LedgerError, LedgerResult};

/// Input for [`Ledger::register_account`]. The id is the opaque subject id
/// handed back by the external auth provider.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub id: String,
    pub email: String,
    pub name: String,
    /// A referrer's account id, as typed by the user. Whitespace is trimmed;
    /// empty means "no referral".
    pub referrer_code: Option<String>,
}

impl Ledger {
    /// Create an account with a cloned mission catalog, then run the
    /// referral flow if a referrer code was supplied.
    ///
    /// Effects with a resolvable code: the new account starts at the signup
    /// bonus, the referrer gains the referral bonus plus counters and a
    /// referred-user record, and each side gets exactly one ledger entry.
    pub async fn register_account(
        &self,
        req: RegisterRequest,
        now: DateTime<Utc>,
    ) -> LedgerResult<accounts::Model> {
        if req.name.trim().len() < 3 {
            return Err(LedgerError::Validation(
                "Name must be at least 3 characters".to_string(),
            ));
        }
        if !req.email.contains('@') {
            return Err(LedgerError::Validation(format!(
                "Invalid email address: {}",
                req.email
            )));
        }

        let templates = self.catalog.missions.clone();

        self.db
            .transaction::<_, accounts::Model, LedgerError>(move |txn| {
                Box::pin(async move {
                    if accounts::Entity::find_by_id(&req.id).one(txn).await?.is_some() {
                        return Err(LedgerError::AccountAlreadyExists(req.id));
                    }
                    let email_taken = accounts::Entity::find()
                        .filter(accounts::Column::Email.eq(req.email.as_str()))
                        .one(txn)
                        .await?
                        .is_some();
                    if email_taken {
                        return Err(LedgerError::Validation(format!(
                            "Email already registered: {}",
                            req.email
                        )));
                    }

                    let referrer_code = req
                        .referrer_code
                        .as_deref()
                        .map(str::trim)
                        .filter(|code| !code.is_empty())
                        .map(str::to_string);

                    // Seed balance rewards the referral intent even when the
                    // code turns out not to resolve.
                    let seed_balance = if referrer_code.is_some() {
                        SIGNUP_BONUS
                    } else {
                        Decimal::ZERO
                    };

                    let name = req.name.trim().to_string();
                    let account = accounts::ActiveModel {
                        id: Set(req.id.clone()),
                        email: Set(req.email.clone()),
                        name: Set(name.clone()),
                        balance: Set(seed_balance.to_string()),
                        last_login: Set(now.to_rfc3339()),
                        login_streak: Set(1),
                        total_units_completed: Set(0),
                        joined_date: Set(now.to_rfc3339()),
                        mission_earnings: Set(Decimal::ZERO.to_string()),
                        last_mission_reset: Set(now.to_rfc3339()),
                        referral_count: Set(0),
                        referral_earnings: Set(Decimal::ZERO.to_string()),
                        is_blocked: Set(false),
                        referred_by: Set(referrer_code.clone()),
                        watched_unit_ids_today: Set("[]".to_string()),
                        cooldown_ends_at: Set(None),
                    };
                    let account = account.insert(txn).await?;

                    clone_missions_in(txn, &req.id, &templates).await?;

                    if let Some(referrer_id) = referrer_code {
                        credit_referrer_in(txn, &referrer_id, &account, now).await?;
                    }

                    info!(account_id = req.id, "account registered");

                    Ok(account)
                })
            })
            .await
            .map_err(LedgerError::from)
    }
}

/// Clone the catalog's mission templates onto a fresh account.
async fn clone_missions_in<C: sea_orm::ConnectionTrait>(
    conn: &C,
    account_id: &str,
    templates: &[MissionTemplate],
) -> LedgerResult<()> {
    for (position, template) in templates.iter().enumerate() {
        let row = mission_progress::ActiveModel {
            account_id: Set(account_id.to_string()),
            mission_id: Set(template.id.clone()),
            kind: Set(template.kind.to_string()),
            category: Set(template.category.to_string()),
            title: Set(template.title.clone()),
            reward: Set(template.reward.to_string()),
            goal: Set(template.goal),
            progress: Set(0),
            completed: Set(false),
            position: Set(position as i32),
        };
        row.insert(conn).await?;
    }
    Ok(())
}

/// Credit the referrer and write both ledger entries. An unresolvable code
/// is skipped - the new account keeps its seed balance regardless.
async fn credit_referrer_in<C: sea_orm::ConnectionTrait>(
    conn: &C,
    referrer_id: &str,
    new_account: &accounts::Model,
    now: DateTime<Utc>,
) -> LedgerResult<()> {
    let referrer = match accounts::Entity::find_by_id(referrer_id).one(conn).await? {
        Some(referrer) => referrer,
        None => {
            warn!(referrer_id, "referrer code did not resolve, skipping");
            return Ok(());
        }
    };

    let new_balance = round2(referrer.balance() + REFERRAL_BONUS);
    let new_earnings = round2(referrer.referral_earnings() + REFERRAL_BONUS);
    let new_count = referrer.referral_count + 1;
    let referrer_name = referrer.name.clone();

    let mut active: accounts::ActiveModel = referrer.into();
    active.balance = Set(new_balance.to_string());
    active.referral_count = Set(new_count);
    active.referral_earnings = Set(new_earnings.to_string());
    active.update(conn).await?;

    let referred = referred_users::ActiveModel {
        referrer_id: Set(referrer_id.to_string()),
        name: Set(new_account.name.clone()),
        date: Set(now.to_rfc3339()),
        status: Set("active".to_string()),
        ..Default::default()
    };
    referred.insert(conn).await?;

    append_entry_in(
        conn,
        referrer_id,
        &referrer_name,
        TransactionKind::Referral,
        REFERRAL_BONUS,
        TransactionStatus::Completed,
        &format!("Referral bonus: {} joined", new_account.name),
        now,
    )
    .await?;

    append_entry_in(
        conn,
        &new_account.id,
        &new_account.name,
        TransactionKind::Bonus,
        SIGNUP_BONUS,
        TransactionStatus::Completed,
        "Welcome bonus for joining via referral",
        now,
    )
    .await?;

    info!(referrer_id, referred = new_account.id, "referral credited");

    Ok(())
}
