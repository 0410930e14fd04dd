use clickmint_entities::{accounts, mission_progress, transactions};
use sea_orm::{
    ColumnTrait as _, ConnectionTrait, DatabaseConnection, EntityTrait as _, QueryFilter as _,
    QueryOrder as _,
};

use crate::types::{TransactionKind, TransactionStatus};
use crate::{Catalog, LedgerError, LedgerResult};

/// The ledger engine: one handle over the database connection and the
/// immutable catalog.
///
/// Mutating operations live in the service modules (`balance`, `missions`,
/// `daily`, `referral`, `withdraw`, `admin`) as further `impl Ledger`
/// blocks; this module carries construction and the read-side queries.
pub struct Ledger {
    pub(crate) db: DatabaseConnection,
    pub(crate) catalog: Catalog,
}

impl Ledger {
    pub fn new(db: DatabaseConnection, catalog: Catalog) -> Self {
        Self { db, catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Underlying connection, for callers that need raw queries.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    // ============================================================================================
    // Read-side queries
    // ============================================================================================

    /// Fetch an account or fail with `AccountNotFound`.
    pub async fn account(&self, account_id: &str) -> LedgerResult<accounts::Model> {
        fetch_account(&self.db, account_id).await
    }

    pub async fn accounts(&self) -> LedgerResult<Vec<accounts::Model>> {
        Ok(accounts::Entity::find()
            .order_by_asc(accounts::Column::JoinedDate)
            .all(&self.db)
            .await?)
    }

    /// An account's mission rows in catalog order.
    pub async fn missions_for_account(
        &self,
        account_id: &str,
    ) -> LedgerResult<Vec<mission_progress::Model>> {
        // Existence check first so an unknown id is not an empty list
        fetch_account(&self.db, account_id).await?;

        Ok(mission_progress::Entity::find()
            .filter(mission_progress::Column::AccountId.eq(account_id))
            .order_by_asc(mission_progress::Column::Position)
            .all(&self.db)
            .await?)
    }

    /// Whether any mission is sitting at goal waiting to be claimed.
    pub async fn has_completable_missions(&self, account_id: &str) -> LedgerResult<bool> {
        let missions = self.missions_for_account(account_id).await?;
        Ok(missions
            .iter()
            .any(|m| m.progress >= m.goal && !m.completed))
    }

    /// An account's ledger entries, newest first.
    pub async fn transactions_for_account(
        &self,
        account_id: &str,
    ) -> LedgerResult<Vec<transactions::Model>> {
        fetch_account(&self.db, account_id).await?;

        Ok(transactions::Entity::find()
            .filter(transactions::Column::AccountId.eq(account_id))
            .order_by_desc(transactions::Column::Date)
            .all(&self.db)
            .await?)
    }

    /// Every ledger entry, newest first.
    pub async fn all_transactions(&self) -> LedgerResult<Vec<transactions::Model>> {
        Ok(transactions::Entity::find()
            .order_by_desc(transactions::Column::Date)
            .all(&self.db)
            .await?)
    }

    /// Withdrawal requests awaiting an operator decision, oldest first.
    pub async fn pending_withdrawals(&self) -> LedgerResult<Vec<transactions::Model>> {
        Ok(transactions::Entity::find()
            .filter(transactions::Column::Kind.eq(TransactionKind::Withdraw.to_string()))
            .filter(transactions::Column::Status.eq(TransactionStatus::Pending.to_string()))
            .order_by_asc(transactions::Column::Date)
            .all(&self.db)
            .await?)
    }
}

/// Shared existence check used by every operation.
pub(crate) async fn fetch_account<C: ConnectionTrait>(
    conn: &C,
    account_id: &str,
) -> LedgerResult<accounts::Model> {
    accounts::Entity::find_by_id(account_id)
        .one(conn)
        .await?
        .ok_or_else(|| LedgerError::AccountNotFound(account_id.to_string()))
}

pub(crate) async fn fetch_mission<C: ConnectionTrait>(
    conn: &C,
    account_id: &str,
    mission_id: &str,
) -> LedgerResult<mission_progress::Model> {
    mission_progress::Entity::find_by_id((account_id.to_string(), mission_id.to_string()))
        .one(conn)
        .await?
        .ok_or_else(|| LedgerError::MissionNotFound(mission_id.to_string()))
}
