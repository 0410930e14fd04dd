//! Explicit session identity, passed to operations instead of ambient state.

use chrono::{DateTime, Utc};

use crate::daily::DailyCycleReport;
use crate::{Ledger, LedgerResult};

/// The authenticated subject for a sequence of ledger operations.
///
/// The auth provider is external; all the engine needs is the opaque
/// subject id it hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub account_id: String,
}

impl Session {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
        }
    }
}

impl Ledger {
    /// Enter a session for an account: runs the daily cycle (which refuses
    /// blocked accounts) and hands back the session identity alongside what
    /// the cycle did.
    pub async fn open_session(
        &self,
        account_id: &str,
        now: DateTime<Utc>,
    ) -> LedgerResult<(Session, DailyCycleReport)> {
        let report = self.run_daily_cycle(account_id, now).await?;
        Ok((Session::new(account_id), report))
    }
}
