//! Shared fixture helpers for the ledger scenario tests.

use chrono::{DateTime, TimeZone as _, Utc};
use clickmint_ledger::{Catalog, Ledger, RegisterRequest};

/// Fresh ledger over a scratch database with the builtin catalog.
pub async fn new_ledger() -> Ledger {
    let conn = clickmint_db::new_writeable_ledger_db()
        .await
        .expect("scratch ledger db");
    Ledger::new(conn, Catalog::builtin())
}

/// Register a throwaway account and return its id.
pub async fn register(ledger: &Ledger, id: &str, referrer: Option<&str>) -> String {
    ledger
        .register_account(
            RegisterRequest {
                id: id.to_string(),
                email: format!("{}@example.com", id),
                name: format!("User {}", id),
                referrer_code: referrer.map(str::to_string),
            },
            ts(2025, 8, 18, 9),
        )
        .await
        .expect("register account");
    id.to_string()
}

/// Deterministic UTC timestamp for day-boundary tests.
pub fn ts(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}
