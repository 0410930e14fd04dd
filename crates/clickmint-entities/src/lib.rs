/*!
# ClickMint Entities

SeaORM entity definitions for the ledger database.

Amounts and timestamps are stored as TEXT (Decimal / RFC 3339) and parsed
through the extension traits in `clickmint-ledger`; the entities themselves
stay a thin mirror of the schema.
*/

pub mod accounts;
pub mod mission_progress;
pub mod referred_users;
pub mod transactions;
