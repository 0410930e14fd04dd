pub mod add_progress;
pub mod backup;
pub mod balance;
pub mod complete_mission;
pub mod edit_user;
pub mod history;
pub mod init;
pub mod list_users;
pub mod list_withdrawals;
pub mod missions;
pub mod register;
pub mod resolve_withdrawal;
pub mod session;
pub mod toggle_block;
pub mod watch;
pub mod withdraw;
