pub mod attendance;
pub mod backup;
pub mod config;
pub mod engine;
pub mod ledger;
pub mod log;
pub mod persist;
pub mod report;
pub mod roster;
pub mod session;
pub mod shell;
