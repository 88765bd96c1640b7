pub mod backup;
pub mod config;
pub mod export;
pub mod init;
pub mod ledger;
pub mod log;
pub mod members;
pub mod report;
pub mod start;
