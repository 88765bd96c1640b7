pub mod ledger_row;
pub mod member;
pub mod record;
pub mod sign;
pub mod theme;
