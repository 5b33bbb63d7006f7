pub mod account;
pub mod gameplay;
pub mod ranking;
pub mod scores;
