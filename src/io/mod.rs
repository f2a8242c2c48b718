/// CSV export for cash-flow tables and run history.
pub mod export;
