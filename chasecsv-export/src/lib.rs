//! chasecsv-export: per-account aggregation, CSV output, and statement archiving.

pub mod archive;
pub mod ledger;
pub mod writer;

pub use archive::archive_statements;
pub use ledger::AccountLedger;
pub use writer::write_account_csvs;
