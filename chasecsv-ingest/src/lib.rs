//! chasecsv-ingest: statement text extraction (PDF) and the Chase statement parsers.

pub mod extract;
pub mod parsers;
pub mod types;

pub use extract::extract_text;
pub use parsers::chase_uk::{find_account_name, find_transactions};
pub use types::Transaction;
