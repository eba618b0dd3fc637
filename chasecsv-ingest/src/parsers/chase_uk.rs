//! Chase UK statement parser (text)
//!
//! Expected extracted-text shape:
//!   Personal statement Account number: 12345678
//!   ...
//!   01 Jan 2023 TESCO STORE 2041 +£12.34 £500.00
//!   02 Jan 2023 CARD PAYMENT REFUND -£45.00 £455.00
//!
//! The trailing amount on each row is the running balance; it is matched so
//! a row must carry one, but it is not kept.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use regex::Regex;

use crate::types::Transaction;

/// Find the account name in a statement's header line.
///
/// Statements carry a line like "Personal statement Account number: 12345678";
/// everything before " statement" is the account label. A statement without
/// that line cannot be filed, so no match is an error rather than a skip.
pub fn find_account_name(text: &str) -> Result<String> {
    let account_re = Regex::new(r"(?m)^(?P<name>.*) statement Account number: \d{8}")?;

    match account_re.captures(text) {
        Some(caps) => Ok(caps["name"].to_string()),
        None => bail!("no account name line found in statement text"),
    }
}

/// Scan statement text for transaction rows.
///
/// The description is matched greedily between the date and the signed
/// amount, so it keeps whatever falls between them, embedded whitespace
/// included. Zero rows is a valid outcome; a row whose date does not parse
/// fails the whole scan.
pub fn find_transactions(text: &str) -> Result<Vec<Transaction>> {
    let txn_re = Regex::new(concat!(
        r"(?P<date>\d{2} \w{3} \d{4})\s+",
        r"(?P<desc>.*)\s+",
        r"(?P<sign>[+-])£(?P<amount>[0-9,]+\.\d{2})",
        r"\s-?£[0-9,]+\.\d{2}"
    ))?;

    let mut out = Vec::new();

    for caps in txn_re.captures_iter(text) {
        let date = NaiveDate::parse_from_str(&caps["date"], "%d %b %Y")
            .with_context(|| format!("invalid transaction date '{}'", &caps["date"]))?;

        let mut amount = caps["amount"].to_string();
        if &caps["sign"] == "-" {
            amount.insert(0, '-');
        }

        out.push(Transaction {
            date,
            description: caps["desc"].to_string(),
            amount,
        });
    }

    Ok(out)
}
