//! Account ledger: transactions grouped per account label across statements.

use std::collections::BTreeMap;

use chasecsv_ingest::Transaction;

/// Transactions accumulated per account label.
///
/// Statements extend the ledger in any order; `sort_by_date` orders each
/// account's sequence before writing. Accounts iterate in label order, so
/// repeat runs over the same input produce identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountLedger {
    accounts: BTreeMap<String, Vec<Transaction>>,
}

impl AccountLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one statement's transactions to an account's sequence.
    pub fn extend(&mut self, account: &str, txns: Vec<Transaction>) {
        self.accounts
            .entry(account.to_string())
            .or_default()
            .extend(txns);
    }

    /// Stable sort of every account's sequence by date ascending.
    ///
    /// Date is the only key; equal dates keep their ingestion order.
    pub fn sort_by_date(&mut self) {
        for txns in self.accounts.values_mut() {
            txns.sort_by_key(|t| t.date);
        }
    }

    /// Accounts with their transaction sequences, in label order.
    pub fn accounts(&self) -> impl Iterator<Item = (&str, &[Transaction])> + '_ {
        self.accounts
            .iter()
            .map(|(name, txns)| (name.as_str(), txns.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(date: (i32, u32, u32), description: &str, amount: &str) -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            description: description.to_string(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn test_extend_merges_statements_for_one_account() {
        let mut ledger = AccountLedger::new();
        ledger.extend("Personal", vec![txn((2023, 2, 3), "COFFEE", "-3.20")]);
        ledger.extend("Personal", vec![txn((2023, 1, 1), "TESCO", "12.34")]);

        let (_, txns) = ledger.accounts().next().unwrap();
        assert_eq!(txns.len(), 2);
    }

    #[test]
    fn test_sort_orders_dates_across_statements() {
        let mut ledger = AccountLedger::new();
        ledger.extend("Personal", vec![txn((2023, 2, 3), "COFFEE", "-3.20")]);
        ledger.extend("Personal", vec![txn((2023, 1, 1), "TESCO", "12.34")]);
        ledger.sort_by_date();

        let (_, txns) = ledger.accounts().next().unwrap();
        assert_eq!(txns[0].description, "TESCO");
        assert_eq!(txns[1].description, "COFFEE");
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let mut ledger = AccountLedger::new();
        ledger.extend(
            "Personal",
            vec![
                txn((2023, 1, 5), "FIRST", "-1.00"),
                txn((2023, 1, 5), "SECOND", "-2.00"),
            ],
        );
        ledger.extend("Personal", vec![txn((2023, 1, 5), "THIRD", "-3.00")]);
        ledger.sort_by_date();

        let (_, txns) = ledger.accounts().next().unwrap();
        let order: Vec<_> = txns.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(order, vec!["FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn test_accounts_iterate_in_label_order() {
        let mut ledger = AccountLedger::new();
        ledger.extend("Saver", vec![txn((2023, 1, 1), "INTEREST", "0.42")]);
        ledger.extend("Personal", vec![txn((2023, 1, 1), "TESCO", "12.34")]);

        let labels: Vec<_> = ledger.accounts().map(|(name, _)| name).collect();
        assert_eq!(labels, vec!["Personal", "Saver"]);
    }
}
