//! CSV output: one file per account spanning its transaction date range.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::ledger::AccountLedger;

/// Write one CSV per non-empty account into `output_dir`, creating it if
/// absent.
///
/// Filename: `<account> - <start> to <end>.csv`, where start and end are the
/// first and last dates of the sorted sequence in ISO form. Rows are
/// `date,description,amount`, no header, quoted only where a field needs it.
/// Returns the written paths.
pub fn write_account_csvs(ledger: &AccountLedger, output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output folder {}", output_dir.display()))?;

    let mut written = Vec::new();

    for (account, txns) in ledger.accounts() {
        // An account can exist with no transactions when every one of its
        // statements parsed to zero rows; it gets no file.
        let (Some(first), Some(last)) = (txns.first(), txns.last()) else {
            continue;
        };

        let file_name = format!("{} - {} to {}.csv", account, first.date, last.date);
        let path = output_dir.join(file_name);

        let mut wtr = csv::Writer::from_path(&path)
            .with_context(|| format!("creating {}", path.display()))?;

        for txn in txns {
            let date = txn.date.to_string();
            wtr.write_record([date.as_str(), txn.description.as_str(), txn.amount.as_str()])
                .with_context(|| format!("writing {}", path.display()))?;
        }

        wtr.flush()
            .with_context(|| format!("writing {}", path.display()))?;

        written.push(path);
    }

    Ok(written)
}
