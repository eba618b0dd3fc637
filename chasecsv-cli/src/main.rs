use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use chasecsv_export::{AccountLedger, archive_statements, write_account_csvs};
use chasecsv_ingest::{extract_text, find_account_name, find_transactions};

#[derive(Parser, Debug)]
#[command(name = "chasecsv", version, about = "Convert Chase statement PDFs to CSV files")]
struct Cli {
    /// Folder containing input PDFs
    #[arg(short, long, value_name = "folder", default_value = "input")]
    input: PathBuf,

    /// Folder for output CSVs
    #[arg(short, long, value_name = "folder", default_value = "output")]
    output: PathBuf,

    /// If given, move PDFs to this folder once processed
    #[arg(short, long, value_name = "folder")]
    archive: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let statements = find_statements(&cli.input)?;
    if statements.is_empty() {
        println!("No PDF statements found in {}", cli.input.display());
        return Ok(());
    }

    let mut ledger = AccountLedger::new();

    for statement in &statements {
        let text = extract_text(statement)?;
        let account = find_account_name(&text)
            .with_context(|| format!("identifying account in {}", statement.display()))?;
        let txns = find_transactions(&text)
            .with_context(|| format!("parsing transactions in {}", statement.display()))?;

        println!(
            "Parsed {} transactions from {} ({})",
            txns.len(),
            statement.display(),
            account
        );
        ledger.extend(&account, txns);
    }

    ledger.sort_by_date();

    for path in write_account_csvs(&ledger, &cli.output)? {
        println!("Wrote {}", path.display());
    }

    if let Some(archive) = &cli.archive {
        archive_statements(&statements, archive)?;
    }

    Ok(())
}

/// List the input folder (non-recursive) for statement PDFs, sorted so runs
/// process files in a deterministic order.
fn find_statements(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(input_dir)
        .with_context(|| format!("reading input folder {}", input_dir.display()))?;

    let mut statements = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("reading input folder {}", input_dir.display()))?
            .path();
        if path.extension().is_some_and(|ext| ext == "pdf") {
            statements.push(path);
        }
    }

    statements.sort();
    Ok(statements)
}
