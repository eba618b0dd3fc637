//! Post-run relocation of processed statements.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Move every processed statement into `archive_dir`, creating it if absent.
///
/// Runs only after all CSVs are written. Rename fails across filesystems, so
/// fall back to copy and remove.
pub fn archive_statements(statements: &[PathBuf], archive_dir: &Path) -> Result<()> {
    fs::create_dir_all(archive_dir)
        .with_context(|| format!("creating archive folder {}", archive_dir.display()))?;

    for src in statements {
        let file_name = src
            .file_name()
            .with_context(|| format!("statement path has no file name: {}", src.display()))?;
        let dest = archive_dir.join(file_name);

        if fs::rename(src, &dest).is_err() {
            fs::copy(src, &dest)
                .with_context(|| format!("moving {} to {}", src.display(), dest.display()))?;
            fs::remove_file(src)
                .with_context(|| format!("removing {}", src.display()))?;
        }
    }

    Ok(())
}
