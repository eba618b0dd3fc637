//! PDF text extraction.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

/// Extract the full text of a statement PDF, pages concatenated.
pub fn extract_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;

    pdf_extract::extract_text_from_mem(&bytes)
        .map_err(|e| anyhow!("extracting text from {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_an_error() {
        let err = extract_text("no-such-statement.pdf").unwrap_err();
        assert!(err.to_string().contains("no-such-statement.pdf"));
    }
}
