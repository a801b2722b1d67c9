//! Deductions command - aggregate deductible invoices (not implemented yet)

use clap::Args;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
#[command(after_help = "Example: autogest deductions facturas.csv -d 5750")]
pub struct DeductionsCommand {
    /// Path to the csv with the invoices data
    invoices_path: PathBuf,

    /// The amount of money to deduct from the total yield
    #[arg(short = 'd', long = "to-deduct", default_value = "0")]
    #[allow(dead_code)]
    to_deduct: Decimal,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DeductionsError {
    #[error("only CSV files are supported: {0}")]
    UnsupportedFileType(String),
    #[error("invoices file not found: {0}")]
    FileNotFound(String),
    #[error("this feature is not implemented yet")]
    NotImplemented,
}

impl DeductionsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        validate_invoices_path(&self.invoices_path)?;
        Err(DeductionsError::NotImplemented.into())
    }
}

/// The invoices file must exist and carry a .csv extension; anything else
/// is rejected before the (future) parsing stage.
fn validate_invoices_path(path: &Path) -> Result<(), DeductionsError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());
    if extension.as_deref() != Some("csv") {
        return Err(DeductionsError::UnsupportedFileType(
            path.display().to_string(),
        ));
    }
    if !path.is_file() {
        return Err(DeductionsError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_csv_extension() {
        let err = validate_invoices_path(Path::new("facturas.txt")).unwrap_err();
        assert_eq!(
            err,
            DeductionsError::UnsupportedFileType("facturas.txt".to_string())
        );
    }

    #[test]
    fn rejects_missing_extension() {
        let err = validate_invoices_path(Path::new("facturas")).unwrap_err();
        assert!(matches!(err, DeductionsError::UnsupportedFileType(_)));
    }

    #[test]
    fn rejects_missing_file() {
        let err = validate_invoices_path(Path::new("no/such/facturas.csv")).unwrap_err();
        assert!(matches!(err, DeductionsError::FileNotFound(_)));
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        // .CSV passes the extension gate and fails on existence instead
        let err = validate_invoices_path(Path::new("no/such/FACTURAS.CSV")).unwrap_err();
        assert!(matches!(err, DeductionsError::FileNotFound(_)));
    }
}
