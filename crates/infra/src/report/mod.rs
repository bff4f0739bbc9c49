//! Spreadsheet rendering of the patch bay
//!
//! One worksheet per patch category: inputs (with the A/B source columns),
//! outputs, and device-to-device links. Presentation only; all routing
//! semantics are settled before a patch bay reaches this module.

mod xlsx;

use thiserror::Error;

pub use xlsx::XlsxReport;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
