pub mod json;

pub use crate::error::ExportError;
pub use json::export_report;
