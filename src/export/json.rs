use crate::error::ExportError;
use crate::model::ConversionReport;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn export_report<P: AsRef<Path>>(
    report: &ConversionReport,
    path: P,
) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let json = serde_json::to_string_pretty(report)?;

    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(json.as_bytes())
        .and_then(|()| file.write_all(b"\n"))
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    Ok(())
}
