use log::{debug, trace};

use crate::model::IfcHeader;
use crate::parser::step::{parse_record, split_statements, StepValue};

/// How much of the input is inspected. Headers are a few hundred bytes.
pub const HEADER_PEEK_LIMIT: usize = 64 * 1024;

const STEP_MAGIC: &str = "ISO-10303-21";

/// Reads the HEADER section of an ISO-10303-21 encoded IFC file.
///
/// Only the first [`HEADER_PEEK_LIMIT`] bytes are looked at. Returns `None`
/// when the bytes do not start like a STEP file (IFC-ZIP, IFC-XML, ...).
/// Records that cannot be read are skipped, never reported as errors.
///
/// # Example
///
/// ```
/// use ifc_convert::parser::parse_header;
///
/// let bytes = b"ISO-10303-21;\nHEADER;\nFILE_SCHEMA(('IFC4'));\nENDSEC;\n";
/// let header = parse_header(bytes).unwrap();
/// assert_eq!(header.schemas, vec!["IFC4".to_string()]);
/// ```
#[must_use]
pub fn parse_header(bytes: &[u8]) -> Option<IfcHeader> {
    let prefix = &bytes[..bytes.len().min(HEADER_PEEK_LIMIT)];
    let text = String::from_utf8_lossy(prefix);
    let text = text.trim_start_matches('\u{feff}').trim_start();

    if !text.starts_with(STEP_MAGIC) {
        debug!("input does not start with {STEP_MAGIC}");
        return None;
    }

    let mut header = IfcHeader::default();
    let mut in_header = false;

    for statement in split_statements(text) {
        let Some(record) = parse_record(&statement) else {
            trace!("skipping unreadable header statement: {statement}");
            continue;
        };

        match record.keyword.as_str() {
            "HEADER" => in_header = true,
            "ENDSEC" | "DATA" if in_header => break,
            "FILE_DESCRIPTION" if in_header => {
                header.description = record
                    .values
                    .first()
                    .map(StepValue::strings)
                    .unwrap_or_default();
            }
            "FILE_NAME" if in_header => {
                let text_at = |i: usize| {
                    record
                        .values
                        .get(i)
                        .and_then(StepValue::as_str)
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                };
                header.file_name = text_at(0);
                header.timestamp = text_at(1);
                header.authors = record
                    .values
                    .get(2)
                    .map(StepValue::strings)
                    .unwrap_or_default();
                header.organizations = record
                    .values
                    .get(3)
                    .map(StepValue::strings)
                    .unwrap_or_default();
                header.preprocessor = text_at(4);
                header.originating_system = text_at(5);
            }
            "FILE_SCHEMA" if in_header => {
                header.schemas = record
                    .values
                    .first()
                    .map(StepValue::strings)
                    .unwrap_or_default();
            }
            _ => {}
        }
    }

    Some(header)
}
