use serde::Serialize;

/// Metadata from the HEADER section of a STEP encoded IFC file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IfcHeader {
    pub description: Vec<String>,
    pub file_name: Option<String>,
    pub timestamp: Option<String>,
    pub authors: Vec<String>,
    pub organizations: Vec<String>,
    pub preprocessor: Option<String>,
    pub originating_system: Option<String>,
    pub schemas: Vec<String>,
}

impl IfcHeader {
    /// Schema identifiers joined for display, e.g. `IFC4`.
    #[must_use]
    pub fn schema_label(&self) -> String {
        if self.schemas.is_empty() {
            "unknown".to_string()
        } else {
            self.schemas.join(", ")
        }
    }
}
