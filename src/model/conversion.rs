use super::IfcHeader;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Outcome of one successful conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub input: PathBuf,
    pub output: PathBuf,
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub header: Option<IfcHeader>,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub input: String,
    pub output: String,
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub schemas: Vec<String>,
    pub originating_system: Option<String>,
    pub elapsed_ms: u64,
}

impl From<&Conversion> for ConversionReport {
    fn from(conversion: &Conversion) -> Self {
        let header = conversion.header.as_ref();
        Self {
            input: conversion.input.to_string_lossy().to_string(),
            output: conversion.output.to_string_lossy().to_string(),
            input_bytes: conversion.input_bytes,
            output_bytes: conversion.output_bytes,
            schemas: header.map(|h| h.schemas.clone()).unwrap_or_default(),
            originating_system: header.and_then(|h| h.originating_system.clone()),
            elapsed_ms: conversion.elapsed.as_millis() as u64,
        }
    }
}
