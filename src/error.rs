//! Error types for IFC Convert.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors that can occur while converting an IFC file.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Failed to read the IFC file from disk.
    #[error("failed to read file '{path}': {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the fragments file.
    #[error("failed to write file '{path}': {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The importer rejected the model.
    #[error("conversion failed: {source}")]
    Import {
        #[from]
        source: ImportError,
    },
}

/// Errors raised by an [`Importer`](crate::importer::Importer).
#[derive(Debug, Error)]
pub enum ImportError {
    /// A runtime asset directory or package is not where the config says.
    #[error("importer assets not found at '{path}'")]
    MissingAssets { path: PathBuf },

    /// The importer process could not be started.
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// Piping data to or from the importer failed.
    #[error("importer I/O failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// The importer ran and reported an error.
    #[error("importer exited with {status}:\n{stderr}")]
    Failed { status: ExitStatus, stderr: String },

    /// Any other importer failure, carried as text.
    #[error("{message}")]
    Other { message: String },
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },
}
