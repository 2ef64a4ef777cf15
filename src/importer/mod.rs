//! The IFC import capability.
//!
//! Conversion itself happens in an external library. [`Importer`] is the
//! seam: the pipeline hands it raw IFC bytes and gets fragment bytes back.
//! [`NodeImporter`] is the production implementation.

pub mod node;

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

pub use crate::error::ImportError;
pub use node::NodeImporter;

/// Converts raw IFC bytes into raw fragment bytes.
///
/// One call is one conversion. The caller blocks until it finishes.
pub trait Importer {
    fn process(&self, bytes: &[u8]) -> Result<Vec<u8>, ImportError>;
}

impl<T: Importer + ?Sized> Importer for &T {
    fn process(&self, bytes: &[u8]) -> Result<Vec<u8>, ImportError> {
        (**self).process(bytes)
    }
}

impl<T: Importer + ?Sized> Importer for Box<T> {
    fn process(&self, bytes: &[u8]) -> Result<Vec<u8>, ImportError> {
        (**self).process(bytes)
    }
}

/// Where the importer finds its runtime assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImporterConfig {
    /// Directory holding the `web-ifc` WebAssembly binaries.
    pub asset_path: PathBuf,
}

impl ImporterConfig {
    #[must_use]
    pub fn new<P: Into<PathBuf>>(asset_path: P) -> Self {
        Self {
            asset_path: asset_path.into(),
        }
    }

    /// Asset path as the importer expects it: absolute when it can be
    /// resolved, with exactly one trailing separator.
    #[must_use]
    pub fn asset_base(&self) -> String {
        let resolved = absolute(&self.asset_path);
        let mut base = resolved.to_string_lossy().to_string();
        while base.len() > 1 && (base.ends_with('/') || base.ends_with(MAIN_SEPARATOR)) {
            base.pop();
        }
        if !base.ends_with('/') && !base.ends_with(MAIN_SEPARATOR) {
            base.push(MAIN_SEPARATOR);
        }
        base
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
