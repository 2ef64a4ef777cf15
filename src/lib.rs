//! # IFC Convert
//!
//! Converts IFC building models into the compact fragments binary format.
//!
//! The conversion is done by `IfcImporter` from the `@thatopen/fragments`
//! package, which this crate drives through the [`importer::Importer`] seam.
//! Input and output bytes are passed through untouched.
//!
//! ## Features
//!
//! - Whole-file conversion with a single blocking importer call
//! - STEP header peek (schema, authoring tool) for logging
//! - Optional JSON conversion report
//!
//! ## Example
//!
//! ```no_run
//! use ifc_convert::convert::convert_file;
//! use ifc_convert::importer::{ImporterConfig, NodeImporter};
//!
//! let importer = NodeImporter::new(
//!     ImporterConfig::new("node_modules/web-ifc"),
//!     "node_modules",
//!     "node",
//! );
//! let conversion = convert_file("model.ifc", "model.frag", &importer).expect("conversion");
//! println!("Fragments: {} bytes", conversion.output_bytes);
//! ```

pub mod convert;
pub mod error;
pub mod export;
pub mod importer;
pub mod model;
pub mod parser;
