pub mod conversion;
pub mod header;

pub use conversion::{Conversion, ConversionReport};
pub use header::IfcHeader;
