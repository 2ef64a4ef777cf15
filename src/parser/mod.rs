pub mod header;
pub mod step;

pub use header::{parse_header, HEADER_PEEK_LIMIT};
pub use step::{StepRecord, StepValue};
