pub mod address_space;
pub mod compare;
pub mod error;
pub mod io;
pub mod load;
pub mod report;
pub mod segment;

pub use address_space::AddressSpace;
pub use compare::{DiffResult, Difference, compare};
pub use error::Error;
pub use io::{Diagnostic, HexRecord, ParseError, ParsedHex, RecordType, parse_intel_hex};
pub use load::load_intel_hex;
pub use report::{ComparisonReport, FileSummary, ReportOptions};
pub use segment::{Segment, build_segments};
