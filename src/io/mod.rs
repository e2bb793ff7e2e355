mod error;
mod intel_hex;

pub use error::ParseError;
pub use intel_hex::{Diagnostic, HexRecord, ParsedHex, RecordType, parse_intel_hex};
