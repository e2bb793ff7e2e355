use std::fmt;
use std::ops::Range;

use super::ParseError;
use crate::AddressSpace;

const RECORD_DATA: u8 = 0x00;
const RECORD_EOF: u8 = 0x01;
const RECORD_EXTENDED_SEGMENT: u8 = 0x02;
const RECORD_START_SEGMENT: u8 = 0x03;
const RECORD_EXTENDED_LINEAR: u8 = 0x04;
const RECORD_START_LINEAR: u8 = 0x05;

const BYTE_COUNT_DIGITS: Range<usize> = 1..3;
const ADDRESS_DIGITS: Range<usize> = 3..7;
const RECORD_TYPE_DIGITS: Range<usize> = 7..9;
const PAYLOAD_START: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    Data,
    EndOfFile,
    ExtendedSegmentAddress,
    StartSegmentAddress,
    ExtendedLinearAddress,
    StartLinearAddress,
    Other(u8),
}

impl From<u8> for RecordType {
    fn from(value: u8) -> Self {
        match value {
            RECORD_DATA => RecordType::Data,
            RECORD_EOF => RecordType::EndOfFile,
            RECORD_EXTENDED_SEGMENT => RecordType::ExtendedSegmentAddress,
            RECORD_START_SEGMENT => RecordType::StartSegmentAddress,
            RECORD_EXTENDED_LINEAR => RecordType::ExtendedLinearAddress,
            RECORD_START_LINEAR => RecordType::StartLinearAddress,
            other => RecordType::Other(other),
        }
    }
}

/// One decoded record header. The payload is kept as raw hex digits and only
/// decoded by the record kinds that need it, so the checksum is never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexRecord<'a> {
    pub byte_count: u8,
    pub address: u16,
    pub record_type: RecordType,
    pub payload: &'a [u8],
}

impl<'a> HexRecord<'a> {
    /// Decode the header of a `:`-prefixed, already trimmed line.
    pub fn parse(line: &'a str, line_num: usize) -> Result<Self, ParseError> {
        let digits = line.as_bytes();
        let byte_count = decode_value(digits, BYTE_COUNT_DIGITS, "byte count", line_num)?;
        let address = decode_value(digits, ADDRESS_DIGITS, "address", line_num)?;
        let record_type = decode_value(digits, RECORD_TYPE_DIGITS, "record type", line_num)?;

        Ok(Self {
            byte_count: byte_count as u8,
            address: address as u16,
            record_type: RecordType::from(record_type as u8),
            payload: digits.get(PAYLOAD_START..).unwrap_or_default(),
        })
    }

    /// Data bytes announced by the byte count.
    pub fn data(&self, line_num: usize) -> Result<Vec<u8>, ParseError> {
        let len = self.byte_count as usize * 2;
        let digits = self
            .payload
            .get(..len)
            .ok_or(ParseError::TruncatedField {
                line: line_num,
                field: "data",
            })?;

        digits
            .chunks_exact(2)
            .map(|pair| decode_value(pair, 0..2, "data", line_num).map(|b| b as u8))
            .collect()
    }

    /// The 16-bit base carried by extended segment/linear address records.
    pub fn extended_address(&self, line_num: usize) -> Result<u16, ParseError> {
        decode_value(self.payload, 0..4, "extended address", line_num).map(|v| v as u16)
    }
}

/// Recoverable problems found while parsing. The offending line is skipped
/// (or, for duplicates, overwritten) and parsing continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    MissingStartCode { line: usize },
    DuplicateAddress { line: usize, address: u32 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingStartCode { line } => {
                write!(f, "Line {line} doesn't start with ':'")
            }
            Diagnostic::DuplicateAddress { address, .. } => {
                write!(f, "Duplicate address 0x{address:08X}")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedHex {
    pub space: AddressSpace,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse Intel-HEX text into a sparse address space.
///
/// Checksums are not validated. Parsing stops at the first EOF record; any
/// lines after it are ignored. Unknown record types are skipped.
pub fn parse_intel_hex(input: &str) -> Result<ParsedHex, ParseError> {
    let mut parsed = ParsedHex::default();
    let mut extended_address: u32 = 0;

    for (line_num, line) in record_lines(input).enumerate() {
        let line_num = line_num + 1;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if !line.starts_with(':') {
            parsed
                .diagnostics
                .push(Diagnostic::MissingStartCode { line: line_num });
            continue;
        }

        let record = HexRecord::parse(line, line_num)?;
        log::trace!(
            "line {line_num}: {:?} address={:#06X} count={}",
            record.record_type,
            record.address,
            record.byte_count
        );

        match record.record_type {
            RecordType::Data => {
                let full_address = extended_address | u32::from(record.address);
                let data = record.data(line_num)?;
                if parsed.space.insert(full_address, data).is_some() {
                    parsed.diagnostics.push(Diagnostic::DuplicateAddress {
                        line: line_num,
                        address: full_address,
                    });
                }
            }
            RecordType::EndOfFile => break,
            RecordType::ExtendedSegmentAddress => {
                extended_address = u32::from(record.extended_address(line_num)?) << 4;
            }
            RecordType::ExtendedLinearAddress => {
                extended_address = u32::from(record.extended_address(line_num)?) << 16;
            }
            RecordType::StartSegmentAddress
            | RecordType::StartLinearAddress
            | RecordType::Other(_) => {}
        }
    }

    log::debug!(
        "parsed {} data entries ({} bytes), {} warnings",
        parsed.space.len(),
        parsed.space.total_bytes(),
        parsed.diagnostics.len()
    );

    Ok(parsed)
}

/// Split on `\n`, `\r\n` or a lone `\r`, so old Mac line endings still give
/// one record per line.
fn record_lines(input: &str) -> impl Iterator<Item = &str> {
    let mut rest = input;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = rest.find(['\r', '\n']).unwrap_or(rest.len());
        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") {
            2
        } else {
            usize::from(end < rest.len())
        };
        rest = &rest[end + terminator..];
        Some(line)
    })
}

fn decode_value(
    digits: &[u8],
    range: Range<usize>,
    field: &'static str,
    line_num: usize,
) -> Result<u32, ParseError> {
    let field_digits = digits.get(range).ok_or(ParseError::TruncatedField {
        line: line_num,
        field,
    })?;

    field_digits
        .iter()
        .try_fold(0u32, |acc, &b| -> Result<u32, ParseError> {
            Ok((acc << 4) | u32::from(hex_digit(b, field, line_num)?))
        })
}

fn hex_digit(b: u8, field: &'static str, line_num: usize) -> Result<u8, ParseError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        _ => Err(ParseError::InvalidHexDigit {
            line: line_num,
            field,
            char: if b.is_ascii() {
                b as char
            } else {
                char::REPLACEMENT_CHARACTER
            },
        }),
    }
}
