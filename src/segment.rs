use std::fmt;

use crate::AddressSpace;

/// A contiguous run of decoded bytes, `start..end` (end exclusive).
///
/// `end` is 64-bit so a run reaching `0xFFFF_FFFF` does not wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: u32,
    pub end: u64,
}

impl Segment {
    pub fn new(start: u32, len: usize) -> Self {
        Self {
            start,
            end: u64::from(start) + len as u64,
        }
    }

    pub fn len(&self) -> u64 {
        self.end.saturating_sub(u64::from(self.start))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_contiguous_with(&self, start: u32) -> bool {
        self.end == u64::from(start)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:08X} - 0x{:08X} ({} bytes)",
            self.start,
            self.end,
            self.len()
        )
    }
}

/// Group entries into segments, in ascending address order.
///
/// An entry joins the open segment only if it starts exactly where that
/// segment ends. Overlapping entries start a new segment, so malformed input
/// can yield overlapping ranges.
pub fn build_segments(space: &AddressSpace) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();

    for (addr, data) in space.iter() {
        match segments.last_mut() {
            Some(last) if last.is_contiguous_with(addr) => {
                last.end = u64::from(addr) + data.len() as u64;
            }
            _ => segments.push(Segment::new(addr, data.len())),
        }
    }

    segments
}
