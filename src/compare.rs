use std::collections::BTreeSet;

use crate::AddressSpace;

/// Same start address, different bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difference<'a> {
    pub address: u32,
    pub first: &'a [u8],
    pub second: &'a [u8],
}

/// Per-address classification of two address spaces, in ascending address order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult<'a> {
    pub only_in_first: Vec<(u32, &'a [u8])>,
    pub only_in_second: Vec<(u32, &'a [u8])>,
    pub differing: Vec<Difference<'a>>,
}

impl DiffResult<'_> {
    /// True when every address holds the same bytes in both spaces.
    pub fn is_identical(&self) -> bool {
        self.only_in_first.is_empty() && self.only_in_second.is_empty() && self.differing.is_empty()
    }
}

/// Compare entries by exact start address.
///
/// Equality is over decoded content only: record framing and the choice of
/// extended address records do not matter, but entry boundaries do.
pub fn compare<'a>(first: &'a AddressSpace, second: &'a AddressSpace) -> DiffResult<'a> {
    let addresses: BTreeSet<u32> = first.addresses().chain(second.addresses()).collect();
    let mut diff = DiffResult::default();

    for address in addresses {
        match (first.get(address), second.get(address)) {
            (Some(a), Some(b)) if a == b => {}
            (Some(a), Some(b)) => diff.differing.push(Difference {
                address,
                first: a,
                second: b,
            }),
            (Some(a), None) => diff.only_in_first.push((address, a)),
            (None, Some(b)) => diff.only_in_second.push((address, b)),
            (None, None) => unreachable!("address {address:#X} taken from neither space"),
        }
    }

    log::debug!(
        "compared {} addresses: {} only in first, {} only in second, {} differing",
        first.len() + diff.only_in_second.len(),
        diff.only_in_first.len(),
        diff.only_in_second.len(),
        diff.differing.len()
    );

    diff
}
