use std::collections::BTreeMap;

use crate::Segment;
use crate::segment::build_segments;

/// Decoded contents of one HEX file: each Data record's bytes keyed by the
/// absolute address they start at.
///
/// Entries are kept exactly as recorded. Adjacent records stay separate
/// entries; use `segments()` for contiguous ranges. Overlapping records are
/// kept as-is, only an identical start address replaces an earlier entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressSpace {
    entries: BTreeMap<u32, Vec<u8>>,
}

impl AddressSpace {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Store `data` at `address`, returning the bytes it replaced (last write wins).
    pub fn insert(&mut self, address: u32, data: Vec<u8>) -> Option<Vec<u8>> {
        self.entries.insert(address, data)
    }

    pub fn get(&self, address: u32) -> Option<&[u8]> {
        self.entries.get(&address).map(Vec::as_slice)
    }

    /// Entries in ascending address order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[u8])> + '_ {
        self.entries.iter().map(|(&addr, data)| (addr, data.as_slice()))
    }

    pub fn addresses(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.keys().copied()
    }

    /// Number of entries (distinct start addresses).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_bytes(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn segments(&self) -> Vec<Segment> {
        build_segments(self)
    }
}

impl FromIterator<(u32, Vec<u8>)> for AddressSpace {
    fn from_iter<I: IntoIterator<Item = (u32, Vec<u8>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_last_wins() {
        let mut space = AddressSpace::new();
        assert_eq!(space.insert(0x100, vec![0x01, 0x02]), None);
        assert_eq!(space.insert(0x100, vec![0xFF]), Some(vec![0x01, 0x02]));
        assert_eq!(space.get(0x100), Some(&[0xFF][..]));
        assert_eq!(space.len(), 1);
    }

    #[test]
    fn test_sorted_order() {
        let space: AddressSpace = [
            (0x300, vec![0x03]),
            (0x100, vec![0x01]),
            (0x200, vec![0x02]),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            space.addresses().collect::<Vec<_>>(),
            vec![0x100, 0x200, 0x300]
        );
    }

    #[test]
    fn test_totals() {
        let space: AddressSpace = [(0x0, vec![0xAA; 4]), (0x4, vec![0xBB; 3])]
            .into_iter()
            .collect();
        assert_eq!(space.len(), 2);
        assert_eq!(space.total_bytes(), 7);
        assert_eq!(space.get(0x4), Some(&[0xBB; 3][..]));
        assert_eq!(space.get(0x1), None);
        assert!(!space.is_empty());
        assert!(AddressSpace::new().is_empty());
    }
}
