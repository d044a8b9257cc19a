//! Bookkeeping for ring-closure labels.

use crate::Bond;

pub const RING_LABELS: usize = 100;

/// A ring closure waiting for its partner label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenRing {
    pub atom: usize,
    /// The bond symbol written before the opening label, if any.
    pub bond: Option<Bond>,
    pub component: usize,
    /// Byte offset of the opening label.
    pub pos: usize,
}

/// Open closures indexed by label. `%05` and `5` share a slot.
#[derive(Debug, Clone)]
pub struct RingTable {
    open: [Option<OpenRing>; RING_LABELS],
}

impl Default for RingTable {
    fn default() -> Self {
        Self {
            open: [None; RING_LABELS],
        }
    }
}

impl RingTable {
    /// Opens `label`, or returns the pending closure it completes.
    /// A completed label is freed and may be opened again.
    pub fn visit(&mut self, label: u8, ring: OpenRing) -> Option<OpenRing> {
        let slot = &mut self.open[label as usize];
        match slot.take() {
            Some(opened) => Some(opened),
            None => {
                *slot = Some(ring);
                None
            }
        }
    }

    /// The first label still open, with its record.
    pub fn first_open(&self) -> Option<(u8, OpenRing)> {
        self.open
            .iter()
            .enumerate()
            .find_map(|(label, ring)| ring.map(|ring| (label as u8, ring)))
    }

    #[cfg(test)]
    pub fn is_open(&self, label: u8) -> bool {
        self.open[label as usize].is_some()
    }
}

/// Resolves the bond of a completed closure from the symbols written at
/// each end. `Err` carries the two conflicting symbols.
pub fn closing_bond(opening: Option<Bond>, closing: Option<Bond>) -> Result<Bond, (Bond, Bond)> {
    match (opening, closing) {
        (Some(a), Some(b)) if a != b => Err((a, b)),
        (Some(bond), _) | (None, Some(bond)) => Ok(bond),
        (None, None) => Ok(Bond::Unspecified),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(atom: usize) -> OpenRing {
        OpenRing {
            atom,
            bond: None,
            component: 0,
            pos: 0,
        }
    }

    #[test]
    fn labels_open_close_and_reopen() {
        let mut table = RingTable::default();
        assert_eq!(table.visit(1, ring(0)), None);
        assert!(table.is_open(1));
        assert_eq!(table.visit(1, ring(3)), Some(ring(0)));
        assert!(!table.is_open(1));
        assert_eq!(table.visit(1, ring(4)), None);
        assert_eq!(table.first_open(), Some((1, ring(4))));
    }

    #[test]
    fn labels_are_independent() {
        let mut table = RingTable::default();
        table.visit(99, ring(0));
        table.visit(5, ring(1));
        assert_eq!(table.first_open().map(|(label, _)| label), Some(5));
        assert_eq!(table.visit(99, ring(2)), Some(ring(0)));
        assert_eq!(table.visit(5, ring(2)), Some(ring(1)));
        assert_eq!(table.first_open(), None);
    }

    #[test]
    fn bond_resolution() {
        assert_eq!(closing_bond(None, None), Ok(Bond::Unspecified));
        assert_eq!(closing_bond(Some(Bond::Single), None), Ok(Bond::Single));
        assert_eq!(closing_bond(None, Some(Bond::Double)), Ok(Bond::Double));
        assert_eq!(
            closing_bond(Some(Bond::Single), Some(Bond::Single)),
            Ok(Bond::Single)
        );
        assert_eq!(
            closing_bond(Some(Bond::Single), Some(Bond::Double)),
            Err((Bond::Single, Bond::Double))
        );
    }
}
