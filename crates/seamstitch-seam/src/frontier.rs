//! Search frontier
//!
//! A binary min-heap of `(distance, tie key, position)` entries. Improving
//! a position's distance pushes a fresh entry rather than updating the old
//! one in place, so the heap can hold stale entries; the search discards
//! them on pop by checking against its distance table.

use seamstitch_core::Position;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Order among frontier entries of equal distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// The entry pushed earliest is drawn first
    #[default]
    InsertionOrder,
    /// The lexicographically smallest (row, col) is drawn first
    RowMajor,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    distance: f64,
    key: u64,
    pos: Position,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Reversed: BinaryHeap is a max-heap and we want the smallest first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.key.cmp(&self.key))
    }
}

/// Priority queue of candidate positions
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    tie_break: TieBreak,
    pushed: u64,
}

impl Frontier {
    /// Create an empty frontier
    pub fn new(tie_break: TieBreak) -> Self {
        Self {
            heap: BinaryHeap::new(),
            tie_break,
            pushed: 0,
        }
    }

    /// Insert `pos` with priority `distance`
    ///
    /// Earlier entries for the same position are left in place.
    pub fn push(&mut self, pos: Position, distance: f64) {
        let key = match self.tie_break {
            TieBreak::InsertionOrder => self.pushed,
            TieBreak::RowMajor => ((pos.row as u64) << 32) | pos.col as u64,
        };
        self.pushed += 1;
        self.heap.push(Entry { distance, key, pos });
    }

    /// Remove and return the minimum-priority entry
    pub fn pop(&mut self) -> Option<(Position, f64)> {
        self.heap.pop().map(|e| (e.pos, e.distance))
    }

    /// Number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True if no entries remain
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of pushes since creation
    pub fn pushed(&self) -> u64 {
        self.pushed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_smallest_distance() {
        let mut f = Frontier::new(TieBreak::InsertionOrder);
        f.push(Position::new(0, 1), 3.0);
        f.push(Position::new(1, 0), 1.0);
        f.push(Position::new(1, 1), 2.0);
        assert_eq!(f.pop(), Some((Position::new(1, 0), 1.0)));
        assert_eq!(f.pop(), Some((Position::new(1, 1), 2.0)));
        assert_eq!(f.pop(), Some((Position::new(0, 1), 3.0)));
        assert_eq!(f.pop(), None);
    }

    #[test]
    fn test_insertion_order_ties() {
        let mut f = Frontier::new(TieBreak::InsertionOrder);
        f.push(Position::new(2, 2), 5.0);
        f.push(Position::new(0, 0), 5.0);
        f.push(Position::new(1, 1), 5.0);
        assert_eq!(f.pop().map(|e| e.0), Some(Position::new(2, 2)));
        assert_eq!(f.pop().map(|e| e.0), Some(Position::new(0, 0)));
        assert_eq!(f.pop().map(|e| e.0), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_row_major_ties() {
        let mut f = Frontier::new(TieBreak::RowMajor);
        f.push(Position::new(2, 0), 5.0);
        f.push(Position::new(0, 3), 5.0);
        f.push(Position::new(0, 1), 5.0);
        assert_eq!(f.pop().map(|e| e.0), Some(Position::new(0, 1)));
        assert_eq!(f.pop().map(|e| e.0), Some(Position::new(0, 3)));
        assert_eq!(f.pop().map(|e| e.0), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut f = Frontier::new(TieBreak::InsertionOrder);
        let p = Position::new(1, 1);
        f.push(p, 4.0);
        f.push(p, 2.0);
        assert_eq!(f.len(), 2);
        assert_eq!(f.pushed(), 2);
        assert_eq!(f.pop(), Some((p, 2.0)));
        assert_eq!(f.pop(), Some((p, 4.0)));
        assert!(f.is_empty());
    }
}
