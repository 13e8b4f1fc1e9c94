use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::cell::{by_upper_bound, Cell};

/// Comparator deciding which of two cells is explored first. `Greater` wins.
pub type CellComparator = fn(&Cell, &Cell) -> Ordering;

/// Heap entry carrying the comparator of the frontier it belongs to.
#[derive(Debug)]
struct Entry {
    cell: Cell,
    cmp: CellComparator,
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
    fn cmp(&self, other: &Self) -> Ordering {
        (self.cmp)(&self.cell, &other.cell)
    }
}

/// Max-priority queue of cells awaiting exploration.
#[derive(Debug)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    cmp: CellComparator,
}

impl Frontier {
    pub fn new(cmp: CellComparator) -> Self {
        Self {
            heap: BinaryHeap::new(),
            cmp,
        }
    }

    /// A frontier dequeuing the cell with the greatest upper bound first.
    pub fn by_upper_bound() -> Self {
        Self::new(by_upper_bound)
    }

    pub fn push(&mut self, cell: Cell) {
        self.heap.push(Entry {
            cell,
            cmp: self.cmp,
        });
    }

    pub fn pop(&mut self) -> Option<Cell> {
        self.heap.pop().map(|entry| entry.cell)
    }

    pub fn peek(&self) -> Option<&Cell> {
        self.heap.peek().map(|entry| &entry.cell)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl Extend<Cell> for Frontier {
    fn extend<T: IntoIterator<Item = Cell>>(&mut self, iter: T) {
        for cell in iter {
            self.push(cell);
        }
    }
}
