// SPDX-FileCopyrightText: 2026 Wordfield contributors
// SPDX-License-Identifier: MIT

use std::collections::btree_set;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One character cell of the grid, addressed as `(col, row)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

impl Cell {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// The set of grid cells currently carrying a glyph.
///
/// Sparse by design: the grid can be large and mostly empty, so cells are
/// kept in an ordered set rather than a dense 2-D array. The caller owns the
/// set and passes it by mutable reference into each placement call; the
/// engine only reads membership and inserts the cells it claims. Iteration
/// order is deterministic (column-major by `Cell` ordering).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSet {
    cells: BTreeSet<Cell>,
}

impl CellSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Marks a cell occupied. Returns `false` if it already was.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Cell> {
        self.cells.iter()
    }
}

impl Extend<Cell> for CellSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = &'a Cell;
    type IntoIter = btree_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, CellSet};

    #[test]
    fn insert_and_membership() {
        let mut occupied = CellSet::new();
        assert!(occupied.is_empty());
        assert!(occupied.insert(Cell::new(3, 7)));
        assert!(!occupied.insert(Cell::new(3, 7)));
        assert!(occupied.contains(Cell::new(3, 7)));
        assert!(!occupied.contains(Cell::new(7, 3)));
        assert_eq!(occupied.len(), 1);
    }

    #[test]
    fn iteration_is_ordered() {
        let occupied: CellSet =
            [Cell::new(5, 1), Cell::new(0, 9), Cell::new(5, 0)].into_iter().collect();
        let cells = occupied.iter().copied().collect::<Vec<_>>();
        assert_eq!(cells, vec![Cell::new(0, 9), Cell::new(5, 0), Cell::new(5, 1)]);
    }
}
