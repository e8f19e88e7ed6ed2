// SPDX-FileCopyrightText: 2026 Wordfield contributors
// SPDX-License-Identifier: MIT

use crate::model::{Cell, CellSet, Region};

/// Decides whether a line of `len` cells can start at `(start_col, row)`
/// without crossing the region's inner margins, the grid's right edge, or
/// any occupied cell.
///
/// `start_col` is signed because callers probe candidate columns to the left
/// of the region during the outward sweep. Pure: the occupied set is only
/// read; a caller that accepts the position inserts the cells itself.
pub fn fits_in_region(
    len: usize,
    start_col: i32,
    row: usize,
    occupied: &CellSet,
    region: &Region,
    margin: usize,
    cols: usize,
) -> bool {
    if len == 0 {
        return true;
    }

    let end_col = start_col + len as i32 - 1;
    if start_col < (region.start_col() + margin) as i32 {
        return false;
    }
    if end_col > region.end_col() as i32 - margin as i32 {
        return false;
    }
    if start_col < 0 || end_col >= cols as i32 {
        return false;
    }

    for i in 0..len {
        let col = (start_col + i as i32) as usize;
        if occupied.contains(Cell::new(col, row)) {
            return false;
        }
    }

    true
}
