// SPDX-FileCopyrightText: 2026 Wordfield contributors
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::Cell;

/// A label's lines, at most two of them.
pub type LabelLines = SmallVec<[String; 2]>;

/// A precomputed placement intent for one label: its line split and the row
/// its first line should start on. Produced by the layout planner; not yet
/// collision-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutStep {
    lines: LabelLines,
    base_row: usize,
}

impl LayoutStep {
    pub fn new(lines: LabelLines, base_row: usize) -> Self {
        Self { lines, base_row }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn base_row(&self) -> usize {
        self.base_row
    }

    /// Rows this label's block spans: 1 for a single line, 2 if wrapped.
    pub fn block_height(&self) -> usize {
        self.lines.len()
    }
}

/// One glyph of a placed label, in pixel coordinates.
///
/// `x`/`y` are the glyph's final position (`col * cell_size`,
/// `row * cell_size`). `ty` is the vertical position the glyph enters from
/// (always above `y`); `locked` starts `false`. Both belong to the consuming
/// animator after the placement call returns; the engine never reads them
/// back. Spaces do not produce letters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Letter {
    pub ch: char,
    pub x: f64,
    pub y: f64,
    pub ty: f64,
    pub locked: bool,
}

/// The final column/row anchor of one physical line of a placed label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineMeta {
    pub text: String,
    pub start_col: usize,
    pub row: usize,
}

impl LineMeta {
    /// Grid cells this line covers, spaces included.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let start_col = self.start_col;
        let row = self.row;
        (0..self.text.chars().count()).map(move |i| Cell::new(start_col + i, row))
    }
}

/// A successfully placed label: immutable once returned by the engine.
///
/// Every cell covered by `lines` (spaces included) is present in the
/// caller's occupied set by the time the placement is handed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub text: String,
    pub letters: Vec<Letter>,
    pub lines: SmallVec<[LineMeta; 2]>,
}

impl Placement {
    /// All grid cells claimed by this label, spaces included.
    pub fn claimed_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.lines.iter().flat_map(LineMeta::cells)
    }
}
