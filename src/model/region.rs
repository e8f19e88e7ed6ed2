// SPDX-FileCopyrightText: 2026 Wordfield contributors
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

/// An inclusive column range of the grid reserved for label placement.
///
/// Invariant: `start_col <= end_col`, both within `[0, cols)`. A `Region` is
/// computed once per layout pass and passed by reference into every call; it
/// is never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    start_col: usize,
    end_col: usize,
}

impl Region {
    /// Builds a region from explicit column bounds.
    ///
    /// The caller is responsible for `start_col <= end_col`; the constructor
    /// does not validate, matching the fractional form below where
    /// out-of-range inputs are a caller bug rather than an engine error.
    pub fn new(start_col: usize, end_col: usize) -> Self {
        Self { start_col, end_col }
    }

    /// Converts fractional horizontal bounds (`0..=1` of the grid width)
    /// into an inclusive column range.
    ///
    /// `start_col = floor(cols * start_frac)`, likewise for `end_col`, each
    /// clamped to `cols - 1` so that a fraction of exactly `1.0` still
    /// yields an in-grid column. Fractions outside `0..=1` are not rejected;
    /// they produce an out-of-range region, which is the caller's bug.
    pub fn from_fractions(cols: usize, start_frac: f64, end_frac: f64) -> Self {
        let last = cols.saturating_sub(1);
        let start_col = (((cols as f64) * start_frac).floor() as usize).min(last);
        let end_col = (((cols as f64) * end_frac).floor() as usize).min(last);
        Self { start_col, end_col }
    }

    pub fn start_col(&self) -> usize {
        self.start_col
    }

    pub fn end_col(&self) -> usize {
        self.end_col
    }

    /// Number of columns in the region, inclusive of both bounds.
    pub fn width(&self) -> usize {
        self.end_col - self.start_col + 1
    }
}

#[cfg(test)]
mod tests {
    use super::Region;

    #[test]
    fn from_fractions_floors_both_bounds() {
        let region = Region::from_fractions(100, 0.5, 0.8);
        assert_eq!(region.start_col(), 50);
        assert_eq!(region.end_col(), 80);
        assert_eq!(region.width(), 31);
    }

    #[test]
    fn from_fractions_stays_inside_the_grid_at_full_width() {
        let region = Region::from_fractions(80, 0.0, 1.0);
        assert_eq!(region.start_col(), 0);
        assert_eq!(region.end_col(), 79);
    }

    #[test]
    fn from_fractions_ordered_inputs_yield_ordered_bounds() {
        for cols in [1usize, 7, 40, 120, 333] {
            for (s, e) in [(0.0, 0.0), (0.1, 0.35), (0.25, 0.25), (0.6, 0.9), (0.0, 1.0)] {
                let region = Region::from_fractions(cols, s, e);
                assert!(region.start_col() <= region.end_col(), "cols={cols} s={s} e={e}");
                assert!(region.end_col() < cols, "cols={cols} s={s} e={e}");
            }
        }
    }
}
