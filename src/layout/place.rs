// SPDX-FileCopyrightText: 2026 Wordfield contributors
// SPDX-License-Identifier: MIT

use smallvec::SmallVec;

use crate::model::placement::LabelLines;
use crate::model::{Cell, CellSet, LayoutStep, Letter, LineMeta, Placement, Region};
use crate::text::{split_two_lines, text_len};

use super::fit::fits_in_region;
use super::plan::{band_bottom, BAND_TOP};

/// Floor on the horizontal sweep range, in columns.
///
/// The sweep probes up to `max(region_width, MIN_HORIZONTAL_SWEEP)` offsets
/// to each side of the ideal column. The floor is a tunable guard so that
/// narrow regions still get a useful search radius; nothing is known to
/// depend on the exact value.
pub const MIN_HORIZONTAL_SWEEP: usize = 40;

/// Inset enforced inside the region on both sides, in columns.
const MARGIN: usize = 1;

/// How many cells above its final row a glyph enters from (`Letter::ty`).
const ENTRY_DROP_CELLS: f64 = 4.0;

/// Why a label could not be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// Empty text or a zero-sized grid; nothing was attempted.
    InvalidInput,
    /// Both the horizontal and the vertical sweep were exhausted without
    /// finding room. The occupied set is untouched; the caller may retry
    /// once other labels vacate space.
    Unplaceable,
}

impl std::fmt::Display for PlaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput => f.write_str("empty label text or zero-sized grid"),
            Self::Unplaceable => f.write_str("no free position for the label in its region"),
        }
    }
}

impl std::error::Error for PlaceError {}

/// Caller-supplied overrides for one placement call, normally taken from a
/// [`LayoutStep`] so the planner's intended layout is kept unless blocked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceOptions {
    /// Precomputed line split; truncated to two lines if longer.
    pub lines: Option<LabelLines>,
    /// Precomputed base row; clamped into the usable vertical band.
    pub base_row: Option<usize>,
}

impl PlaceOptions {
    pub fn from_step(step: &LayoutStep) -> Self {
        Self {
            lines: Some(step.lines().iter().cloned().collect()),
            base_row: Some(step.base_row()),
        }
    }
}

/// Places one label into the grid, returning its glyphs and line anchors.
///
/// The label is split into at most two lines (unless `opts.lines` overrides)
/// and anchored at a base row derived from `index`/`total` (unless
/// `opts.base_row` overrides). Each line ideally centers within `region`;
/// when the fit check rejects a spot the engine sweeps outward horizontally
/// (left before right), then vertically around the base row (up before
/// down), keeping results deterministic for a given occupied set.
///
/// On success every covered cell (spaces included) is inserted into
/// `occupied`, and one [`Letter`] is emitted per non-space char. On failure
/// nothing is mutated; partial placement is never returned.
///
/// The vertical fallback only retries the original ideal columns and never
/// re-runs the horizontal sweep at the shifted row, so some theoretically
/// placeable configurations still fail. Kept for compatibility with the
/// behavior callers tune against. The fallback also confines candidate rows
/// to the usable band for single-line labels, not just wrapped ones: the
/// fit check carries no row bound of its own, so rows outside the band are
/// never probed.
#[allow(clippy::too_many_arguments)]
pub fn place_label(
    text: &str,
    cols: usize,
    rows: usize,
    occupied: &mut CellSet,
    cell_size: f64,
    index: usize,
    total: usize,
    region: &Region,
    opts: &PlaceOptions,
) -> Result<Placement, PlaceError> {
    if text.is_empty() || cols == 0 || rows == 0 {
        return Err(PlaceError::InvalidInput);
    }

    let region_cols = region.width();
    let lines: LabelLines = match &opts.lines {
        Some(lines) => lines.iter().take(2).cloned().collect(),
        None => {
            let max_line_len = region_cols.saturating_sub(2).max(1);
            split_two_lines(text, max_line_len).into_lines()
        }
    };
    if lines.is_empty() {
        return Err(PlaceError::InvalidInput);
    }

    let top = BAND_TOP;
    let bottom = band_bottom(rows);

    let mut base_row = match opts.base_row {
        Some(row) => row.clamp(top, bottom),
        None if total <= 1 => (top + bottom) / 2,
        None => {
            let spread = (index as f64 * (bottom - top) as f64 / (total - 1) as f64).round();
            (top + spread as usize).clamp(top, bottom)
        }
    };
    if lines.len() == 2 && base_row + 1 > bottom {
        base_row = (bottom - 1).max(BAND_TOP);
    }

    let line_lens = lines.iter().map(|line| text_len(line)).collect::<SmallVec<[usize; 2]>>();
    let ideal_cols = line_lens
        .iter()
        .map(|&len| ideal_start_col(len, region, cols))
        .collect::<SmallVec<[i32; 2]>>();

    let start_cols = resolve_columns(&line_lens, &ideal_cols, base_row, occupied, region, cols);
    let (base_row, start_cols) = match start_cols {
        Some(cols_found) => (base_row, cols_found),
        None => {
            vertical_sweep(
                &line_lens, &ideal_cols, base_row, top, bottom, rows, occupied, region, cols,
            )
            .ok_or(PlaceError::Unplaceable)?
        }
    };

    let mut letters = Vec::new();
    let mut metas = SmallVec::<[LineMeta; 2]>::new();
    for (i, line) in lines.iter().enumerate() {
        let row = base_row + i;
        let start_col = start_cols[i];
        for (j, ch) in line.chars().enumerate() {
            let col = start_col + j;
            // Spaces claim their cell but render no glyph, so neighboring
            // words cannot collide across a rendered gap.
            occupied.insert(Cell::new(col, row));
            if ch != ' ' {
                let x = col as f64 * cell_size;
                let y = row as f64 * cell_size;
                letters.push(Letter { ch, x, y, ty: y - cell_size * ENTRY_DROP_CELLS, locked: false });
            }
        }
        metas.push(LineMeta { text: line.clone(), start_col, row });
    }

    Ok(Placement { text: text.to_owned(), letters, lines: metas })
}

/// The column that centers a line of `len` cells within the region, clamped
/// to keep the whole line inside the region margins and the grid.
fn ideal_start_col(len: usize, region: &Region, cols: usize) -> i32 {
    let centered =
        region.start_col() as i32 + (region.width() as i32 - len as i32).div_euclid(2);
    let lo = (region.start_col() + MARGIN) as i32;
    let hi_region = region.end_col() as i32 - MARGIN as i32 - (len as i32 - 1);
    let hi_grid = cols as i32 - len as i32;
    centered.min(hi_region.min(hi_grid)).max(lo)
}

/// Resolves a start column for every line at the given base row: the ideal
/// column if it fits, else the nearest fitting column from an outward sweep
/// trying left before right. `None` if any line exhausts the sweep.
fn resolve_columns(
    line_lens: &[usize],
    ideal_cols: &[i32],
    base_row: usize,
    occupied: &CellSet,
    region: &Region,
    cols: usize,
) -> Option<SmallVec<[usize; 2]>> {
    let sweep = region.width().max(MIN_HORIZONTAL_SWEEP);

    let mut start_cols = SmallVec::new();
    for (i, (&len, &ideal)) in line_lens.iter().zip(ideal_cols).enumerate() {
        let row = base_row + i;
        let fits = |col: i32| fits_in_region(len, col, row, occupied, region, MARGIN, cols);

        let found = if fits(ideal) {
            Some(ideal)
        } else {
            (1..=sweep as i32).find_map(|offset| {
                if fits(ideal - offset) {
                    Some(ideal - offset)
                } else if fits(ideal + offset) {
                    Some(ideal + offset)
                } else {
                    None
                }
            })
        };

        start_cols.push(found? as usize);
    }

    Some(start_cols)
}

/// Searches rows around `base_row` (up before down) for one where every line
/// fits at its original ideal column. Rows that would push any line outside
/// the vertical band are skipped. Returns the accepted row and columns.
#[allow(clippy::too_many_arguments)]
fn vertical_sweep(
    line_lens: &[usize],
    ideal_cols: &[i32],
    base_row: usize,
    top: usize,
    bottom: usize,
    rows: usize,
    occupied: &CellSet,
    region: &Region,
    cols: usize,
) -> Option<(usize, SmallVec<[usize; 2]>)> {
    let last_line = line_lens.len() - 1;

    for offset in 1..=rows as i32 {
        for candidate in [base_row as i32 - offset, base_row as i32 + offset] {
            if candidate < top as i32 {
                continue;
            }
            let candidate = candidate as usize;
            if candidate + last_line > bottom {
                continue;
            }

            let all_fit = line_lens.iter().zip(ideal_cols).enumerate().all(|(i, (&len, &ideal))| {
                fits_in_region(len, ideal, candidate + i, occupied, region, MARGIN, cols)
            });
            if all_fit {
                let start_cols =
                    ideal_cols.iter().map(|&col| col as usize).collect::<SmallVec<_>>();
                return Some((candidate, start_cols));
            }
        }
    }

    None
}
