// SPDX-FileCopyrightText: 2026 Wordfield contributors
// SPDX-License-Identifier: MIT

use crate::model::{LayoutStep, Region};
use crate::text::split_two_lines;

/// Columns of inset kept empty on both sides of the region.
pub const DEFAULT_MARGIN: usize = 1;

/// Top row of the usable vertical band.
pub(crate) const BAND_TOP: usize = 2;

/// Bottom row of the usable vertical band for a grid of `rows` rows.
pub(crate) fn band_bottom(rows: usize) -> usize {
    3usize.max(rows.saturating_sub(3))
}

/// Precomputes a vertical layout for a whole label set: each label's
/// two-line split plus the row its block should start on, spread evenly
/// top-to-bottom over the usable band.
///
/// Row distribution: leftover rows (band height minus the sum of block
/// heights) are divided into equal gaps between consecutive blocks, with any
/// remainder handed one row at a time to the earliest gaps. If the final
/// block would still run past the bottom of the band, every base row is
/// shifted up by the overflow, clamped at the top of the band.
///
/// The result is an intent, not a placement: nothing here is
/// collision-checked. The placement engine verifies each step against the
/// live occupied set and relocates a label when its intended spot is blocked
/// by content this planner did not see.
pub fn plan_layout<S: AsRef<str>>(
    labels: &[S],
    rows: usize,
    region: &Region,
    margin: usize,
) -> Vec<LayoutStep> {
    let top = BAND_TOP;
    let bottom = band_bottom(rows);
    let max_line_len = region.width().saturating_sub(2 * margin).max(1);

    let splits = labels
        .iter()
        .map(|label| split_two_lines(label.as_ref(), max_line_len).into_lines())
        .collect::<Vec<_>>();

    let available = bottom - top + 1;
    let total_height: usize = splits.iter().map(|lines| lines.len()).sum();
    let gap_count = splits.len().saturating_sub(1);
    let leftover = available as i64 - total_height as i64;
    let (gap_rows, extra_gaps) = if gap_count > 0 && leftover > 0 {
        (leftover as usize / gap_count, leftover as usize % gap_count)
    } else {
        (0, 0)
    };

    let mut base_rows = Vec::with_capacity(splits.len());
    let mut cursor = top;
    for (i, lines) in splits.iter().enumerate() {
        base_rows.push(cursor);
        cursor += lines.len() + gap_rows + usize::from(i < extra_gaps);
    }

    // Pull the whole stack up if the last block ran past the band.
    let overflow = match (base_rows.last(), splits.last()) {
        (Some(&last_row), Some(last_lines)) => {
            (last_row + last_lines.len() - 1).saturating_sub(bottom)
        }
        _ => 0,
    };
    if overflow > 0 {
        for row in base_rows.iter_mut() {
            *row = row.saturating_sub(overflow).max(top);
        }
    }

    splits
        .into_iter()
        .zip(base_rows)
        .map(|(lines, base_row)| LayoutStep::new(lines, base_row))
        .collect()
}
