// SPDX-FileCopyrightText: 2026 Wordfield contributors
// SPDX-License-Identifier: MIT

//! Test-only helpers for inspecting placement results as text.

use crate::model::Placement;

/// Renders placements onto a blank `cols` x `rows` field and returns it as a
/// string with trailing spaces and trailing empty lines trimmed. Intended
/// for deterministic-output assertions in tests.
pub(crate) fn field_to_string(placements: &[Placement], cols: usize, rows: usize) -> String {
    let mut field = vec![vec![' '; cols]; rows];
    for placement in placements {
        for line in &placement.lines {
            for (i, ch) in line.text.chars().enumerate() {
                let col = line.start_col + i;
                if col < cols && line.row < rows {
                    field[line.row][col] = ch;
                }
            }
        }
    }

    let mut lines = field
        .into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end_matches(' ').to_owned())
        .collect::<Vec<_>>();

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}
