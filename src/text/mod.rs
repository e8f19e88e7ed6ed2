// SPDX-FileCopyrightText: 2026 Wordfield contributors
// SPDX-License-Identifier: MIT

//! Text measuring and wrapping for label placement.
//!
//! Lengths are counted in `char`s, matching the one-glyph-per-cell grid
//! model. Two entry points: [`split_two_lines`] caps a label at two lines
//! with a natural break; [`wrap_to_lines`] is a greedy word-wrap for longer
//! paragraph-style text with a hard line-count cap.

use smallvec::smallvec;

use crate::model::placement::LabelLines;

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Result of splitting a label at a maximum line length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLines {
    lines: LabelLines,
    wrapped: bool,
}

impl SplitLines {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> LabelLines {
        self.lines
    }

    /// `true` when the text did not fit one line and was split in two.
    pub fn wrapped(&self) -> bool {
        self.wrapped
    }
}

/// Splits `text` into at most two lines of at most `max_len` chars.
///
/// A text that already fits is returned unchanged as a single line.
/// Otherwise the split point is the nearest space or hyphen scanning
/// backward from `min(max_len, len - 1)`; a hyphen stays on the first line
/// and a space is consumed by the break. A hyphen found at exactly
/// `max_len` is not a usable break (keeping it would overrun the first
/// line), so the scan continues past it. With no natural break point the
/// text is hard-broken exactly at `max_len`. The first line is trimmed of
/// trailing whitespace, the second of leading whitespace; a second half
/// that trims to nothing collapses the result back to a single unwrapped
/// line.
///
/// Never yields more than two lines; callers needing more use
/// [`wrap_to_lines`]. Assumes `max_len >= 1` (callers clamp).
pub fn split_two_lines(text: &str, max_len: usize) -> SplitLines {
    let chars = text.chars().collect::<Vec<_>>();
    if chars.len() <= max_len {
        return SplitLines { lines: smallvec![text.to_owned()], wrapped: false };
    }

    let mut break_at = None;
    let mut i = max_len.min(chars.len() - 1);
    while i >= 1 {
        match chars[i] {
            ' ' => {
                break_at = Some((i, i + 1));
                break;
            }
            // The kept hyphen must not push the first line past the limit.
            '-' if i < max_len => {
                break_at = Some((i + 1, i + 1));
                break;
            }
            _ => i -= 1,
        }
    }
    let (first_end, second_start) = break_at.unwrap_or((max_len, max_len));

    let first = chars[..first_end].iter().collect::<String>().trim_end().to_owned();
    let second = chars[second_start..].iter().collect::<String>().trim_start().to_owned();
    if second.is_empty() {
        return SplitLines { lines: smallvec![first], wrapped: false };
    }
    SplitLines { lines: smallvec![first, second], wrapped: true }
}

/// Greedy word-wrap of `text` into at most `max_lines` lines of at most
/// `max_cols` chars.
///
/// Words accumulate into the current line while `current + " " + word` still
/// fits. Once `max_lines - 1` lines have been emitted the last slot is
/// reserved for the line in progress and any further words are dropped. A
/// single word wider than `max_cols` is emitted whole on its own line; there
/// is no character-level splitting.
pub fn wrap_to_lines(text: &str, max_cols: usize, max_lines: usize) -> Vec<String> {
    let mut lines = Vec::<String>::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        if text_len(&current) + 1 + text_len(word) <= max_cols {
            current.push(' ');
            current.push_str(word);
            continue;
        }
        if lines.len() + 1 >= max_lines {
            // Out of slots: keep the in-progress line, drop the rest.
            break;
        }
        lines.push(std::mem::take(&mut current));
        current.push_str(word);
    }

    if !current.is_empty() && lines.len() < max_lines {
        lines.push(current);
    }

    lines
}
