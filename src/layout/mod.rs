// SPDX-FileCopyrightText: 2026 Wordfield contributors
// SPDX-License-Identifier: MIT

//! Placement algorithms for the word field.
//!
//! This module decides where labels land on the grid: [`fit::fits_in_region`]
//! answers whether one line can be written at a candidate position,
//! [`plan::plan_layout`] precomputes an evenly spread vertical layout for a
//! whole label set, and [`place::place_label`] turns one label into a
//! concrete non-overlapping [`crate::model::Placement`], searching outward
//! when the intended spot is blocked.

pub mod fit;
pub mod place;
pub mod plan;

#[cfg(test)]
pub(crate) mod test_utils;

pub use fit::fits_in_region;
pub use place::{place_label, PlaceError, PlaceOptions, MIN_HORIZONTAL_SWEEP};
pub use plan::{plan_layout, DEFAULT_MARGIN};
