// SPDX-FileCopyrightText: 2026 Wordfield contributors
// SPDX-License-Identifier: MIT

//! Wordfield — deterministic text-label placement for character grids.
//!
//! The crate packs short labels into a fixed-size character grid so that no
//! two labels overlap, each label stays inside an assigned horizontal region,
//! and labels spread evenly over the grid's vertical extent. It is the layout
//! core of a "word field" animation: an external renderer/animator consumes
//! the [`model::Placement`] values this crate produces; nothing here draws,
//! animates, or handles input.

pub mod layout;
pub mod model;
pub mod reveal;
pub mod text;
