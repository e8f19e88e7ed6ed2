// SPDX-FileCopyrightText: 2026 Wordfield contributors
// SPDX-License-Identifier: MIT

//! Data types shared by the layout engine and its callers.
//!
//! Everything here is plain data: the engine computes over these types, the
//! consuming renderer/animator reads them. Output-facing types derive serde
//! so placements can cross a process boundary.

pub mod grid;
pub mod placement;
pub mod region;

pub use grid::{Cell, CellSet};
pub use placement::{LayoutStep, Letter, LineMeta, Placement};
pub use region::Region;
