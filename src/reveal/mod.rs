// SPDX-FileCopyrightText: 2026 Wordfield contributors
// SPDX-License-Identifier: MIT

//! Tick-driven reveal of a label set.
//!
//! [`RevealSchedule`] owns the authoritative occupied set across placement
//! calls and reveals labels one at a time, in order, so later labels avoid
//! earlier ones. It carries no timer: the caller decides when a tick happens
//! (every animation frame, a fixed cadence, manually in tests) and what to
//! do with the placements. A label whose spot is momentarily blocked stays
//! pending and is retried on the next tick.

use crate::layout::{place_label, plan_layout, PlaceError, PlaceOptions, DEFAULT_MARGIN};
use crate::model::{CellSet, LayoutStep, Placement, Region};

/// Outcome of one scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The next label was placed; its placement was appended.
    Placed,
    /// The next label could not be placed right now; it stays pending.
    Blocked,
    /// The next label was invalid (empty text) and was dropped.
    Skipped,
    /// Every label has been revealed or dropped.
    Done,
}

/// Reveals a fixed label set into a grid, one label per successful tick.
#[derive(Debug, Clone)]
pub struct RevealSchedule {
    cols: usize,
    rows: usize,
    cell_size: f64,
    region: Region,
    labels: Vec<String>,
    steps: Vec<LayoutStep>,
    occupied: CellSet,
    placements: Vec<Placement>,
    next: usize,
}

impl RevealSchedule {
    /// Plans the vertical layout for `labels` up front and starts with an
    /// empty occupied set.
    pub fn new(
        labels: Vec<String>,
        cols: usize,
        rows: usize,
        cell_size: f64,
        region: Region,
    ) -> Self {
        let steps = plan_layout(&labels, rows, &region, DEFAULT_MARGIN);
        Self {
            cols,
            rows,
            cell_size,
            region,
            labels,
            steps,
            occupied: CellSet::new(),
            placements: Vec::new(),
            next: 0,
        }
    }

    /// Attempts to place the next unrevealed label.
    ///
    /// A blocked label is left pending for the next tick; an invalid label
    /// is dropped so the schedule cannot stall on it.
    pub fn tick(&mut self) -> Tick {
        let Some(label) = self.labels.get(self.next) else {
            return Tick::Done;
        };

        let opts = PlaceOptions::from_step(&self.steps[self.next]);
        match place_label(
            label,
            self.cols,
            self.rows,
            &mut self.occupied,
            self.cell_size,
            self.next,
            self.labels.len(),
            &self.region,
            &opts,
        ) {
            Ok(placement) => {
                self.placements.push(placement);
                self.next += 1;
                Tick::Placed
            }
            Err(PlaceError::Unplaceable) => Tick::Blocked,
            Err(PlaceError::InvalidInput) => {
                self.next += 1;
                Tick::Skipped
            }
        }
    }

    /// Replaces the occupancy record, e.g. rebuilt from live glyph positions
    /// between animation frames. Already-revealed placements are unaffected.
    pub fn rebuild_occupied(&mut self, occupied: CellSet) {
        self.occupied = occupied;
    }

    pub fn occupied(&self) -> &CellSet {
        &self.occupied
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// The label the next tick will attempt, if any remain.
    pub fn pending_label(&self) -> Option<&str> {
        self.labels.get(self.next).map(String::as_str)
    }

    pub fn is_done(&self) -> bool {
        self.next >= self.labels.len()
    }
}
