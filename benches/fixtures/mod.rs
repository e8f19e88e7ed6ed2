// SPDX-FileCopyrightText: 2026 Wordfield contributors
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use wordfield::model::{Cell, CellSet, Region};

/// A grid/region pairing the benches place into.
pub struct Field {
    pub cols: usize,
    pub rows: usize,
    pub region: Region,
}

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// A handful of short labels in a roomy 120x40 grid.
    Small,
    /// Twenty mixed-length labels in the same grid; several must wrap.
    MediumWrapped,
    /// Forty labels in a cramped region, forcing heavy sweep traffic.
    LargeCrowded,
}

pub fn field(case: Case) -> Field {
    match case {
        Case::Small | Case::MediumWrapped => {
            Field { cols: 120, rows: 40, region: Region::from_fractions(120, 0.55, 0.95) }
        }
        Case::LargeCrowded => {
            Field { cols: 80, rows: 48, region: Region::from_fractions(80, 0.4, 0.62) }
        }
    }
}

pub fn labels(case: Case) -> Vec<String> {
    let names: &[&str] = match case {
        Case::Small => &["Sales", "Support", "Billing", "Renewals", "Onboarding"],
        Case::MediumWrapped => &[
            "Prospecting & Pipeline",
            "Customer Success",
            "Billing & Invoicing",
            "Renewals",
            "Onboarding",
            "Field Operations",
            "Partner Enablement",
            "Support",
            "Implementation Services",
            "Account Management",
        ],
        Case::LargeCrowded => &["Dispatch", "Routing", "Escalations", "Triage"],
    };

    let repeat = match case {
        Case::Small => 1,
        Case::MediumWrapped => 2,
        Case::LargeCrowded => 10,
    };

    let mut out = Vec::with_capacity(names.len() * repeat);
    for round in 0..repeat {
        for name in names {
            if round == 0 {
                out.push((*name).to_owned());
            } else {
                out.push(format!("{name} {round}"));
            }
        }
    }
    out
}

/// A checkerboard of pre-occupied cells, so fit checks fail often enough to
/// exercise the sweeps without making placement impossible.
pub fn sparse_occupancy(field: &Field) -> CellSet {
    let mut occupied = CellSet::new();
    for row in (0..field.rows).step_by(5) {
        for col in (field.region.start_col()..=field.region.end_col()).step_by(7) {
            occupied.insert(Cell::new(col, row));
        }
    }
    occupied
}
