// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capacity planning: how many columns, rows, and slots fit.
//!
//! ## Short columns
//!
//! Hex packing alternates full columns with columns shifted down by one
//! radius. A shifted ("offset") column loses one cell of vertical room, so it
//! holds `row_count - 1` cells. Without an indented start the odd columns are
//! offset; with one, the even columns are.
//!
//! The slot count is `column_count * row_count - column_count / 2`, with one
//! more slot removed for an indented start, clamped at zero.

use crate::geometry::DerivedGeometry;

/// Column/row counts, leftover slack, and slot capacity for one pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CapacityPlan {
    /// Number of whole columns that fit (after `max_columns`).
    pub column_count: u32,
    /// Number of whole rows in a full column (after `max_rows`).
    pub row_count: u32,
    /// Horizontal slack left after fitting whole columns; used for centering.
    pub unused_width: u32,
    /// Vertical slack left after fitting whole rows; used for centering.
    pub unused_height: u32,
    /// Number of addressable child slots.
    pub capacity: usize,
    /// Stagger parity the plan was computed for.
    pub start_indented: bool,
}

impl CapacityPlan {
    /// Number of rows held by `column` under this plan.
    pub const fn rows_in_column(&self, column: u32) -> u32 {
        rows_in_column(column, self.row_count, self.start_indented)
    }

    /// Whether `column` is shifted down by one radius under this plan.
    pub const fn is_offset_column(&self, column: u32) -> bool {
        is_offset_column(column, self.start_indented)
    }
}

/// Whether `column` is shifted down by one radius.
///
/// Odd columns are offset, unless the grid starts indented, in which case even
/// columns are.
pub const fn is_offset_column(column: u32, start_indented: bool) -> bool {
    (column % 2 == 1) ^ start_indented
}

/// Number of rows held by `column`: one fewer in offset columns.
pub const fn rows_in_column(column: u32, row_count: u32, start_indented: bool) -> u32 {
    if is_offset_column(column, start_indented) {
        row_count.saturating_sub(1)
    } else {
        row_count
    }
}

/// Plan columns, rows, slack, and capacity for a resolved geometry.
///
/// A cap of `Some(0)` yields zero capacity on that axis; `None` is unbounded.
pub fn plan(
    geometry: &DerivedGeometry,
    max_columns: Option<u32>,
    max_rows: Option<u32>,
    start_indented: bool,
) -> CapacityPlan {
    let cell = geometry.cell_size();

    let column_count = geometry
        .usable_width
        .checked_div(geometry.width_segment)
        .unwrap_or(0)
        .min(max_columns.unwrap_or(u32::MAX));
    let row_count = geometry
        .usable_height
        .checked_div(cell)
        .unwrap_or(0)
        .min(max_rows.unwrap_or(u32::MAX));

    // Counts never exceed what fits, so these products stay within usable space.
    let unused_width = geometry.usable_width - column_count * geometry.width_segment;
    let unused_height = geometry.usable_height - row_count * cell;

    CapacityPlan {
        column_count,
        row_count,
        unused_width,
        unused_height,
        capacity: capacity(column_count, row_count, start_indented),
        start_indented,
    }
}

/// Closed-form slot count for a `column_count` × `row_count` hex grid.
pub fn capacity(column_count: u32, row_count: u32, start_indented: bool) -> usize {
    if column_count == 0 || row_count == 0 {
        return 0;
    }
    let full = u64::from(column_count) * u64::from(row_count);
    let short = u64::from(column_count / 2) + u64::from(start_indented);
    // `full >= column_count >= short` except when one column starts indented
    // with one row, where saturation yields zero.
    usize::try_from(full.saturating_sub(short)).unwrap_or(usize::MAX)
}
