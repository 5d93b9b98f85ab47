// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot placement: column-major enumeration of slots and their pixel positions.
//!
//! ## Enumeration
//!
//! Slots are walked column by column. The row advances within a column; the
//! column advances once it holds [`rows_in_column`](crate::capacity::rows_in_column)
//! rows. Columns holding no rows (offset columns of a single-row grid) are
//! skipped. The walk ends after `capacity` slots.
//!
//! ## Position
//!
//! For slot `(a, b)`:
//!
//! - `x = a * width_segment + padding.left + unused_width / 2 + (4 * width_excess - 2 * radius) / 2`
//! - `y = b * 2 * radius + padding.top + unused_height / 2`, plus `radius` in offset columns.
//!
//! Divisions truncate, so positions stay on whole pixels.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use kurbo::Rect;

use crate::capacity::CapacityPlan;
use crate::geometry::DerivedGeometry;
use crate::types::{Child, Placement};

/// One addressable slot of the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slot {
    /// Ordinal in column-major order.
    pub index: usize,
    /// Column of the slot.
    pub column: u32,
    /// Row within the column.
    pub row: u32,
    /// Left edge in container pixels.
    pub x: i64,
    /// Top edge in container pixels.
    pub y: i64,
    /// Side length of the slot's square.
    pub size: u32,
}

impl Slot {
    /// The slot's rectangle in container coordinates.
    pub fn rect(&self) -> Rect {
        #[allow(
            clippy::cast_precision_loss,
            reason = "Pixel coordinates are far below 2^53."
        )]
        let (x, y) = (self.x as f64, self.y as f64);
        let s = f64::from(self.size);
        Rect::new(x, y, x + s, y + s)
    }

    /// Assign a child to this slot.
    pub fn place<K>(&self, key: K) -> Placement<K> {
        Placement { key, slot: *self }
    }
}

/// Iterator over the slots of one pass, created by [`slots`].
#[derive(Clone, Debug)]
pub struct SlotIter {
    plan: CapacityPlan,
    segment: i64,
    cell: i64,
    radius: i64,
    left: i64,
    top: i64,
    size: u32,
    index: usize,
    column: u32,
    row: u32,
}

/// Enumerate the `plan.capacity` slots of a pass in column-major order.
pub fn slots(geometry: &DerivedGeometry, plan: &CapacityPlan) -> SlotIter {
    debug_assert!(
        plan.capacity <= enumerable_slots(plan),
        "capacity must fit within the column walk"
    );
    let radius = i64::from(geometry.radius);
    let excess = i64::from(geometry.width_excess);
    SlotIter {
        plan: *plan,
        segment: i64::from(geometry.width_segment),
        cell: i64::from(geometry.cell_size()),
        radius,
        left: i64::from(geometry.padding.left)
            + i64::from(plan.unused_width / 2)
            + (4 * excess - 2 * radius) / 2,
        top: i64::from(geometry.padding.top) + i64::from(plan.unused_height / 2),
        size: geometry.cell_size(),
        index: 0,
        column: 0,
        row: 0,
    }
}

/// Place `children` into the slots of a pass.
///
/// Stops at the shorter of the slot walk and the child sequence. Hidden
/// children consume their slot but produce no placement; children past the
/// capacity are ignored.
pub fn place<K, I>(
    geometry: &DerivedGeometry,
    plan: &CapacityPlan,
    children: I,
) -> Vec<Placement<K>>
where
    I: IntoIterator<Item = Child<K>>,
{
    slots(geometry, plan)
        .zip(children)
        .filter(|(_, child)| child.is_visible())
        .map(|(slot, child)| slot.place(child.key))
        .collect()
}

/// Total number of slots the column walk can reach.
fn enumerable_slots(plan: &CapacityPlan) -> usize {
    let columns = u64::from(plan.column_count);
    let (flush, offset) = if plan.start_indented {
        (columns / 2, columns.div_ceil(2))
    } else {
        (columns.div_ceil(2), columns / 2)
    };
    let total = flush * u64::from(plan.row_count)
        + offset * u64::from(plan.row_count.saturating_sub(1));
    usize::try_from(total).unwrap_or(usize::MAX)
}

impl Iterator for SlotIter {
    type Item = Slot;

    fn next(&mut self) -> Option<Slot> {
        if self.index >= self.plan.capacity {
            return None;
        }
        while self.plan.rows_in_column(self.column) == 0 {
            if self.column >= self.plan.column_count {
                return None;
            }
            self.column += 1;
        }
        if self.column >= self.plan.column_count {
            return None;
        }

        let offset = if self.plan.is_offset_column(self.column) {
            self.radius
        } else {
            0
        };
        let slot = Slot {
            index: self.index,
            column: self.column,
            row: self.row,
            x: i64::from(self.column) * self.segment + self.left,
            y: i64::from(self.row) * self.cell + self.top + offset,
            size: self.size,
        };

        self.index += 1;
        self.row += 1;
        if self.row >= self.plan.rows_in_column(self.column) {
            self.row = 0;
            self.column += 1;
        }
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.plan.capacity.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SlotIter {}

impl FusedIterator for SlotIter {}
