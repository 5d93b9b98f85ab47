// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_hex_grid --heading-base-level=0

//! Understory Hex Grid: a deterministic honeycomb layout for square children.
//!
//! Understory Hex Grid arranges fixed-size square children into a staggered hexagonal tiling
//! inside a rectangular container.
//!
//! - Works out how many whole hex cells fit, honoring optional column and row caps.
//! - Assigns every child a whole-pixel top-left position, with columns alternately shifted down by one radius.
//! - Starts either flush (odd columns shifted) or indented (even columns shifted).
//!
//! It does not draw hexagons, handle input, or scroll.
//! Children are opaque boxes measured to a square of side `2 * radius`; the host decides how they paint.
//!
//! ## Passes
//!
//! Each measure runs three pure stages, each feeding the next:
//!
//! 1. [`geometry::resolve`] derives the column pitch (`round(radius * √3)`), the column overhang
//!    (`round(radius / √3)`), and the usable space inside the padding.
//! 2. [`capacity::plan`] fits whole columns and rows and computes the slot capacity.
//!    Offset columns hold one row fewer, so capacity is `columns * rows - columns / 2`,
//!    minus one more for an indented start, never below zero.
//! 3. [`placement::slots`] walks the slots in column-major order and yields their rectangles;
//!    [`placement::place`] pairs them with children.
//!
//! [`HexGrid`] is the host-facing wrapper: it owns the configuration, keeps the last
//! [`Metrics`] for [`HexGrid::supported_child_count`], and places children with [`HexGrid::layout`].
//!
//! ## Edge cases
//!
//! - Nothing fails. Space smaller than the padding, a zero radius, or a cap of zero yields zero capacity.
//! - Fewer children than capacity: only those children are placed.
//! - More children than capacity: the excess is ignored.
//! - Hidden children (without [`ChildFlags::VISIBLE`]) keep their slot but receive no placement,
//!   so the children after them do not move.
//!
//! ## Example
//!
//! ```rust
//! use understory_hex_grid::{Child, HexGrid, HexGridConfig, SizeHint};
//!
//! let mut grid = HexGrid::new(HexGridConfig::new(10));
//! let measured = grid.measure(SizeHint::Exact(200), SizeHint::Exact(200));
//!
//! // 11 columns of 10 rows, with the 5 odd columns one row short.
//! assert_eq!(measured.capacity, 105);
//! assert_eq!(grid.supported_child_count(), 105);
//!
//! let placements = grid.layout((0..3_u32).map(Child::visible));
//! assert_eq!(placements.len(), 3);
//!
//! // Children fill column 0 from the top before moving to column 1.
//! assert_eq!((placements[0].slot.x, placements[0].slot.y), (5, 0));
//! assert_eq!((placements[1].slot.x, placements[1].slot.y), (5, 20));
//! assert_eq!(placements[2].rect(), kurbo::Rect::new(5.0, 40.0, 25.0, 60.0));
//! ```
//!
//! ### Indented start
//!
//! ```rust
//! use understory_hex_grid::{HexGrid, HexGridConfig, SizeHint};
//!
//! let config = HexGridConfig::new(10).with_start_indented(true).with_max_columns(3);
//! let mut grid = HexGrid::new(config);
//! let m = grid.measure(SizeHint::Exact(200), SizeHint::Exact(100));
//!
//! // Columns 0 and 2 are shifted and hold 4 rows; column 1 holds 5.
//! assert_eq!(m.capacity, 3 * 5 - 1 - 1);
//! let first = grid.metrics().unwrap().slots().next().unwrap();
//! assert_eq!(first.y, 10);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod capacity;
pub mod geometry;
pub mod grid;
pub mod placement;
pub mod types;

pub use capacity::{CapacityPlan, is_offset_column, rows_in_column};
pub use geometry::DerivedGeometry;
pub use grid::{HexGrid, Measured, Metrics, SizeHint, resolve_size};
pub use placement::{Slot, SlotIter};
pub use types::{Child, ChildFlags, DEFAULT_RADIUS, HexGridConfig, Padding, Placement};
