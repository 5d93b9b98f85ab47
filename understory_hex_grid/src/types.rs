// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the hex grid: configuration, padding, children, and placements.

use kurbo::{Insets, Rect};

use crate::placement::Slot;

/// Default hex radius in pixels (48 device-independent units at 1x density).
pub const DEFAULT_RADIUS: u32 = 48;

/// Tiling parameters for a [`HexGrid`](crate::HexGrid).
///
/// These are read once per configuration change, not per layout pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct HexGridConfig {
    /// Half the side length of each child's bounding square, in pixels.
    ///
    /// This is also the fundamental unit of the tiling. A radius of `0` is
    /// accepted and yields zero capacity.
    pub radius: u32,
    /// Whether column `0` begins offset downward by one radius.
    ///
    /// This flips the stagger parity: with an indented start, even columns are
    /// the short ones.
    pub start_indented: bool,
    /// Upper bound on the number of columns; `None` is unbounded.
    pub max_columns: Option<u32>,
    /// Upper bound on the number of rows; `None` is unbounded.
    pub max_rows: Option<u32>,
}

impl Default for HexGridConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            start_indented: false,
            max_columns: None,
            max_rows: None,
        }
    }
}

impl HexGridConfig {
    /// Create a flush, uncapped configuration with the given radius.
    pub const fn new(radius: u32) -> Self {
        Self {
            radius,
            start_indented: false,
            max_columns: None,
            max_rows: None,
        }
    }

    /// Set whether the first column starts indented.
    #[must_use]
    pub const fn with_start_indented(mut self, start_indented: bool) -> Self {
        self.start_indented = start_indented;
        self
    }

    /// Cap the number of columns.
    #[must_use]
    pub const fn with_max_columns(mut self, max_columns: u32) -> Self {
        self.max_columns = Some(max_columns);
        self
    }

    /// Cap the number of rows.
    #[must_use]
    pub const fn with_max_rows(mut self, max_rows: u32) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    /// Side length of the square every child is measured to (`2 * radius`).
    pub const fn child_size(&self) -> u32 {
        self.radius.saturating_mul(2)
    }
}

/// Container padding in pixels, subtracted before any layout math.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Padding {
    /// Left edge.
    pub left: u32,
    /// Top edge.
    pub top: u32,
    /// Right edge.
    pub right: u32,
    /// Bottom edge.
    pub bottom: u32,
}

impl Padding {
    /// No padding on any edge.
    pub const ZERO: Self = Self::uniform(0);

    /// Create padding from the four edges.
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The same padding on all four edges.
    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Combined left and right padding.
    pub const fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Combined top and bottom padding.
    pub const fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

impl From<Padding> for Insets {
    fn from(p: Padding) -> Self {
        Self::new(
            f64::from(p.left),
            f64::from(p.top),
            f64::from(p.right),
            f64::from(p.bottom),
        )
    }
}

bitflags::bitflags! {
    /// Per-child flags supplied by the host.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ChildFlags: u8 {
        /// Child is visible and receives a placement.
        ///
        /// Hidden children still consume their slot so that later children keep
        /// their positions.
        const VISIBLE = 0b0000_0001;
    }
}

impl Default for ChildFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// A child handed to [`HexGrid::layout`](crate::HexGrid::layout).
///
/// `K` is an opaque host handle; the grid never looks inside it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Child<K> {
    /// Host handle for the child.
    pub key: K,
    /// Visibility flags.
    pub flags: ChildFlags,
}

impl<K> Child<K> {
    /// A visible child.
    pub fn visible(key: K) -> Self {
        Self {
            key,
            flags: ChildFlags::VISIBLE,
        }
    }

    /// A hidden child. It consumes a slot but is not placed.
    pub fn hidden(key: K) -> Self {
        Self {
            key,
            flags: ChildFlags::empty(),
        }
    }

    /// Whether this child should receive a placement.
    pub fn is_visible(&self) -> bool {
        self.flags.contains(ChildFlags::VISIBLE)
    }
}

/// The resolved position of one child.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement<K> {
    /// Host handle of the placed child.
    pub key: K,
    /// Slot the child occupies; its index is also the child's index.
    pub slot: Slot,
}

impl<K> Placement<K> {
    /// The child's rectangle in container coordinates.
    pub fn rect(&self) -> Rect {
        self.slot.rect()
    }
}
