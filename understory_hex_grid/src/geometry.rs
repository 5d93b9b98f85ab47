// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry resolution: tiling constants and usable space for one pass.
//!
//! Vertical hex columns repeat every `√3 · radius` pixels and each column
//! overhangs its neighbor by `radius / √3`. Both are rounded to whole pixels.
//! The rounding is computed exactly on integers: `radius · √3` and
//! `radius / √3` are irrational for every positive radius, so there are no
//! half-way ties and the result matches rounding the real value.

use crate::types::Padding;

/// Tiling constants and usable space derived from the radius and container bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DerivedGeometry {
    /// Hex radius the geometry was derived from.
    pub radius: u32,
    /// Horizontal distance between adjacent column origins, `round(radius · √3)`.
    pub width_segment: u32,
    /// Horizontal overhang of a single column, `round(radius / √3)`.
    pub width_excess: u32,
    /// Container width minus horizontal padding and `width_excess`, clamped at zero.
    pub usable_width: u32,
    /// Container height minus vertical padding, clamped at zero.
    pub usable_height: u32,
    /// Container padding.
    pub padding: Padding,
}

impl DerivedGeometry {
    /// Side length of each child's square.
    pub const fn cell_size(&self) -> u32 {
        self.radius.saturating_mul(2)
    }
}

/// Resolve tiling constants for a container of `width` × `height` pixels.
///
/// Never fails: a container smaller than its own padding (plus overhang)
/// yields zero usable space.
pub fn resolve(radius: u32, width: u32, height: u32, padding: Padding) -> DerivedGeometry {
    let width_excess = width_excess(radius);
    DerivedGeometry {
        radius,
        width_segment: width_segment(radius),
        width_excess,
        usable_width: width
            .saturating_sub(padding.horizontal())
            .saturating_sub(width_excess),
        usable_height: height.saturating_sub(padding.vertical()),
        padding,
    }
}

/// `round(radius · √3)`.
pub fn width_segment(radius: u32) -> u32 {
    // radius·√3 = √(3r²). With n = ⌊√(3r²)⌋, round up when n + ½ < √(3r²),
    // i.e. n² + n < 3r² on integers.
    let three_r2 = 3 * u128::from(radius) * u128::from(radius);
    let n = three_r2.isqrt();
    let rounded = if n * n + n < three_r2 { n + 1 } else { n };
    saturate(rounded)
}

/// `round(radius / √3)`.
pub fn width_excess(radius: u32) -> u32 {
    // With m = ⌊r/√3⌋ (largest m with 3m² ≤ r²), round up when m + ½ < r/√3,
    // i.e. 12m² + 12m + 3 < 4r² on integers.
    let r2 = u128::from(radius) * u128::from(radius);
    let m = (r2 / 3).isqrt();
    let rounded = if 12 * m * m + 12 * m + 3 < 4 * r2 {
        m + 1
    } else {
        m
    };
    saturate(rounded)
}

fn saturate(v: u128) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}
