// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing container: configuration, measure, layout, and introspection.

use alloc::vec::Vec;

use kurbo::Size;

use crate::capacity::{CapacityPlan, plan};
use crate::geometry::{DerivedGeometry, resolve};
use crate::placement::{SlotIter, place, slots};
use crate::types::{Child, HexGridConfig, Padding, Placement};

/// Size constraint handed to [`HexGrid::measure`] for one axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SizeHint {
    /// The container must be exactly this size.
    Exact(u32),
    /// The container may be at most this size.
    AtMost(u32),
    /// No constraint; the value is the host's suggestion.
    Unspecified(u32),
}

impl SizeHint {
    /// The size carried by the hint, regardless of mode.
    pub const fn size(self) -> u32 {
        match self {
            Self::Exact(v) | Self::AtMost(v) | Self::Unspecified(v) => v,
        }
    }
}

/// Reconcile a desired size with a hint.
///
/// `Exact` wins outright, `AtMost` caps the desired size, `Unspecified` keeps it.
pub const fn resolve_size(desired: u32, hint: SizeHint) -> u32 {
    match hint {
        SizeHint::Exact(v) => v,
        SizeHint::AtMost(v) => {
            if v < desired {
                v
            } else {
                desired
            }
        }
        SizeHint::Unspecified(_) => desired,
    }
}

/// Result of [`HexGrid::measure`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Measured {
    /// Resolved container width.
    pub width: u32,
    /// Resolved container height.
    pub height: u32,
    /// Number of children the grid can place.
    pub capacity: usize,
}

impl Measured {
    /// Resolved container size as a Kurbo size.
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Everything derived in one measure pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Metrics {
    /// Tiling constants and usable space.
    pub geometry: DerivedGeometry,
    /// Column/row counts, slack, and capacity.
    pub plan: CapacityPlan,
}

impl Metrics {
    /// Run geometry resolution and capacity planning for a container size.
    pub fn compute(config: &HexGridConfig, width: u32, height: u32, padding: Padding) -> Self {
        let geometry = resolve(config.radius, width, height, padding);
        let plan = plan(
            &geometry,
            config.max_columns,
            config.max_rows,
            config.start_indented,
        );
        Self { geometry, plan }
    }

    /// Number of addressable slots.
    pub const fn capacity(&self) -> usize {
        self.plan.capacity
    }

    /// Enumerate the slots of this pass.
    pub fn slots(&self) -> SlotIter {
        slots(&self.geometry, &self.plan)
    }
}

/// A honeycomb container.
///
/// Call [`measure`](Self::measure) whenever the container size changes, then
/// [`layout`](Self::layout) with the live children. Changing the configuration
/// or padding discards the last measurement.
#[derive(Clone, Debug, Default)]
pub struct HexGrid {
    config: HexGridConfig,
    padding: Padding,
    min_width: u32,
    min_height: u32,
    metrics: Option<Metrics>,
}

impl HexGrid {
    /// Create an unmeasured grid.
    pub fn new(config: HexGridConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &HexGridConfig {
        &self.config
    }

    /// Replace the configuration. Requires a new measure.
    pub fn set_config(&mut self, config: HexGridConfig) {
        if self.config != config {
            self.config = config;
            self.metrics = None;
        }
    }

    /// Current padding.
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Replace the padding. Requires a new measure.
    pub fn set_padding(&mut self, padding: Padding) {
        if self.padding != padding {
            self.padding = padding;
            self.metrics = None;
        }
    }

    /// Minimum size the container reports from [`measure`](Self::measure).
    pub fn set_minimum_size(&mut self, width: u32, height: u32) {
        self.min_width = width;
        self.min_height = height;
    }

    /// Side length every child must be measured to (`2 * radius`).
    pub fn child_size(&self) -> u32 {
        self.config.child_size()
    }

    /// Measure the container and recompute capacity.
    ///
    /// The tiling is computed from the sizes carried by the hints; the
    /// container's own size is then resolved against the minimum size.
    pub fn measure(&mut self, width: SizeHint, height: SizeHint) -> Measured {
        let metrics = Metrics::compute(
            &self.config,
            width.size(),
            height.size(),
            self.padding,
        );
        self.metrics = Some(metrics);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            radius = self.config.radius,
            columns = metrics.plan.column_count,
            rows = metrics.plan.row_count,
            capacity = metrics.plan.capacity,
            "hex grid measured"
        );

        Measured {
            width: resolve_size(width.size().max(self.min_width), width),
            height: resolve_size(height.size().max(self.min_height), height),
            capacity: metrics.capacity(),
        }
    }

    /// Place `children` using the last measurement.
    ///
    /// Returns no placements before the first [`measure`](Self::measure).
    pub fn layout<K, I>(&self, children: I) -> Vec<Placement<K>>
    where
        I: IntoIterator<Item = Child<K>>,
    {
        let Some(metrics) = self.metrics.as_ref() else {
            return Vec::new();
        };
        let placements = place(&metrics.geometry, &metrics.plan, children);

        #[cfg(feature = "tracing")]
        tracing::trace!(placed = placements.len(), "hex grid laid out");

        placements
    }

    /// Number of children the last measurement can place (`0` before measuring).
    pub fn supported_child_count(&self) -> usize {
        self.metrics.as_ref().map_or(0, Metrics::capacity)
    }

    /// Metrics of the last measurement, if any.
    pub fn metrics(&self) -> Option<&Metrics> {
        self.metrics.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChildFlags;

    fn visible(n: u32) -> impl Iterator<Item = Child<u32>> {
        (0..n).map(Child::visible)
    }

    fn measured(config: HexGridConfig, w: u32, h: u32) -> HexGrid {
        let mut grid = HexGrid::new(config);
        let _ = grid.measure(SizeHint::Exact(w), SizeHint::Exact(h));
        grid
    }

    #[test]
    fn resolve_size_modes() {
        assert_eq!(resolve_size(50, SizeHint::Exact(30)), 30);
        assert_eq!(resolve_size(50, SizeHint::AtMost(30)), 30);
        assert_eq!(resolve_size(20, SizeHint::AtMost(30)), 20);
        assert_eq!(resolve_size(50, SizeHint::Unspecified(30)), 50);
    }

    #[test]
    fn measure_reports_capacity_and_size() {
        let mut grid = HexGrid::new(HexGridConfig::new(10));
        assert_eq!(grid.supported_child_count(), 0);
        let m = grid.measure(SizeHint::Exact(200), SizeHint::Exact(200));
        assert_eq!(
            m,
            Measured {
                width: 200,
                height: 200,
                capacity: 105
            }
        );
        assert_eq!(m.size(), Size::new(200.0, 200.0));
        assert_eq!(grid.supported_child_count(), 105);
        assert_eq!(grid.child_size(), 20);
    }

    #[test]
    fn minimum_size_applies_only_when_unconstrained() {
        let mut grid = HexGrid::new(HexGridConfig::new(10));
        grid.set_minimum_size(300, 40);
        let m = grid.measure(SizeHint::Unspecified(100), SizeHint::AtMost(100));
        assert_eq!((m.width, m.height), (300, 100));
        // Capacity follows the hinted size, not the minimum.
        let plan = grid.metrics().unwrap().plan;
        assert_eq!(plan.column_count, (100 - 6) / 17);

        let m = grid.measure(SizeHint::Exact(100), SizeHint::Exact(20));
        assert_eq!((m.width, m.height), (100, 20));
    }

    #[test]
    fn layout_before_measure_is_empty() {
        let grid = HexGrid::new(HexGridConfig::new(10));
        assert!(grid.layout(visible(5)).is_empty());
    }

    #[test]
    fn config_changes_discard_metrics() {
        let mut grid = measured(HexGridConfig::new(10), 200, 200);
        grid.set_config(HexGridConfig::new(10));
        assert_eq!(grid.supported_child_count(), 105);

        grid.set_config(HexGridConfig::new(10).with_start_indented(true));
        assert!(grid.metrics().is_none());
        let _ = grid.measure(SizeHint::Exact(200), SizeHint::Exact(200));
        assert_eq!(grid.supported_child_count(), 104);

        grid.set_padding(Padding::uniform(10));
        assert_eq!(grid.supported_child_count(), 0);
    }

    #[test]
    fn hidden_children_are_not_placed() {
        let grid = measured(HexGridConfig::new(10), 200, 200);
        let from_keys = grid.layout(["a", "b", "c"].map(Child::visible));
        let from_children = grid.layout([
            Child::visible("a"),
            Child {
                key: "b",
                flags: ChildFlags::empty(),
            },
            Child::visible("c"),
        ]);
        assert_eq!(from_keys.len(), 3);
        assert_eq!(from_children.len(), 2);
        assert_eq!(from_keys[2], from_children[1]);
    }

    #[test]
    fn caps_flow_through_measure() {
        let config = HexGridConfig::new(10).with_max_columns(2).with_max_rows(3);
        let grid = measured(config, 1000, 1000);
        assert_eq!(grid.supported_child_count(), 2 * 3 - 1);
        let placed = grid.layout(visible(100));
        assert_eq!(placed.len(), 5);
        assert!(placed.iter().all(|p| p.slot.column < 2 && p.slot.row < 3));
    }

    #[test]
    fn layout_is_idempotent() {
        let grid = measured(HexGridConfig::new(12).with_start_indented(true), 640, 480);
        let a = grid.layout(visible(200));
        let b = grid.layout(visible(200));
        assert_eq!(a, b);
        assert_eq!(a.len(), 200);
        // 30 columns of 20 rows, 15 short columns, one more for the indent.
        assert_eq!(grid.supported_child_count(), 30 * 20 - 15 - 1);
    }

    #[test]
    fn placements_fit_resolved_size() {
        for (w, h) in [(200, 200), (97, 311), (640, 480), (35, 35)] {
            let grid = measured(HexGridConfig::new(9), w, h);
            for p in grid.layout(visible(1000)) {
                let r = p.rect();
                assert!(r.x0 >= 0.0 && r.y0 >= 0.0, "{p:?}");
                assert!(r.x1 <= f64::from(w) && r.y1 <= f64::from(h), "{p:?}");
                assert_eq!(r.width(), 18.0);
            }
        }
    }
}
