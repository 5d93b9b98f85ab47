// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hex grid basics.
//!
//! Measure a grid, place a handful of children, and print their rectangles.
//! Set `RUST_LOG=trace` to see the per-pass events.
//!
//! Run:
//! - `cargo run -p understory_demos --example hex_grid_basics`

use kurbo::Rect;
use tracing_subscriber::EnvFilter;
use understory_hex_grid::{Child, HexGrid, HexGridConfig, Padding, SizeHint};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let mut grid = HexGrid::new(HexGridConfig::new(24));
    grid.set_padding(Padding::uniform(8));

    let measured = grid.measure(SizeHint::Exact(320), SizeHint::AtMost(240));
    println!(
        "container {}x{}, supports {} children of {}px",
        measured.width,
        measured.height,
        grid.supported_child_count(),
        grid.child_size()
    );

    let placements = grid.layout(["a", "b", "c", "d", "e", "f", "g"].map(Child::visible));
    for p in &placements {
        println!(
            "{} -> column {} row {} at {:?}",
            p.key,
            p.slot.column,
            p.slot.row,
            p.rect()
        );
    }
    assert_eq!(placements.len(), 7);

    let bounds = placements
        .iter()
        .map(|p| p.rect())
        .reduce(|a, b| a.union(b))
        .unwrap_or(Rect::ZERO);
    println!("occupied bounds: {bounds:?}");
    assert!(bounds.x1 <= f64::from(measured.width) && bounds.y1 <= f64::from(measured.height));
}
