// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Indented hex grid with hidden children.
//!
//! Hidden children keep their slot, so the visible ones do not shift.
//! The grid is drawn as text: `#` for a placed child, `.` for a free slot.
//!
//! Run:
//! - `cargo run -p understory_demos --example hex_grid_hidden_children`

use understory_hex_grid::{Child, HexGrid, HexGridConfig, SizeHint};

fn main() {
    let config = HexGridConfig::new(10)
        .with_start_indented(true)
        .with_max_columns(6);
    let mut grid = HexGrid::new(config);
    let _ = grid.measure(SizeHint::Exact(200), SizeHint::Exact(120));

    // Every third child is hidden.
    let children = (0..20_u32).map(|i| {
        if i % 3 == 2 {
            Child::hidden(i)
        } else {
            Child::visible(i)
        }
    });
    let placements = grid.layout(children);

    let Some(metrics) = grid.metrics() else {
        return;
    };
    let plan = metrics.plan;
    println!(
        "{} columns x {} rows, capacity {}, placed {}",
        plan.column_count,
        plan.row_count,
        plan.capacity,
        placements.len()
    );

    // Two text lines per hex row so offset columns sit half a row lower.
    let lines = plan.row_count as usize * 2;
    let mut canvas = vec![vec![' '; plan.column_count as usize * 2]; lines];
    for slot in metrics.slots() {
        let line = slot.row as usize * 2 + usize::from(plan.is_offset_column(slot.column));
        let placed = placements.iter().any(|p| p.slot == slot);
        canvas[line][slot.column as usize * 2] = if placed { '#' } else { '.' };
    }
    for line in canvas {
        println!("{}", line.into_iter().collect::<String>());
    }
}
