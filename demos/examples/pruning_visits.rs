// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pruning diagnostics.
//!
//! Fill a tree with pseudo-random points, run the same range query with and
//! without quadrant pruning, and compare how many nodes each variant visits.
//!
//! Run:
//! - `cargo run -p thicket_demos --example pruning_visits`

use thicket_quadtree::{Point2D, QuadTree, Rect2D};

struct Rng(u64);

impl Rng {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn coord(&mut self, max: i64) -> i64 {
        (self.next_u64() % (max as u64 + 1)) as i64
    }
}

fn main() {
    let mut rng = Rng(0x7417_C4E7_0000_5EED);
    let mut qt: QuadTree<i64, u32> = QuadTree::from_xywh(0, 0, 1_000, 1_000);

    let mut attempts = 0_u32;
    while qt.len() < 5_000 {
        let p = Point2D::new(rng.coord(1_000), rng.coord(1_000));
        let _ = qt.insert(p, attempts).unwrap();
        attempts += 1;
    }
    println!(
        "stored {} distinct points ({} attempts, {} duplicates skipped)",
        qt.len(),
        attempts,
        attempts as usize - qt.len()
    );

    let rect = Rect2D::from_xywh(400, 400, 200, 200);
    let hits = qt.query_range(rect).len();
    let pruned_visits = qt.visited_on_last_query();
    let unpruned_hits = qt.query_range_unpruned(rect).len();
    let unpruned_visits = qt.visited_on_last_query();

    assert_eq!(hits, unpruned_hits, "both variants must find the same set");
    println!("query {rect:?}: {hits} hits");
    println!("  pruned:   visited {pruned_visits} nodes");
    println!("  unpruned: visited {unpruned_visits} nodes");
    println!(
        "  pruning skipped {:.1}% of the tree",
        100.0 * (unpruned_visits - pruned_visits) as f64 / unpruned_visits as f64
    );
}
