// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Build a small tree, query a rectangle, and update a payload in place.
//!
//! Run:
//! - `cargo run -p thicket_demos --example quadtree_basics`

use thicket_quadtree::{Insertion, Point2D, QuadTree, Rect2D};

fn main() {
    // A tree over (0,0)..=(100,100), labels as payloads.
    let mut qt: QuadTree<i64, &str> = QuadTree::from_xywh(0, 0, 100, 100);
    for (x, y, label) in [
        (10, 20, "library"),
        (35, 70, "museum"),
        (80, 15, "harbor"),
        (55, 55, "market"),
        (100, 100, "lighthouse"),
    ] {
        let outcome = qt.insert(Point2D::new(x, y), label).unwrap();
        assert_eq!(outcome, Insertion::Inserted);
    }

    // Duplicate locations are skipped, not errors.
    let dup = qt.insert(Point2D::new(55, 55), "bazaar").unwrap();
    println!("re-inserting (55, 55): {dup:?}, size stays {}", qt.len());

    // Out-of-bounds locations are rejected with diagnostics.
    let err = qt.insert(Point2D::new(120, 5), "adrift").unwrap_err();
    println!("rejected: {err}");

    // Which points lie in the lower-left quarter?
    let hits = qt.query_range(Rect2D::new(0, 0, 50, 50));
    println!("in (0,0)..=(50,50):");
    for node in &hits {
        println!("  {} = {:?}", node.point(), node.value());
    }

    // Payloads stay mutable after insertion.
    let market = qt.get_mut(Point2D::new(55, 55)).unwrap();
    market.set_value("night market");
    println!(
        "updated (55, 55) -> {:?}",
        qt.get(Point2D::new(55, 55)).unwrap().value()
    );
}
