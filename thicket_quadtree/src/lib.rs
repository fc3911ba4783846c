// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thicket_quadtree --heading-base-level=0

//! Thicket Quadtree: a generic 2D point quadtree for rectangular range queries.
//!
//! The tree stores (x, y)-located values and answers "which stored points fall
//! inside this axis-aligned rectangle?".
//!
//! - Insert points one at a time; insertions outside the declared bounds fail,
//!   duplicate locations are reported and skipped.
//! - Query by rectangle; subtrees that cannot intersect the query are pruned
//!   using the same quadrant classification that shaped the tree.
//! - A deliberately unpruned query variant doubles as a correctness and
//!   efficiency oracle for the pruned one.
//!
//! It is generic over the scalar type `T` and does not depend on any geometry
//! crate. Bounds and containment tests are inclusive on all rectangle edges.
//!
//! # Example
//!
//! ```rust
//! use thicket_quadtree::{Insertion, Point2D, QuadTree, Rect2D};
//!
//! // A tree over integer coordinates, bounds (0,0) to (100,100) inclusive.
//! let mut qt: QuadTree<i64, &str> = QuadTree::from_xywh(0, 0, 100, 100);
//! let _ = qt.insert(Point2D::new(10, 20), "a")?;
//! let _ = qt.insert(Point2D::new(80, 90), "b")?;
//! assert_eq!(qt.insert(Point2D::new(10, 20), "dup")?, Insertion::Duplicate);
//! assert_eq!(qt.len(), 2);
//!
//! // Range query: only "a" lies inside (0,0)..=(50,50).
//! let hits = qt.query_range(Rect2D::new(0, 0, 50, 50));
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].value(), Some(&"a"));
//! # Ok::<(), thicket_quadtree::OutOfBounds<i64>>(())
//! ```
//!
//! Out-of-bounds insertions surface an error carrying the offending point and
//! the tree bounds:
//!
//! ```rust
//! use thicket_quadtree::{Point2D, QuadTree};
//!
//! let mut qt: QuadTree<i64, ()> = QuadTree::from_xywh(0, 0, 100, 100);
//! let err = qt.insert_point(Point2D::new(101, 5)).unwrap_err();
//! assert_eq!(err.point, Point2D::new(101, 5));
//! ```
//!
//! ## Pruning diagnostics
//!
//! Every range query counts the nodes it visits. Comparing the pruned query
//! against [`QuadTree::query_range_unpruned`] shows how much of the tree the
//! quadrant predicates let it skip:
//!
//! ```rust
//! use thicket_quadtree::{Point2D, QuadTree, Rect2D};
//!
//! let mut qt: QuadTree<i64, ()> = QuadTree::from_xywh(0, 0, 100, 100);
//! for (x, y) in [(10, 10), (90, 90), (20, 5), (95, 80), (3, 70)] {
//!     let _ = qt.insert_point(Point2D::new(x, y)).unwrap();
//! }
//! let rect = Rect2D::new(0, 0, 30, 30);
//! let pruned: Vec<_> = qt.query_range(rect).iter().map(|n| n.point()).collect();
//! let visits = qt.visited_on_last_query();
//! let full: Vec<_> = qt.query_range_unpruned(rect).iter().map(|n| n.point()).collect();
//! assert_eq!(pruned.len(), full.len());
//! assert!(visits <= qt.visited_on_last_query());
//! ```
//!
//! ### Scalar semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. A NaN
//! coordinate satisfies no quadrant predicate and would be misreported as a
//! duplicate.

#![no_std]

extern crate alloc;

pub mod node;
pub mod quadrant;
pub mod tree;
pub mod types;

pub use node::PointNode;
pub use quadrant::Quadrant;
pub use tree::{Insertion, OutOfBounds, QuadTree};
pub use types::{Point2D, Rect2D};
