// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrant classification: which of the four compass quadrants a point
//! occupies relative to another point, or relative to a query rectangle.
//!
//! The four point-vs-point predicates are not symmetric complements of one
//! another. Each one claims part of the boundary between two quadrants, so
//! that every point other than an exact duplicate falls into exactly one
//! quadrant:
//!
//! | quadrant | condition (candidate `p` vs reference `origin`) |
//! |----------|-------------------------------------------------|
//! | NE       | `p.x >= origin.x && p.y > origin.y`             |
//! | SE       | `p.x > origin.x && p.y <= origin.y`             |
//! | NW       | `p.x < origin.x && p.y >= origin.y`             |
//! | SW       | `p.x <= origin.x && p.y < origin.y`             |
//!
//! The rectangle-relative predicates in [`lies_toward`] carry the same
//! tie-breaks over to a rectangle's min/max edges. Unlike the point form
//! they are not mutually exclusive: a point directly above a rectangle is
//! both NE and NW of it, and a point inside it can satisfy all four. The
//! range-query pruning in [`crate::tree`] depends on these exact edge
//! rules, so they must not be "simplified" into symmetric comparisons.

use crate::types::{Point2D, Rect2D};

/// One of the four compass quadrants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Larger x, larger y.
    NorthEast,
    /// Larger x, smaller y.
    SouthEast,
    /// Smaller x, smaller y.
    SouthWest,
    /// Smaller x, larger y.
    NorthWest,
}

impl Quadrant {
    /// The diagonally opposite quadrant (NE↔SW, SE↔NW).
    ///
    /// A node lying toward quadrant `q` of a query rectangle places the
    /// region that can still overlap the rectangle entirely inside the
    /// node's `q.opposite()` subtree.
    pub const fn opposite(self) -> Self {
        match self {
            Self::NorthEast => Self::SouthWest,
            Self::SouthEast => Self::NorthWest,
            Self::SouthWest => Self::NorthEast,
            Self::NorthWest => Self::SouthEast,
        }
    }
}

/// Classify `p` relative to `origin`.
///
/// Returns `None` exactly when the two points coincide; the tree treats
/// that case as a duplicate insertion. Assumes no NaN coordinates (a NaN
/// satisfies no predicate and would be reported as a duplicate).
pub fn classify<T: Copy + PartialOrd>(p: Point2D<T>, origin: Point2D<T>) -> Option<Quadrant> {
    if p.x >= origin.x && p.y > origin.y {
        Some(Quadrant::NorthEast)
    } else if p.x > origin.x && p.y <= origin.y {
        Some(Quadrant::SouthEast)
    } else if p.x < origin.x && p.y >= origin.y {
        Some(Quadrant::NorthWest)
    } else if p.x <= origin.x && p.y < origin.y {
        Some(Quadrant::SouthWest)
    } else {
        None
    }
}

/// Whether `p` lies toward quadrant `q` of the rectangle `rect`.
///
/// A point inside `rect` lies toward every quadrant of it. Each arm keeps
/// the edge rule of the matching point-vs-point predicate, evaluated
/// against the rectangle edge on that quadrant's side.
pub fn lies_toward<T: Copy + PartialOrd>(p: Point2D<T>, rect: &Rect2D<T>, q: Quadrant) -> bool {
    match q {
        Quadrant::NorthEast => p.x >= rect.min_x && p.y > rect.min_y,
        Quadrant::SouthEast => p.x > rect.min_x && p.y <= rect.max_y,
        Quadrant::NorthWest => p.x < rect.max_x && p.y >= rect.min_y,
        Quadrant::SouthWest => p.x <= rect.max_x && p.y < rect.max_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i64, y: i64) -> Point2D<i64> {
        Point2D::new(x, y)
    }

    #[test]
    fn diagonal_points_classify_plainly() {
        let origin = p(10, 10);
        assert_eq!(classify(p(12, 13), origin), Some(Quadrant::NorthEast));
        assert_eq!(classify(p(12, 7), origin), Some(Quadrant::SouthEast));
        assert_eq!(classify(p(8, 7), origin), Some(Quadrant::SouthWest));
        assert_eq!(classify(p(8, 13), origin), Some(Quadrant::NorthWest));
    }

    #[test]
    fn boundary_points_get_a_single_deterministic_quadrant() {
        let origin = p(10, 10);
        // Due north: NE wins (x >= is inclusive there, NW needs x <).
        assert_eq!(classify(p(10, 15), origin), Some(Quadrant::NorthEast));
        // Due east: SE wins (y <= is inclusive there, NE needs y >).
        assert_eq!(classify(p(15, 10), origin), Some(Quadrant::SouthEast));
        // Due south: SW wins.
        assert_eq!(classify(p(10, 5), origin), Some(Quadrant::SouthWest));
        // Due west: NW wins.
        assert_eq!(classify(p(5, 10), origin), Some(Quadrant::NorthWest));
    }

    #[test]
    fn coincident_points_classify_as_none() {
        assert_eq!(classify(p(3, 4), p(3, 4)), None);
    }

    #[test]
    fn classification_is_exclusive_and_exhaustive() {
        // Sweep a grid around the origin: every non-coincident point must
        // satisfy exactly one of the four predicates.
        let origin = p(0, 0);
        for x in -3_i64..=3 {
            for y in -3_i64..=3 {
                let cand = p(x, y);
                let hits = [
                    cand.x >= origin.x && cand.y > origin.y,
                    cand.x > origin.x && cand.y <= origin.y,
                    cand.x < origin.x && cand.y >= origin.y,
                    cand.x <= origin.x && cand.y < origin.y,
                ]
                .iter()
                .filter(|&&b| b)
                .count();
                if cand == origin {
                    assert_eq!(hits, 0, "origin itself matches no quadrant");
                    assert_eq!(classify(cand, origin), None);
                } else {
                    assert_eq!(hits, 1, "{cand} must land in exactly one quadrant");
                    assert!(classify(cand, origin).is_some());
                }
            }
        }
    }

    #[test]
    fn opposite_is_an_involution() {
        for q in [
            Quadrant::NorthEast,
            Quadrant::SouthEast,
            Quadrant::SouthWest,
            Quadrant::NorthWest,
        ] {
            assert_eq!(q.opposite().opposite(), q);
        }
    }

    #[test]
    fn rect_predicates_may_overlap() {
        let rect = Rect2D::new(0_i64, 0, 10, 10);
        // Directly above the rectangle: both NE and NW of it.
        let above = p(5, 20);
        assert!(lies_toward(above, &rect, Quadrant::NorthEast));
        assert!(lies_toward(above, &rect, Quadrant::NorthWest));
        assert!(!lies_toward(above, &rect, Quadrant::SouthEast));
        // Inside the rectangle: all four hold.
        let inside = p(5, 5);
        for q in [
            Quadrant::NorthEast,
            Quadrant::SouthEast,
            Quadrant::SouthWest,
            Quadrant::NorthWest,
        ] {
            assert!(lies_toward(inside, &rect, q), "{inside} lies toward {q:?}");
        }
    }

    #[test]
    fn rect_predicates_keep_their_edge_rules() {
        let rect = Rect2D::new(0_i64, 0, 10, 10);
        // On the min_y edge line: NE needs y > min_y, SE allows y <= max_y.
        assert!(!lies_toward(p(5, 0), &rect, Quadrant::NorthEast));
        assert!(lies_toward(p(5, 0), &rect, Quadrant::SouthEast));
        // On the max_x edge line: NW needs x < max_x, SW allows x <= max_x.
        assert!(!lies_toward(p(10, 5), &rect, Quadrant::NorthWest));
        assert!(lies_toward(p(10, 5), &rect, Quadrant::SouthWest));
    }
}
