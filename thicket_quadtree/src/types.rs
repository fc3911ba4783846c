// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;
use core::fmt;

/// A 2D point location.
///
/// Ordering is lexicographic: x first, then y. The tree never uses this
/// ordering to decide shape; it exists so callers (and tests) can sort
/// query results deterministically.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point2D<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate.
    pub y: T,
}

impl<T> Point2D<T> {
    /// Create a new point.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: fmt::Display> fmt::Display for Point2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle in 2D.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect2D<T> {
    /// Minimum x (left)
    pub min_x: T,
    /// Minimum y (bottom)
    pub min_y: T,
    /// Maximum x (right)
    pub max_x: T,
    /// Maximum y (top)
    pub max_y: T,
}

impl<T> Rect2D<T> {
    /// Create a new rectangle from min/max corners.
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl<T: Copy + core::ops::Add<Output = T>> Rect2D<T> {
    /// Create a rectangle from origin and size.
    pub fn from_xywh(x: T, y: T, w: T, h: T) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + w,
            max_y: y + h,
        }
    }
}

impl<T: Copy + PartialOrd> Rect2D<T> {
    /// Whether this rectangle contains the point.
    ///
    /// The test is inclusive on all four edges, so corner and edge points
    /// count as contained.
    pub fn contains(&self, p: Point2D<T>) -> bool {
        le(self.min_x, p.x) && le(self.min_y, p.y) && le(p.x, self.max_x) && le(p.y, self.max_y)
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}
