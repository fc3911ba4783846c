// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree elements: a point location, an optional payload, and four
//! exclusively-owned child subtrees.

use alloc::boxed::Box;
use core::cmp::Ordering;
use core::fmt::Debug;

use crate::quadrant::Quadrant;
use crate::types::Point2D;

/// A stored element of a [`QuadTree`](crate::QuadTree).
///
/// The location is fixed at construction; the payload stays mutable. The
/// four child links are exclusively owned, so the structure is a strict
/// out-tree: no parent links, no sharing, no cycles.
///
/// Equality and ordering are defined purely on location. Two nodes at the
/// same point compare equal even when their payloads differ.
pub struct PointNode<T, V> {
    point: Point2D<T>,
    value: Option<V>,
    children: [Option<Box<PointNode<T, V>>>; 4],
}

impl<T, V> PointNode<T, V> {
    /// Create a leaf node with no payload.
    pub fn new(point: Point2D<T>) -> Self {
        Self {
            point,
            value: None,
            children: [None, None, None, None],
        }
    }

    /// Create a leaf node carrying a payload.
    pub fn with_value(point: Point2D<T>, value: V) -> Self {
        Self {
            point,
            value: Some(value),
            children: [None, None, None, None],
        }
    }

    /// The node's payload, if any.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Mutable access to the node's payload, if any.
    pub fn value_mut(&mut self) -> Option<&mut V> {
        self.value.as_mut()
    }

    /// Replace the payload, returning the previous one.
    pub fn set_value(&mut self, value: V) -> Option<V> {
        self.value.replace(value)
    }

    /// The child subtree in quadrant `q`, if present.
    pub fn child(&self, q: Quadrant) -> Option<&Self> {
        self.children[slot(q)].as_deref()
    }

    /// The owning slot for quadrant `q`, for descent and mutation.
    pub(crate) fn child_slot_mut(&mut self, q: Quadrant) -> &mut Option<Box<Self>> {
        &mut self.children[slot(q)]
    }

    /// Detach and return all present children, emptying every slot.
    pub(crate) fn take_children(&mut self) -> impl Iterator<Item = Box<Self>> {
        self.children.iter_mut().filter_map(Option::take)
    }
}

impl<T: Copy, V> PointNode<T, V> {
    /// The node's location.
    pub fn point(&self) -> Point2D<T> {
        self.point
    }
}

const fn slot(q: Quadrant) -> usize {
    match q {
        Quadrant::NorthEast => 0,
        Quadrant::SouthEast => 1,
        Quadrant::SouthWest => 2,
        Quadrant::NorthWest => 3,
    }
}

impl<T: Copy + PartialEq, V> PartialEq for PointNode<T, V> {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl<T: Copy + Eq, V> Eq for PointNode<T, V> {}

impl<T: Copy + PartialOrd, V> PartialOrd for PointNode<T, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.point.partial_cmp(&other.point)
    }
}

impl<T: Copy + Ord, V> Ord for PointNode<T, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.point.cmp(&other.point)
    }
}

impl<T: Copy + Debug, V: Debug> Debug for PointNode<T, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let children = self.children.iter().filter(|c| c.is_some()).count();
        f.debug_struct("PointNode")
            .field("point", &self.point)
            .field("value", &self.value)
            .field("children", &children)
            .finish()
    }
}
