// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The point quadtree: bounds-checked insertion and pruned range queries.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::node::PointNode;
use crate::quadrant::{Quadrant, classify, lies_toward};
use crate::types::{Point2D, Rect2D};

/// Error returned when an inserted location lies outside the tree bounds.
///
/// Carries the offending point and the tree's bounds for diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OutOfBounds<T> {
    /// The rejected location.
    pub point: Point2D<T>,
    /// The tree's declared bounds (inclusive on all edges).
    pub bounds: Rect2D<T>,
}

impl<T: Debug> core::fmt::Display for OutOfBounds<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "point {:?} lies outside the tree bounds {:?}",
            self.point, self.bounds
        )
    }
}

impl<T: Debug> core::error::Error for OutOfBounds<T> {}

/// Outcome of a successful (in-bounds) insertion.
///
/// Inserting at an already-occupied location is not an error; the tree is
/// left unchanged and the attempt is reported here instead.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use = "a Duplicate outcome means the tree was not modified"]
pub enum Insertion {
    /// The node was placed in the tree.
    Inserted,
    /// A node already occupies this location; nothing was inserted.
    Duplicate,
}

impl Insertion {
    /// True if the node was actually placed in the tree.
    pub const fn is_inserted(self) -> bool {
        matches!(self, Self::Inserted)
    }
}

/// A point quadtree over scalar coordinates `T` with payloads `V`.
///
/// Points are classified into one of four quadrants relative to each node
/// on the way down; a range query reuses the same classification against
/// the query rectangle to skip subtrees that cannot intersect it.
///
/// All operations are single-threaded, synchronous walks bounded by tree
/// depth. Depth is O(n) in the worst case (for example strictly
/// increasing coordinates), so adversarial insertion orders degrade both
/// speed and stack headroom; [`clear`](Self::clear) and `Drop` tear the
/// tree down iteratively and are depth-independent.
pub struct QuadTree<T, V> {
    bounds: Rect2D<T>,
    root: Option<Box<PointNode<T, V>>>,
    len: usize,
    visited: usize,
}

impl<T: Copy + Debug, V> Debug for QuadTree<T, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("bounds", &self.bounds)
            .field("len", &self.len)
            .field("visited", &self.visited)
            .finish_non_exhaustive()
    }
}

impl<T, V> QuadTree<T, V>
where
    T: Copy + PartialOrd + Debug,
{
    /// Create an empty tree covering `bounds` (inclusive on all edges).
    pub fn new(bounds: Rect2D<T>) -> Self {
        Self {
            bounds,
            root: None,
            len: 0,
            visited: 0,
        }
    }

    /// Create an empty tree from an origin-and-size bounds rectangle.
    pub fn from_xywh(x: T, y: T, w: T, h: T) -> Self
    where
        T: core::ops::Add<Output = T>,
    {
        Self::new(Rect2D::from_xywh(x, y, w, h))
    }

    /// The tree's bounds rectangle.
    pub fn bounds(&self) -> Rect2D<T> {
        self.bounds
    }

    /// The first inserted node, if any.
    pub fn root(&self) -> Option<&PointNode<T, V>> {
        self.root.as_deref()
    }

    /// The number of stored nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the tree stores no nodes.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Nodes visited by the most recent range query (either variant).
    ///
    /// Diagnostic only: lets callers compare the pruned query against
    /// [`query_range_unpruned`](Self::query_range_unpruned).
    pub fn visited_on_last_query(&self) -> usize {
        self.visited
    }

    /// Insert a payload-carrying node at `point`.
    pub fn insert(&mut self, point: Point2D<T>, value: V) -> Result<Insertion, OutOfBounds<T>> {
        self.insert_entry(PointNode::with_value(point, value))
    }

    /// Insert a node at `point` with no payload.
    pub fn insert_point(&mut self, point: Point2D<T>) -> Result<Insertion, OutOfBounds<T>> {
        self.insert_entry(PointNode::new(point))
    }

    /// Insert an already-constructed node.
    ///
    /// Fails with [`OutOfBounds`] if the node's location is outside the
    /// tree bounds. An exact-location duplicate leaves the tree unchanged
    /// and reports [`Insertion::Duplicate`]; otherwise the node descends
    /// through the quadrant classification to the first empty slot.
    pub fn insert_entry(&mut self, node: PointNode<T, V>) -> Result<Insertion, OutOfBounds<T>> {
        if !self.bounds.contains(node.point()) {
            return Err(OutOfBounds {
                point: node.point(),
                bounds: self.bounds,
            });
        }
        let outcome = insert_into(&mut self.root, Box::new(node));
        if outcome.is_inserted() {
            self.len += 1;
        }
        Ok(outcome)
    }

    /// Insert every entry in order. A sequential fold of
    /// [`insert_entry`](Self::insert_entry).
    ///
    /// Returns the number of nodes actually inserted (duplicates are
    /// skipped). The first out-of-bounds entry aborts the fold; entries
    /// inserted before it remain in the tree.
    pub fn insert_all<I>(&mut self, entries: I) -> Result<usize, OutOfBounds<T>>
    where
        I: IntoIterator<Item = PointNode<T, V>>,
    {
        let mut inserted = 0;
        for entry in entries {
            if self.insert_entry(entry)?.is_inserted() {
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    /// Every stored node whose location lies within `rect` (inclusive).
    ///
    /// Results are in tree-traversal order, not sorted. Each call returns
    /// a freshly allocated `Vec`, and resets the visited counter before
    /// descending. Subtrees that cannot intersect `rect` are skipped via
    /// the quadrant predicates; see [`crate::quadrant`] for the exact
    /// pruning rule.
    pub fn query_range(&mut self, rect: Rect2D<T>) -> Vec<&PointNode<T, V>> {
        self.visited = 0;
        let mut hits = Vec::new();
        collect_pruned(self.root.as_deref(), &rect, &mut hits, &mut self.visited);
        hits
    }

    /// Like [`query_range`](Self::query_range), but visits every node
    /// unconditionally.
    ///
    /// Kept as an oracle: for any tree and rectangle it returns the same
    /// set of nodes as the pruned query, while
    /// [`visited_on_last_query`](Self::visited_on_last_query) reports at
    /// least as many visits.
    pub fn query_range_unpruned(&mut self, rect: Rect2D<T>) -> Vec<&PointNode<T, V>> {
        self.visited = 0;
        let mut hits = Vec::new();
        collect_all(self.root.as_deref(), &rect, &mut hits, &mut self.visited);
        hits
    }

    /// Every stored node, via a range query over the tree's own bounds.
    pub fn all_nodes(&mut self) -> Vec<&PointNode<T, V>> {
        let bounds = self.bounds;
        self.query_range(bounds)
    }

    /// The node stored at exactly `point`, if any.
    pub fn get(&self, point: Point2D<T>) -> Option<&PointNode<T, V>> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match classify(point, node.point()) {
                None => return Some(node),
                Some(q) => cur = node.child(q),
            }
        }
        None
    }

    /// Mutable access to the node stored at exactly `point`, if any.
    pub fn get_mut(&mut self, point: Point2D<T>) -> Option<&mut PointNode<T, V>> {
        find_mut(&mut self.root, point)
    }
}

impl<T, V> QuadTree<T, V> {
    /// Drop every stored node and reset the count to zero.
    ///
    /// Child links are severed iteratively, so clearing a degenerate
    /// (list-shaped) tree does not recurse. Clearing an empty or
    /// already-cleared tree is a no-op.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<PointNode<T, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.take_children());
        }
        self.len = 0;
        self.visited = 0;
    }
}

impl<T, V> Drop for QuadTree<T, V> {
    fn drop(&mut self) {
        // Box's own drop would recurse to the tree depth.
        self.clear();
    }
}

fn insert_into<T: Copy + PartialOrd, V>(
    mut slot: &mut Option<Box<PointNode<T, V>>>,
    node: Box<PointNode<T, V>>,
) -> Insertion {
    loop {
        match slot {
            None => {
                *slot = Some(node);
                return Insertion::Inserted;
            }
            Some(cur) => match classify(node.point(), cur.point()) {
                None => return Insertion::Duplicate,
                Some(q) => slot = cur.child_slot_mut(q),
            },
        }
    }
}

fn find_mut<T: Copy + PartialOrd, V>(
    slot: &mut Option<Box<PointNode<T, V>>>,
    point: Point2D<T>,
) -> Option<&mut PointNode<T, V>> {
    let node = slot.as_deref_mut()?;
    match classify(point, node.point()) {
        None => Some(node),
        Some(q) => find_mut(node.child_slot_mut(q), point),
    }
}

// Quadrant order matters for result ordering: both query variants walk
// children in NE, NW, SE, SW order.
const WALK: [Quadrant; 4] = [
    Quadrant::NorthEast,
    Quadrant::NorthWest,
    Quadrant::SouthEast,
    Quadrant::SouthWest,
];

fn collect_pruned<'t, T: Copy + PartialOrd, V>(
    node: Option<&'t PointNode<T, V>>,
    rect: &Rect2D<T>,
    hits: &mut Vec<&'t PointNode<T, V>>,
    visited: &mut usize,
) {
    let Some(node) = node else {
        return;
    };
    *visited += 1;
    if rect.contains(node.point()) {
        hits.push(node);
    }
    // A node lying toward quadrant q of the rectangle can only shadow the
    // rectangle with its q.opposite() subtree. The predicates overlap, so
    // several children may be descended; none is also possible.
    for q in WALK {
        if lies_toward(node.point(), rect, q) {
            collect_pruned(node.child(q.opposite()), rect, hits, visited);
        }
    }
}

fn collect_all<'t, T: Copy + PartialOrd, V>(
    node: Option<&'t PointNode<T, V>>,
    rect: &Rect2D<T>,
    hits: &mut Vec<&'t PointNode<T, V>>,
    visited: &mut usize,
) {
    let Some(node) = node else {
        return;
    };
    *visited += 1;
    if rect.contains(node.point()) {
        hits.push(node);
    }
    for q in WALK {
        collect_all(node.child(q), rect, hits, visited);
    }
}
