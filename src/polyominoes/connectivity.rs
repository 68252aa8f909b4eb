//! Connectivity and shape validation for free-form cell sets.
//!
//! This is the runtime half of the crate: the enumerator builds a catalog
//! ahead of time, and these checks decide whether an arbitrary drawn cell
//! set is one edge-connected piece matching a catalog entry.

use std::collections::VecDeque;

use hashbrown::HashSet;

use super::{point_list::Polyomino, Point};

/// Returns whether `cells` form a single edge-connected piece.
///
/// Zero or one cells are trivially connected. Otherwise this is a breadth
/// first traversal from the first cell, following the 4 orthogonal
/// neighbors restricted to cells present in the input; the set is connected
/// iff the traversal reaches every input cell. Duplicate cells are a caller
/// error.
pub fn is_connected(cells: &[Point]) -> bool {
    if cells.len() <= 1 {
        return true;
    }

    let present: HashSet<Point> = cells.iter().copied().collect();

    let mut visited = HashSet::with_capacity(cells.len());
    let mut queue = VecDeque::new();

    visited.insert(cells[0]);
    queue.push_back(cells[0]);

    while let Some(cell) = queue.pop_front() {
        for neighbor in cell.neighbors() {
            if present.contains(&neighbor) && visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    visited.len() == cells.len()
}

/// Returns whether `cells` form a connected shape equivalent to one of
/// `reference`.
///
/// `reference` is typically the catalog entry for the drawn cell count;
/// no size filtering happens here. A reference list of the wrong
/// cardinality simply never matches, via the fast-fail in
/// [`Polyomino::equivalent`].
pub fn is_valid(cells: &[Point], reference: &[Polyomino]) -> bool {
    if !is_connected(cells) {
        return false;
    }

    let drawn = Polyomino::from_cells(cells.iter().copied());

    reference.iter().any(|shape| drawn.equivalent(shape))
}
