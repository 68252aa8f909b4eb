use hashbrown::HashSet;

use super::Polyomino;
use crate::polyominoes::Point;
use std::collections::BTreeMap;

/// Known free polyomino counts for N = 1.., OEIS A000105.
///
/// Used by the CLI to cross-check enumeration results, and by the tests
/// as the primary regression oracle.
pub const FREE_COUNTS: [usize; 12] = [1, 1, 2, 5, 12, 35, 108, 369, 1285, 4655, 17073, 63600];

/// Enumerate all free polyominoes of exactly `n` cells.
///
/// The search grows shapes one cell at a time from a single seed cell,
/// extending the current shape at cells taken from its open neighbor
/// frontier. Each branch carries a set of frontier cells it has already
/// branched on; descendants never pick those up again, which keeps every
/// fixed polyomino reachable by exactly one growth order. Finished shapes
/// are reduced to free polyominoes by dropping any shape for which a D4
/// transformation was already recorded.
///
/// Brute force and exponential: practical for n up to about 8. `n = 0`
/// yields no shapes. The result is in first-discovery order, which is
/// deterministic but not otherwise meaningful.
pub fn generate(n: usize) -> Vec<Polyomino> {
    if n == 0 {
        return Vec::new();
    }

    let mut results = Vec::new();
    let mut seen = HashSet::new();

    let mut current = vec![Point::new(0, 0)];
    let tried = HashSet::new();

    explore(n, &mut current, &tried, &mut seen, &mut results);

    results
}

/// Enumerate every size class from 1 up to and including `max_n`.
///
/// Simply repeated calls to [`generate`]; no state is shared between sizes.
pub fn generate_up_to(max_n: usize) -> BTreeMap<usize, Vec<Polyomino>> {
    (1..=max_n).map(|n| (n, generate(n))).collect()
}

fn explore(
    n: usize,
    current: &mut Vec<Point>,
    tried: &HashSet<Point>,
    seen: &mut HashSet<Polyomino>,
    results: &mut Vec<Polyomino>,
) {
    if current.len() == n {
        let canonical = Polyomino::from_cells(current.iter().copied());

        // Skip shapes for which any symmetric variant was already found.
        let missing = !canonical.transformations().iter().any(|t| seen.contains(t));

        if missing {
            results.push(canonical.clone());
            seen.insert(canonical);
        }
        return;
    }

    // The open frontier: every empty edge-neighbor of the current shape
    // that this branch has not already branched on.
    let mut frontier = Vec::new();
    let mut frontier_set = HashSet::new();
    for cell in current.iter() {
        for neighbor in cell.neighbors() {
            if !current.contains(&neighbor)
                && !tried.contains(&neighbor)
                && frontier_set.insert(neighbor)
            {
                frontier.push(neighbor);
            }
        }
    }

    // Sorted so that discovery order does not depend on hash iteration.
    frontier.sort_unstable();

    let mut tried_below = tried.clone();
    for candidate in frontier {
        current.push(candidate);
        explore(n, current, &tried_below, seen, results);
        current.pop();

        // Later siblings and their descendants must not re-add this cell.
        tried_below.insert(candidate);
    }
}
