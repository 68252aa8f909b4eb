pub mod connectivity;
pub mod point_list;

pub mod pmino;
pub use self::pmino::RawPolyomino;

/// A single unit-square cell on the grid.
///
/// The derived ordering is by x first, y second, which is the total order
/// the canonical point list is sorted in.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// The four edge-adjacent cells of this cell.
    pub fn neighbors(&self) -> [Point; 4] {
        [
            Point::new(self.x + 1, self.y),
            Point::new(self.x - 1, self.y),
            Point::new(self.x, self.y + 1),
            Point::new(self.x, self.y - 1),
        ]
    }
}

/// the "Dimension" or bounding box of a polyomino
/// stores len() for each axis, so the unit square has a dimension of (1, 1)
/// and the domino seed has a dimension of (2, 1)
/// the empty polyomino has a dimension of (0, 0)
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct Dim {
    pub x: usize,
    pub y: usize,
}
