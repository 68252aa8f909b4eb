pub mod expand;
pub mod transform;

use super::{Dim, Point, RawPolyomino};

/// A polyomino stored as its canonical point list.
///
/// Well formed polyominoes are a sorted list of cells, translated so that
/// the minimum x and minimum y are both 0. Every constructor normalizes,
/// so two values are structurally equal exactly when they describe the
/// same fixed placement on the grid. Symmetry is *not* folded away here;
/// that is what [`transform::D4`] and [`Polyomino::equivalent`] are for.
#[derive(PartialEq, Eq, Hash, Clone, Debug, PartialOrd, Ord)]
pub struct Polyomino {
    cells: Vec<Point>,
}

impl Polyomino {
    /// Build a polyomino from an arbitrary collection of cells.
    ///
    /// The cells are shifted so the minimum x and y become 0 and sorted
    /// by x then y. The result is independent of the input order. An empty
    /// input yields the empty polyomino, not an error. Duplicate cells are
    /// a caller error and are kept as-is.
    pub fn from_cells(cells: impl IntoIterator<Item = Point>) -> Self {
        let mut cells: Vec<Point> = cells.into_iter().collect();

        if let (Some(min_x), Some(min_y)) = (
            cells.iter().map(|c| c.x).min(),
            cells.iter().map(|c| c.y).min(),
        ) {
            for cell in cells.iter_mut() {
                cell.x -= min_x;
                cell.y -= min_y;
            }
        }

        cells.sort_unstable();

        Self { cells }
    }

    /// The canonical cell list, sorted by x then y.
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// The amount of cells present. An N-omino has size N.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the bounding box of this polyomino.
    ///
    /// The list is canonical, so the box is just the maximum cell plus one
    /// on each axis. The empty polyomino has a (0, 0) box.
    pub fn bounding_box(&self) -> Dim {
        if self.cells.is_empty() {
            return Dim { x: 0, y: 0 };
        }

        let max_x = self.cells.iter().map(|c| c.x).max().unwrap_or(0);
        let max_y = self.cells.iter().map(|c| c.y).max().unwrap_or(0);

        Dim {
            x: max_x as usize + 1,
            y: max_y as usize + 1,
        }
    }

    /// Returns whether the cell at `(x, y)` is present.
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        self.cells.binary_search(&Point::new(x, y)).is_ok()
    }
}

/// Creating a new polyomino from a nested vector is convenient if/when
/// you're writing them out by hand.
///
/// The outer vector is rows (y), the inner vectors are columns (x).
impl From<Vec<Vec<bool>>> for Polyomino {
    fn from(value: Vec<Vec<bool>>) -> Self {
        let mut cells = Vec::new();

        for (y, row) in value.iter().enumerate() {
            for (x, present) in row.iter().enumerate() {
                if *present {
                    cells.push(Point::new(x as i32, y as i32));
                }
            }
        }

        Polyomino::from_cells(cells)
    }
}

impl From<&'_ RawPolyomino> for Polyomino {
    fn from(value: &'_ RawPolyomino) -> Self {
        let (width, height) = value.dims();

        let mut cells = Vec::new();
        for y in 0..height {
            for x in 0..width {
                if value.get(x, y) {
                    cells.push(Point::new(x as i32, y as i32));
                }
            }
        }

        Polyomino::from_cells(cells)
    }
}

impl From<RawPolyomino> for Polyomino {
    fn from(value: RawPolyomino) -> Self {
        (&value).into()
    }
}

impl From<&'_ Polyomino> for RawPolyomino {
    fn from(value: &'_ Polyomino) -> Self {
        let Dim { x: width, y: height } = value.bounding_box();

        let mut raw = RawPolyomino::new_empty(width as u8, height as u8);
        for cell in value.cells() {
            raw.set(cell.x as u8, cell.y as u8, true);
        }

        raw
    }
}

impl From<Polyomino> for RawPolyomino {
    fn from(value: Polyomino) -> Self {
        (&value).into()
    }
}

impl core::fmt::Display for Polyomino {
    // Format the polyomino in a somewhat more easy to digest
    // format.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Dim { x: width, y: height } = self.bounding_box();

        let mut grid = String::new();

        for _ in 0..width {
            grid.push('-');
        }
        grid.push('\n');

        for y in 0..height {
            for x in 0..width {
                if self.is_set(x as i32, y as i32) {
                    grid.push('1');
                } else {
                    grid.push('0');
                }
            }
            grid.push('\n');
        }

        for _ in 0..width {
            grid.push('-');
        }

        write!(f, "{}", grid)
    }
}
