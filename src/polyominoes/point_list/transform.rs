use super::Polyomino;
use crate::polyominoes::Point;

/// The 8 symmetries of the square acting on grid cells.
///
/// Four rotations and four reflections, i.e. the dihedral group D4.
/// Applying all of them to a shape and renormalizing yields every placement
/// a "free polyomino" definition considers identical.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum D4 {
    Identity,
    Rot90,
    Rot180,
    Rot270,
    FlipX,
    FlipY,
    Diagonal,
    AntiDiagonal,
}

impl D4 {
    pub const ALL: [D4; 8] = [
        D4::Identity,
        D4::Rot90,
        D4::Rot180,
        D4::Rot270,
        D4::FlipX,
        D4::FlipY,
        D4::Diagonal,
        D4::AntiDiagonal,
    ];

    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        match self {
            D4::Identity => Point::new(p.x, p.y),
            D4::Rot90 => Point::new(-p.y, p.x),
            D4::Rot180 => Point::new(-p.x, -p.y),
            D4::Rot270 => Point::new(p.y, -p.x),
            D4::FlipX => Point::new(-p.x, p.y),
            D4::FlipY => Point::new(p.x, -p.y),
            D4::Diagonal => Point::new(p.y, p.x),
            D4::AntiDiagonal => Point::new(-p.y, -p.x),
        }
    }
}

impl Polyomino {
    /// Create a new [`Polyomino`], representing `self` with `transform` applied.
    pub fn transformed(&self, transform: D4) -> Polyomino {
        Polyomino::from_cells(self.cells().iter().map(|c| transform.apply(*c)))
    }

    /// All 8 canonical forms of this shape under [`D4`].
    ///
    /// Shapes with internal symmetry produce duplicate entries; callers
    /// must not assume 8 distinct forms.
    pub fn transformations(&self) -> [Polyomino; 8] {
        D4::ALL.map(|t| self.transformed(t))
    }

    /// Returns whether `self` and `other` are the same free polyomino.
    ///
    /// Two shapes of different sizes are never equivalent. Otherwise the
    /// check is whether `other` appears, by structural equality, among the
    /// transformations of `self`. The identity is among those, so this
    /// relation is reflexive, and D4 being a group makes it symmetric.
    pub fn equivalent(&self, other: &Polyomino) -> bool {
        if self.size() != other.size() {
            return false;
        }

        self.transformations().iter().any(|t| t == other)
    }
}
