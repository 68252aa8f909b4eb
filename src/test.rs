use std::collections::HashSet;

use crate::{generate, generate_up_to, is_connected, is_valid, Dim, Point, Polyomino};

fn cell(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// The L-tromino: two cells along the bottom, one on top of the right one.
fn l_tromino() -> Polyomino {
    Polyomino::from_cells([cell(0, 0), cell(1, 0), cell(1, 1)])
}

fn square_tetromino() -> Polyomino {
    Polyomino::from_cells([cell(0, 0), cell(1, 0), cell(0, 1), cell(1, 1)])
}

#[test]
pub fn from_vec2d() {
    #[rustfmt::skip]
    let expected = Polyomino::from(vec![
        vec![true,  true ],
        vec![false, true ],
    ]);

    assert_eq!(l_tromino(), expected);
}

#[test]
fn normalize_translates_to_origin() {
    let far_away = Polyomino::from_cells([cell(-3, 5), cell(-2, 5), cell(-2, 6)]);

    assert_eq!(far_away, l_tromino());
}

#[test]
fn normalize_is_order_independent() {
    let reversed = Polyomino::from_cells([cell(1, 1), cell(1, 0), cell(0, 0)]);

    assert_eq!(reversed, l_tromino());
}

#[test]
fn normalize_is_idempotent() {
    let shape = l_tromino();
    let renormalized = Polyomino::from_cells(shape.cells().iter().copied());

    assert_eq!(shape, renormalized);
}

#[test]
fn normalize_empty() {
    let empty = Polyomino::from_cells([]);

    assert!(empty.is_empty());
    assert_eq!(empty.bounding_box(), Dim { x: 0, y: 0 });
}

#[test]
fn rot90() {
    use crate::D4;

    #[rustfmt::skip]
    let expected = Polyomino::from(vec![
        vec![false, true ],
        vec![true,  true ],
    ]);

    assert_eq!(l_tromino().transformed(D4::Rot90), expected);
}

#[test]
fn reflect_diagonal() {
    use crate::D4;

    #[rustfmt::skip]
    let expected = Polyomino::from(vec![
        vec![true,  false],
        vec![true,  true ],
    ]);

    assert_eq!(l_tromino().transformed(D4::Diagonal), expected);
}

/// The L-tromino is symmetric along the anti-diagonal, so its 8 transformed
/// forms collapse to 4 distinct placements.
#[test]
pub fn transformations_collapse_for_symmetric_shapes() {
    let distinct: HashSet<_> = l_tromino().transformations().into_iter().collect();
    assert_eq!(distinct.len(), 4);

    // The full square is symmetric under everything.
    let distinct: HashSet<_> = square_tetromino().transformations().into_iter().collect();
    assert_eq!(distinct.len(), 1);
}

#[test]
fn transform_closure() {
    for shape in [l_tromino(), square_tetromino()] {
        for transformed in shape.transformations() {
            assert!(transformed.equivalent(&shape));
            assert!(shape.equivalent(&transformed));
        }
    }
}

#[test]
fn equivalence_is_reflexive() {
    for shape in generate(4) {
        assert!(shape.equivalent(&shape));
    }
}

#[test]
fn equivalence_is_symmetric() {
    let shapes = generate(4);

    for a in shapes.iter() {
        for b in shapes.iter() {
            assert_eq!(a.equivalent(b), b.equivalent(a));
        }
    }
}

#[test]
fn domino_rotations_are_equivalent() {
    let horizontal = Polyomino::from_cells([cell(0, 0), cell(1, 0)]);
    let vertical = Polyomino::from_cells([cell(0, 0), cell(0, 1)]);

    assert!(horizontal.equivalent(&vertical));
    assert!(vertical.equivalent(&horizontal));
}

#[test]
fn equivalence_cardinality_guard() {
    // A 3-cell L vs. a 4-cell square: never equivalent, regardless of
    // geometry.
    assert!(!l_tromino().equivalent(&square_tetromino()));
    assert!(!square_tetromino().equivalent(&l_tromino()));
}

/// The primary regression test: enumeration counts must match the known
/// free polyomino counts (OEIS A000105).
#[test]
pub fn count_law() {
    for (i, expected) in [1, 1, 2, 5, 12, 35].iter().enumerate() {
        let n = i + 1;
        assert_eq!(generate(n).len(), *expected, "wrong count for N = {n}");
    }
}

#[test]
fn generate_zero() {
    assert!(generate(0).is_empty());
}

#[test]
fn generate_one() {
    let shapes = generate(1);

    assert_eq!(shapes, vec![Polyomino::from_cells([cell(0, 0)])]);
}

#[test]
fn generated_shapes_are_valid() {
    for shape in generate(5) {
        assert_eq!(shape.size(), 5);
        assert!(is_connected(shape.cells()));

        // Canonical: renormalizing must be a no-op.
        let renormalized = Polyomino::from_cells(shape.cells().iter().copied());
        assert_eq!(shape, renormalized);
    }
}

#[test]
fn generated_shapes_are_distinct_free_polyominoes() {
    let shapes = generate(5);

    for (i, a) in shapes.iter().enumerate() {
        for b in shapes.iter().skip(i + 1) {
            assert!(!a.equivalent(b), "duplicate free polyomino:\n{a}\n{b}");
        }
    }
}

#[test]
fn generate_up_to_covers_every_size() {
    let catalog = generate_up_to(4);

    assert_eq!(catalog.len(), 4);
    for (n, shapes) in catalog {
        assert_eq!(shapes.len(), generate(n).len());
        assert!(shapes.iter().all(|s| s.size() == n));
    }
}

#[test]
fn connected_l_tromino() {
    assert!(is_connected(&[cell(0, 0), cell(1, 0), cell(1, 1)]));
}

#[test]
fn disconnected_cells_with_gap() {
    assert!(!is_connected(&[cell(0, 0), cell(2, 0)]));
}

#[test]
fn trivially_connected() {
    assert!(is_connected(&[]));
    assert!(is_connected(&[cell(7, -3)]));
}

#[test]
fn diagonal_touch_is_not_connected() {
    assert!(!is_connected(&[cell(0, 0), cell(1, 1)]));
}

#[test]
pub fn validator_against_domino_catalog() {
    let catalog = generate(2);
    assert_eq!(catalog.len(), 1);

    // A vertical domino matches the canonical horizontal one via rotation.
    assert!(is_valid(&[cell(0, 0), cell(0, 1)], &catalog));

    // Disconnected.
    assert!(!is_valid(&[cell(0, 0), cell(2, 0)], &catalog));

    // Connected, but 3 cells against a catalog of 2-cell shapes.
    assert!(!is_valid(&[cell(0, 0), cell(1, 0), cell(2, 0)], &catalog));
}

#[test]
fn validator_accepts_every_transformed_catalog_entry() {
    let catalog = generate(4);

    for shape in catalog.iter() {
        for transformed in shape.transformations() {
            assert!(is_valid(transformed.cells(), &catalog));
        }
    }
}

#[test]
fn bounding_boxes() {
    assert_eq!(square_tetromino().bounding_box(), Dim { x: 2, y: 2 });
    assert_eq!(l_tromino().bounding_box(), Dim { x: 2, y: 2 });

    let domino = Polyomino::from_cells([cell(0, 0), cell(1, 0)]);
    assert_eq!(domino.bounding_box(), Dim { x: 2, y: 1 });
}

#[test]
fn display_renders_the_grid() {
    let domino = Polyomino::from_cells([cell(0, 0), cell(1, 0)]);

    assert_eq!(format!("{domino}"), "--\n11\n--");
}
