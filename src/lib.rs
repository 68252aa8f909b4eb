#[cfg(test)]
mod test;

pub mod polyominoes;

pub use polyominoes::{
    connectivity::{is_connected, is_valid},
    pmino::{PminoFile, RawPolyomino},
    point_list::{
        expand::{generate, generate_up_to, FREE_COUNTS},
        transform::D4,
        Polyomino,
    },
    Dim, Point,
};
