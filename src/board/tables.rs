//! Precomputed neighbour tables for the stepping pieces, plus ray directions.

use once_cell::sync::Lazy;

use super::Square;

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Rook directions.
pub(crate) const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Bishop directions.
pub(crate) const DIAGONAL: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

fn build_targets(deltas: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| match Square::from_index(idx) {
        Some(from) => deltas
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .collect(),
        None => Vec::new(),
    })
}

/// On-board knight destinations, indexed by origin square.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| build_targets(&KNIGHT_DELTAS));

/// On-board king destinations, indexed by origin square.
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| build_targets(&KING_DELTAS));

#[inline]
pub(crate) fn knight_targets(sq: Square) -> &'static [Square] {
    &KNIGHT_TARGETS[sq.index()]
}

#[inline]
pub(crate) fn king_targets(sq: Square) -> &'static [Square] {
    &KING_TARGETS[sq.index()]
}
